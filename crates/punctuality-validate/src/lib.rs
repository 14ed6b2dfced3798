//! Topology validation.
//!
//! A record is valid only when its stop is known, its line serves that stop,
//! and its vehicle is registered for that line at that stop. The checks run
//! stop, line, vehicle and stop at the first miss; there is no fuzzy
//! correction of near-miss ids.

use punctuality_model::{LineId, RecordError, ReferenceTopology, StopId, VehicleId};
use tracing::trace;

/// Check chained stop → line → vehicle membership.
///
/// # Errors
///
/// [`RecordError::UnknownStop`], [`RecordError::UnknownLine`] or
/// [`RecordError::UnknownVehicle`] for the first level that does not match.
pub fn validate_membership(
    topology: &ReferenceTopology,
    stop: StopId,
    line: LineId,
    vehicle: VehicleId,
) -> Result<(), RecordError> {
    let Some(lines) = topology.lines(stop) else {
        trace!(%stop, "stop not in topology");
        return Err(RecordError::UnknownStop { stop });
    };
    let Some(vehicles) = lines.get(&line) else {
        trace!(%stop, %line, "line does not serve stop");
        return Err(RecordError::UnknownLine { stop, line });
    };
    if !vehicles.contains(&vehicle) {
        trace!(%stop, %line, %vehicle, "vehicle not registered");
        return Err(RecordError::UnknownVehicle {
            stop,
            line,
            vehicle,
        });
    }
    Ok(())
}

/// Validator bound to one topology.
///
/// Holds only a shared reference, so any number of validators (on any
/// number of threads) can use the same topology.
#[derive(Debug, Clone, Copy)]
pub struct TopologyValidator<'a> {
    topology: &'a ReferenceTopology,
}

impl<'a> TopologyValidator<'a> {
    pub fn new(topology: &'a ReferenceTopology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &'a ReferenceTopology {
        self.topology
    }

    pub fn validate(
        &self,
        stop: StopId,
        line: LineId,
        vehicle: VehicleId,
    ) -> Result<(), RecordError> {
        validate_membership(self.topology, stop, line, vehicle)
    }
}
