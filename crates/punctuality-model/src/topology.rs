//! Reference topology: which lines serve which stops, and which vehicles are
//! registered for each (stop, line) pair.
//!
//! The topology is an immutable value. Build it once with
//! [`ReferenceTopology::builtin`] (or [`ReferenceTopology::from_entries`] in
//! tests) and share it by reference; it is `Send + Sync` and never mutated
//! after construction.

use std::collections::{HashMap, HashSet};

use crate::ids::{LineId, StopId, VehicleId};

/// One (stop, line) pair with its registered vehicles.
pub type TopologyEntry<'a> = (u32, u32, &'a [u32]);

/// Stop → line → vehicles served by the network.
const BUILTIN_ENTRIES: &[TopologyEntry<'static>] = &[
    (5, 102, &[201, 42, 53, 654, 75, 12]),
    (10, 110, &[753, 342, 84]),
    (10, 147, &[864, 532, 2, 5]),
    (15, 8, &[1002, 43, 6]),
    (15, 57, &[321, 56]),
    (20, 10, &[948]),
    (20, 57, &[321, 32]),
    (25, 22, &[1, 23, 6, 6532]),
    (25, 10, &[948]),
    (25, 57, &[321, 32]),
    (30, 142, &[225, 124, 532]),
    (30, 102, &[201, 42]),
    (35, 145, &[332]),
    (35, 147, &[864, 312, 764, 234]),
    (40, 147, &[864, 896, 42]),
    (40, 102, &[201, 42]),
    (45, 57, &[321, 764, 23, 89]),
    (45, 102, &[201, 42]),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTopology {
    stops: HashMap<StopId, HashMap<LineId, HashSet<VehicleId>>>,
}

impl ReferenceTopology {
    /// The network table shipped with the tool.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.iter().copied())
    }

    /// Build a topology from `(stop, line, vehicles)` entries.
    ///
    /// Repeated (stop, line) pairs merge their vehicle sets.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TopologyEntry<'a>>,
    {
        let mut stops: HashMap<StopId, HashMap<LineId, HashSet<VehicleId>>> = HashMap::new();
        for (stop, line, vehicles) in entries {
            stops
                .entry(StopId::new(stop))
                .or_default()
                .entry(LineId::new(line))
                .or_default()
                .extend(vehicles.iter().copied().map(VehicleId::new));
        }
        Self { stops }
    }

    pub fn has_stop(&self, stop: StopId) -> bool {
        self.stops.contains_key(&stop)
    }

    /// Lines serving `stop`, or `None` for an unknown stop.
    pub fn lines(&self, stop: StopId) -> Option<&HashMap<LineId, HashSet<VehicleId>>> {
        self.stops.get(&stop)
    }

    /// Vehicles registered for `line` at `stop`, or `None` if the pair is unknown.
    pub fn vehicles(&self, stop: StopId, line: LineId) -> Option<&HashSet<VehicleId>> {
        self.stops.get(&stop)?.get(&line)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Flattened `(stop, line, sorted vehicles)` rows in ascending stop/line order.
    pub fn sorted_rows(&self) -> Vec<(StopId, LineId, Vec<VehicleId>)> {
        let mut rows: Vec<(StopId, LineId, Vec<VehicleId>)> = self
            .stops
            .iter()
            .flat_map(|(stop, lines)| {
                lines.iter().map(move |(line, vehicles)| {
                    let mut vehicles: Vec<VehicleId> = vehicles.iter().copied().collect();
                    vehicles.sort_unstable();
                    (*stop, *line, vehicles)
                })
            })
            .collect();
        rows.sort_by_key(|(stop, line, _)| (*stop, *line));
        rows
    }
}
