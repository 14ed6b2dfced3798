//! Numeric identifiers for stops, lines and vehicles.
//!
//! Each identifier is a distinct type so a line id can never be looked up
//! where a stop id is expected.

use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// A physical transit location, root of the reference topology.
    StopId
);

numeric_id!(
    /// A transit route, valid only under specific stops.
    LineId
);

numeric_id!(
    /// A physical vehicle, valid only under specific (stop, line) pairs.
    VehicleId
);
