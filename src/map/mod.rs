//! The city map: random city placement and the frozen travel-cost table.
//!
//! Cities live on a bounded integer grid. Travel costs carry a
//! multiplicative jitter drawn once per ordered pair when the table is
//! built; after that the table is read-only and every cost lookup is
//! deterministic.

mod distance;
mod types;

pub use distance::{distance, DistanceTable};
pub use types::{City, CityMap};
