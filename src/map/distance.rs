//! Jittered travel costs, frozen into a lookup table.

use rand::Rng;

use super::types::{City, CityMap};

/// Lower bound of the multiplicative jitter on each distance draw.
const JITTER_MIN: f64 = 0.9;

/// Upper bound (exclusive) of the jitter factor.
const JITTER_MAX: f64 = 1.1;

/// Travel cost between two cities with a fresh multiplicative jitter.
///
/// Coincident points cost exactly 0 and consume no jitter draw.
/// Distinct points cost the Euclidean distance scaled by a factor drawn
/// uniformly from `[0.9, 1.1)`, rounded to the nearest integer. Each
/// call draws its own factor, so raw costs are neither repeatable nor
/// symmetric; [`DistanceTable::build`] freezes one draw per ordered
/// pair for the rest of the run.
pub fn distance<R: Rng>(a: City, b: City, rng: &mut R) -> u32 {
    if a == b {
        return 0;
    }
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    let euclid = (dx * dx + dy * dy).sqrt();
    let factor = rng.random_range(JITTER_MIN..JITTER_MAX);
    (euclid * factor).round() as u32
}

/// Frozen pairwise travel costs for one run.
///
/// Entry (i, j) is a single evaluation of [`distance`]. The jitter is
/// consumed at build time, so every later cost lookup is deterministic.
/// The table is not symmetric: (i, j) and (j, i) were drawn
/// independently. The diagonal is always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    len: usize,
    entries: Vec<u32>,
}

impl DistanceTable {
    /// Builds the table with one jitter draw per ordered pair, row by
    /// row. The traversal order fixes how the RNG stream is consumed,
    /// so a given seed always freezes the same table.
    pub fn build<R: Rng>(map: &CityMap, rng: &mut R) -> Self {
        let len = map.len();
        let mut entries = Vec::with_capacity(len * len);
        for i in 0..len {
            for j in 0..len {
                entries.push(distance(map.city(i), map.city(j), rng));
            }
        }
        Self { len, entries }
    }

    /// Number of cities the table covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table covers no cities.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Frozen travel cost from city `from` to city `to`.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.entries[from * self.len + to]
    }
}
