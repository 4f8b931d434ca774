//! City placement on a bounded integer grid.

use rand::Rng;

/// A city position on the map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Horizontal coordinate in `[0, grid_size)`.
    pub x: u32,
    /// Vertical coordinate in `[0, grid_size)`.
    pub y: u32,
}

/// The realized set of cities for one run.
///
/// Generated once at startup and read-only afterwards. Cities are
/// identified by their index in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMap {
    grid_size: u32,
    cities: Vec<City>,
}

impl CityMap {
    /// Places `count` cities uniformly at random on a square grid of
    /// side `grid_size`.
    ///
    /// Coordinates may coincide; two cities on the same point simply
    /// cost nothing to travel between.
    ///
    /// Fails if `count` is zero or the grid has no cells.
    pub fn generate<R: Rng>(count: usize, grid_size: u32, rng: &mut R) -> Result<Self, String> {
        if count < 1 {
            return Err(format!("city count must be at least 1, got {count}"));
        }
        if grid_size < 1 {
            return Err(format!("grid size must be at least 1, got {grid_size}"));
        }

        let cities = (0..count)
            .map(|_| City {
                x: rng.random_range(0..grid_size),
                y: rng.random_range(0..grid_size),
            })
            .collect();

        Ok(Self { grid_size, cities })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the map holds no cities. Never true for a generated map.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The grid bound the coordinates were drawn from.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// The city at `index`.
    pub fn city(&self, index: usize) -> City {
        self.cities[index]
    }

    /// All cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_generate_within_grid() {
        let mut rng = create_rng(42);
        let map = CityMap::generate(100, 45, &mut rng).unwrap();

        assert_eq!(map.len(), 100);
        for city in map.cities() {
            assert!(city.x < 45, "x coordinate {} out of grid", city.x);
            assert!(city.y < 45, "y coordinate {} out of grid", city.y);
        }
    }

    #[test]
    fn test_generate_rejects_zero_count() {
        let mut rng = create_rng(42);
        let result = CityMap::generate(0, 45, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_rejects_zero_grid() {
        let mut rng = create_rng(42);
        let result = CityMap::generate(5, 0, &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_single_city() {
        let mut rng = create_rng(42);
        let map = CityMap::generate(1, 45, &mut rng).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_generate_reproducible() {
        let mut a = create_rng(123);
        let mut b = create_rng(123);
        let first = CityMap::generate(20, 45, &mut a).unwrap();
        let second = CityMap::generate(20, 45, &mut b).unwrap();
        assert_eq!(first, second);
    }
}
