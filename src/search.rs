//! End-to-end route search: place cities, freeze costs, anneal.

use crate::annealer::{AnnealConfig, AnnealResult, AnnealRunner};
use crate::map::{CityMap, DistanceTable};
use crate::random::create_rng;
use crate::tour::Tour;

/// Immutable outcome of one route search.
///
/// Everything a presentation layer needs to render the run: the
/// realized city positions, the frozen cost table, and the best tour
/// with its statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The realized city positions.
    pub map: CityMap,

    /// The frozen travel-cost table the search ran against.
    pub table: DistanceTable,

    /// Annealing outcome and run statistics.
    pub anneal: AnnealResult,
}

impl SearchResult {
    /// The best tour found.
    pub fn best(&self) -> &Tour {
        &self.anneal.best
    }
}

/// Composes a full search run from the component stages.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs a complete search for `city_count` cities.
    ///
    /// One RNG stream, created from `config.seed`, drives city
    /// placement, table construction, and annealing in that order, so
    /// a fixed seed reproduces the entire run bit for bit. An absent
    /// seed is drawn at random.
    ///
    /// Fails before any optimization work if the configuration is
    /// invalid or `city_count` is zero.
    pub fn run(city_count: usize, config: &AnnealConfig) -> Result<SearchResult, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let map = CityMap::generate(city_count, config.grid_size, &mut rng)?;
        let table = DistanceTable::build(&map, &mut rng);
        let anneal = AnnealRunner::run(&table, config, &mut rng);

        Ok(SearchResult { map, table, anneal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::evaluate;

    #[test]
    fn test_rejects_zero_cities() {
        let config = AnnealConfig::default().with_seed(42);
        let result = SearchRunner::run(0, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("city count"));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnnealConfig::default()
            .with_initial_heat(10.0)
            .with_heat_ceiling(5.0)
            .with_seed(42);

        assert!(SearchRunner::run(4, &config).is_err());
    }

    #[test]
    fn test_fixed_seed_reproduces_run_exactly() {
        let config = AnnealConfig::default().with_grid_size(45).with_seed(42);

        let first = SearchRunner::run(4, &config).unwrap();
        let second = SearchRunner::run(4, &config).unwrap();

        assert_eq!(first.map, second.map);
        assert_eq!(first.table, second.table);
        assert_eq!(first.best(), second.best());
        assert_eq!(first.anneal.iterations, second.anneal.iterations);
    }

    #[test]
    fn test_result_snapshot_consistent() {
        let config = AnnealConfig::default()
            .with_heat_ceiling(5.0)
            .with_seed(7);

        let result = SearchRunner::run(10, &config).unwrap();

        assert_eq!(result.map.len(), 10);
        assert_eq!(result.table.len(), 10);
        assert!(result.best().is_permutation());
        assert_eq!(
            result.best().cost(),
            evaluate(&result.table, result.best().order())
        );
    }

    #[test]
    fn test_single_city_search() {
        let config = AnnealConfig::default().with_seed(42);
        let result = SearchRunner::run(1, &config).unwrap();

        assert_eq!(result.best().order(), &[0]);
        assert_eq!(result.best().cost(), 0);
    }

    #[test]
    fn test_unseeded_run_completes() {
        let config = AnnealConfig::default().with_heat_ceiling(1.0);
        let result = SearchRunner::run(5, &config).unwrap();
        assert!(result.best().is_permutation());
    }
}
