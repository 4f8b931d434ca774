//! Simulated-annealing route search for the travelling salesman problem.
//!
//! Searches for a short route visiting every city of a randomly
//! generated map exactly once. The crate is built from small read-only
//! stages:
//!
//! - **City map** ([`map::CityMap`]): random city placement on a
//!   bounded integer grid.
//! - **Distance table** ([`map::DistanceTable`]): pairwise travel costs
//!   with multiplicative jitter, frozen once at construction time.
//! - **Tour** ([`tour::Tour`]): a visiting order over all cities with
//!   its cached path cost.
//! - **Annealer** ([`annealer::AnnealRunner`]): the simulated-annealing
//!   loop with a heat-indexed acceptance rule and best-tour tracking.
//! - **Search** ([`search::SearchRunner`]): the end-to-end composition,
//!   returning immutable snapshots for any presentation layer to
//!   render.
//!
//! The search is single-threaded and fully sequential; run length is
//! fixed by the heat schedule, and a fixed seed reproduces a run bit
//! for bit.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::annealer::AnnealConfig;
//! use tsp_anneal::search::SearchRunner;
//!
//! let config = AnnealConfig::default().with_seed(42);
//! let result = SearchRunner::run(8, &config).expect("valid input");
//!
//! assert!(result.best().is_permutation());
//! println!("best cost: {}", result.best().cost());
//! ```

pub mod annealer;
pub mod map;
pub mod random;
pub mod search;
pub mod tour;
