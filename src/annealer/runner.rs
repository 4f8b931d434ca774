//! Annealing execution loop.

use rand::Rng;

use super::config::AnnealConfig;
use crate::map::DistanceTable;
use crate::tour::{evaluate, is_permutation, Tour};

/// How many iterations pass between best-cost history samples.
const HISTORY_INTERVAL: usize = 1_000;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best tour found.
    pub best: Tour,

    /// Total proposal iterations executed.
    pub iterations: usize,

    /// Heat value when the run terminated.
    pub final_heat: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<u32>,
}

/// Executes the annealing loop over a frozen distance table.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search until heat reaches the configured ceiling.
    ///
    /// Starting from the identity tour, each iteration proposes a swap
    /// of two uniformly chosen positions (which may coincide, a no-op)
    /// and accepts it when it improves the current cost, or otherwise
    /// with probability `exp((current - candidate) * heat / grid_size)`.
    /// Heat rises by `step_constant / N` per iteration and acts as an
    /// increasing inverse temperature: the exponent for a worsening
    /// candidate grows more negative as heat climbs, so exploration
    /// narrows over the run.
    ///
    /// The best tour is tracked against every candidate, accepted or
    /// not, and is the only state that outlives the run.
    ///
    /// The caller supplies the RNG so that one seeded stream can drive
    /// city placement, table construction, and annealing.
    pub fn run<R: Rng>(table: &DistanceTable, config: &AnnealConfig, rng: &mut R) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");

        let n = table.len();
        let mut current = Tour::initial(table);
        let mut best = current.clone();

        let step = config.step_constant / n as f64;
        let grid = f64::from(config.grid_size);
        let mut heat = config.initial_heat;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best.cost()];

        // Scratch order reused for every proposal.
        let mut candidate: Vec<usize> = current.order().to_vec();

        while heat < config.heat_ceiling {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);

            candidate.copy_from_slice(current.order());
            candidate.swap(i, j);
            debug_assert!(is_permutation(&candidate));

            let candidate_cost = evaluate(table, &candidate);

            let accept = if candidate_cost < current.cost() {
                improving_moves += 1;
                true
            } else {
                let gain = f64::from(current.cost()) - f64::from(candidate_cost);
                (gain * heat / grid).exp() > rng.random_range(0.0..1.0)
            };

            if accept {
                current.swap_positions(i, j, candidate_cost);
                accepted_moves += 1;
                debug_assert!(current.is_permutation());
            }

            // Best tracking is independent of acceptance: a rejected
            // candidate can still be the best seen so far.
            if candidate_cost < best.cost() {
                best.replace_with(&candidate, candidate_cost);
            }

            heat += step;
            iterations += 1;

            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best.cost());
            }
        }

        if cost_history.last() != Some(&best.cost()) {
            cost_history.push(best.cost());
        }

        AnnealResult {
            best,
            iterations,
            final_heat: heat,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}
