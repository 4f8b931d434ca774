//! Simulated annealing over a frozen distance table.
//!
//! A single-solution trajectory search: each iteration proposes a swap
//! of two tour positions and accepts it by the Metropolis-style rule
//! `exp((current_cost - candidate_cost) * heat / grid_size) > u`.
//! The schedule is inverted relative to textbook annealing: heat rises
//! from near zero to a fixed ceiling and multiplies the acceptance
//! exponent directly, behaving as an increasing inverse temperature.
//! Worsening moves are therefore accepted freely early on and almost
//! never near the end of the run.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
