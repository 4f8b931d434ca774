//! Annealer configuration.

/// Configuration parameters for the annealing route search.
///
/// The defaults reproduce the reference setup: a 45x45 grid, heat
/// climbing from `1e-4` to a ceiling of `200` in increments of
/// `0.01 / N`, so the run length grows linearly with the city count.
///
/// # Examples
///
/// ```
/// use tsp_anneal::annealer::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_grid_size(45)
///     .with_heat_ceiling(200.0)
///     .with_seed(42);
/// assert_eq!(config.grid_size, 45);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Side length of the square city grid. Also divides the
    /// acceptance exponent, so it sets the scale on which cost
    /// differences are judged.
    pub grid_size: u32,

    /// Heat value at the start of the run.
    pub initial_heat: f64,

    /// Heat value at which the run terminates.
    pub heat_ceiling: f64,

    /// Numerator of the per-iteration heat increment; the actual step
    /// is `step_constant / N` for N cities.
    pub step_constant: f64,

    /// Random seed (None for a randomly drawn seed).
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            grid_size: 45,
            initial_heat: 1e-4,
            heat_ceiling: 200.0,
            step_constant: 0.01,
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Sets the grid side length.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the starting heat.
    pub fn with_initial_heat(mut self, heat: f64) -> Self {
        self.initial_heat = heat;
        self
    }

    /// Sets the heat value at which the run stops.
    pub fn with_heat_ceiling(mut self, ceiling: f64) -> Self {
        self.heat_ceiling = ceiling;
        self
    }

    /// Sets the numerator of the per-iteration heat increment.
    pub fn with_step_constant(mut self, constant: f64) -> Self {
        self.step_constant = constant;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 1 {
            return Err("grid_size must be at least 1".into());
        }
        if self.initial_heat <= 0.0 {
            return Err("initial_heat must be positive".into());
        }
        if self.step_constant <= 0.0 {
            return Err("step_constant must be positive".into());
        }
        if self.heat_ceiling <= self.initial_heat {
            return Err("heat_ceiling must be greater than initial_heat".into());
        }
        Ok(())
    }
}
