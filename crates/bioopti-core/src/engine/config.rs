use thiserror::Error;

pub const DEFAULT_SUBSTRATE_BOUNDS: (f64, f64) = (0.01, 10.0);
pub const DEFAULT_PH_BOUNDS: (f64, f64) = (4.0, 9.0);
pub const DEFAULT_TEMP_BOUNDS: (f64, f64) = (20.0, 60.0);

pub const DEFAULT_POPULATION_PER_DIMENSION: usize = 15;
pub const DEFAULT_MAX_GENERATIONS: usize = 300;
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.7;
pub const DEFAULT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid {axis} bounds: lower ({lower}) must be finite and strictly below upper ({upper})")]
    InvalidBounds {
        axis: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("Population size must be at least 4 for differential evolution, got {0}")]
    PopulationTooSmall(usize),

    #[error("Maximum generation count must be positive")]
    NoGenerations,

    #[error("Crossover probability must be within [0, 1], got {0}")]
    InvalidCrossoverProbability(f64),

    #[error("Convergence tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// One inclusive axis interval of the search box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    fn validate(&self, axis: &'static str) -> Result<(), ConfigError> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(ConfigError::InvalidBounds {
                axis,
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// The three-dimensional box the optimizer searches.
///
/// Defaults are domain conventions for enzymatic assays, not constraints of
/// the rate law itself: substrate 0.01-10 mM, pH 4-9, temperature 20-60 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSpace {
    pub substrate: Interval,
    pub ph: Interval,
    pub temp: Interval,
}

impl SearchSpace {
    pub const DIMENSIONS: usize = 3;

    pub fn axes(&self) -> [Interval; Self::DIMENSIONS] {
        [self.substrate, self.ph, self.temp]
    }

    pub fn midpoint(&self) -> [f64; Self::DIMENSIONS] {
        [
            self.substrate.midpoint(),
            self.ph.midpoint(),
            self.temp.midpoint(),
        ]
    }

    pub fn contains(&self, point: &[f64; Self::DIMENSIONS]) -> bool {
        self.substrate.contains(point[0]) && self.ph.contains(point[1]) && self.temp.contains(point[2])
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.substrate.validate("substrate")?;
        self.ph.validate("pH")?;
        self.temp.validate("temperature")?;
        Ok(())
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self {
            substrate: Interval::new(DEFAULT_SUBSTRATE_BOUNDS.0, DEFAULT_SUBSTRATE_BOUNDS.1),
            ph: Interval::new(DEFAULT_PH_BOUNDS.0, DEFAULT_PH_BOUNDS.1),
            temp: Interval::new(DEFAULT_TEMP_BOUNDS.0, DEFAULT_TEMP_BOUNDS.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeConfig {
    pub search_space: SearchSpace,
    pub population_size: usize,
    pub max_generations: usize,
    pub crossover_probability: f64,
    pub tolerance: f64,
    pub seed: Option<u64>,
    /// Ambient inhibitor level held fixed across the whole search, when the
    /// optimization runs in the presence of an inhibitor.
    pub inhibitor_conc: Option<f64>,
}

impl OptimizeConfig {
    pub fn builder() -> OptimizeConfigBuilder {
        OptimizeConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search_space.validate()?;
        if self.population_size < 4 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConfigError::InvalidCrossoverProbability(
                self.crossover_probability,
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            search_space: SearchSpace::default(),
            population_size: DEFAULT_POPULATION_PER_DIMENSION * SearchSpace::DIMENSIONS,
            max_generations: DEFAULT_MAX_GENERATIONS,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
            inhibitor_conc: None,
        }
    }
}

#[derive(Default)]
pub struct OptimizeConfigBuilder {
    search_space: Option<SearchSpace>,
    population_size: Option<usize>,
    max_generations: Option<usize>,
    crossover_probability: Option<f64>,
    tolerance: Option<f64>,
    seed: Option<u64>,
    inhibitor_conc: Option<f64>,
}

impl OptimizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_space(mut self, space: SearchSpace) -> Self {
        self.search_space = Some(space);
        self
    }
    pub fn substrate_bounds(mut self, lower: f64, upper: f64) -> Self {
        let mut space = self.search_space.unwrap_or_default();
        space.substrate = Interval::new(lower, upper);
        self.search_space = Some(space);
        self
    }
    pub fn ph_bounds(mut self, lower: f64, upper: f64) -> Self {
        let mut space = self.search_space.unwrap_or_default();
        space.ph = Interval::new(lower, upper);
        self.search_space = Some(space);
        self
    }
    pub fn temp_bounds(mut self, lower: f64, upper: f64) -> Self {
        let mut space = self.search_space.unwrap_or_default();
        space.temp = Interval::new(lower, upper);
        self.search_space = Some(space);
        self
    }
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }
    pub fn max_generations(mut self, generations: usize) -> Self {
        self.max_generations = Some(generations);
        self
    }
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = Some(probability);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn inhibitor_conc(mut self, conc: f64) -> Self {
        self.inhibitor_conc = Some(conc);
        self
    }

    pub fn build(self) -> Result<OptimizeConfig, ConfigError> {
        let defaults = OptimizeConfig::default();
        let config = OptimizeConfig {
            search_space: self.search_space.unwrap_or(defaults.search_space),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            seed: self.seed,
            inhibitor_conc: self.inhibitor_conc,
        };
        config.validate()?;
        Ok(config)
    }
}
