use std::ops::RangeInclusive;

use crate::GenerationError;

/// Smallest number of columns or rows of a generated puzzle.
pub const MIN_SIDE: u8 = 4;
/// Largest number of columns or rows of a generated puzzle.
pub const MAX_SIDE: u8 = 25;

/// Returns the island counts allowed for a grid of the given size.
///
/// The bounds are the smallest and largest of the column count, the row count
/// and a fifth of the cell count.
///
/// # Examples
///
/// ```
/// use bridges_generator::island_count_bounds;
///
/// assert_eq!(island_count_bounds(4, 4), 3..=4);
/// assert_eq!(island_count_bounds(10, 7), 7..=14);
/// ```
#[must_use]
pub fn island_count_bounds(columns: u8, rows: u8) -> RangeInclusive<usize> {
    let (columns, rows) = (usize::from(columns), usize::from(rows));
    let area = columns * rows / 5;
    let min = columns.min(rows).min(area);
    let max = columns.max(rows).max(area);
    min..=max
}

/// Parameters of puzzle generation.
///
/// # Examples
///
/// ```
/// use bridges_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::new(10, 8)
///     .with_island_count(12)
///     .with_max_attempts(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    columns: u8,
    rows: u8,
    island_count: Option<usize>,
    max_attempts: usize,
    placement_retries: usize,
    double_probability: f64,
    extra_bridge_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(7, 7)
    }
}

impl GeneratorConfig {
    /// Creates a configuration for a `columns` x `rows` grid with default
    /// settings and a random island count.
    #[must_use]
    pub const fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            island_count: None,
            max_attempts: 100,
            placement_retries: 500,
            double_probability: 0.3,
            extra_bridge_probability: 0.25,
        }
    }

    /// Requests an exact number of islands.
    #[must_use]
    pub const fn with_island_count(mut self, island_count: usize) -> Self {
        self.island_count = Some(island_count);
        self
    }

    /// Sets how many layouts are tried before giving up.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets how many consecutive random placement misses switch to trying
    /// every remaining spot.
    #[must_use]
    pub const fn with_placement_retries(mut self, placement_retries: usize) -> Self {
        self.placement_retries = placement_retries;
        self
    }

    /// Sets the probability that a placed island is joined by a double bridge.
    #[must_use]
    pub const fn with_double_probability(mut self, probability: f64) -> Self {
        self.double_probability = probability;
        self
    }

    /// Sets the probability of adding a bridge between neighbours that the
    /// spanning network left unconnected.
    #[must_use]
    pub const fn with_extra_bridge_probability(mut self, probability: f64) -> Self {
        self.extra_bridge_probability = probability;
        self
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the requested island count, if any.
    #[must_use]
    pub const fn island_count(&self) -> Option<usize> {
        self.island_count
    }

    /// Returns the number of layouts tried before giving up.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the number of consecutive random placement misses tolerated.
    #[must_use]
    pub const fn placement_retries(&self) -> usize {
        self.placement_retries
    }

    /// Returns the probability of double bridges in the spanning network.
    #[must_use]
    pub const fn double_probability(&self) -> f64 {
        self.double_probability
    }

    /// Returns the probability of extra bridges.
    #[must_use]
    pub const fn extra_bridge_probability(&self) -> f64 {
        self.extra_bridge_probability
    }

    /// Returns the island counts this configuration may produce.
    #[must_use]
    pub fn island_count_range(&self) -> RangeInclusive<usize> {
        match self.island_count {
            Some(count) => count..=count,
            None => island_count_bounds(self.columns, self.rows),
        }
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDimensions`] if a side is outside
    /// [`MIN_SIDE`]`..=`[`MAX_SIDE`], [`GenerationError::InvalidIslandCount`] if
    /// the requested island count is outside [`island_count_bounds`], and
    /// [`GenerationError::InvalidProbability`] if a probability is outside
    /// `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let sides = MIN_SIDE..=MAX_SIDE;
        if !sides.contains(&self.columns) || !sides.contains(&self.rows) {
            return Err(GenerationError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if let Some(count) = self.island_count {
            let bounds = island_count_bounds(self.columns, self.rows);
            if !bounds.contains(&count) {
                return Err(GenerationError::InvalidIslandCount {
                    count,
                    min: *bounds.start(),
                    max: *bounds.end(),
                });
            }
        }
        for probability in [self.double_probability, self.extra_bridge_probability] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(GenerationError::InvalidProbability { probability });
            }
        }
        Ok(())
    }
}
