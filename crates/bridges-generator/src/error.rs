use bridges_solver::SolverError;

/// Errors raised by [`PuzzleGenerator`](crate::PuzzleGenerator).
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerationError {
    /// A grid side is outside the supported range.
    #[display("grid size {columns}x{rows} is outside 4x4..=25x25")]
    InvalidDimensions {
        /// Requested number of columns.
        columns: u8,
        /// Requested number of rows.
        rows: u8,
    },
    /// The requested island count is outside the bounds for the grid size.
    #[display("island count {count} is outside {min}..={max}")]
    InvalidIslandCount {
        /// Requested island count.
        count: usize,
        /// Smallest allowed count.
        min: usize,
        /// Largest allowed count.
        max: usize,
    },
    /// A configured probability is outside `0.0..=1.0`.
    #[display("probability {probability} is outside 0.0..=1.0")]
    InvalidProbability {
        /// Offending value.
        probability: f64,
    },
    /// No attempt produced a puzzle the solver could solve.
    #[display("no solvable puzzle found in {attempts} attempts")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
    },
    /// The solver failed while validating a candidate.
    #[display("solver failed: {_0}")]
    #[from]
    Solver(SolverError),
}
