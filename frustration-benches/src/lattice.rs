//! Seeded square-lattice spin glasses.
//!
//! Vertices are named `r{row}c{col}` and each one is coupled to its right and
//! lower neighbour with strength `+1` (antiferromagnetic) or `-1`
//! (ferromagnetic), so a `rows x cols` lattice has
//! `(rows - 1) * (cols - 1)` basic cycles.

use frustration_core::{GraphBuilder, GraphError, IsingGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Configuration for [`generate`].
#[derive(Clone, Debug)]
pub struct LatticeConfig {
    /// Number of rows; must be non-zero.
    pub rows: usize,
    /// Number of columns; must be non-zero.
    pub cols: usize,
    /// Probability that a coupler is antiferromagnetic.
    pub antiferromagnetic_probability: f64,
    /// Magnitude of a random-sign field on every vertex, if any.
    pub field: Option<f64>,
    /// RNG seed.
    pub seed: u64,
}

impl LatticeConfig {
    /// A `rows x cols` lattice with evenly mixed couplers and no fields.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            rows,
            cols,
            antiferromagnetic_probability: 0.5,
            field: None,
            seed,
        }
    }
}

/// Errors raised while generating a lattice.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    /// A lattice dimension was zero.
    #[error("lattice {axis} must be non-zero")]
    ZeroDimension {
        /// `rows` or `cols`.
        axis: &'static str,
    },
    /// The coupler probability was outside `[0, 1]`.
    #[error("antiferromagnetic probability {got} is outside [0, 1]")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// The graph builder rejected a weight.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates the lattice described by `config`.
///
/// # Errors
/// Returns [`LatticeError`] when a dimension is zero, the probability is not
/// in `[0, 1]`, or the field magnitude is not finite.
///
/// # Examples
/// ```
/// use frustration_benches::lattice::{LatticeConfig, generate};
///
/// let graph = generate(&LatticeConfig::new(3, 4, 7))?;
/// assert_eq!(graph.vertex_count(), 12);
/// assert_eq!(graph.edge_count(), 17);
/// # Ok::<(), frustration_benches::lattice::LatticeError>(())
/// ```
pub fn generate(config: &LatticeConfig) -> Result<IsingGraph, LatticeError> {
    validate(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::new();
    for row in 0..config.rows {
        for col in 0..config.cols {
            let here = vertex_name(row, col);
            builder.add_vertex(here.as_str());
            if let Some(magnitude) = config.field {
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                builder.add_field(here.as_str(), magnitude.copysign(sign))?;
            }
            if col + 1 < config.cols {
                let weight = coupler_weight(&mut rng, config.antiferromagnetic_probability);
                builder.add_coupler(here.as_str(), vertex_name(row, col + 1), weight)?;
            }
            if row + 1 < config.rows {
                let weight = coupler_weight(&mut rng, config.antiferromagnetic_probability);
                builder.add_coupler(here.as_str(), vertex_name(row + 1, col), weight)?;
            }
        }
    }
    Ok(builder.build())
}

fn validate(config: &LatticeConfig) -> Result<(), LatticeError> {
    if config.rows == 0 {
        return Err(LatticeError::ZeroDimension { axis: "rows" });
    }
    if config.cols == 0 {
        return Err(LatticeError::ZeroDimension { axis: "cols" });
    }
    let probability = config.antiferromagnetic_probability;
    if !(0.0..=1.0).contains(&probability) {
        return Err(LatticeError::InvalidProbability { got: probability });
    }
    Ok(())
}

fn coupler_weight(rng: &mut SmallRng, antiferromagnetic_probability: f64) -> f64 {
    if rng.gen_bool(antiferromagnetic_probability) {
        1.0
    } else {
        -1.0
    }
}

fn vertex_name(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}
