use crate::error::{MicrodiffError, Result};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Initialization scheme for parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Normal with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` values.
    ///
    /// # Errors
    /// `ConfigurationError` if the distribution parameters are invalid.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low < high) || !low.is_finite() || !high.is_finite() {
                    return Err(MicrodiffError::ConfigurationError(format!(
                        "invalid uniform range [{}, {})",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| {
                    MicrodiffError::ConfigurationError(format!("invalid normal init: {}", e))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(value) => Ok(vec![value; n]),
        }
    }
}
