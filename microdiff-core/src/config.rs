/// Numeric thresholds carried by a [`Graph`](crate::Graph).
///
/// ```rust
/// use microdiff_core::{Graph, GraphConfig};
///
/// let config = GraphConfig::default().with_division_epsilon(1e-6);
/// let graph = Graph::with_config(config);
/// assert_eq!(graph.config().division_epsilon, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// `div` fails when the divisor's magnitude is below this value.
    pub division_epsilon: f64,
    /// Gradient magnitudes above this are reported as exploding.
    pub exploding_threshold: f64,
    /// Non-zero gradient magnitudes below this are reported as vanishing.
    pub vanishing_threshold: f64,
}

pub const DEFAULT_DIVISION_EPSILON: f64 = 1e-10;
pub const DEFAULT_EXPLODING_THRESHOLD: f64 = 1e3;
pub const DEFAULT_VANISHING_THRESHOLD: f64 = 1e-3;

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            division_epsilon: DEFAULT_DIVISION_EPSILON,
            exploding_threshold: DEFAULT_EXPLODING_THRESHOLD,
            vanishing_threshold: DEFAULT_VANISHING_THRESHOLD,
        }
    }
}

impl GraphConfig {
    pub fn with_division_epsilon(mut self, epsilon: f64) -> Self {
        self.division_epsilon = epsilon;
        self
    }

    pub fn with_exploding_threshold(mut self, threshold: f64) -> Self {
        self.exploding_threshold = threshold;
        self
    }

    pub fn with_vanishing_threshold(mut self, threshold: f64) -> Self {
        self.vanishing_threshold = threshold;
        self
    }
}
