//! # Autograd
//!
//! Graph traversal and gradient propagation for the arena in [`crate::graph`].
//!
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`backward_op`]: dispatch from an [`Op`](crate::Op) tag to its local-gradient rule.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
