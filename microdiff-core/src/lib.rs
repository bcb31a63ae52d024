//! # microdiff-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Values live in an arena ([`Graph`]) and are addressed by [`NodeId`]. Every
//! operation builder validates its numeric domain, computes the forward value and
//! records its operands. [`Graph::backward`] then walks the nodes reachable from a
//! root in reverse topological order and accumulates exact partial derivatives
//! into every contributing node.
//!
//! ```rust
//! use microdiff_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.value(3.0)?;
//! let b = graph.add(a, a)?;
//! let c = graph.mul(b, a)?; // c = 2a^2
//! graph.backward(c)?;
//! assert_eq!(graph.grad(a)?, 12.0);
//! # Ok::<(), microdiff_core::MicrodiffError>(())
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod utils;

pub use config::GraphConfig;
pub use error::{MicrodiffError, Result};
pub use graph::{Graph, IntoOperand};
pub use node::{Node, NodeId, Op};
pub use optim::grad_health::GradientHealth;
