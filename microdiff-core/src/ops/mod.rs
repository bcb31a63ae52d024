//! # Operation Builders (`ops`)
//!
//! Every builder takes its operand(s) as [`IntoOperand`], validates the numeric
//! domain, computes the forward value and appends a new node recording its
//! operands in argument order.
//!
//! ## Structure:
//!
//! - **`_op` functions** (e.g. `div_op`): the forward computation. Also exposed
//!   as methods on [`Graph`] (`graph.div(a, b)`).
//! - **`_backward` functions** (e.g. `div_backward`): the local-derivative rule,
//!   already scaled by the output gradient. Dispatched from
//!   [`autograd::backward_op`](crate::autograd::backward_op) by the node's [`Op`] tag.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, log.
//! - [`activation`]: tanh, sigmoid, relu.

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{Graph, IntoOperand};
use crate::node::{NodeId, Op};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Applies a unary operation.
///
/// Coerces the operand, runs `forward` on its value and appends the output
/// node. If anything fails, nodes created by the coercion are dropped again so
/// a failed call leaves the graph as it was.
pub(crate) fn apply_unary_op<A, F>(graph: &mut Graph, a: A, op: Op, forward: F) -> Result<NodeId>
where
    A: IntoOperand,
    F: FnOnce(&GraphConfig, f64) -> Result<f64>,
{
    let checkpoint = graph.len();
    let built = build_unary(graph, a, op, forward);
    if built.is_err() {
        graph.truncate(checkpoint);
    }
    built
}

fn build_unary<A, F>(graph: &mut Graph, a: A, op: Op, forward: F) -> Result<NodeId>
where
    A: IntoOperand,
    F: FnOnce(&GraphConfig, f64) -> Result<f64>,
{
    let a = a.into_operand(graph)?;
    let value = forward(graph.config(), graph.data(a)?)?;
    graph.push_node(value, op, vec![a])
}

/// Applies a binary operation. Same failure guarantees as [`apply_unary_op`].
pub(crate) fn apply_binary_op<A, B, F>(
    graph: &mut Graph,
    a: A,
    b: B,
    op: Op,
    forward: F,
) -> Result<NodeId>
where
    A: IntoOperand,
    B: IntoOperand,
    F: FnOnce(&GraphConfig, f64, f64) -> Result<f64>,
{
    let checkpoint = graph.len();
    let built = build_binary(graph, a, b, op, forward);
    if built.is_err() {
        graph.truncate(checkpoint);
    }
    built
}

fn build_binary<A, B, F>(graph: &mut Graph, a: A, b: B, op: Op, forward: F) -> Result<NodeId>
where
    A: IntoOperand,
    B: IntoOperand,
    F: FnOnce(&GraphConfig, f64, f64) -> Result<f64>,
{
    let a = a.into_operand(graph)?;
    let b = b.into_operand(graph)?;
    let value = forward(graph.config(), graph.data(a)?, graph.data(b)?)?;
    graph.push_node(value, op, vec![a, b])
}

#[cfg(test)]
mod tests {
    use crate::{Graph, MicrodiffError};

    #[test]
    fn test_failed_builder_leaves_graph_unchanged() -> Result<(), MicrodiffError> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        assert!(graph.div(a, 0.0).is_err());
        assert!(graph.log(-3.0).is_err());
        assert!(graph.exp(1000.0).is_err());
        assert_eq!(graph.len(), 1);
        Ok(())
    }
}
