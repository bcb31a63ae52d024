use crate::error::{MicrodiffError, Result};
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::ops::activation::{relu, sigmoid, tanh};
use crate::ops::arithmetic::{add, div, mul, neg, pow, sub};
use crate::ops::math_elem::{exp, ln};

/// Computes the gradient contributions `node` pushes into its operands.
///
/// Dispatches on the node's [`Op`] tag to the rule defined next to the
/// operation's forward function. Operand values are read from `graph` at call
/// time; the returned pairs follow the order of `node.children()` and are meant
/// to be added, never assigned, to each operand's gradient.
pub(crate) fn local_gradients(graph: &Graph, node: &Node) -> Result<Vec<(NodeId, f64)>> {
    let g = node.grad;
    let out = node.data;

    let contributions = match (node.op, node.children.as_slice()) {
        (Op::Leaf, []) => Vec::new(),
        (Op::Add, &[a, b]) => {
            let [da, db] = add::add_backward(g);
            vec![(a, da), (b, db)]
        }
        (Op::Sub, &[a, b]) => {
            let [da, db] = sub::sub_backward(g);
            vec![(a, da), (b, db)]
        }
        (Op::Mul, &[a, b]) => {
            let [da, db] = mul::mul_backward(graph.data(a)?, graph.data(b)?, g);
            vec![(a, da), (b, db)]
        }
        (Op::Div, &[a, b]) => {
            let [da, db] = div::div_backward(graph.data(a)?, graph.data(b)?, g);
            vec![(a, da), (b, db)]
        }
        (Op::Pow, &[a, b]) => {
            let [da, db] = pow::pow_backward(graph.data(a)?, graph.data(b)?, out, g)?;
            vec![(a, da), (b, db)]
        }
        (Op::Neg, &[a]) => vec![(a, neg::neg_backward(g))],
        (Op::Exp, &[a]) => vec![(a, exp::exp_backward(out, g))],
        (Op::Log, &[a]) => vec![(a, ln::log_backward(graph.data(a)?, g))],
        (Op::Tanh, &[a]) => vec![(a, tanh::tanh_backward(out, g))],
        (Op::Sigmoid, &[a]) => vec![(a, sigmoid::sigmoid_backward(out, g))],
        (Op::Relu, &[a]) => vec![(a, relu::relu_backward(graph.data(a)?, g))],
        (op, children) => {
            return Err(MicrodiffError::InternalError(format!(
                "node {} tagged {:?} has {} children, expected {}",
                node.id,
                op,
                children.len(),
                op.arity()
            )))
        }
    };
    Ok(contributions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_contributions() -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.value(1.0)?;
        graph.set_grad(a, 3.0)?;
        assert!(local_gradients(&graph, graph.node(a)?)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_contributions_follow_children_order() -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.value(6.0)?;
        let b = graph.value(2.0)?;
        let c = graph.sub(a, b)?;
        graph.set_grad(c, 2.0)?;
        let grads = local_gradients(&graph, graph.node(c)?)?;
        assert_eq!(grads, vec![(a, 2.0), (b, -2.0)]);
        Ok(())
    }

    #[test]
    fn test_duplicate_operand_yields_two_contributions() -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.value(4.0)?;
        let y = graph.mul(x, x)?;
        graph.set_grad(y, 1.0)?;
        let grads = local_gradients(&graph, graph.node(y)?)?;
        assert_eq!(grads, vec![(x, 4.0), (x, 4.0)]);
        Ok(())
    }

    #[test]
    fn test_rules_read_operands_at_call_time() -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.value(2.0)?;
        let b = graph.value(3.0)?;
        let c = graph.mul(a, b)?;
        graph.set_data(b, 10.0)?;
        graph.set_grad(c, 1.0)?;
        let grads = local_gradients(&graph, graph.node(c)?)?;
        assert_eq!(grads, vec![(a, 10.0), (b, 2.0)]);
        Ok(())
    }
}
