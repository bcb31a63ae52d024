use super::Graph;
use crate::error::{MicrodiffError, Result};
use crate::node::NodeId;
use num_traits::ToPrimitive;

/// Conversion of a builder argument into a node of `graph`.
///
/// An existing [`NodeId`] passes through unchanged (identity, not a copy).
/// Numbers, booleans, numeric strings and single-element collections become a
/// fresh leaf.
pub trait IntoOperand {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId>;
}

impl IntoOperand for NodeId {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        graph.node(self)?;
        Ok(self)
    }
}

macro_rules! impl_into_operand_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
                    let data = ToPrimitive::to_f64(&self).ok_or_else(|| {
                        MicrodiffError::UnsupportedInput(format!(
                            "{} cannot be represented as f64",
                            self
                        ))
                    })?;
                    graph.value(data)
                }
            }
        )*
    };
}

impl_into_operand_for_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoOperand for bool {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        graph.value(if self { 1.0 } else { 0.0 })
    }
}

impl IntoOperand for &str {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        let data = self.trim().parse::<f64>().map_err(|_| {
            MicrodiffError::UnsupportedInput(format!("{:?} is not a number", self))
        })?;
        graph.value(data)
    }
}

impl IntoOperand for String {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        self.as_str().into_operand(graph)
    }
}

impl IntoOperand for &[f64] {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        match self {
            [single] => graph.value(*single),
            _ => Err(MicrodiffError::UnsupportedInput(format!(
                "expected a single-element collection, got {} elements",
                self.len()
            ))),
        }
    }
}

impl IntoOperand for Vec<f64> {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        self.as_slice().into_operand(graph)
    }
}

impl IntoOperand for [f64; 1] {
    fn into_operand(self, graph: &mut Graph) -> Result<NodeId> {
        graph.value(self[0])
    }
}

impl Graph {
    /// Coerces `input` into a node of this graph.
    pub fn from_operand(&mut self, input: impl IntoOperand) -> Result<NodeId> {
        input.into_operand(self)
    }
}
