use super::{Graph, IntoOperand};
use crate::error::Result;
use crate::node::NodeId;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::math_elem::{exp_op, log_op};

// Builder methods. Each delegates to the corresponding `xxx_op` function.
impl Graph {
    pub fn add(&mut self, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
        add_op(self, a, b)
    }

    pub fn sub(&mut self, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
        sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
        mul_op(self, a, b)
    }

    pub fn div(&mut self, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
        div_op(self, a, b)
    }

    pub fn pow(&mut self, a: impl IntoOperand, b: impl IntoOperand) -> Result<NodeId> {
        pow_op(self, a, b)
    }

    pub fn neg(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        neg_op(self, a)
    }

    pub fn exp(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        exp_op(self, a)
    }

    pub fn log(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        log_op(self, a)
    }

    pub fn tanh(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        tanh_op(self, a)
    }

    pub fn sigmoid(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        sigmoid_op(self, a)
    }

    pub fn relu(&mut self, a: impl IntoOperand) -> Result<NodeId> {
        relu_op(self, a)
    }
}
