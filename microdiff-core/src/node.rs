use crate::error::{MicrodiffError, Result};
use std::collections::HashMap;
use std::fmt;

/// Handle to a node inside its [`Graph`](crate::Graph) arena.
///
/// `serial` comes from a per-graph counter that never goes back, so an
/// operation's output always compares greater than any of its operands and a
/// handle to a truncated node is never reissued. `index` is the arena slot,
/// which truncation may hand to a later node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    serial: usize,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(serial: usize, index: usize) -> Self {
        NodeId { serial, index }
    }

    pub fn serial(&self) -> usize {
        self.serial
    }

    /// Slot in the arena's node vector.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.serial)
    }
}

/// Tag identifying the builder that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow,
    Exp,
    Log,
    Tanh,
    Sigmoid,
    Relu,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Neg => "neg",
            Op::Pow => "pow",
            Op::Exp => "exp",
            Op::Log => "log",
            Op::Tanh => "tanh",
            Op::Sigmoid => "sigmoid",
            Op::Relu => "relu",
        }
    }

    /// Number of operands the builder records as children.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Neg | Op::Exp | Op::Log | Op::Tanh | Op::Sigmoid | Op::Relu => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scalar quantity in the computation graph.
///
/// Structure (`op`, `children`) is fixed at creation; only `data`, `grad`, the
/// label and the higher-order cache change afterwards, always through the
/// owning [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) children: Vec<NodeId>,
    pub(crate) label: Option<String>,
    pub(crate) higher_order_grads: HashMap<u32, f64>,
}

impl Node {
    pub(crate) fn new(id: NodeId, data: f64, op: Op, children: Vec<NodeId>) -> Result<Self> {
        Ok(Node {
            id,
            data: ensure_finite("data", data)?,
            grad: 0.0,
            op,
            children,
            label: None,
            higher_order_grads: HashMap::new(),
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Operands in the order the builder received them. May repeat an id (`x + x`).
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.op == Op::Leaf
    }

    /// Operands with repeated ids removed, first occurrence kept.
    pub fn distinct_children(&self) -> Vec<NodeId> {
        let mut distinct = Vec::with_capacity(self.children.len());
        for child in &self.children {
            if !distinct.contains(child) {
                distinct.push(*child);
            }
        }
        distinct
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MicrodiffError::NonFiniteValue { field, value })
    }
}
