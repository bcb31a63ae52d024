use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;
use log::trace;
use std::collections::HashSet;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Every node appears after all of its operands, `root` last. Iterate the
/// result in reverse to process consumers before producers. Uses an explicit
/// work stack so graph depth is not bounded by the call stack; repeated
/// operands are visited once.
pub(crate) fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>> {
    graph.node(root)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<NodeId> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        stack.push((id, true));

        let node = graph.node(id)?;
        // Reversed so the first operand is explored first.
        for child in node.distinct_children().into_iter().rev() {
            if !visited.contains(&child) {
                trace!("[topological_sort] {} -> {}", id, child);
                stack.push((child, false));
            }
        }
    }

    Ok(sorted)
}
