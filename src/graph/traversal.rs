//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId};

use super::path::extract_path;
use super::Graph;

/// Breadth-first search from `source` over the whole connected component.
///
/// The caller owns every collection so allocation stays out of timed runs;
/// all three must be empty on entry and are never cleared here. On return
/// `pred` maps each node reached (except `source`) to the node it was first
/// discovered from, `visited` holds the component, and `queue` is empty.
///
/// The search does not stop at `target`: the resulting map answers
/// shortest-path queries from `source` to any node of the component.
/// Discovery order, and so tie-breaking between equal-length paths, follows
/// each node's current neighbor order.
pub fn breadth_first_search(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    pred: &mut HashMap<NodeId, NodeId>,
    visited: &mut HashSet<NodeId>,
    queue: &mut VecDeque<NodeId>,
) -> GraphResult<()> {
    let missing: Vec<String> = [source, target]
        .into_iter()
        .filter(|&id| graph.node(id).is_none())
        .map(|id| format!("#{}", id))
        .collect();
    if !missing.is_empty() {
        return Err(GraphError::NodeNotFound(missing));
    }
    if !pred.is_empty() || !visited.is_empty() || !queue.is_empty() {
        return Err(GraphError::ScratchNotEmpty);
    }

    let nodes = graph.nodes();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        visited.insert(current);

        for &neighbor in nodes[current].neighbors() {
            if visited.contains(&neighbor) || pred.contains_key(&neighbor) {
                continue;
            }
            pred.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    Ok(())
}

impl Graph {
    /// Breadth-first search between two named nodes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] naming every absent endpoint
    /// before touching any collection. See [`breadth_first_search`].
    pub fn bfs(
        &self,
        source: &str,
        target: &str,
        pred: &mut HashMap<NodeId, NodeId>,
        visited: &mut HashSet<NodeId>,
        queue: &mut VecDeque<NodeId>,
    ) -> GraphResult<()> {
        let ids = self.resolve(&[source, target])?;
        breadth_first_search(self, ids[0], ids[1], pred, visited, queue)
    }

    /// Recover the named shortest path from a predecessor map filled by
    /// [`Graph::bfs`] from `source`.
    pub fn path_names(
        &self,
        source: &str,
        target: &str,
        pred: &HashMap<NodeId, NodeId>,
    ) -> GraphResult<Vec<&str>> {
        let ids = self.resolve(&[source, target])?;

        let path = extract_path(&ids[0], &ids[1], pred).map_err(|e| match e {
            GraphError::TargetUnreachable(_) => GraphError::TargetUnreachable(target.to_string()),
            GraphError::BrokenChain { at } => GraphError::BrokenChain {
                at: at
                    .parse::<NodeId>()
                    .ok()
                    .and_then(|id| self.name_of(id))
                    .map(str::to_string)
                    .unwrap_or(at),
            },
            other => other,
        })?;

        path.into_iter()
            .map(|id| {
                self.name_of(id).ok_or_else(|| GraphError::BrokenChain {
                    at: id.to_string(),
                })
            })
            .collect()
    }

    /// Run a fresh BFS and return the named shortest path.
    ///
    /// Convenience for one-off queries; it allocates its own scratch space.
    pub fn shortest_path(&self, source: &str, target: &str) -> GraphResult<Vec<&str>> {
        let mut pred = HashMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        self.bfs(source, target, &mut pred, &mut visited, &mut queue)?;
        self.path_names(source, target, &pred)
    }
}
