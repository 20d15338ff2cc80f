//! Shortest-path recovery from a BFS predecessor map.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

/// Walk `pred` backward from `target` to `source` and return the path
/// source-first, both endpoints included.
///
/// Works with any key type, so it accepts id-keyed maps from
/// [`Graph::bfs`](crate::Graph::bfs) as well as name-keyed ones.
///
/// - `source == target` is the one-node path, whatever `pred` holds.
/// - `target` absent from `pred`: [`GraphError::TargetUnreachable`].
/// - the chain leaves `pred`, or cycles, before reaching `source`:
///   [`GraphError::BrokenChain`].
pub fn extract_path<K>(source: &K, target: &K, pred: &HashMap<K, K>) -> GraphResult<Vec<K>>
where
    K: Clone + Eq + Hash + Display,
{
    if source == target {
        return Ok(vec![source.clone()]);
    }
    if !pred.contains_key(target) {
        return Err(GraphError::TargetUnreachable(target.to_string()));
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        let Some(prev) = pred.get(current) else {
            return Err(GraphError::BrokenChain {
                at: current.to_string(),
            });
        };
        path.push(prev.clone());
        // a valid chain visits each map key at most once
        if path.len() > pred.len() + 1 {
            return Err(GraphError::BrokenChain {
                at: prev.to_string(),
            });
        }
        current = prev;
    }

    path.reverse();
    Ok(path)
}
