//! Forward reachability: "who is affected if this agent fails?"

use std::collections::{HashSet, VecDeque};

use covenant_core::models::IdentityHash;

use crate::graph::IndexedTrustGraph;

/// Every agent that transitively depends on `id`, breadth-first, each at most
/// once, never including `id` itself. Empty for unknown identities.
pub fn transitive_dependents(graph: &IndexedTrustGraph, id: &str) -> Vec<IdentityHash> {
    let start_idx = match graph.get_node(id) {
        Some(idx) => idx,
        None => return Vec::new(),
    };

    let mut visited = HashSet::new();
    visited.insert(start_idx);

    let mut queue = VecDeque::new();
    queue.push_back(start_idx);

    let mut result = Vec::new();
    while let Some(current) = queue.pop_front() {
        for neighbor in graph.dependents(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            if let Some(identity) = graph.identity(neighbor) {
                result.push(identity.clone());
            }
            queue.push_back(neighbor);
        }
    }

    result
}

/// Direct dependencies of `id`, in registration order.
pub fn direct_dependencies(graph: &IndexedTrustGraph, id: &str) -> Vec<IdentityHash> {
    graph
        .get_node(id)
        .map(|idx| {
            graph
                .dependencies(idx)
                .into_iter()
                .filter_map(|n| graph.identity(n).cloned())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> IndexedTrustGraph {
        let mut g = IndexedTrustGraph::new();
        for (from, to) in edges {
            let a = g.ensure_node(&IdentityHash::from(*from));
            let b = g.ensure_node(&IdentityHash::from(*to));
            g.add_dependency(a, b);
        }
        g
    }

    fn names(ids: Vec<IdentityHash>) -> Vec<String> {
        ids.into_iter().map(|i| i.0).collect()
    }

    #[test]
    fn breadth_first_order() {
        let g = graph(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "e")]);
        assert_eq!(names(transitive_dependents(&g, "a")), ["b", "c", "d", "e"]);
    }

    #[test]
    fn cycle_excludes_origin() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(names(transitive_dependents(&g, "a")), ["b", "c"]);
    }

    #[test]
    fn unknown_is_empty() {
        let g = graph(&[("a", "b")]);
        assert!(transitive_dependents(&g, "zzz").is_empty());
        assert!(direct_dependencies(&g, "zzz").is_empty());
    }
}
