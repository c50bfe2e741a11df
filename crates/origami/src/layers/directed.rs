//! Small directed/undirected graph algorithms over `usize` node ids.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::error::{OrigamiError, Result};

/// Kahn's algorithm over the nodes named in `edges` (`(a, b)` means `a`
/// before `b`). Among ready nodes the smallest id goes first, so the result
/// is deterministic. A cycle yields `CyclicConstraints`.
pub fn topological_sort(edges: &[(usize, usize)]) -> Result<Vec<usize>> {
    let mut indegree: BTreeMap<usize, usize> = BTreeMap::new();
    let mut out: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(a, b) in edges {
        indegree.entry(a).or_insert(0);
        *indegree.entry(b).or_insert(0) += 1;
        out.entry(a).or_default().push(b);
    }
    let mut ready: BinaryHeap<Reverse<usize>> = indegree
        .iter()
        .filter(|(_, &d)| d == 0)
        .map(|(&n, _)| Reverse(n))
        .collect();
    let mut order = Vec::with_capacity(indegree.len());
    while let Some(Reverse(n)) = ready.pop() {
        order.push(n);
        for &m in out.get(&n).map(Vec::as_slice).unwrap_or(&[]) {
            if let Some(d) = indegree.get_mut(&m) {
                *d -= 1;
                if *d == 0 {
                    ready.push(Reverse(m));
                }
            }
        }
    }
    if order.len() < indegree.len() {
        return Err(OrigamiError::CyclicConstraints { cluster: None });
    }
    Ok(order)
}

/// Connected components of the undirected graph given by `edges`, over the
/// nodes the edges name. Each component is sorted ascending; components are
/// ordered by their smallest node.
pub fn connected_components(edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }
    let mut seen: BTreeSet<usize> = BTreeSet::new();
    let mut components = Vec::new();
    for &start in adjacency.keys() {
        if !seen.insert(start) {
            continue;
        }
        let mut component = vec![start];
        let mut stack = vec![start];
        while let Some(n) = stack.pop() {
            for &m in &adjacency[&n] {
                if seen.insert(m) {
                    component.push(m);
                    stack.push(m);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}
