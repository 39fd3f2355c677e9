use crate::graph::capacity::AdjacencyView;
use crate::search::queue::Fifo;
use std::collections::HashMap;

/// Outcome of one breadth-first search. `visited` is the set of nodes
/// taken off the queue or discovered before the search stopped; when the
/// destination is found it is deliberately not part of that set, which
/// is what the cut extraction relies on.
pub struct SearchResult {
    path: Vec<String>,
    dist: usize,
    visited: Vec<String>,
}

impl SearchResult {
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn dist(&self) -> usize {
        self.dist
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

/// Fewest-hops path from `source` to `destination`. Neighbors are
/// visited in ascending id-list index, so the chosen path is
/// deterministic for a given graph. A missing key reads as an undefined
/// predecessor and infinite distance.
pub fn bfs<G: AdjacencyView>(graph: &G, source: &str, destination: &str) -> SearchResult {
    let mut pred: HashMap<String, String> = HashMap::new();
    let mut dist: HashMap<String, usize> = HashMap::new();
    let mut visited = vec![source.to_string()];
    let mut queue = Fifo::new();

    dist.insert(source.to_string(), 0);
    queue.enqueue(source.to_string());

    while let Some(current) = queue.dequeue() {
        // a source that is not in the graph has no neighbors to offer
        let Ok(neighbors) = graph.neighbors(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.iter().any(|v| *v == neighbor) {
                continue;
            }
            pred.insert(neighbor.clone(), current.clone());
            let hops = dist[&current] + 1;
            dist.insert(neighbor.clone(), hops);

            if neighbor == destination {
                return SearchResult {
                    path: reconstruct(&pred, source, destination),
                    dist: hops,
                    visited,
                };
            }
            visited.push(neighbor.clone());
            queue.enqueue(neighbor);
        }
    }

    SearchResult {
        path: Vec::new(),
        dist: 0,
        visited,
    }
}

/// Walks predecessor links back from the destination and reverses.
fn reconstruct(pred: &HashMap<String, String>, source: &str, destination: &str) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while current != source {
        match pred.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
