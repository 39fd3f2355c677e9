use std::collections::{HashMap, HashSet};

/// The form layer rewrites the chosen endpoints to these keys before
/// handing the weight map over.
pub const START: &str = "start";
pub const FINISH: &str = "finish";

pub struct PathResult {
    distance: f64,
    path: Vec<String>,
}

impl PathResult {
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Cheapest path from [`START`] to [`FINISH`] over a map of node id to
/// reachable node ids and their weights. Weights must be non-negative.
/// An unreachable finish yields an infinite distance and an empty path.
pub fn calculate_path(graph: &HashMap<String, HashMap<String, f64>>) -> PathResult {
    let mut costs: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, String> = HashMap::new();
    let mut processed: HashSet<String> = HashSet::new();

    costs.insert(START.to_string(), 0.0);

    while let Some(node) = cheapest_unprocessed(&costs, &processed) {
        let cost = costs[&node];
        if let Some(children) = graph.get(&node) {
            for (child, weight) in children {
                let candidate = cost + weight;
                if candidate < *costs.get(child).unwrap_or(&f64::INFINITY) {
                    costs.insert(child.clone(), candidate);
                    parents.insert(child.clone(), node.clone());
                }
            }
        }
        processed.insert(node);
    }

    let distance = *costs.get(FINISH).unwrap_or(&f64::INFINITY);
    if !distance.is_finite() {
        return PathResult {
            distance,
            path: Vec::new(),
        };
    }

    let mut path = vec![FINISH.to_string()];
    let mut current = FINISH;
    while current != START {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    PathResult { distance, path }
}

fn cheapest_unprocessed(costs: &HashMap<String, f64>, processed: &HashSet<String>) -> Option<String> {
    costs
        .iter()
        .filter(|(node, _)| !processed.contains(*node))
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(node, _)| node.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn weights(entries: &[(&str, &[(&str, f64)])]) -> HashMap<String, HashMap<String, f64>> {
        entries
            .iter()
            .map(|(node, children)| {
                (
                    node.to_string(),
                    children
                        .iter()
                        .map(|(child, w)| (child.to_string(), *w))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_detour_beats_expensive_direct_edge() {
        let graph = weights(&[
            ("start", &[("a", 1.0), ("finish", 5.0)]),
            ("a", &[("finish", 1.0)]),
            ("finish", &[]),
        ]);
        let result = calculate_path(&graph);
        assert_relative_eq!(2.0, result.distance());
        assert_eq!(&["start", "a", "finish"], result.path());
    }

    #[test]
    fn test_cost_is_updated_when_a_cheaper_route_appears() {
        let graph = weights(&[
            ("start", &[("a", 6.0), ("b", 2.0)]),
            ("a", &[("finish", 1.0)]),
            ("b", &[("a", 3.0), ("finish", 7.0)]),
            ("finish", &[]),
        ]);
        let result = calculate_path(&graph);
        assert_relative_eq!(6.0, result.distance());
        assert_eq!(&["start", "b", "a", "finish"], result.path());
    }

    #[test]
    fn test_unreachable_finish() {
        let graph = weights(&[("start", &[("a", 1.0)]), ("a", &[]), ("finish", &[])]);
        let result = calculate_path(&graph);
        assert!(!result.is_reachable());
        assert!(result.path().is_empty());
    }
}
