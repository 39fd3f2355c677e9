use crate::error::GraphError;
use crate::graph::capacity::{AdjacencyView, Capacity, CapacityGraph};

/// Residual network of a capacity graph. Built once per flow computation
/// and mutated in place while augmenting paths are saturated.
#[derive(Clone, Debug, PartialEq)]
pub struct ResidualGraph {
    inner: CapacityGraph,
}

impl ResidualGraph {
    /// Clones the base graph and adds a zero-capacity reverse edge for
    /// every finite forward edge. A real edge already present in the
    /// reverse direction is left untouched.
    pub fn new(base: &CapacityGraph) -> Self {
        let mut inner = base.clone();
        let n = base.node_count();
        for i in 0..n {
            for j in 0..n {
                if i != j
                    && base.entry(i, j).is_edge()
                    && inner.entry(j, i) == Capacity::NoEdge
                {
                    inner.set_entry(j, i, Capacity::Edge(0.0));
                }
            }
        }
        Self { inner }
    }

    /// Minimum residual capacity along consecutive pairs of `path`.
    pub fn path_capacity(&self, path: &[String]) -> Result<f64, GraphError> {
        if path.len() < 2 {
            return Err(GraphError::EmptyPath);
        }
        let mut min = f64::INFINITY;
        for pair in path.windows(2) {
            let value = self.inner.capacity(&pair[0], &pair[1])?.value();
            if value < min {
                min = value;
            }
        }
        Ok(min)
    }

    /// Pushes `amount` of flow along `path`: every forward entry loses
    /// `amount` of capacity and every reverse entry gains it. All node
    /// lookups are resolved before the first mutation, so a bad path
    /// leaves the graph unchanged.
    pub fn adjust_along_path(&mut self, path: &[String], amount: f64) -> Result<(), GraphError> {
        let mut hops = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let from = self
                .inner
                .index_of(&pair[0])
                .ok_or_else(|| GraphError::NodeNotFound(pair[0].clone()))?;
            let to = self
                .inner
                .index_of(&pair[1])
                .ok_or_else(|| GraphError::NodeNotFound(pair[1].clone()))?;
            hops.push((from, to));
        }
        for (from, to) in hops {
            if let Capacity::Edge(c) = self.inner.entry(from, to) {
                self.inner.set_entry(from, to, Capacity::Edge(c - amount));
            }
            if let Capacity::Edge(c) = self.inner.entry(to, from) {
                self.inner.set_entry(to, from, Capacity::Edge(c + amount));
            }
        }
        Ok(())
    }
}

impl AdjacencyView for ResidualGraph {
    fn ids(&self) -> &[String] {
        self.inner.ids()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.inner.index_of(id)
    }

    fn neighbors(&self, id: &str) -> Result<Vec<String>, GraphError> {
        self.inner.neighbors(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn chain_graph() -> CapacityGraph {
        let mut graph = CapacityGraph::new();
        for id in ["s", "a", "t"] {
            graph.add_node(id).unwrap();
        }
        graph.add_edge("s", "a", 5.0).unwrap();
        graph.add_edge("a", "t", 3.0).unwrap();
        graph
    }

    fn path(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_reverse_edges_start_at_zero() {
        let residual = ResidualGraph::new(&chain_graph());
        assert_eq!(
            Capacity::Edge(0.0),
            residual.inner.capacity("a", "s").unwrap()
        );
        assert_eq!(
            Capacity::Edge(0.0),
            residual.inner.capacity("t", "a").unwrap()
        );
        // unrelated pairs stay disconnected
        assert_eq!(Capacity::NoEdge, residual.inner.capacity("s", "t").unwrap());
    }

    #[test]
    fn test_real_reverse_edge_is_not_clobbered() {
        let mut graph = chain_graph();
        graph.add_edge("a", "s", 7.0).unwrap();
        let residual = ResidualGraph::new(&graph);
        assert_eq!(
            Capacity::Edge(7.0),
            residual.inner.capacity("a", "s").unwrap()
        );
    }

    #[test]
    fn test_construction_is_idempotent() {
        let graph = chain_graph();
        assert_eq!(ResidualGraph::new(&graph), ResidualGraph::new(&graph));
    }

    #[test]
    fn test_path_capacity_is_the_bottleneck() {
        let residual = ResidualGraph::new(&chain_graph());
        let min = residual.path_capacity(&path(&["s", "a", "t"])).unwrap();
        assert_relative_eq!(3.0, min);
    }

    #[test]
    fn test_path_capacity_rejects_edgeless_paths() {
        let residual = ResidualGraph::new(&chain_graph());
        assert_eq!(Err(GraphError::EmptyPath), residual.path_capacity(&[]));
        assert_eq!(
            Err(GraphError::EmptyPath),
            residual.path_capacity(&path(&["s"]))
        );
    }

    #[test]
    fn test_adjust_moves_capacity_to_reverse_edges() {
        let mut residual = ResidualGraph::new(&chain_graph());
        residual.adjust_along_path(&path(&["s", "a", "t"]), 3.0).unwrap();

        assert_eq!(
            Capacity::Edge(2.0),
            residual.inner.capacity("s", "a").unwrap()
        );
        assert_eq!(
            Capacity::Edge(3.0),
            residual.inner.capacity("a", "s").unwrap()
        );
        assert_eq!(
            Capacity::Edge(0.0),
            residual.inner.capacity("a", "t").unwrap()
        );
        assert_eq!(
            Capacity::Edge(3.0),
            residual.inner.capacity("t", "a").unwrap()
        );
    }

    #[test]
    fn test_adjust_with_unknown_node_mutates_nothing() {
        let mut residual = ResidualGraph::new(&chain_graph());
        let before = residual.clone();
        assert_eq!(
            Err(GraphError::NodeNotFound("x".to_string())),
            residual.adjust_along_path(&path(&["s", "a", "x"]), 1.0)
        );
        assert_eq!(before, residual);
    }
}
