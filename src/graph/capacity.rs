use crate::error::GraphError;

/// One entry of the adjacency matrix. `Edge(0.0)` is a present but
/// non-traversable edge, kept around for residual bookkeeping; `NoEdge`
/// means no edge at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Capacity {
    NoEdge,
    Edge(f64),
}

impl Capacity {
    pub fn is_edge(self) -> bool {
        matches!(self, Capacity::Edge(_))
    }

    pub fn value(self) -> f64 {
        match self {
            Capacity::NoEdge => 0.0,
            Capacity::Edge(c) => c,
        }
    }
}

/// Read-only adjacency view shared by the capacity and residual graphs.
/// The search layer only needs the node list and traversable neighbors.
pub trait AdjacencyView {
    fn ids(&self) -> &[String];
    fn index_of(&self, id: &str) -> Option<usize>;
    fn neighbors(&self, id: &str) -> Result<Vec<String>, GraphError>;
}

/// Dense directed graph keyed by user-supplied node ids. Insertion order
/// fixes the row/column index of each node.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CapacityGraph {
    ids: Vec<String>,
    matrix: Vec<Vec<Capacity>>,
}

impl CapacityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Inserts a node, growing the matrix by one row and one column of
    /// `NoEdge` entries.
    pub fn add_node(&mut self, id: &str) -> Result<(), GraphError> {
        if self.ids.iter().any(|n| n == id) {
            return Err(GraphError::DuplicateNode(id.to_string()));
        }
        self.matrix.push(vec![Capacity::NoEdge; self.ids.len()]);
        self.ids.push(id.to_string());
        for row in self.matrix.iter_mut() {
            row.push(Capacity::NoEdge);
        }
        Ok(())
    }

    /// Removes a node, its row, and its column, keeping the relative
    /// order (and hence indices) of the remaining nodes intact.
    pub fn remove_node(&mut self, id: &str) -> Result<(), GraphError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        self.ids.remove(index);
        self.matrix.remove(index);
        for row in self.matrix.iter_mut() {
            row.remove(index);
        }
        Ok(())
    }

    /// Sets the capacity of the edge `from -> to`, overwriting any
    /// previous capacity between that pair.
    pub fn add_edge(&mut self, from: &str, to: &str, capacity: f64) -> Result<(), GraphError> {
        let (i, j) = self.index_pair(from, to)?;
        self.matrix[i][j] = Capacity::Edge(capacity);
        Ok(())
    }

    /// Alias of [`add_edge`](Self::add_edge); edges have overwrite
    /// semantics, so updating is the same operation.
    pub fn update_edge(&mut self, from: &str, to: &str, capacity: f64) -> Result<(), GraphError> {
        self.add_edge(from, to, capacity)
    }

    pub fn delete_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let (i, j) = self.index_pair(from, to)?;
        self.matrix[i][j] = Capacity::NoEdge;
        Ok(())
    }

    pub fn capacity(&self, from: &str, to: &str) -> Result<Capacity, GraphError> {
        let (i, j) = self.index_pair(from, to)?;
        Ok(self.matrix[i][j])
    }

    pub(crate) fn entry(&self, from: usize, to: usize) -> Capacity {
        self.matrix[from][to]
    }

    pub(crate) fn set_entry(&mut self, from: usize, to: usize, capacity: Capacity) {
        self.matrix[from][to] = capacity;
    }

    fn index_pair(&self, from: &str, to: &str) -> Result<(usize, usize), GraphError> {
        let i = self
            .index_of(from)
            .ok_or_else(|| GraphError::NodeNotFound(from.to_string()))?;
        let j = self
            .index_of(to)
            .ok_or_else(|| GraphError::NodeNotFound(to.to_string()))?;
        Ok((i, j))
    }
}

impl AdjacencyView for CapacityGraph {
    fn ids(&self) -> &[String] {
        &self.ids
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|n| n == id)
    }

    /// Nodes reachable over one edge, in ascending index order. Edges of
    /// capacity exactly zero carry no flow and are excluded.
    fn neighbors(&self, id: &str) -> Result<Vec<String>, GraphError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        Ok(self.matrix[index]
            .iter()
            .enumerate()
            .filter(|(_, cap)| cap.is_edge() && cap.value() != 0.0)
            .map(|(j, _)| self.ids[j].clone())
            .collect())
    }
}
