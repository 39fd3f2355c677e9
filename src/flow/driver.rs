use crate::error::GraphError;
use crate::graph::capacity::{AdjacencyView, CapacityGraph};
use crate::graph::residual::ResidualGraph;
use crate::search::bfs::bfs;
use std::collections::BTreeSet;

/// One user-entered edge, already filtered for completeness by the caller.
#[derive(Clone, Debug)]
pub struct EdgeInput {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeInput {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Max flow together with the min cut that certifies it.
#[derive(Debug, PartialEq)]
pub struct FlowResult {
    flow: f64,
    cut: BTreeSet<(String, String)>,
}

impl FlowResult {
    pub fn flow(&self) -> f64 {
        self.flow
    }

    pub fn cut(&self) -> &BTreeSet<(String, String)> {
        &self.cut
    }
}

/// Edmonds-Karp over a residual copy of `graph`. Augmenting paths are
/// saturated until the search no longer reaches the sink; the final
/// visited set is the source side of the min cut.
///
/// The flow is recomputed from the cut against the original graph rather
/// than summed per augmentation, which stays correct when later paths
/// cancel flow over reverse edges.
pub fn max_flow(
    graph: &CapacityGraph,
    source: &str,
    sink: &str,
) -> Result<FlowResult, GraphError> {
    let mut residual = ResidualGraph::new(graph);
    let mut last = bfs(&residual, source, sink);
    while !last.path().is_empty() {
        let min = residual.path_capacity(last.path())?;
        residual.adjust_along_path(last.path(), min)?;
        last = bfs(&residual, source, sink);
    }

    let mut cut = BTreeSet::new();
    let mut flow = 0.0;
    for inside in last.visited() {
        // a source that was never added to the graph has no outgoing edges
        let Ok(neighbors) = graph.neighbors(inside) else {
            continue;
        };
        for outside in neighbors {
            if last.visited().iter().any(|v| *v == outside) {
                continue;
            }
            flow += graph.capacity(inside, &outside)?.value();
            cut.insert((inside.clone(), outside));
        }
    }
    Ok(FlowResult { flow, cut })
}

/// Builds a capacity graph from source, sink and the edge list, then
/// runs [`max_flow`]. Repeated `(from, to)` pairs overwrite, they do not
/// accumulate.
pub fn compute_max_flow(
    source: &str,
    sink: &str,
    edges: &[EdgeInput],
) -> Result<FlowResult, GraphError> {
    let mut graph = CapacityGraph::new();
    for id in collect_node_names(source, sink, edges) {
        graph.add_node(&id)?;
    }
    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, edge.weight)?;
    }
    max_flow(&graph, source, sink)
}

/// Every node id referenced by the inputs, deduplicated in first-seen
/// order: source, sink, then edge endpoints. The order fixes the matrix
/// indices and with them the deterministic path and cut selection.
pub fn collect_node_names(source: &str, sink: &str, edges: &[EdgeInput]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let referenced = [source, sink]
        .into_iter()
        .chain(edges.iter().map(|e| e.from.as_str()))
        .chain(edges.iter().map(|e| e.to.as_str()));
    for id in referenced {
        if !names.iter().any(|n| n == id) {
            names.push(id.to_string());
        }
    }
    names
}
