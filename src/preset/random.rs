use crate::flow::driver::EdgeInput;
use crate::preset::preset::Preset;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random two-layer network between a source and a sink. The same seed
/// always yields the same network.
pub fn build(seed: u64) -> Preset {
    let mut rng = StdRng::seed_from_u64(seed);

    let first: Vec<String> = (0..3).map(|i| format!("relay-{}", i)).collect();
    let second: Vec<String> = (0..3).map(|i| format!("hub-{}", i)).collect();

    let mut edges = Vec::new();
    for relay in &first {
        edges.push(EdgeInput::new("source", relay, rng.gen_range(4..=20) as f64));
    }
    for relay in &first {
        for hub in &second {
            if rng.gen_bool(0.7) {
                edges.push(EdgeInput::new(relay, hub, rng.gen_range(1..=15) as f64));
            }
        }
    }
    for hub in &second {
        edges.push(EdgeInput::new(hub, "sink", rng.gen_range(4..=20) as f64));
    }

    Preset {
        source: "source".to_string(),
        sink: "sink".to_string(),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::driver::{compute_max_flow, max_flow};
    use crate::graph::capacity::CapacityGraph;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_seed_same_network() {
        let a = build(42);
        let b = build(42);
        assert_eq!(a.edges.len(), b.edges.len());
        for (x, y) in a.edges.iter().zip(b.edges.iter()) {
            assert_eq!(x.from, y.from);
            assert_eq!(x.to, y.to);
            assert_relative_eq!(x.weight, y.weight);
        }
    }

    #[test]
    fn test_flow_matches_cut_capacity() {
        let preset = build(7);
        let result = compute_max_flow(&preset.source, &preset.sink, &preset.edges).unwrap();

        let mut graph = CapacityGraph::new();
        for id in crate::flow::driver::collect_node_names(&preset.source, &preset.sink, &preset.edges)
        {
            graph.add_node(&id).unwrap();
        }
        for edge in &preset.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight).unwrap();
        }
        let again = max_flow(&graph, &preset.source, &preset.sink).unwrap();

        let cut_sum: f64 = again
            .cut()
            .iter()
            .map(|(from, to)| graph.capacity(from, to).unwrap().value())
            .sum();
        assert_relative_eq!(result.flow(), cut_sum);
    }
}
