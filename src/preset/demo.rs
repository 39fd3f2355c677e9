use crate::flow::driver::EdgeInput;
use crate::preset::preset::Preset;

/// Fixed pipeline network with a known max flow of 23.
pub fn build() -> Preset {
    Preset {
        source: "reservoir".to_string(),
        sink: "city".to_string(),
        edges: vec![
            EdgeInput::new("reservoir", "pump-1", 16.0),
            EdgeInput::new("reservoir", "pump-2", 13.0),
            EdgeInput::new("pump-2", "pump-1", 4.0),
            EdgeInput::new("pump-1", "pump-3", 12.0),
            EdgeInput::new("pump-3", "pump-2", 9.0),
            EdgeInput::new("pump-2", "pump-4", 14.0),
            EdgeInput::new("pump-4", "pump-3", 7.0),
            EdgeInput::new("pump-3", "city", 20.0),
            EdgeInput::new("pump-4", "city", 4.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::driver::compute_max_flow;
    use approx::assert_relative_eq;

    #[test]
    fn test_demo_network_flow() {
        let preset = build();
        let result = compute_max_flow(&preset.source, &preset.sink, &preset.edges).unwrap();
        assert_relative_eq!(23.0, result.flow());
    }
}
