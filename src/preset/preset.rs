use crate::flow::driver::EdgeInput;

/// A ready-made network the app can start from instead of an empty form.
pub struct Preset {
    pub source: String,
    pub sink: String,
    pub edges: Vec<EdgeInput>,
}
