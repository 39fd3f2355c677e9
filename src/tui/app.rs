use crate::flow::driver::{EdgeInput, FlowResult, collect_node_names, compute_max_flow};
use crate::path::dijkstra::{FINISH, PathResult, START, calculate_path};
use crate::preset::preset::Preset;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Which text field currently receives input.
#[derive(Clone, Copy, PartialEq)]
pub enum Field {
    Source,
    Sink,
    From(usize),
    To(usize),
    Weight(usize),
}

#[derive(Clone, Default)]
pub struct EdgeRow {
    pub from: String,
    pub to: String,
    pub weight: String,
}

pub struct App {
    pub source: String,
    pub sink: String,
    pub rows: Vec<EdgeRow>,
    pub focus: Field,
    pub flow: Option<FlowResult>,
    pub route: Option<PathResult>,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            source: String::new(),
            sink: String::new(),
            rows: vec![EdgeRow::default()],
            focus: Field::Source,
            flow: None,
            route: None,
            status: None,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        let rows = preset
            .edges
            .iter()
            .map(|e| EdgeRow {
                from: e.from.clone(),
                to: e.to.clone(),
                weight: format_weight(e.weight),
            })
            .collect();
        Self {
            source: preset.source,
            sink: preset.sink,
            rows,
            focus: Field::Source,
            flow: None,
            route: None,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter => self.compute(),
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                self.reset_results();
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.rows.push(EdgeRow::default());
                self.focus = Field::From(self.rows.len() - 1);
                self.reset_results();
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.remove_focused_row();
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.focused_field_mut().push(c);
                self.reset_results();
            }
            _ => {}
        }
    }

    /// Rows with every field present and a weight that parses as a
    /// non-negative number; incomplete rows never reach the engine.
    pub fn complete_rows(&self) -> Vec<EdgeInput> {
        self.rows
            .iter()
            .filter(|row| !row.from.is_empty() && !row.to.is_empty())
            .filter_map(|row| {
                let weight: f64 = row.weight.trim().parse().ok()?;
                if weight < 0.0 {
                    return None;
                }
                Some(EdgeInput::new(row.from.clone(), row.to.clone(), weight))
            })
            .collect()
    }

    pub fn node_names(&self) -> Vec<String> {
        if self.source.is_empty() && self.sink.is_empty() {
            return Vec::new();
        }
        collect_node_names(&self.source, &self.sink, &self.complete_rows())
    }

    /// Shortest-path node sequence with the `start`/`finish` keys mapped
    /// back to the user's node names.
    pub fn route_display(&self) -> Vec<String> {
        let Some(route) = &self.route else {
            return Vec::new();
        };
        route
            .path()
            .iter()
            .map(|id| {
                if id == START {
                    self.source.clone()
                } else if id == FINISH {
                    self.sink.clone()
                } else {
                    id.clone()
                }
            })
            .collect()
    }

    fn compute(&mut self) {
        self.reset_results();
        if self.source.is_empty() || self.sink.is_empty() {
            self.status = Some("enter a source and a sink first".to_string());
            return;
        }
        let edges = self.complete_rows();
        if edges.is_empty() {
            self.status = Some("enter at least one complete edge".to_string());
            return;
        }

        match compute_max_flow(&self.source, &self.sink, &edges) {
            Ok(result) => self.flow = Some(result),
            Err(e) => {
                self.status = Some(e.to_string());
                return;
            }
        }
        self.route = Some(calculate_path(&self.route_weights(&edges)));
    }

    /// Weight map for the shortest-path collaborator, with the chosen
    /// endpoints rewritten to its fixed `start`/`finish` keys.
    fn route_weights(&self, edges: &[EdgeInput]) -> HashMap<String, HashMap<String, f64>> {
        let key = |id: &str| {
            if id == self.source {
                START.to_string()
            } else if id == self.sink {
                FINISH.to_string()
            } else {
                id.to_string()
            }
        };
        let mut weights: HashMap<String, HashMap<String, f64>> = HashMap::new();
        weights.entry(START.to_string()).or_default();
        weights.entry(FINISH.to_string()).or_default();
        for edge in edges {
            weights
                .entry(key(&edge.from))
                .or_default()
                .insert(key(&edge.to), edge.weight);
        }
        weights
    }

    fn reset_results(&mut self) {
        self.flow = None;
        self.route = None;
        self.status = None;
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Source => &mut self.source,
            Field::Sink => &mut self.sink,
            Field::From(i) => &mut self.rows[i].from,
            Field::To(i) => &mut self.rows[i].to,
            Field::Weight(i) => &mut self.rows[i].weight,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Source => Field::Sink,
            Field::Sink => Field::From(0),
            Field::From(i) => Field::To(i),
            Field::To(i) => Field::Weight(i),
            Field::Weight(i) if i + 1 < self.rows.len() => Field::From(i + 1),
            Field::Weight(_) => Field::Source,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Source => Field::Weight(self.rows.len() - 1),
            Field::Sink => Field::Source,
            Field::From(0) => Field::Sink,
            Field::From(i) => Field::Weight(i - 1),
            Field::To(i) => Field::From(i),
            Field::Weight(i) => Field::To(i),
        };
    }

    fn remove_focused_row(&mut self) {
        if self.rows.len() == 1 {
            self.rows[0] = EdgeRow::default();
            self.reset_results();
            return;
        }
        if let Field::From(i) | Field::To(i) | Field::Weight(i) = self.focus {
            self.rows.remove(i);
            self.focus = Field::From(i.min(self.rows.len() - 1));
            self.reset_results();
        }
    }
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(from: &str, to: &str, weight: &str) -> EdgeRow {
        EdgeRow {
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.to_string(),
        }
    }

    #[test]
    fn test_incomplete_rows_are_filtered() {
        let mut app = App::new();
        app.rows = vec![
            row("s", "a", "5"),
            row("", "a", "5"),
            row("s", "", "5"),
            row("s", "a", ""),
            row("s", "a", "abc"),
            row("s", "a", "-3"),
        ];
        let edges = app.complete_rows();
        assert_eq!(1, edges.len());
        assert_relative_eq!(5.0, edges[0].weight);
    }

    #[test]
    fn test_compute_fills_flow_and_route() {
        let mut app = App::new();
        app.source = "s".to_string();
        app.sink = "t".to_string();
        app.rows = vec![row("s", "a", "5"), row("a", "t", "3")];
        app.compute();

        let flow = app.flow.as_ref().unwrap();
        assert_relative_eq!(3.0, flow.flow());

        let route = app.route.as_ref().unwrap();
        assert_relative_eq!(8.0, route.distance());
        assert_eq!(vec!["s", "a", "t"], app.route_display());
    }

    #[test]
    fn test_compute_without_endpoints_sets_status() {
        let mut app = App::new();
        app.rows = vec![row("s", "t", "5")];
        app.compute();
        assert!(app.flow.is_none());
        assert!(app.status.is_some());
    }
}
