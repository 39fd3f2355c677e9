use crate::tui::app::{App, Field};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length((app.rows.len() + 3) as u16),
            Constraint::Min(7),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(build_header(), chunks[0]);
    frame.render_widget(build_endpoints(app), chunks[1]);
    frame.render_widget(build_edge_table(app), chunks[2]);
    frame.render_widget(build_results(app), chunks[3]);
    frame.render_widget(build_footer(), chunks[4]);
}

fn field_style(app: &App, field: Field) -> Style {
    if app.focus == field {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    }
}

fn build_header() -> Block<'static> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Flowcut ").style(Style::default().bold().cyan()),
            Span::raw("—").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(" max flow / min cut / shortest path ")
                .style(Style::default().add_modifier(Modifier::DIM)),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_endpoints(app: &'_ App) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::raw("Source: ").style(Style::default().add_modifier(Modifier::DIM)),
        Span::raw(app.source.as_str()).style(field_style(app, Field::Source)),
        Span::raw("    Sink: ").style(Style::default().add_modifier(Modifier::DIM)),
        Span::raw(app.sink.as_str()).style(field_style(app, Field::Sink)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Endpoints ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_edge_table(app: &'_ App) -> Table<'_> {
    Table::new(
        app.rows.iter().enumerate().map(|(i, row)| {
            Row::new(vec![
                Cell::from(row.from.as_str()).style(field_style(app, Field::From(i))),
                Cell::from(row.to.as_str()).style(field_style(app, Field::To(i))),
                Cell::from(row.weight.as_str()).style(field_style(app, Field::Weight(i))),
            ])
        }),
        [
            Constraint::Length(20),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new([
            Cell::from("From"),
            Cell::from("To"),
            Cell::from("Weight"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Edges ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_results(app: &'_ App) -> Paragraph<'_> {
    let mut lines = Vec::new();

    if let Some(status) = &app.status {
        lines.push(Line::from(
            Span::raw(status.as_str()).style(Style::default().fg(Color::Red)),
        ));
    }

    if let Some(flow) = &app.flow {
        lines.push(Line::from(vec![
            Span::raw("Max flow: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", flow.flow())).style(Style::default().fg(Color::Green).bold()),
        ]));
        let cut = if flow.cut().is_empty() {
            "(none)".to_string()
        } else {
            flow.cut()
                .iter()
                .map(|(from, to)| format!("{} → {}", from, to))
                .collect::<Vec<String>>()
                .join(", ")
        };
        lines.push(Line::from(vec![
            Span::raw("Min cut:  ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(cut),
        ]));
    }

    if let Some(route) = &app.route {
        if route.is_reachable() {
            lines.push(Line::from(vec![
                Span::raw("Shortest: ").style(Style::default().add_modifier(Modifier::DIM)),
                Span::raw(app.route_display().join(" → ")),
                Span::raw(format!("  (distance {})", route.distance()))
                    .style(Style::default().add_modifier(Modifier::DIM)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("Shortest: ").style(Style::default().add_modifier(Modifier::DIM)),
                Span::raw("unreachable"),
            ]));
        }
    }

    let nodes = app.node_names();
    if !nodes.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Nodes:    ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(nodes.join(", ")),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(
            Span::raw("Fill in the form and press Enter to compute.")
                .style(Style::default().add_modifier(Modifier::DIM)),
        ));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Results ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_footer() -> Block<'static> {
    Block::new().title(
        Line::from(vec![
            Span::raw(" Tab/Shift-Tab fields  ·  Ctrl-a add edge  ·  Ctrl-d delete edge  ·  Enter compute  ·  Esc quit ")
                .style(Style::default().add_modifier(Modifier::DIM)),
        ])
        .alignment(Alignment::Center),
    )
}
