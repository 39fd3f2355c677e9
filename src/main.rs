use crate::tui::app::App;
use crate::tui::draw::draw_app;
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

mod error;
mod flow;
mod graph;
mod path;
mod preset;
mod search;
mod tui;

#[derive(Parser)]
#[command(about = "Max flow, min cut and shortest path on a user-entered directed graph")]
struct Args {
    /// Start with the built-in demo network
    #[arg(long)]
    demo: bool,
    /// Start with a randomly generated network
    #[arg(long)]
    random: bool,
    /// Seed for --random
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut app = if args.demo {
        App::from_preset(preset::demo::build())
    } else if args.random {
        App::from_preset(preset::random::build(args.seed))
    } else {
        App::new()
    };

    let mut terminal = ratatui::init();
    loop {
        let _ = terminal.draw(|frame| draw_app(frame, &app));

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc =>
                {
                    break;
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => continue,
            }
        }
    }
    Ok(())
}
