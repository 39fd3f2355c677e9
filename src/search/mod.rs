pub mod bfs;
pub mod queue;
