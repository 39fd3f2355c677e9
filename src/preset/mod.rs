pub mod demo;
pub mod preset;
pub mod random;
