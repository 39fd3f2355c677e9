pub mod capacity;
pub mod residual;
