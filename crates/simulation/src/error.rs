use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid return jitter range [{low}, {high})")]
    InvalidJitter { low: f64, high: f64 },
}
