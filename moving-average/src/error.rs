use boxcar_common::WindowLength;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MovingAverageError {
    #[error("Invalid Configuration: window length must be at least 1, got {0}")]
    InvalidConfiguration(WindowLength),
}
