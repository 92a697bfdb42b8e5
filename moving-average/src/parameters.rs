use crate::{MovingAverage, MovingAverageError};
use boxcar_common::{Sample, WindowLength};
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct BlockParameters {
    /// Number of consecutive samples averaged into each output, at least 1.
    #[clap(long, env = "MOVING_AVERAGE_WINDOW_LENGTH", default_value_t = 8)]
    pub window_length: WindowLength,

    /// Factor applied to every average. This is also the DC gain of the filter.
    #[clap(
        long,
        env = "MOVING_AVERAGE_SCALE",
        default_value_t = 1.0,
        allow_hyphen_values = true
    )]
    pub scale: Sample,
}

impl BlockParameters {
    pub fn build(&self) -> Result<MovingAverage, MovingAverageError> {
        MovingAverage::new(self.window_length, self.scale)
    }
}
