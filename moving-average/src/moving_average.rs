use crate::{Block, MovingAverageError, Work, history::History};
use boxcar_common::{Sample, WindowLength};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// A causal boxcar filter, scaled by a constant factor.
///
/// Each output is `scale * (sum of the latest window_length inputs) / window_length`.
/// The first `window_length - 1` samples ever delivered only prime the
/// history, so a finite stream of length `L` yields `L - (window_length - 1)`
/// outputs, and none at all if it is shorter than the window.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window_length: NonZeroUsize,
    scale: Sample,
    /// `scale / window_length`, recomputed whenever either changes.
    gain: Sample,
    history: History,
}

impl MovingAverage {
    pub fn new(window_length: WindowLength, scale: Sample) -> Result<Self, MovingAverageError> {
        let window_length = NonZeroUsize::new(window_length)
            .ok_or(MovingAverageError::InvalidConfiguration(window_length))?;
        debug!(
            window_length = window_length.get(),
            scale,
            "Creating moving average"
        );
        Ok(MovingAverage {
            window_length,
            scale,
            gain: Self::gain(window_length, scale),
            history: History::new(window_length.get() - 1),
        })
    }

    fn gain(window_length: NonZeroUsize, scale: Sample) -> Sample {
        scale / window_length.get() as Sample
    }

    pub fn window_length(&self) -> WindowLength {
        self.window_length.get()
    }

    pub fn scale(&self) -> Sample {
        self.scale
    }

    /// Changes the window length. Retained samples are kept where possible,
    /// if the window grows no output is produced until enough new input has
    /// arrived to fill it.
    pub fn set_window_length(
        &mut self,
        window_length: WindowLength,
    ) -> Result<(), MovingAverageError> {
        let window_length = NonZeroUsize::new(window_length)
            .ok_or(MovingAverageError::InvalidConfiguration(window_length))?;
        debug!(
            from = self.window_length.get(),
            to = window_length.get(),
            "Changing window length"
        );
        self.window_length = window_length;
        self.gain = Self::gain(window_length, self.scale);
        self.history.set_required(window_length.get() - 1);
        Ok(())
    }

    pub fn set_scale(&mut self, scale: Sample) {
        debug!(from = self.scale, to = scale, "Changing scale");
        self.scale = scale;
        self.gain = Self::gain(self.window_length, scale);
    }

    /// True once enough input has arrived for every new sample to yield an output.
    pub fn is_primed(&self) -> bool {
        self.history.is_primed()
    }

    /// Runs all of `input` through the filter and returns the outputs it yields.
    pub fn process(&mut self, input: &[Sample]) -> Vec<Sample> {
        let mut output = vec![Sample::default(); input.len()];
        let Work { produced, .. } = self.work(input, &mut output);
        output.truncate(produced);
        output
    }
}

impl Block for MovingAverage {
    type Input = Sample;
    type Output = Sample;

    fn history(&self) -> usize {
        self.history.required()
    }

    fn work(&mut self, input: &[Sample], output: &mut [Sample]) -> Work {
        // Samples still priming the history take no room in the output.
        let consumed = input
            .len()
            .min(self.history.missing().saturating_add(output.len()));
        let (accepted, _) = input.split_at(consumed);
        self.history.stage(accepted);

        let mut produced = 0;
        for (out, window) in output
            .iter_mut()
            .zip(self.history.windows(self.window_length.get()))
        {
            *out = self.gain * window.iter().sum::<Sample>();
            produced += 1;
        }

        self.history.retain_latest();
        trace!(consumed, produced, "Work complete");
        Work { consumed, produced }
    }
}
