use std::ops::AddAssign;

/// The result of a single call to [Block::work].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    /// Number of input samples taken from the front of the input slice.
    pub consumed: usize,
    /// Number of output samples written to the front of the output slice.
    pub produced: usize,
}

impl AddAssign for Work {
    fn add_assign(&mut self, rhs: Self) {
        self.consumed += rhs.consumed;
        self.produced += rhs.produced;
    }
}

/// The boundary between a streaming block and whatever host drives it.
///
/// A host delivers new input in arbitrary sized batches, in arrival order,
/// and collects whatever the block produces. The block keeps any lookback
/// it needs itself, so the host never re-delivers old samples.
pub trait Block {
    type Input: Copy;
    type Output: Copy + Default;

    /// The number of past input samples the block needs before it can
    /// produce its first output.
    fn history(&self) -> usize;

    /// Consumes samples from the front of `input` and writes samples to the
    /// front of `output`. Consumed input is never offered again.
    fn work(&mut self, input: &[Self::Input], output: &mut [Self::Output]) -> Work;
}
