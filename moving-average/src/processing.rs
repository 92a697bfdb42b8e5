use crate::{
    Block, Work,
    samples::{SampleError, save_samples},
};
use boxcar_common::Sample;
use std::io::Write;
use tracing::{debug, instrument, warn};

/// Feeds `samples` through `block` in batches of `batch_size`, writing every
/// output to `writer` as soon as it is produced.
/// A `batch_size` of zero delivers the whole stream in a single call.
#[instrument(skip_all, fields(batch_size = batch_size, history = block.history()))]
pub fn run_stream<B, I, W>(
    block: &mut B,
    samples: I,
    batch_size: usize,
    writer: &mut W,
) -> Result<Work, SampleError>
where
    B: Block<Input = Sample, Output = Sample>,
    I: Iterator<Item = Result<Sample, SampleError>>,
    W: Write,
{
    let mut total = Work::default();
    let mut batch = Vec::with_capacity(batch_size);
    let mut output = Vec::new();

    for sample in samples {
        batch.push(sample?);
        if batch.len() == batch_size {
            total += dispatch_batch(block, &batch, &mut output, writer)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        total += dispatch_batch(block, &batch, &mut output, writer)?;
    }
    debug!(
        consumed = total.consumed,
        produced = total.produced,
        "Stream finished"
    );
    Ok(total)
}

fn dispatch_batch<B, W>(
    block: &mut B,
    batch: &[Sample],
    output: &mut Vec<Sample>,
    writer: &mut W,
) -> Result<Work, SampleError>
where
    B: Block<Input = Sample, Output = Sample>,
    W: Write,
{
    output.clear();
    output.resize(batch.len(), Sample::default());

    let mut total = Work::default();
    let mut remaining = batch;
    // A block may stop short of the batch when its output fills up.
    while !remaining.is_empty() {
        let work = block.work(remaining, output);
        if work.consumed == 0 {
            warn!(unconsumed = remaining.len(), "Block stopped consuming input");
            return Err(SampleError::Stalled(remaining.len()));
        }
        let (produced, _) = output.split_at(work.produced);
        save_samples(writer, produced)?;
        let (_, rest) = remaining.split_at(work.consumed);
        remaining = rest;
        total += work;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MovingAverage, samples::SampleReader};

    const TEXT: &str = "1 2 3 4\n5 6\n7\n8 9 10 11 12\n";

    fn run(batch_size: usize) -> (Work, String) {
        let mut block = MovingAverage::new(4, 2.0).unwrap();
        let mut buffer = Vec::new();
        let work = run_stream(
            &mut block,
            SampleReader::new(TEXT.as_bytes()),
            batch_size,
            &mut buffer,
        )
        .unwrap();
        (work, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn whole_stream() {
        let (work, text) = run(0);
        assert_eq!(
            work,
            Work {
                consumed: 12,
                produced: 9
            }
        );
        assert_eq!(text, "5\n7\n9\n11\n13\n15\n17\n19\n21\n");
    }

    #[test]
    fn batch_sizes_agree() {
        let (_, expected) = run(0);
        for batch_size in 1..15 {
            let (work, text) = run(batch_size);
            assert_eq!(work.consumed, 12);
            assert_eq!(work.produced, 9);
            assert_eq!(text, expected);
        }
    }

    /// Takes a fixed number of samples then refuses any more.
    struct Stalling(usize);

    impl Block for Stalling {
        type Input = Sample;
        type Output = Sample;

        fn history(&self) -> usize {
            0
        }

        fn work(&mut self, input: &[Sample], output: &mut [Sample]) -> Work {
            let consumed = input.len().min(output.len()).min(self.0);
            output[..consumed].copy_from_slice(&input[..consumed]);
            self.0 -= consumed;
            Work {
                consumed,
                produced: consumed,
            }
        }
    }

    #[test]
    fn stalled_block_is_an_error() {
        let mut buffer = Vec::new();
        let result = run_stream(
            &mut Stalling(3),
            SampleReader::new("1 2 3 4 5\n".as_bytes()),
            0,
            &mut buffer,
        );
        assert!(matches!(result, Err(SampleError::Stalled(2))));
        assert_eq!(String::from_utf8(buffer).unwrap(), "1\n2\n3\n");
    }

    #[test]
    fn invalid_sample_stops_stream() {
        let mut block = MovingAverage::new(2, 1.0).unwrap();
        let mut buffer = Vec::new();
        let result = run_stream(
            &mut block,
            SampleReader::new("1 2 3\nx\n".as_bytes()),
            2,
            &mut buffer,
        );
        assert!(matches!(
            result,
            Err(SampleError::InvalidSample { line: 2, .. })
        ));
        // The first full batch was already written.
        assert_eq!(String::from_utf8(buffer).unwrap(), "1.5\n");
    }
}
