use boxcar_common::Sample;
use std::{
    collections::VecDeque,
    io::{BufRead, Write},
    num::ParseFloatError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid sample '{token}' on line {line}: {source}")]
    InvalidSample {
        line: usize,
        token: String,
        source: ParseFloatError,
    },
    #[error("Block stalled with {0} samples unconsumed")]
    Stalled(usize),
}

/// Reads whitespace separated samples from text, one line at a time.
/// Lines starting with `#` are skipped.
pub struct SampleReader<R: BufRead> {
    reader: R,
    line_number: usize,
    pending: VecDeque<Sample>,
}

impl<R: BufRead> SampleReader<R> {
    pub fn new(reader: R) -> Self {
        SampleReader {
            reader,
            line_number: 0,
            pending: VecDeque::new(),
        }
    }

    /// Parses the next non-empty line into `pending`.
    /// A line is taken whole or not at all, so an invalid token rejects
    /// every sample on its line. Returns false at the end of the input.
    fn read_line(&mut self) -> Result<bool, SampleError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.line_number += 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let samples = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<Sample>()
                        .map_err(|source| SampleError::InvalidSample {
                            line: self.line_number,
                            token: token.to_owned(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            self.pending.extend(samples);
            return Ok(true);
        }
    }
}

impl<R: BufRead> Iterator for SampleReader<R> {
    type Item = Result<Sample, SampleError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

pub fn load_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>, SampleError> {
    SampleReader::new(reader).collect()
}

/// Writes one sample per line.
pub fn save_samples<W: Write>(writer: &mut W, samples: &[Sample]) -> Result<(), SampleError> {
    for sample in samples {
        writeln!(writer, "{sample}")?;
    }
    Ok(())
}
