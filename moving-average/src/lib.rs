//! This crate provides a streaming moving-average (boxcar FIR) block.
//!
//! The block receives samples in batches of any size and keeps the last
//! `window_length - 1` samples between calls, so splitting a stream into
//! batches never changes the result. Typical usage may look like:
//! ```rust
//! use moving_average::{BlockFilter, MovingAverage, Sample};
//!
//! let mut block = MovingAverage::new(4, 1.0)?;         // window of 4, unit DC gain
//! let first = block.process(&[1.0, 0.0, 0.0]);         // primes the history only
//! let rest = block.process(&[0.0, 0.0, 0.0]);          // one output per new sample
//! assert!(first.is_empty());
//! assert_eq!(rest, vec![0.25, 0.0, 0.0]);
//!
//! let ones: [Sample; 4] = [1.0; 4];
//! let smoothed: Vec<_> = ones
//!     .into_iter()
//!     .through(MovingAverage::new(2, 1.0)?)           // sample-by-sample adapter
//!     .collect();
//! assert_eq!(smoothed, vec![1.0, 1.0, 1.0]);
//! # Ok::<(), moving_average::MovingAverageError>(())
//! ```

pub mod block;
pub mod error;
pub(crate) mod history;
pub mod iter;
pub mod moving_average;
pub mod parameters;
pub mod processing;
pub mod samples;

pub use block::{Block, Work};
pub use boxcar_common::Sample;
pub use error::MovingAverageError;
pub use iter::{BlockFilter, BlockIter};
pub use moving_average::MovingAverage;
pub use parameters::BlockParameters;
