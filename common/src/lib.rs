pub mod tracer;

/// A single value of a sample stream.
pub type Sample = f32;

/// The number of samples spanned by a filter window.
pub type WindowLength = usize;
