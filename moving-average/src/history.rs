use boxcar_common::Sample;
use std::slice::Windows;

/// The most recent input samples retained between calls.
///
/// Between calls it holds at most `required` samples. During a call new
/// input is staged behind the retained samples, so the windows of the
/// combined sequence can be read directly, then the buffer is cut back
/// to the latest `required` samples.
#[derive(Debug, Clone)]
pub(crate) struct History {
    samples: Vec<Sample>,
    required: usize,
}

impl History {
    pub(crate) fn new(required: usize) -> Self {
        History {
            samples: Vec::with_capacity(required),
            required,
        }
    }

    pub(crate) fn required(&self) -> usize {
        self.required
    }

    /// Samples still needed before the history is primed.
    pub(crate) fn missing(&self) -> usize {
        self.required.saturating_sub(self.samples.len())
    }

    pub(crate) fn is_primed(&self) -> bool {
        self.missing() == 0
    }

    pub(crate) fn stage(&mut self, input: &[Sample]) {
        self.samples.extend_from_slice(input);
    }

    /// Iterates every complete window of `size` samples over the retained
    /// and staged samples, oldest first.
    ///
    /// `size` must be non-zero.
    pub(crate) fn windows(&self, size: usize) -> Windows<'_, Sample> {
        self.samples.windows(size)
    }

    /// Discards all but the latest `required` samples.
    pub(crate) fn retain_latest(&mut self) {
        let excess = self.samples.len().saturating_sub(self.required);
        self.samples.drain(..excess);
    }

    /// Changes the number of samples retained. Shrinking discards the oldest
    /// samples, growing leaves the history unprimed until more input arrives.
    pub(crate) fn set_required(&mut self, required: usize) {
        self.required = required;
        self.retain_latest();
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_primed() {
        let history = History::new(0);
        assert!(history.is_primed());
        assert_eq!(history.missing(), 0);
    }

    #[test]
    fn priming() {
        let mut history = History::new(3);
        assert_eq!(history.missing(), 3);

        history.stage(&[1.0, 2.0]);
        history.retain_latest();
        assert_eq!(history.missing(), 1);
        assert!(!history.is_primed());

        history.stage(&[3.0]);
        history.retain_latest();
        assert!(history.is_primed());
        assert_eq!(history.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn retain_keeps_latest_in_order() {
        let mut history = History::new(3);
        history.stage(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        history.retain_latest();
        assert_eq!(history.as_slice(), &[3.0, 4.0, 5.0]);

        history.stage(&[6.0]);
        history.retain_latest();
        assert_eq!(history.as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn staged_windows_bridge_history() {
        let mut history = History::new(2);
        history.stage(&[1.0, 2.0]);
        history.retain_latest();
        history.stage(&[3.0, 4.0]);

        let windows: Vec<&[Sample]> = history.windows(3).collect();
        let expected: Vec<&[Sample]> = vec![&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]];
        assert_eq!(windows, expected);
    }

    #[test]
    fn shrink_discards_oldest() {
        let mut history = History::new(4);
        history.stage(&[1.0, 2.0, 3.0, 4.0]);
        history.set_required(2);
        assert_eq!(history.required(), 2);
        assert_eq!(history.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn grow_requires_more_input() {
        let mut history = History::new(2);
        history.stage(&[1.0, 2.0]);
        history.set_required(5);
        assert_eq!(history.missing(), 3);
        assert_eq!(history.as_slice(), &[1.0, 2.0]);
    }
}
