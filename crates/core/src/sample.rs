//! Output of a single CPU probe.

/// One utilization measurement, as handed from the sampler to the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilizationSample {
    /// `false` when CPU identity info could not be read.
    pub available: bool,
    /// Sum of the utilization percentages returned over the observation
    /// window. Only one aggregate value is requested, so this is nominally
    /// in `[0, 100]`.
    pub percent_used: f64,
}

impl UtilizationSample {
    pub fn new(available: bool, percent_used: f64) -> Self {
        Self {
            available,
            percent_used,
        }
    }
}
