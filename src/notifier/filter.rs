//! Per-axis change filtering of raw measurements.

use crate::watcher::Size;

/// Which dimensions are significant for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    /// Width changes trigger notifications.
    pub horizontal: bool,
    /// Height changes trigger notifications.
    pub vertical: bool,
}

impl AxisConfig {
    /// Creates an axis configuration.
    #[must_use]
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for AxisConfig {
    /// Both axes enabled.
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Last reported value per axis. `None` means nothing recorded yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LastMeasurement {
    /// Last recorded width.
    pub width: Option<f64>,
    /// Last recorded height.
    pub height: Option<f64>,
}

/// Outcome of feeding one measurement to a [`ChangeFilter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Dropped as the first measurement after a subscription.
    Suppressed,
    /// No enabled axis changed.
    Unchanged,
    /// At least one enabled axis changed; the full size should be reported.
    Changed(Size),
}

impl Decision {
    /// Returns the size to report, if any.
    #[must_use]
    pub const fn forwarded(self) -> Option<Size> {
        match self {
            Self::Changed(size) => Some(size),
            Self::Suppressed | Self::Unchanged => None,
        }
    }
}

/// Decides which raw measurements become notifications.
///
/// # Algorithm
///
/// 1. If a suppression is armed, consume it and drop the measurement
///    without touching the recorded values.
/// 2. For each enabled axis, compare against the recorded value and record
///    the new one if it differs (an unset value always differs).
/// 3. Report the whole `(width, height)` pair if any enabled axis changed.
///
/// A disabled axis is not recorded, so once re-enabled it is compared
/// against the value it held before. Recorded values survive [`Self::arm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeFilter {
    axes: AxisConfig,
    suppress_next: bool,
    last: LastMeasurement,
}

impl ChangeFilter {
    /// Creates a filter with nothing recorded and no suppression armed.
    #[must_use]
    pub const fn new(axes: AxisConfig) -> Self {
        Self {
            axes,
            suppress_next: false,
            last: LastMeasurement {
                width: None,
                height: None,
            },
        }
    }

    /// Prepares for a fresh subscription.
    ///
    /// Arms suppression of the next measurement when `report_initial` is
    /// false. Recorded values carry over from the previous target, so a new
    /// target with the same size as the old one is not reported.
    pub const fn arm(&mut self, report_initial: bool) {
        self.suppress_next = !report_initial;
    }

    /// Returns the axis configuration.
    #[must_use]
    pub const fn axes(&self) -> AxisConfig {
        self.axes
    }

    /// Replaces the axis configuration. Recorded values are kept.
    pub const fn set_axes(&mut self, axes: AxisConfig) {
        self.axes = axes;
    }

    /// Returns true if the next measurement will be dropped.
    #[must_use]
    pub const fn is_suppressing(&self) -> bool {
        self.suppress_next
    }

    /// Returns the recorded values.
    #[must_use]
    pub const fn last(&self) -> LastMeasurement {
        self.last
    }

    /// Feeds one raw measurement through the filter.
    pub fn accept(&mut self, size: Size) -> Decision {
        if self.suppress_next {
            self.suppress_next = false;
            return Decision::Suppressed;
        }

        let width_changed = record(self.axes.horizontal, &mut self.last.width, size.width);
        let height_changed = record(self.axes.vertical, &mut self.last.height, size.height);

        if width_changed || height_changed {
            Decision::Changed(size)
        } else {
            Decision::Unchanged
        }
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::new(AxisConfig::default())
    }
}

/// Records `value` for an enabled axis, returning true if it changed.
#[allow(clippy::float_cmp)]
fn record(enabled: bool, stored: &mut Option<f64>, value: f64) -> bool {
    if !enabled || *stored == Some(value) {
        return false;
    }
    *stored = Some(value);
    true
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
