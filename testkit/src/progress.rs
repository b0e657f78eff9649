//! Single-line loading bars.
//!
//! A bar is redrawn in place: every rendering starts with `\r` and ends
//! without a newline.
//!
//! ```text
//! Loading: [=====>    ]  50.0% (5/10)
//! ```

use std::fmt;
use std::io::Write;

use crate::error::TestkitError;

/// One frame of a loading bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingBar {
    /// Completion in `[0.0, 1.0]`; values outside are clamped when drawn.
    pub percent: f32,
    pub title: Option<String>,
    /// Total width of the `[...]` part including brackets; no bar below 3.
    pub bar_width: usize,
    /// `(finished, total)` task counts.
    pub counts: Option<(usize, usize)>,
}

impl LoadingBar {
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[must_use]
    pub fn with_counts(mut self, finished: usize, total: usize) -> Self {
        self.counts = Some((finished, total));
        self
    }

    fn clamped_percent(&self) -> f32 {
        if self.percent.is_nan() {
            0.0
        } else {
            self.percent.clamp(0.0, 1.0)
        }
    }
}

impl fmt::Display for LoadingBar {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = self.clamped_percent();
        f.write_str("\r")?;

        if let Some(title) = &self.title {
            write!(f, "{title}: ")?;
        }

        if self.bar_width > 2 {
            let inner = self.bar_width - 2;
            let cutoff = (inner as f32 * percent) as usize;
            f.write_str("[")?;
            for i in 0..inner {
                let symbol = match i.cmp(&cutoff) {
                    std::cmp::Ordering::Less => '=',
                    std::cmp::Ordering::Equal => '>',
                    std::cmp::Ordering::Greater => ' ',
                };
                write!(f, "{symbol}")?;
            }
            f.write_str("] ")?;
        }

        write!(f, "{:5.1}%", percent * 100.0)?;

        if let Some((finished, total)) = self.counts {
            write!(f, " ({finished}/{total})")?;
        }
        Ok(())
    }
}

/// Draws `bar` over the current terminal line and flushes.
///
/// # Errors
///
/// Returns `TestkitError::Io` if the writer fails.
pub fn write_loading_bar<W: Write>(out: &mut W, bar: &LoadingBar) -> Result<(), TestkitError> {
    write!(out, "{bar}")?;
    out.flush()?;
    Ok(())
}
