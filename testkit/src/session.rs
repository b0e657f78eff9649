use std::fmt;
use std::io::{self, Stdout, Write};

use log::{debug, warn};

use crate::colors::{CYAN, GREEN, RED, RESET};
use crate::error::TestkitError;

/// Outcome of one check, as built by the `check*!` macros
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub location: &'static str,
    pub name: Option<String>,
    pub passed: bool,
    /// What was compared, filled in only for failures.
    pub detail: String,
}

impl Check {
    /// Builds a check, calling `detail` only if it failed.
    pub fn new<F>(location: &'static str, name: Option<String>, passed: bool, detail: F) -> Self
    where
        F: FnOnce() -> String,
    {
        Self {
            location,
            name,
            passed,
            detail: if passed { String::new() } else { detail() },
        }
    }
}

/// Where a failed check was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub location: &'static str,
    pub name: Option<String>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.location, name),
            None => f.write_str(self.location),
        }
    }
}

/// Totals of a session at one point in time
///
/// `Display` renders the boxed report printed by
/// [`TestSession::write_summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
    pub failures: Vec<Failure>,
}

impl Summary {
    /// Share of passed checks in percent; 0 for an empty session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{CYAN}+--------------+")?;
        writeln!(f, "| TEST SUMMARY |")?;
        writeln!(f, "+--------------+")?;
        writeln!(
            f,
            "{GREEN}Passed {}/{} tests ({:.1}%){RESET}",
            self.passed,
            self.total,
            self.percentage()
        )?;
        if !self.failures.is_empty() {
            writeln!(f, "{RED}Failed tests:{RESET}")?;
            for failure in &self.failures {
                writeln!(f, "    {failure}")?;
            }
        }
        Ok(())
    }
}

/// Collects check results and reports them to a writer
///
/// Every recorded check prints one colored line (plus a detail line for
/// failures) unless the session is silent. The summary is always printed.
#[derive(Debug)]
pub struct TestSession<W: Write> {
    out: W,
    total: usize,
    passed: usize,
    failures: Vec<Failure>,
    silent: bool,
}

impl TestSession<Stdout> {
    /// A session reporting to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TestSession<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            total: 0,
            passed: 0,
            failures: Vec::new(),
            silent: false,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Turns per-check output off or back on. Counting is unaffected.
    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    /// Counts `check` and prints its line.
    ///
    /// Returns whether the check passed.
    ///
    /// # Errors
    ///
    /// Returns `TestkitError::Io` if writing the line fails. The check is
    /// counted either way.
    pub fn record(&mut self, check: Check) -> Result<bool, TestkitError> {
        self.total += 1;
        let label = match &check.name {
            Some(name) => format!("\"{name}\" "),
            None => String::new(),
        };

        if check.passed {
            self.passed += 1;
            debug!("testkit: check passed at {}", check.location);
            if !self.silent {
                writeln!(
                    self.out,
                    "{GREEN}test {label}passed @ {}{RESET}",
                    check.location
                )?;
            }
        } else {
            warn!("testkit: check failed at {}: {}", check.location, check.detail);
            self.failures.push(Failure {
                location: check.location,
                name: check.name.clone(),
            });
            if !self.silent {
                writeln!(
                    self.out,
                    "{RED}TEST {label}FAILED @ {}{RESET}",
                    check.location
                )?;
                writeln!(self.out, "\t{}", check.detail)?;
            }
        }
        Ok(check.passed)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.passed,
            total: self.total,
            failures: self.failures.clone(),
        }
    }

    /// Prints the boxed summary report, even when silent.
    ///
    /// # Errors
    ///
    /// Returns `TestkitError::Io` if the writer fails.
    pub fn write_summary(&mut self) -> Result<(), TestkitError> {
        let summary = self.summary();
        write!(self.out, "{summary}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns the writer, e.g. to inspect buffered output.
    pub fn into_inner(self) -> W {
        self.out
    }
}
