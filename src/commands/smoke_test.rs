//! Error reporting smoke test
//!
//! Divides by zero on purpose, hands the error to the reporter, and carries on.

use colored::*;
use eyre::{Result, eyre};

use crate::config::Config;
use crate::telemetry::{ErrorReporter, TelemetryReporter};

pub fn run(config: &Config) -> Result<()> {
    let reporter = TelemetryReporter::new(config.telemetry.clone());
    let message = capture_division(&reporter);
    println!("{} Exception captured and sent: {}", "✓".green(), message);
    Ok(())
}

/// Checked division so a zero divisor is an error rather than a panic
fn divide(numerator: i64, denominator: i64) -> Result<i64> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| eyre!("attempted to divide by zero"))
}

/// Run the failing division and capture whatever goes wrong.
/// Returns the captured error message.
fn capture_division(reporter: &dyn ErrorReporter) -> String {
    match divide(1, 0) {
        Ok(value) => {
            log::warn!("Division unexpectedly succeeded with {}", value);
            value.to_string()
        }
        Err(e) => {
            reporter.capture(&e);
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        captured: RefCell<Vec<String>>,
    }

    impl ErrorReporter for Recorder {
        fn capture(&self, error: &eyre::Report) {
            self.captured.borrow_mut().push(error.to_string());
        }
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6, 3).unwrap(), 2);
        assert!(divide(1, 0).is_err());
    }

    #[test]
    fn test_capture_division_reports_once() {
        let recorder = Recorder::default();
        let message = capture_division(&recorder);

        assert_eq!(message, "attempted to divide by zero");
        assert_eq!(*recorder.captured.borrow(), vec!["attempted to divide by zero".to_string()]);
    }
}
