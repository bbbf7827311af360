//! The built-in regression table and the tolerance comparator used to check
//! it.
//!
//! The table collects equations pasted from spreadsheet applications, with
//! look-alike glyphs, signs glued to operators and mixed spacing, together with
//! their expected results.

use std::fmt;

use log::{debug, info};

use crate::{calculator::equation::Equation, error::CalcError};

/// Default multiple of `f64::EPSILON` allowed between expected and actual.
pub const DEFAULT_ERROR_FACTOR: f64 = 12.0;

/// `(equation, expected result)` pairs.
pub const CASES: [(&str, f64); 29] = [("8--7   +8++7", 30.0),
                                      ("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7", 26.828_571_428_571_4),
                                      ("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7+2^2", 30.828_571_428_571_4),
                                      ("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7*2^2", 25.114_285_714_285_7),
                                      ("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7/2^2", 27.257_142_857_142_9),
                                      ("(8−−7)+(9×+1)−−3.4−4÷7", 26.828_571_428_571_4),
                                      ("(8−−7)+(9×+1)−−3.4−4÷7+2^2", 30.828_571_428_571_4),
                                      ("(8−−7)+(9×+1)−−3.4−4÷7*2^2", 25.114_285_714_285_7),
                                      ("(8−−7)+(9×+1)−−3.4−4÷7/2^2", 27.257_142_857_142_9),
                                      ("(8.4 −+7.1)-(9.9× +1.0) −+3.4 + 4.6 ÷ 7.3", -11.369_863_013_698_6),
                                      ("(8+−7) + (9×-1) +−3.4 − 4 ÷ 7+2^2", -7.971_428_571_428_57),
                                      ("(8−−7) *(9×+1) * −3.4 − 4 ÷ 7*2^2", -461.285_714_285_714),
                                      ("(8−−7)/ (9×+1) /−3.4 − 4 ÷ 7/2^2", -0.633_053_221_288_515),
                                      ("-1+-1", -2.0),
                                      ("-1++1", 0.0),
                                      ("5+2*3", 11.0),
                                      ("5^2*3", 75.0),
                                      ("5/2*3", 7.5),
                                      ("2.3^2.2", 6.248_866_394_748_04),
                                      ("5÷2×3^3", 67.5),
                                      ("5÷(2×(3^3))", 0.092_592_592_592_592_6),
                                      ("1-2-3", -4.0),
                                      ("1+2+3", 6.0),
                                      ("(1+2)+3", 6.0),
                                      ("1+(2+3)", 6.0),
                                      ("1.1-2.2-3.3", -4.4),
                                      ("1.1+2.2+3.3", 6.6),
                                      ("(1.1+2.2)+3.3", 6.6),
                                      ("1.1+(2.2+3.3)", 6.6)];

/// Relative comparison: `a == b || |a - b| < |min(a, b)| * EPSILON * factor`.
///
/// # Example
/// ```
/// use infixcalc::regression::{DEFAULT_ERROR_FACTOR, approximately_equal};
///
/// assert!(approximately_equal(0.1 + 0.2, 0.3, DEFAULT_ERROR_FACTOR));
/// assert!(!approximately_equal(1.0, 1.001, DEFAULT_ERROR_FACTOR));
/// ```
#[must_use]
pub fn approximately_equal(a: f64, b: f64, error_factor: f64) -> bool {
    #[allow(clippy::float_cmp)]
    let exact = a == b;
    exact || (a - b).abs() < a.min(b).abs() * f64::EPSILON * error_factor
}

/// The first regression case that did not hold.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionFailure {
    /// The equation evaluated, but to the wrong value.
    Mismatch {
        /// The equation as written in the table.
        equation: String,
        /// The value from the table.
        expected: f64,
        /// The value the calculator produced.
        actual:   f64,
    },
    /// The equation failed to evaluate at all.
    Error {
        /// The equation as written in the table.
        equation: String,
        /// The value from the table.
        expected: f64,
        /// Why it failed.
        error:    CalcError,
    },
}

impl fmt::Display for RegressionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { equation,
                             expected,
                             actual, } => write!(f,
                                                 "Testing {equation} failed. Test result {actual:.17} not equal to expected result {expected:.17}. Difference is {:e}.",
                                                 (actual - expected).abs()),
            Self::Error { equation,
                          expected,
                          error, } => {
                write!(f, "Testing {equation} failed. Expected {expected} but got error: {error}")
            },
        }
    }
}

impl std::error::Error for RegressionFailure {}

/// Evaluates every entry of [`CASES`].
///
/// # Errors
/// The first case that fails to evaluate or differs from its expected value.
pub fn run(error_factor: f64) -> Result<usize, RegressionFailure> {
    run_cases(&CASES, error_factor)
}

/// Evaluates `cases` in order, stopping at the first failure.
///
/// # Returns
/// The number of cases that passed.
///
/// # Errors
/// The first case that fails to evaluate or differs from its expected value.
pub fn run_cases(cases: &[(&str, f64)], error_factor: f64) -> Result<usize, RegressionFailure> {
    for &(equation, expected) in cases {
        let actual = Equation::parse(equation).and_then(|e| e.solve())
                                              .map_err(|error| RegressionFailure::Error { equation:
                                                                                              equation.to_string(),
                                                                                          expected,
                                                                                          error })?;
        debug!("{equation} = {actual}");

        if !approximately_equal(expected, actual, error_factor) {
            return Err(RegressionFailure::Mismatch { equation: equation.to_string(),
                                                     expected,
                                                     actual });
        }
    }

    info!("{} regression cases passed", cases.len());
    Ok(cases.len())
}
