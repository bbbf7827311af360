//! Heuristic checks that reject an equation before it is evaluated.
//!
//! The three checks are independent and combined with OR. A pass means the
//! equation is not obviously invalid; the operator-sequence check misses some
//! multi-operator runs nested inside parenthesis groups.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    calculator::operator::{LEFT_PAREN, RIGHT_PAREN},
    error::{CalcError, CalcResult},
};

static DISALLOWED_CHARACTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^()\s0-9+\-*/.^]").expect("valid character pattern"));

/// Three or more operators in a row, a doubled `*`, `/` or `^`, or more than
/// one operator between `)` and `(`.
static EXCESS_OPERATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+\-*/]\s*){3,}|([*/^]\s*){2,}|\)\s*([+\-*/^]\s*[+\-*/^])\s*\(")
        .expect("valid operator sequence pattern")
});

/// Returns `true` when at least one check fails, i.e. the equation is invalid.
///
/// # Example
/// ```
/// use infixcalc::calculator::validator::validate;
///
/// assert!(!validate("5 + 2 * 3"));
/// assert!(validate("5 + a"));
/// assert!(validate("5 + + * 3"));
/// assert!(validate("( 1 + 2"));
/// ```
#[must_use]
pub fn validate(equation: &str) -> bool {
    check(equation).is_err()
}

/// Runs the character, operator-sequence and parenthesis checks in that order
/// and reports the first failure.
///
/// # Errors
/// - `InvalidCharacter` for anything but digits, `.`, parentheses, the five
///   operators and whitespace.
/// - `InvalidOperatorSequence` for an operator run the grammar cannot accept.
/// - `UnbalancedParentheses` when the counts of `(` and `)` differ.
pub fn check(equation: &str) -> CalcResult<()> {
    check_characters(equation).and_then(|()| check_operator_sequence(equation))
                              .and_then(|()| check_balanced_parentheses(equation))
                              .inspect_err(|e| debug!("rejected {equation:?}: {e}"))
}

fn check_characters(equation: &str) -> CalcResult<()> {
    match DISALLOWED_CHARACTER.find(equation)
                              .and_then(|m| m.as_str().chars().next())
    {
        Some(character) => Err(CalcError::InvalidCharacter { character,
                                                             equation: equation.to_string() }),
        None => Ok(()),
    }
}

fn check_operator_sequence(equation: &str) -> CalcResult<()> {
    match EXCESS_OPERATORS.find(equation) {
        Some(m) => Err(CalcError::InvalidOperatorSequence { sequence: m.as_str().trim().to_string(),
                                                            equation: equation.to_string() }),
        None => Ok(()),
    }
}

fn check_balanced_parentheses(equation: &str) -> CalcResult<()> {
    let open = equation.chars().filter(|&c| c == LEFT_PAREN).count();
    let close = equation.chars().filter(|&c| c == RIGHT_PAREN).count();

    if open == close {
        Ok(())
    } else {
        Err(CalcError::UnbalancedParentheses { details: format!("{open} '(' against {close} ')'") })
    }
}
