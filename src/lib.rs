//! # infixcalc
//!
//! infixcalc evaluates arithmetic equations written in infix notation, the way
//! people type them or paste them from spreadsheet applications. Look-alike
//! glyphs for minus, divide and multiply are accepted, signs glued to
//! operators are told apart, and the result honors the usual order of
//! operations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{calculator::equation::Equation, error::CalcResult};

/// The normalize → validate → tokenize → evaluate pipeline.
///
/// This module holds every stage of turning raw text into a number: the
/// operator table, the normalizer, the validator, the tokenizer and the
/// shunting-yard evaluator, plus the `Equation` type that gates evaluation
/// behind validation.
///
/// # Responsibilities
/// - Canonicalizes pasted text into space-separated tokens.
/// - Rejects equations with foreign characters, impossible operator runs or
///   unbalanced parentheses before evaluation.
/// - Reduces tokens to a value with an operator stack and a value stack.
pub mod calculator;
/// Provides the unified error type for every pipeline stage.
///
/// This module defines all errors that can be raised while validating,
/// tokenizing or evaluating an equation, so callers branch on one enum instead
/// of per-stage types.
///
/// # Responsibilities
/// - Defines the `CalcError` enum and the `CalcResult` alias.
/// - Carries the offending character, token or operator for reporting.
pub mod error;
/// The built-in regression table.
///
/// Holds literal equations with their expected results and the relative
/// tolerance comparator used to check them.
pub mod regression;
/// The interactive read-evaluate-print loop.
///
/// Reads one equation per line, prints the canonical form with its formatted
/// result, and stops at a blank line or the end of input.
pub mod repl;
/// General utilities.
///
/// Currently holds result formatting in the style of C's `%g`.
pub mod util;

/// Returns the value of `source`.
///
/// The equation is normalized, validated, tokenized and evaluated. A fresh
/// evaluation context is used for every call.
///
/// # Errors
/// Returns an error if validation, tokenization or evaluation fails.
///
/// # Examples
/// ```
/// use infixcalc::{error::CalcError, evaluate};
///
/// assert_eq!(evaluate("5+2*3").unwrap(), 11.0);
/// assert_eq!(evaluate("-1+-1").unwrap(), -2.0);
///
/// // Letters are not part of the grammar.
/// assert!(matches!(evaluate("5+a"), Err(CalcError::InvalidCharacter { character: 'a', .. })));
/// ```
pub fn evaluate(source: &str) -> CalcResult<f64> {
    Equation::parse(source)?.solve()
}
