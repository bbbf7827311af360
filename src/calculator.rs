/// The validated equation type that ties the pipeline together.
///
/// An `Equation` can only be built by normalizing and validating raw text, so
/// evaluation is gated behind a passing validation by construction.
pub mod equation;
/// The shunting-yard evaluator.
///
/// Reduces a token sequence to one value with an operator stack and a value
/// stack that live for a single evaluation.
///
/// # Responsibilities
/// - Pushes numbers and `(` markers, reduces on `)` and on operators of equal
///   or tighter rank.
/// - Reports malformed token sequences such as missing operands.
pub mod evaluator;
/// The tokenizer.
///
/// Splits a normalized equation on whitespace and classifies each fragment as
/// a number, a parenthesis or an operator.
pub mod lexer;
/// Text canonicalization.
///
/// Substitutes look-alike glyphs and pads operators and parentheses with
/// single spaces.
pub mod normalizer;
/// The operator table.
///
/// The immutable mapping from operator symbol to binary function and
/// precedence rank, built once per process.
pub mod operator;
/// Pre-evaluation checks.
///
/// Rejects equations with foreign characters, impossible operator runs or
/// unbalanced parentheses.
pub mod validator;
