//! Rewrites pasted or typed text into the canonical, space-separated form the
//! tokenizer splits on.
//!
//! Spreadsheet applications paste look-alike glyphs for minus, divide and
//! multiply. Those are replaced first; signs are then separated from the
//! operators they follow, and finally every operator and parenthesis is padded
//! with single spaces.

use std::borrow::Cow;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// U+2212 MINUS SIGN.
pub const LOOKS_LIKE_MINUS: char = '\u{2212}';
/// U+00F7 DIVISION SIGN.
pub const DIVISION_SIGN: char = '\u{00F7}';
/// U+00D7 MULTIPLICATION SIGN.
pub const MULTIPLICATION_SIGN: char = '\u{00D7}';

/// An operator immediately followed by a signed number: `+-7`, `*-1`, `^+.5`.
static OPERATOR_SIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+\-*/^])([+-](?:[0-9]+\.?[0-9]*|\.[0-9]+))")
        .expect("valid operator/sign pattern")
});

/// An operand ending (digit, decimal point or `)`), optional blanks, then an
/// operator.
static DIGIT_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9.)])\s*([+\-*/^])").expect("valid digit/operator pattern"));

/// `*`, `/` and `^` are never signs, so they are padded wherever they appear.
static MULTIPLICATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([*/^])\s*").expect("valid multiplicative pattern"));

static PARENTHESES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([()])").expect("valid parenthesis pattern"));

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Returns the canonical form of `equation`.
///
/// Steps, in order:
/// 1. `−` becomes `-`, `÷` becomes `/`, `×` becomes `*`.
/// 2. A sign directly after an operator stays on its number, so `+-7` turns
///    into an operator and a signed operand.
/// 3. Operators following an operand are padded on both sides, as are `*`,
///    `/` and `^` anywhere.
/// 4. Parentheses are padded on both sides.
/// 5. Whitespace runs collapse to one space and the ends are trimmed.
///
/// The output is a fixed point: normalizing it again returns it unchanged.
///
/// # Example
/// ```
/// use infixcalc::calculator::normalizer::normalize;
///
/// assert_eq!(normalize("-1+-1"), "-1 + -1");
/// assert_eq!(normalize("(8−−7)+(9×+1)"), "( 8 - -7 ) + ( 9 * +1 )");
/// assert_eq!(normalize(&normalize("5÷2×3^3")), "5 / 2 * 3 ^ 3");
/// ```
#[must_use]
pub fn normalize(equation: &str) -> String {
    let substituted = substitute_glyphs(equation);
    let signed = pad_operators(&substituted);
    let padded = pad_parentheses(&signed);
    let canonical = condense_spaces(&padded);
    trace!("normalized {equation:?} to {canonical:?}");
    canonical
}

/// Replaces the three look-alike glyphs with their ASCII operators.
#[must_use]
pub fn substitute_glyphs(equation: &str) -> String {
    equation.chars()
            .map(|c| match c {
                LOOKS_LIKE_MINUS => '-',
                DIVISION_SIGN => '/',
                MULTIPLICATION_SIGN => '*',
                other => other,
            })
            .collect()
}

/// Makes operators distinct from signs. `-1+-1` becomes `-1 + -1`.
fn pad_operators(equation: &str) -> String {
    let signed = OPERATOR_SIGN.replace_all(equation, "${1} ${2}");
    let padded = DIGIT_OPERATOR.replace_all(&signed, "${1} ${2} ");
    MULTIPLICATIVE.replace_all(&padded, " ${1} ").into_owned()
}

fn pad_parentheses(equation: &str) -> Cow<'_, str> {
    PARENTHESES.replace_all(equation, " ${1} ")
}

fn condense_spaces(equation: &str) -> String {
    SPACES.replace_all(equation, " ").trim().to_string()
}
