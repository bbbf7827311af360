use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    calculator::{
        evaluator::Evaluator,
        lexer::{Lexeme, tokenize, tokenize_all},
        normalizer::normalize,
        validator,
    },
    error::{CalcError, CalcResult},
};

/// A normalized equation that has passed validation.
///
/// The only way to build one is [`Equation::parse`], which normalizes the raw
/// text and runs every validator check. Holding an `Equation` therefore means
/// the validation gate passed, and evaluation never runs on rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    raw:       String,
    canonical: String,
}

impl Equation {
    /// Normalizes and validates `raw`.
    ///
    /// # Errors
    /// `InvalidCharacter`, `InvalidOperatorSequence` or
    /// `UnbalancedParentheses` from the validator.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{calculator::equation::Equation, error::CalcError};
    ///
    /// let equation = Equation::parse("5÷2×3^3").unwrap();
    /// assert_eq!(equation.canonical(), "5 / 2 * 3 ^ 3");
    ///
    /// assert!(matches!(Equation::parse("(1+2"),
    ///                  Err(CalcError::UnbalancedParentheses { .. })));
    /// ```
    pub fn parse(raw: &str) -> CalcResult<Self> {
        let canonical = normalize(raw);
        validator::check(&canonical)?;
        debug!("canonical form of {raw:?}: {canonical}");

        Ok(Self { raw: raw.to_string(),
                  canonical })
    }

    /// The text as it was entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized, space-separated form.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Lazily tokenizes the canonical form.
    pub fn tokens(&self) -> impl Iterator<Item = CalcResult<Lexeme<'_>>> {
        tokenize(&self.canonical)
    }

    /// Evaluates the equation, tokenizing inline as the evaluator consumes
    /// tokens.
    ///
    /// # Errors
    /// Tokenizer and evaluator errors; see
    /// [`Evaluator::evaluate`](crate::calculator::evaluator::Evaluator::evaluate).
    pub fn solve(&self) -> CalcResult<f64> {
        Evaluator::new().evaluate(self.tokens())
    }

    /// Tokenizes the whole equation first, then evaluates the token list.
    ///
    /// Produces the same result as [`Equation::solve`]; an unrecognized token
    /// is reported before any reduction happens.
    ///
    /// # Errors
    /// Tokenizer and evaluator errors.
    pub fn solve_tokenized(&self) -> CalcResult<f64> {
        let tokens = tokenize_all(&self.canonical)?;
        Evaluator::new().evaluate_tokens(&tokens)
    }
}

impl FromStr for Equation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
