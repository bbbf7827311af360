use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{CalcError, CalcResult};

/// A binary arithmetic function: `(left, right) -> result`.
pub type BinaryOp = fn(f64, f64) -> f64;

/// Precedence rank. Lower ranks bind at least as tightly as higher ones.
pub type Precedence = u8;

/// Marker pushed onto the operator stack for an open group.
pub const LEFT_PAREN: char = '(';
/// Closes the innermost open group.
pub const RIGHT_PAREN: char = ')';
/// Parentheses share the tightest tier with `^`.
pub const PAREN_PRECEDENCE: Precedence = 1;

/// The process-wide operator table. Built on first use, read-only afterwards.
pub static OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::new);

/// PEMDAS tiers.
/// 1. Parentheses, exponents
/// 2. Multiplication, division
/// 3. Addition, subtraction
const ENTRIES: [(char, BinaryOp, Precedence); 5] = [('^', exponent, 1),
                                                    ('*', multiply, 2),
                                                    ('/', divide, 2),
                                                    ('+', plus, 3),
                                                    ('-', minus, 3)];

fn plus(x: f64, y: f64) -> f64 {
    x + y
}

fn minus(x: f64, y: f64) -> f64 {
    x - y
}

fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

fn divide(x: f64, y: f64) -> f64 {
    x / y
}

fn exponent(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Maps each operator symbol to its function and to its precedence rank.
///
/// Both maps are filled from the same entry list, so every symbol with a
/// function also has a rank and vice versa.
#[derive(Debug)]
pub struct OperatorTable {
    functions:  HashMap<char, BinaryOp>,
    precedence: HashMap<char, Precedence>,
}

impl OperatorTable {
    fn new() -> Self {
        Self { functions:  ENTRIES.iter().map(|&(symbol, f, _)| (symbol, f)).collect(),
               precedence: ENTRIES.iter()
                                  .map(|&(symbol, _, rank)| (symbol, rank))
                                  .collect(), }
    }

    /// Returns the binary function bound to `symbol`.
    ///
    /// # Errors
    /// `CalcError::UnknownOperator` if `symbol` is not one of `+ - * / ^`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::calculator::operator::OPERATORS;
    ///
    /// let minus = OPERATORS.function_of('-').unwrap();
    /// assert_eq!(minus(7.0, 2.0), 5.0);
    /// assert!(OPERATORS.function_of('%').is_err());
    /// ```
    pub fn function_of(&self, symbol: char) -> CalcResult<BinaryOp> {
        self.functions
            .get(&symbol)
            .copied()
            .ok_or(CalcError::UnknownOperator { symbol })
    }

    /// Returns the precedence rank of `symbol`.
    ///
    /// # Errors
    /// `CalcError::UnknownOperator` if `symbol` is not one of `+ - * / ^`.
    pub fn precedence_of(&self, symbol: char) -> CalcResult<Precedence> {
        self.precedence
            .get(&symbol)
            .copied()
            .ok_or(CalcError::UnknownOperator { symbol })
    }

    /// Whether `symbol` is a known operator.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.functions.contains_key(&symbol)
    }

    /// All operator symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.functions.keys().copied()
    }

    /// Applies `symbol` to `left` and `right`.
    ///
    /// # Errors
    /// `CalcError::UnknownOperator` if `symbol` is not in the table.
    pub fn apply(&self, symbol: char, left: f64, right: f64) -> CalcResult<f64> {
        Ok(self.function_of(symbol)?(left, right))
    }
}
