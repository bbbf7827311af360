use log::trace;

use crate::{
    calculator::{
        lexer::{Lexeme, Token},
        operator::{LEFT_PAREN, OPERATORS, OperatorTable},
    },
    error::{CalcError, CalcResult},
};

/// Stores the state of one shunting-yard evaluation.
///
/// ## Usage
///
/// An `Evaluator` is created per equation and consumed by
/// [`Evaluator::evaluate`], so its stacks can never be reused without being
/// rebuilt.
#[derive(Debug)]
pub struct Evaluator {
    /// Pending operators and `(` markers. Top is the last element.
    pub(super) operators: Vec<char>,
    /// Operands and partial results. Top is the last element.
    pub(super) values:    Vec<f64>,
    /// The operator functions and precedence ranks.
    pub(super) table:     &'static OperatorTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with empty stacks over the process-wide operator
    /// table.
    #[must_use]
    pub fn new() -> Self {
        Self { operators: Vec::new(),
               values:    Vec::new(),
               table:     &OPERATORS, }
    }

    /// Reduces a token source to a single value.
    ///
    /// Tokens are processed strictly left to right:
    /// - a number is pushed onto the value stack,
    /// - `(` is pushed onto the operator stack,
    /// - `)` reduces until the matching `(` and discards it,
    /// - an operator first reduces every stacked operator of equal or tighter
    ///   rank, then is pushed.
    ///
    /// At the end of input the remaining operators are reduced. Tokenizer
    /// errors in the source are propagated as they are reached.
    ///
    /// # Parameters
    /// - `tokens`: Any source of lexemes; the lazy tokenizer or a pre-tokenized
    ///   sequence wrapped in `Ok`.
    ///
    /// # Returns
    /// The single value left on the value stack.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` for a `)` with no open group, or a group that
    ///   is never closed.
    /// - `InsufficientOperands` when an operator is reduced with fewer than two
    ///   values, or when the value stack does not end with exactly one value.
    ///
    /// # Example
    /// ```
    /// use infixcalc::calculator::{evaluator::Evaluator, lexer::tokenize};
    ///
    /// let result = Evaluator::new().evaluate(tokenize("1 - 2 - 3")).unwrap();
    /// assert_eq!(result, -4.0);
    /// ```
    pub fn evaluate<'a, I>(mut self, tokens: I) -> CalcResult<f64>
        where I: IntoIterator<Item = CalcResult<Lexeme<'a>>>
    {
        for lexeme in tokens {
            let lexeme = lexeme?;
            trace!("token: {}", lexeme.text);

            match lexeme.token {
                Token::Number(value) => self.push_value(value),
                Token::LParen => self.push_operator(LEFT_PAREN),
                Token::RParen => self.close_group()?,
                Token::Operator(symbol) => self.push_binary(symbol)?,
            }
        }

        self.finish()
    }

    /// Reduces an already tokenized equation.
    ///
    /// # Errors
    /// See [`Evaluator::evaluate`].
    pub fn evaluate_tokens(self, tokens: &[Lexeme<'_>]) -> CalcResult<f64> {
        self.evaluate(tokens.iter().copied().map(Ok))
    }

    pub(super) fn push_value(&mut self, value: f64) {
        self.values.push(value);
        trace!("Pushing {value} onto value stack. Size = {}", self.values.len());
    }

    fn push_operator(&mut self, symbol: char) {
        self.operators.push(symbol);
        trace!("Pushing {symbol} onto operator stack. Size = {}",
               self.operators.len());
    }

    fn close_group(&mut self) -> CalcResult<()> {
        loop {
            match self.operators.pop() {
                Some(LEFT_PAREN) => return Ok(()),
                Some(symbol) => self.reduce(symbol)?,
                None => {
                    let details = "')' without a matching '('".to_string();
                    return Err(CalcError::UnbalancedParentheses { details });
                },
            }
        }
    }

    fn push_binary(&mut self, symbol: char) -> CalcResult<()> {
        let rank = self.table.precedence_of(symbol)?;

        while let Some(&top) = self.operators.last()
              && top != LEFT_PAREN
              && self.values.len() >= 2
              && self.table.precedence_of(top)? <= rank
        {
            self.operators.pop();
            self.reduce(top)?;
        }

        self.push_operator(symbol);
        Ok(())
    }

    fn finish(mut self) -> CalcResult<f64> {
        while let Some(symbol) = self.operators.pop() {
            if symbol == LEFT_PAREN {
                let details = "'(' is never closed".to_string();
                return Err(CalcError::UnbalancedParentheses { details });
            }
            self.reduce(symbol)?;
        }

        match self.values.as_slice() {
            [result] => Ok(*result),
            rest => Err(CalcError::InsufficientOperands { operator: None,
                                                          found:    rest.len(), }),
        }
    }
}
