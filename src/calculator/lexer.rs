use logos::Logos;

use crate::{
    calculator::operator::OPERATORS,
    error::{CalcError, CalcResult},
};

/// A classified fragment of a normalized equation.
///
/// The lexer runs once per whitespace-separated fragment and must consume the
/// whole fragment as exactly one token.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Signed or unsigned decimal literals such as `7`, `-7`, `+1.0`, `.5` or
    /// `3.`.
    #[regex(r"[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One of the symbols in the operator table: `+ - * / ^`.
    #[regex(r"[+\-*/^]", parse_operator)]
    Operator(char),
}

/// A token paired with the text it was read from.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Lexeme<'a> {
    /// The classified token.
    pub token: Token,
    /// The fragment of the normalized equation.
    pub text:  &'a str,
}

/// Splits a normalized equation on whitespace and classifies each fragment.
///
/// The returned iterator is lazy, so the evaluator can drive tokenization
/// inline. A fragment that is not a number, a parenthesis or an operator yields
/// `CalcError::UnrecognizedToken`.
///
/// # Example
/// ```
/// use infixcalc::calculator::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("( 8 - -7 )").map(|l| l.unwrap().token).collect();
/// assert_eq!(tokens,
///            [Token::LParen, Token::Number(8.0), Token::Operator('-'), Token::Number(-7.0),
///             Token::RParen]);
///
/// assert!(tokenize("1 + 2x").any(|l| l.is_err()));
/// ```
pub fn tokenize(equation: &str) -> impl Iterator<Item = CalcResult<Lexeme<'_>>> {
    equation.split_whitespace().map(classify)
}

/// Tokenizes the whole equation up front.
///
/// # Errors
/// The first `CalcError::UnrecognizedToken` encountered.
pub fn tokenize_all(equation: &str) -> CalcResult<Vec<Lexeme<'_>>> {
    tokenize(equation).collect()
}

fn classify(fragment: &str) -> CalcResult<Lexeme<'_>> {
    let mut lexer = Token::lexer(fragment);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => Ok(Lexeme { token,
                                               text: fragment }),
        _ => Err(CalcError::UnrecognizedToken { token: fragment.to_string() }),
    }
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, e.g. a bare sign.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Accepts the current slice only if the operator table knows the symbol.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next().filter(|&symbol| OPERATORS.contains(symbol))
}
