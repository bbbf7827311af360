/// Result type used throughout the calculator pipeline.
///
/// Every stage returns either a value of type `T` or a `CalcError` naming the
/// gate that rejected the equation.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while normalizing, validating,
/// tokenizing or evaluating an equation.
pub enum CalcError {
    /// The equation contains a character outside the allowed set.
    InvalidCharacter {
        /// The first offending character.
        character: char,
        /// The equation as seen by the validator.
        equation:  String,
    },
    /// The equation contains an obviously invalid run of operators.
    InvalidOperatorSequence {
        /// The matched operator run.
        sequence: String,
        /// The equation as seen by the validator.
        equation: String,
    },
    /// Parentheses do not pair up.
    UnbalancedParentheses {
        /// Details describing the mismatch.
        details: String,
    },
    /// The token sequence does not pair values with operators: an operator
    /// was reduced with fewer than two values, or the final reduction did not
    /// leave exactly one value (`1 2`, `( )`).
    InsufficientOperands {
        /// The operator being reduced, or `None` after the final reduction.
        operator: Option<char>,
        /// How many values were on the stack.
        found:    usize,
    },
    /// A whitespace-separated fragment is not a number, parenthesis or
    /// operator.
    UnrecognizedToken {
        /// The fragment that could not be classified.
        token: String,
    },
    /// An operator symbol that is not in the operator table.
    UnknownOperator {
        /// The symbol that was looked up.
        symbol: char,
    },
}

impl CalcError {
    /// Returns the variant name, used by equation fixture files to name the
    /// expected failure.
    ///
    /// # Example
    /// ```
    /// use infixcalc::error::CalcError;
    ///
    /// let err = CalcError::UnknownOperator { symbol: '%' };
    /// assert_eq!(err.name(), "UnknownOperator");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "InvalidCharacter",
            Self::InvalidOperatorSequence { .. } => "InvalidOperatorSequence",
            Self::UnbalancedParentheses { .. } => "UnbalancedParentheses",
            Self::InsufficientOperands { .. } => "InsufficientOperands",
            Self::UnrecognizedToken { .. } => "UnrecognizedToken",
            Self::UnknownOperator { .. } => "UnknownOperator",
        }
    }

    /// Whether the error was raised by the validator, before any evaluation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self,
                 Self::InvalidCharacter { .. }
                 | Self::InvalidOperatorSequence { .. }
                 | Self::UnbalancedParentheses { .. })
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, equation } => {
                write!(f, "Invalid character '{character}' in: {equation}")
            },
            Self::InvalidOperatorSequence { sequence, equation } => {
                write!(f, "Invalid sequence of operators '{sequence}' in: {equation}")
            },
            Self::UnbalancedParentheses { details } => {
                write!(f, "Unbalanced parentheses: {details}.")
            },
            Self::InsufficientOperands { operator: Some(operator),
                                         found, } => {
                write!(f,
                       "Equation lacks sufficient values: '{operator}' needs 2 but found {found}.")
            },
            Self::InsufficientOperands { operator: None, found } => {
                write!(f, "Equation does not reduce to a single value: found {found}.")
            },
            Self::UnrecognizedToken { token } => write!(f, "Unrecognized token: {token}."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
        }
    }
}

impl std::error::Error for CalcError {}
