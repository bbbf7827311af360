/// The evaluation context and the token-driven state machine.
///
/// Owns the operator and value stacks for exactly one evaluation and walks the
/// token source left to right.
pub mod core;

/// The reduction step.
///
/// Pops an operator and two operands, applies the operator and pushes the
/// result.
pub mod reduce;

pub use self::core::Evaluator;
