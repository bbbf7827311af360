/// The calculator error taxonomy.
///
/// Defines the single error type shared by every pipeline stage: validation
/// rejections, tokenizer failures and malformed token sequences found during
/// reduction. Floating-point special values are results, not errors, and have
/// no variant here.
pub mod calc_error;

pub use calc_error::{CalcError, CalcResult};
