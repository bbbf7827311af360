/// Result formatting helpers.
///
/// This module renders `f64` results the way C's `%g` conversion does: a fixed
/// number of significant digits, switching to scientific notation for very
/// large or very small magnitudes, with trailing zeros removed.
pub mod format;
