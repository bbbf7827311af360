use log::trace;

use crate::{
    calculator::evaluator::core::Evaluator,
    error::{CalcError, CalcResult},
};

impl Evaluator {
    /// Applies `operator` to the top two values.
    ///
    /// The right operand is popped first, then the left, so `-` and `/` keep
    /// their written order. The result is pushed back onto the value stack.
    /// Division by zero is not an error; it yields an infinity or NaN.
    ///
    /// # Parameters
    /// - `operator`: The operator already popped from the operator stack.
    ///
    /// # Errors
    /// - `InsufficientOperands` if fewer than two values are stacked.
    /// - `UnknownOperator` if `operator` is not in the table.
    pub(super) fn reduce(&mut self, operator: char) -> CalcResult<()> {
        let found = self.values.len();
        let (Some(right), Some(left)) = (self.values.pop(), self.values.pop()) else {
            return Err(CalcError::InsufficientOperands { operator: Some(operator),
                                                         found });
        };

        trace!("Reducing {left} {operator} {right}");
        let result = self.table.apply(operator, left, right)?;
        self.push_value(result);

        Ok(())
    }
}
