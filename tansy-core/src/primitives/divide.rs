// Division: ( a b -- a/b ), element-wise over vectors. Exact rational
// division; a zero divisor is DivisionByZero.

use crate::interpreter::Interpreter;
use crate::primitives::broadcast;
use crate::value::RuntimeError;

pub fn div(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    broadcast::apply_binary(interp, broadcast::numeric("/", |a, b| a.checked_div(b)))
}
