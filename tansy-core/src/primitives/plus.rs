// Addition: ( a b -- a+b ), element-wise over vectors.

use crate::interpreter::Interpreter;
use crate::primitives::broadcast;
use crate::value::RuntimeError;

pub fn add(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    broadcast::apply_binary(interp, broadcast::numeric("+", |a, b| a.checked_add(b)))
}
