// Greater than: ( a b -- bool ), element-wise over vectors.

use crate::interpreter::Interpreter;
use crate::primitives::broadcast;
use crate::value::RuntimeError;

pub fn greater_than(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    broadcast::apply_binary(interp, broadcast::comparison(">", |a, b| a > b))
}
