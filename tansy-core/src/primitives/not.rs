// Boolean negation: ( bool -- bool ), element-wise over vectors of
// booleans at any nesting depth.

use crate::interpreter::Interpreter;
use crate::primitives::broadcast;
use crate::value::{RuntimeError, Value};

pub fn not(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    broadcast::apply_unary(interp, |value| match value {
        Value::Boolean(b) => Ok(Value::Boolean(!b)),
        other => Err(RuntimeError::TypeError(format!(
            "NOT requires a boolean, got {}",
            other.type_name()
        ))),
    })
}
