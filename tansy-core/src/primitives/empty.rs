// EMPTY?: ( vec -- bool )

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn is_empty(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let empty = match interp.peek(0)? {
        Value::Vector(items) => items.is_empty(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "EMPTY? requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    interp.push(Value::Boolean(empty));
    Ok(())
}
