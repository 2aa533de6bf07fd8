// HEAD: ( vec -- e ). The first element; EmptyVector when there is none.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn head(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let first = match interp.peek(0)? {
        Value::Vector(items) => items.first().cloned().ok_or(RuntimeError::EmptyVector)?,
        other => {
            return Err(RuntimeError::TypeError(format!(
                "HEAD requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    interp.push(first);
    Ok(())
}
