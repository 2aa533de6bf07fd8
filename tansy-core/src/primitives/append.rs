// APPEND: ( vec e -- vec' ). Append, returning a fresh vector.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn append(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let element = interp.peek(0)?.clone();
    let mut items = match interp.peek(1)? {
        Value::Vector(items) => items.clone(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "APPEND requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    items.push(element);
    interp.discard(2);
    interp.push(Value::Vector(items));
    Ok(())
}
