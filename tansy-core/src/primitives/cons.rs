// CONS: ( e vec -- vec' ). Prepend, returning a fresh vector.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn cons(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let mut items = match interp.peek(0)? {
        Value::Vector(items) => items.clone(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "CONS requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    let element = interp.peek(1)?.clone();
    items.insert(0, element);
    interp.discard(2);
    interp.push(Value::Vector(items));
    Ok(())
}
