// EACH: ( vec -- e0 .. en-1 ). Spreads a vector's elements onto the
// stack in order.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn each(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let items = match interp.peek(0)? {
        Value::Vector(items) => items.clone(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "EACH requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    for item in items {
        interp.push(item);
    }
    Ok(())
}
