// TAIL: ( vec -- vec' ). Everything but the first element, as a fresh
// vector; EmptyVector when there is no first element.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn tail(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let rest = match interp.peek(0)? {
        Value::Vector(items) => match items.split_first() {
            Some((_, rest)) => rest.to_vec(),
            None => return Err(RuntimeError::EmptyVector),
        },
        other => {
            return Err(RuntimeError::TypeError(format!(
                "TAIL requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    interp.push(Value::Vector(rest));
    Ok(())
}
