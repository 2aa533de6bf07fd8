// REVERSE: ( vec -- vec' )

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn reverse(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let mut items = match interp.peek(0)? {
        Value::Vector(items) => items.clone(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "REVERSE requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    items.reverse();
    interp.discard(1);
    interp.push(Value::Vector(items));
    Ok(())
}
