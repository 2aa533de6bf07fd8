// UNCONS: ( vec -- e vec' ). HEAD and TAIL in one move.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn uncons(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let (first, rest) = match interp.peek(0)? {
        Value::Vector(items) => match items.split_first() {
            Some((first, rest)) => (first.clone(), rest.to_vec()),
            None => return Err(RuntimeError::EmptyVector),
        },
        other => {
            return Err(RuntimeError::TypeError(format!(
                "UNCONS requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    interp.push(first);
    interp.push(Value::Vector(rest));
    Ok(())
}
