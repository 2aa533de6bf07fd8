// LENGTH: ( vec -- n )

use crate::interpreter::Interpreter;
use crate::rational::Rational;
use crate::value::{RuntimeError, Value};

pub fn length(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let len = match interp.peek(0)? {
        Value::Vector(items) => items.len(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "LENGTH requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    interp.push(Value::Number(Rational::integer(len as i64)));
    Ok(())
}
