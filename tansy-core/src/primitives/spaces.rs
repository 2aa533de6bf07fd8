// SPACES: ( n -- ). Writes n spaces; a negative n writes none.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn spaces(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let count = match interp.peek(0)? {
        Value::Number(n) => n.to_integer().ok_or_else(|| {
            RuntimeError::TypeError("SPACES requires an integer count".to_string())
        })?,
        other => {
            return Err(RuntimeError::TypeError(format!(
                "SPACES requires a number, got {}",
                other.type_name()
            )))
        }
    };
    interp.discard(1);
    if count > 0 {
        interp.write_str(&" ".repeat(count as usize));
    }
    Ok(())
}
