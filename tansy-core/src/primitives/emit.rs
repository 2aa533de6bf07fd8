// EMIT: ( n -- ). Writes the character with code point n.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn emit(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let code = match interp.peek(0)? {
        Value::Number(n) => n.to_integer().ok_or_else(|| {
            RuntimeError::TypeError("EMIT requires an integer code point".to_string())
        })?,
        other => {
            return Err(RuntimeError::TypeError(format!(
                "EMIT requires a number, got {}",
                other.type_name()
            )))
        }
    };
    let scalar = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            RuntimeError::TypeError(format!("EMIT: {} is not a Unicode scalar value", code))
        })?;

    interp.discard(1);
    let mut buf = [0u8; 4];
    interp.write_str(scalar.encode_utf8(&mut buf));
    Ok(())
}
