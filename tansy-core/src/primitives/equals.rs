// Structural equality: ( a b -- bool ). Unlike the ordering words this
// never iterates; two vectors compare as whole values.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn equal(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let b = interp.peek(0)?;
    let a = interp.peek(1)?;
    let result = Value::Boolean(a == b);
    interp.discard(2);
    interp.push(result);
    Ok(())
}
