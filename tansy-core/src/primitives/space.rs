// SPACE: ( -- ). Writes a single space.

use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

pub fn space(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.write_str(" ");
    Ok(())
}
