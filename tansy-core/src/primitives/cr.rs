// CR: ( -- ). Writes a newline.

use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

pub fn cr(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.write_str("\n");
    Ok(())
}
