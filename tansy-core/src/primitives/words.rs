// WORDS: ( -- ). Writes every dictionary name, builtins included,
// sorted case-insensitively, one space apart.

use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

pub fn words(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let line = interp.dictionary.all_names().join(" ");
    interp.write_str(&line);
    interp.write_str("\n");
    Ok(())
}
