// `.` pops and writes the top value; PRINT writes it without popping.
// Strings lose their quotes when printed, unlike stack inspection.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

fn printable(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// .: ( a -- )
pub fn dot(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let text = printable(interp.peek(0)?);
    interp.discard(1);
    interp.write_str(&text);
    Ok(())
}

// PRINT: ( a -- a )
pub fn print(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let text = printable(interp.peek(0)?);
    interp.write_str(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_pops_and_strips_string_quotes() {
        let mut interp = Interpreter::new();
        interp.execute("\"hi\" . 42 .").unwrap();
        assert_eq!(interp.output(), "hi42");
        assert!(interp.get_stack().is_empty());
    }

    #[test]
    fn print_keeps_the_value() {
        let mut interp = Interpreter::new();
        interp.execute("[ 1 2 ] PRINT").unwrap();
        assert_eq!(interp.output(), "[ 1 2 ]");
        assert_eq!(interp.get_stack().len(), 1);
    }
}
