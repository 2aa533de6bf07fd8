// NTH: ( n vec -- e ). Zero-based indexing; negative indexes count from
// the end.

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub fn nth(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let items = match interp.peek(0)? {
        Value::Vector(items) => items,
        other => {
            return Err(RuntimeError::TypeError(format!(
                "NTH requires a vector, got {}",
                other.type_name()
            )))
        }
    };
    let index = match interp.peek(1)? {
        Value::Number(n) => n
            .to_integer()
            .ok_or_else(|| RuntimeError::TypeError("NTH requires an integer index".to_string()))?,
        other => {
            return Err(RuntimeError::TypeError(format!(
                "NTH requires a number index, got {}",
                other.type_name()
            )))
        }
    };

    let len = items.len() as i64;
    let resolved = if index < 0 { index + len } else { index };
    if resolved < 0 || resolved >= len {
        return Err(RuntimeError::IndexOutOfRange);
    }
    let element = items[resolved as usize].clone();

    interp.discard(2);
    interp.push(element);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;
    use crate::rational::Rational;

    fn run(source: &str) -> Result<Interpreter, RuntimeError> {
        let mut interp = Interpreter::new();
        interp.execute(source)?;
        Ok(interp)
    }

    #[test]
    fn positive_and_negative_indexes() {
        let interp = run("0 [ 10 20 30 ] NTH").unwrap();
        assert_eq!(interp.get_stack(), &[Value::Number(Rational::integer(10))]);

        let interp = run("-1 [ 10 20 30 ] NTH").unwrap();
        assert_eq!(interp.get_stack(), &[Value::Number(Rational::integer(30))]);
    }

    #[test]
    fn out_of_range_and_fractional_indexes() {
        assert_eq!(
            run("3 [ 10 20 30 ] NTH").unwrap_err(),
            RuntimeError::IndexOutOfRange
        );
        assert_eq!(
            run("-4 [ 10 20 30 ] NTH").unwrap_err(),
            RuntimeError::IndexOutOfRange
        );
        assert!(matches!(
            run("1/2 [ 10 20 30 ] NTH").unwrap_err(),
            RuntimeError::TypeError(_)
        ));
    }
}
