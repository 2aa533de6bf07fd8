// Stack shuffling words. Arity is checked before anything moves, so a
// failing word leaves the stack as it found it.

use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

// DUP: ( a -- a a )
pub fn dup(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let top = interp.peek(0)?.clone();
    interp.push(top);
    Ok(())
}

// DROP: ( a -- )
pub fn drop_top(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.pop().map(|_| ())
}

// SWAP: ( a b -- b a )
pub fn swap(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let len = interp.stack.len();
    if len < 2 {
        return Err(RuntimeError::StackUnderflow);
    }
    interp.stack.swap(len - 1, len - 2);
    Ok(())
}

// OVER: ( a b -- a b a )
pub fn over(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let second = interp.peek(1)?.clone();
    interp.push(second);
    Ok(())
}

// ROT: ( a b c -- b c a )
pub fn rot(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let len = interp.stack.len();
    if len < 3 {
        return Err(RuntimeError::StackUnderflow);
    }
    let third = interp.stack.remove(len - 3);
    interp.stack.push(third);
    Ok(())
}

// NIP: ( a b -- b )
pub fn nip(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let len = interp.stack.len();
    if len < 2 {
        return Err(RuntimeError::StackUnderflow);
    }
    interp.stack.remove(len - 2);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;
    use crate::value::Value;

    fn loaded(values: &[i64]) -> Interpreter {
        let mut interp = Interpreter::new();
        for &n in values {
            interp.push(Value::Number(Rational::integer(n)));
        }
        interp
    }

    fn numbers(interp: &Interpreter) -> Vec<i64> {
        interp
            .get_stack()
            .iter()
            .map(|v| match v {
                Value::Number(n) => n.numerator(),
                other => panic!("expected number, got {}", other),
            })
            .collect()
    }

    #[test]
    fn shuffles() {
        let mut interp = loaded(&[1, 2]);
        dup(&mut interp).unwrap();
        assert_eq!(numbers(&interp), vec![1, 2, 2]);

        let mut interp = loaded(&[1, 2]);
        swap(&mut interp).unwrap();
        assert_eq!(numbers(&interp), vec![2, 1]);

        let mut interp = loaded(&[1, 2]);
        over(&mut interp).unwrap();
        assert_eq!(numbers(&interp), vec![1, 2, 1]);

        let mut interp = loaded(&[1, 2, 3]);
        rot(&mut interp).unwrap();
        assert_eq!(numbers(&interp), vec![2, 3, 1]);

        let mut interp = loaded(&[1, 2]);
        nip(&mut interp).unwrap();
        assert_eq!(numbers(&interp), vec![2]);

        let mut interp = loaded(&[1]);
        drop_top(&mut interp).unwrap();
        assert!(interp.get_stack().is_empty());
    }

    #[test]
    fn underflow_leaves_stack_alone() {
        let mut interp = loaded(&[1, 2]);
        assert_eq!(rot(&mut interp).unwrap_err(), RuntimeError::StackUnderflow);
        assert_eq!(numbers(&interp), vec![1, 2]);

        let mut interp = loaded(&[1]);
        assert_eq!(swap(&mut interp).unwrap_err(), RuntimeError::StackUnderflow);
        assert_eq!(numbers(&interp), vec![1]);
    }
}
