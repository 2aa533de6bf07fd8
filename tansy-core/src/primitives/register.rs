// The one-slot auxiliary register. >R refuses to overwrite an occupied
// register; R> empties it; R@ copies it.

use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

// >R: ( a -- )
pub fn to_register(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    if interp.register.is_some() {
        return Err(RuntimeError::RegisterOccupied);
    }
    let value = interp.pop()?;
    interp.register = Some(value);
    Ok(())
}

// R>: ( -- a )
pub fn from_register(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let value = interp.register.take().ok_or(RuntimeError::RegisterEmpty)?;
    interp.push(value);
    Ok(())
}

// R@: ( -- a )
pub fn fetch_register(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let value = interp.register.clone().ok_or(RuntimeError::RegisterEmpty)?;
    interp.push(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;
    use crate::value::Value;

    #[test]
    fn round_trip() {
        let mut interp = Interpreter::new();
        interp.push(Value::Number(Rational::integer(3)));
        to_register(&mut interp).unwrap();
        assert!(interp.get_stack().is_empty());

        fetch_register(&mut interp).unwrap();
        from_register(&mut interp).unwrap();
        assert_eq!(interp.get_stack().len(), 2);
        assert!(interp.get_register().is_none());
    }

    #[test]
    fn occupied_and_empty_errors() {
        let mut interp = Interpreter::new();
        assert_eq!(
            from_register(&mut interp).unwrap_err(),
            RuntimeError::RegisterEmpty
        );
        assert_eq!(
            fetch_register(&mut interp).unwrap_err(),
            RuntimeError::RegisterEmpty
        );

        interp.push(Value::Boolean(true));
        to_register(&mut interp).unwrap();
        interp.push(Value::Boolean(false));
        assert_eq!(
            to_register(&mut interp).unwrap_err(),
            RuntimeError::RegisterOccupied
        );
        // The refused >R popped nothing.
        assert_eq!(interp.get_stack(), &[Value::Boolean(false)]);
    }
}
