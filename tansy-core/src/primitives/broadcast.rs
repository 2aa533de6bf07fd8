//! Element-wise application of scalar operators over vectors.
//!
//! Scalar ⊕ scalar applies directly. With exactly one vector operand the
//! scalar is broadcast across it, staying on its side of the operator.
//! Two vectors must have equal length and combine pairwise; unequal
//! lengths are a `LengthMismatch`. The rule applies recursively through
//! nested vectors.

use crate::interpreter::Interpreter;
use crate::rational::Rational;
use crate::value::{RuntimeError, Value};

pub(crate) fn binary(
    a: &Value,
    b: &Value,
    op: &impl Fn(&Value, &Value) -> Result<Value, RuntimeError>,
) -> Result<Value, RuntimeError> {
    match (a, b) {
        (Value::Vector(xs), Value::Vector(ys)) => {
            if xs.len() != ys.len() {
                return Err(RuntimeError::LengthMismatch);
            }
            xs.iter()
                .zip(ys)
                .map(|(x, y)| binary(x, y, op))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Vector)
        }
        (Value::Vector(xs), _) => xs
            .iter()
            .map(|x| binary(x, b, op))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Vector),
        (_, Value::Vector(ys)) => ys
            .iter()
            .map(|y| binary(a, y, op))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Vector),
        _ => op(a, b),
    }
}

pub(crate) fn unary(
    a: &Value,
    op: &impl Fn(&Value) -> Result<Value, RuntimeError>,
) -> Result<Value, RuntimeError> {
    match a {
        Value::Vector(items) => items
            .iter()
            .map(|item| unary(item, op))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Vector),
        _ => op(a),
    }
}

/// Pops two operands, applies `op` through the broadcast rule, pushes the
/// result. The operands are only borrowed until the whole result exists,
/// so a failure leaves the stack untouched.
pub(crate) fn apply_binary(
    interp: &mut Interpreter,
    op: impl Fn(&Value, &Value) -> Result<Value, RuntimeError>,
) -> Result<(), RuntimeError> {
    let b = interp.peek(0)?;
    let a = interp.peek(1)?;
    let result = binary(a, b, &op)?;
    interp.discard(2);
    interp.push(result);
    Ok(())
}

pub(crate) fn apply_unary(
    interp: &mut Interpreter,
    op: impl Fn(&Value) -> Result<Value, RuntimeError>,
) -> Result<(), RuntimeError> {
    let a = interp.peek(0)?;
    let result = unary(a, &op)?;
    interp.discard(1);
    interp.push(result);
    Ok(())
}

/// Scalar rule for the arithmetic words: both leaves must be numbers.
pub(crate) fn numeric(
    name: &'static str,
    f: impl Fn(&Rational, &Rational) -> Result<Rational, RuntimeError>,
) -> impl Fn(&Value, &Value) -> Result<Value, RuntimeError> {
    move |a, b| match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(f(x, y)?)),
        (Value::Number(_), other) | (other, _) => Err(RuntimeError::TypeError(format!(
            "{} requires numbers, got {}",
            name,
            other.type_name()
        ))),
    }
}

/// Scalar rule for the comparison words.
pub(crate) fn comparison(
    name: &'static str,
    f: impl Fn(&Rational, &Rational) -> bool,
) -> impl Fn(&Value, &Value) -> Result<Value, RuntimeError> {
    move |a, b| match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Boolean(f(x, y))),
        (Value::Number(_), other) | (other, _) => Err(RuntimeError::TypeError(format!(
            "{} requires numbers, got {}",
            name,
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Number(Rational::integer(n))
    }

    fn add(a: &Value, b: &Value) -> Result<Value, RuntimeError> {
        numeric("+", |x, y| x.checked_add(y))(a, b)
    }

    #[test]
    fn scalar_scalar() {
        assert_eq!(binary(&int(2), &int(3), &add).unwrap(), int(5));
    }

    #[test]
    fn scalar_broadcasts_on_either_side() {
        let vec = Value::Vector(vec![int(1), int(2)]);
        assert_eq!(
            binary(&int(10), &vec, &add).unwrap(),
            Value::Vector(vec![int(11), int(12)])
        );
        assert_eq!(
            binary(&vec, &int(10), &add).unwrap(),
            Value::Vector(vec![int(11), int(12)])
        );
    }

    #[test]
    fn broadcast_recurses_into_nesting() {
        let nested = Value::Vector(vec![Value::Vector(vec![int(1)]), Value::Vector(vec![int(2)])]);
        assert_eq!(
            binary(&nested, &int(1), &add).unwrap(),
            Value::Vector(vec![
                Value::Vector(vec![int(2)]),
                Value::Vector(vec![int(3)]),
            ])
        );
    }

    #[test]
    fn unequal_lengths_fail_at_any_depth() {
        let a = Value::Vector(vec![int(1), int(2)]);
        let b = Value::Vector(vec![int(1)]);
        assert_eq!(binary(&a, &b, &add).unwrap_err(), RuntimeError::LengthMismatch);

        let a = Value::Vector(vec![Value::Vector(vec![int(1), int(2)])]);
        let b = Value::Vector(vec![Value::Vector(vec![int(1)])]);
        assert_eq!(binary(&a, &b, &add).unwrap_err(), RuntimeError::LengthMismatch);
    }

    #[test]
    fn leaf_type_errors_propagate() {
        let vec = Value::Vector(vec![int(1), Value::Boolean(true)]);
        assert!(matches!(
            binary(&vec, &int(1), &add).unwrap_err(),
            RuntimeError::TypeError(_)
        ));
    }
}
