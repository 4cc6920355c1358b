//! Arithmetic operations: +, -, *, /, modulo, expt, log, sqrt, floor, min, max
//!
//! - `+`: sum of all arguments (identity: 0)
//! - `-`: first argument minus the sum of the rest (identity for the rest: 0)
//! - `*`: product of all arguments (identity: 1)
//! - `/`: first argument divided by the product of the rest (identity for the rest: 1)
//! - `modulo`, `expt`, `log`, `sqrt`, `floor`: exactly the arities their names imply
//! - `min`, `max`: fold over one or more numbers

use crate::env::Environment;
use crate::error::{EvalError, ARITY_AT_LEAST_ONE, ARITY_ONE, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

fn as_number(v: &Value, function: &str, position: usize) -> Result<f64, EvalError> {
    match v {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::type_mismatch(
            function,
            "number",
            other.type_name(),
            position,
        )),
    }
}

fn numbers(function: &str, args: &[Value]) -> Result<Vec<f64>, EvalError> {
    args.iter()
        .enumerate()
        .map(|(i, v)| as_number(v, function, i))
        .collect()
}

/// Sums all arguments; zero arguments yields `0`.
pub fn builtin_add(args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::Number(numbers("+", args)?.into_iter().sum()))
}

/// Subtracts the sum of every argument after the first from the first.
///
/// # Examples
///
/// ```lisp
/// (- 10 3 2) => 5
/// (- 5) => 5
/// ```
pub fn builtin_sub(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("-", ARITY_AT_LEAST_ONE, 0));
    }
    let nums = numbers("-", args)?;
    let rest: f64 = nums[1..].iter().sum();
    Ok(Value::Number(nums[0] - rest))
}

/// Multiplies all arguments; zero arguments yields `1`.
pub fn builtin_mul(args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::Number(numbers("*", args)?.into_iter().product()))
}

/// Divides the first argument by the product of every argument after it.
///
/// # Examples
///
/// ```lisp
/// (/ 20 4) => 5
/// (/ 100 2 5) => 10
/// ```
pub fn builtin_div(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("/", ARITY_AT_LEAST_ONE, 0));
    }
    let nums = numbers("/", args)?;
    let divisor: f64 = nums[1..].iter().product();
    if divisor == 0.0 {
        return Err(EvalError::arith("/: division by zero"));
    }
    Ok(Value::Number(nums[0] / divisor))
}

/// Floating-point `a mod b`, with the result's sign following the divisor.
///
/// # Examples
///
/// ```lisp
/// (modulo 10 3) => 1
/// (modulo -1 3) => 2
/// ```
pub fn builtin_modulo(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("modulo", ARITY_TWO, args.len()));
    }
    let a = as_number(&args[0], "modulo", 0)?;
    let b = as_number(&args[1], "modulo", 1)?;
    if b == 0.0 {
        return Err(EvalError::arith("modulo: division by zero"));
    }
    Ok(Value::Number(a - b * (a / b).floor()))
}

/// Raises the first argument to the power of the second.
///
/// # Examples
///
/// ```lisp
/// (expt 2 10) => 1024
/// (expt 9 0.5) => 3
/// ```
pub fn builtin_expt(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("expt", ARITY_TWO, args.len()));
    }
    let base = as_number(&args[0], "expt", 0)?;
    let power = as_number(&args[1], "expt", 1)?;
    Ok(Value::Number(base.powf(power)))
}

/// Logarithm of the first argument in the base given by the second.
///
/// # Examples
///
/// ```lisp
/// (log 8 2) => 3
/// (log 100 10) => 2
/// ```
pub fn builtin_log(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("log", ARITY_TWO, args.len()));
    }
    let value = as_number(&args[0], "log", 0)?;
    let base = as_number(&args[1], "log", 1)?;
    if value <= 0.0 {
        return Err(EvalError::arith("log: argument must be positive"));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(EvalError::arith("log: base must be positive and not 1"));
    }
    Ok(Value::Number(value.ln() / base.ln()))
}

/// Square root of its one argument.
pub fn builtin_sqrt(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("sqrt", ARITY_ONE, args.len()));
    }
    let n = as_number(&args[0], "sqrt", 0)?;
    if n < 0.0 {
        return Err(EvalError::arith("sqrt: argument must be non-negative"));
    }
    Ok(Value::Number(n.powf(0.5)))
}

/// Greatest integer less than or equal to its one argument.
pub fn builtin_floor(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("floor", ARITY_ONE, args.len()));
    }
    Ok(Value::Number(as_number(&args[0], "floor", 0)?.floor()))
}

/// Smallest of one or more numbers.
pub fn builtin_min(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("min", ARITY_AT_LEAST_ONE, 0));
    }
    let nums = numbers("min", args)?;
    Ok(Value::Number(nums.into_iter().fold(f64::INFINITY, f64::min)))
}

/// Largest of one or more numbers.
pub fn builtin_max(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("max", ARITY_AT_LEAST_ONE, 0));
    }
    let nums = numbers("max", args)?;
    Ok(Value::Number(
        nums.into_iter().fold(f64::NEG_INFINITY, f64::max),
    ))
}

/// Register all arithmetic builtins in the environment.
pub fn register(env: &Rc<Environment>) {
    use crate::value::Callable;
    let def = |name: &str, f: fn(&[Value]) -> Result<Value, EvalError>| {
        env.define(name.to_string(), Value::Callable(Callable::Primitive(f)));
    };
    def("+", builtin_add);
    def("-", builtin_sub);
    def("*", builtin_mul);
    def("/", builtin_div);
    def("modulo", builtin_modulo);
    def("expt", builtin_expt);
    def("log", builtin_log);
    def("sqrt", builtin_sqrt);
    def("floor", builtin_floor);
    def("min", builtin_min);
    def("max", builtin_max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_with_one_arg_is_not_negation() {
        assert!(matches!(builtin_sub(&[Value::Number(5.0)]), Ok(Value::Number(n)) if n == 5.0));
    }

    #[test]
    fn div_by_zero_is_an_arith_error() {
        assert!(matches!(
            builtin_div(&[Value::Number(1.0), Value::Number(0.0)]),
            Err(EvalError::ArithError(_))
        ));
    }

    #[test]
    fn modulo_follows_the_sign_of_the_divisor() {
        let v = builtin_modulo(&[Value::Number(-1.0), Value::Number(3.0)]).unwrap();
        assert!(matches!(v, Value::Number(n) if n == 2.0));
    }

    #[test]
    fn min_and_max_fold_over_all_arguments() {
        let args = [Value::Number(3.0), Value::Number(1.0), Value::Number(2.0)];
        assert!(matches!(builtin_min(&args), Ok(Value::Number(n)) if n == 1.0));
        assert!(matches!(builtin_max(&args), Ok(Value::Number(n)) if n == 3.0));
    }
}
