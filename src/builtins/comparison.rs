//! Comparison operations: =, <, >, <=, >=
//!
//! Each takes exactly two numbers and returns a boolean.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_TWO};
use crate::value::{Callable, Value};
use std::rc::Rc;

fn pair(function: &str, args: &[Value]) -> Result<(f64, f64), EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity(function, ARITY_TWO, args.len()));
    }
    let a = match &args[0] {
        Value::Number(n) => *n,
        other => return Err(EvalError::type_mismatch(function, "number", other.type_name(), 0)),
    };
    let b = match &args[1] {
        Value::Number(n) => *n,
        other => return Err(EvalError::type_mismatch(function, "number", other.type_name(), 1)),
    };
    Ok((a, b))
}

/// Structural equality of its two arguments (not just numbers).
pub fn builtin_eq(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("=", ARITY_TWO, args.len()));
    }
    Ok(Value::Bool(args[0].structural_eq(&args[1])))
}

/// Tests whether the first argument is strictly less than the second.
pub fn builtin_lt(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = pair("<", args)?;
    Ok(Value::Bool(a < b))
}

/// Tests whether the first argument is strictly greater than the second.
pub fn builtin_gt(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = pair(">", args)?;
    Ok(Value::Bool(a > b))
}

/// Tests whether the first argument is less than or equal to the second.
pub fn builtin_le(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = pair("<=", args)?;
    Ok(Value::Bool(a <= b))
}

/// Tests whether the first argument is greater than or equal to the second.
pub fn builtin_ge(args: &[Value]) -> Result<Value, EvalError> {
    let (a, b) = pair(">=", args)?;
    Ok(Value::Bool(a >= b))
}

/// Register all comparison builtins in the environment.
pub fn register(env: &Rc<Environment>) {
    let def = |name: &str, f: fn(&[Value]) -> Result<Value, EvalError>| {
        env.define(name.to_string(), Value::Callable(Callable::Primitive(f)));
    };
    def("=", builtin_eq);
    def("<", builtin_lt);
    def(">", builtin_gt);
    def("<=", builtin_le);
    def(">=", builtin_ge);
}
