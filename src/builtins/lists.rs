//! Two-cell list operations: cons, first, rest, empty?
//!
//! This dialect has no proper-list type; `cons` always builds a dotted pair,
//! and the usual chain-of-pairs-ending-in-empty shape is a convention, not a
//! distinct representation. The `empty` sentinel itself is a plain value,
//! registered alongside the other named constants in `constants.rs`.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_ONE, ARITY_TWO};
use crate::value::{Callable, Value};
use std::rc::Rc;

/// Builds a dotted pair `(head . tail)` from its two arguments.
pub fn builtin_cons(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("cons", ARITY_TWO, args.len()));
    }
    Ok(Value::cons(args[0].clone(), args[1].clone()))
}

/// Returns the head of a pair; fails on anything else, including `empty`.
pub fn builtin_first(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("first", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Pair(head, _) => Ok((**head).clone()),
        other => Err(EvalError::type_mismatch("first", "pair", other.type_name(), 0)),
    }
}

/// Returns the tail of a pair; fails on anything else, including `empty`.
pub fn builtin_rest(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("rest", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Pair(_, tail) => Ok((**tail).clone()),
        other => Err(EvalError::type_mismatch("rest", "pair", other.type_name(), 0)),
    }
}

/// Tests whether a value is the `empty` sentinel, not a pair.
pub fn builtin_empty_q(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("empty?", ARITY_ONE, args.len()));
    }
    Ok(Value::Bool(matches!(args[0], Value::Empty)))
}

/// Register all list builtins in the environment.
pub fn register(env: &Rc<Environment>) {
    let def = |name: &str, f: fn(&[Value]) -> Result<Value, EvalError>| {
        env.define(name.to_string(), Value::Callable(Callable::Primitive(f)));
    };
    def("cons", builtin_cons);
    def("first", builtin_first);
    def("rest", builtin_rest);
    def("empty?", builtin_empty_q);
}
