// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::EvalError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single frame in the lexical scope chain. Lookup walks from this frame
/// outward to `parent`; the outermost frame is the immutable built-in frame.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child environment with a parent.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Pushes a new frame binding each parameter to its evaluated argument,
    /// atop the given (captured) environment. One frame per call.
    pub fn extend_local(captured: Rc<Environment>, params: &[String], args: &[Value]) -> Rc<Self> {
        let frame = Environment::with_parent(captured);
        for (param, arg) in params.iter().zip(args.iter()) {
            frame.define(param.clone(), arg.clone());
        }
        frame
    }

    /// Installs a binding in THIS frame (doesn't walk the parent chain).
    /// Used both to seed the built-in frame and, via the top-level frame
    /// specifically, to install user `define`s.
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Looks up a symbol in this frame and parent frames recursively.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        if let Some(ref parent) = self.parent {
            return parent.get(name);
        }

        None
    }

    /// Looks up a symbol, surfacing the spec's `Unbound` error on failure.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        self.get(name)
            .ok_or_else(|| EvalError::Unbound(name.to_string()))
    }
}
