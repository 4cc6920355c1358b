// ABOUTME: Error types for the reader and the evaluator

use thiserror::Error;

// ===== Arity constant strings (mirrors the arity-message shape used across builtins) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";

/// Failures raised while turning raw source text into a forest of AST forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("unbalanced brackets in source")]
    Unbalanced,

    #[error("empty form: ()")]
    EmptyForm,

    #[error("not a valid atom: '{0}'")]
    BadNumber(String),
}

/// Failures raised while evaluating an already-parsed AST form.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Arity error with function name, expected count, and actual count.
    #[error("{function}: expected {expected} argument{}, got {actual}", if *.expected == "1" { "" } else { "s" })]
    Arity {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Type mismatch error with function name, expected type, actual type, and position.
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: String,
        expected: String,
        actual: String,
        position: usize,
    },

    #[error("{0}")]
    ArithError(String),

    #[error("unbound identifier: {0}")]
    Unbound(String),

    #[error("cond fell through with no matching clause")]
    NoClauseMatched,

    #[error("empty form: ()")]
    EmptyForm,

    #[error("value is not callable")]
    NotCallable,
}

impl EvalError {
    /// Create an arity error with expected and actual counts.
    pub fn arity(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::Arity {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    /// Create a type mismatch error with full context.
    pub fn type_mismatch(function: &str, expected: &str, actual: &str, position: usize) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
            position,
        }
    }

    pub fn arith(message: impl Into<String>) -> Self {
        EvalError::ArithError(message.into())
    }
}

/// Top-level failure surfaced by `Script::evaluate`; aborts the whole script.
#[derive(Error, Debug, Clone)]
pub enum LispError {
    #[error("reader error: {0}")]
    Reader(#[from] ReaderError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
