// ABOUTME: Embedding entry point: source text in, a line-oriented output stream out

use crate::builtins;
use crate::env::Environment;
use crate::error::LispError;
use crate::eval::{eval, Outcome};
use crate::reader;

/// A single script's source text. Each call to [`Script::evaluate`] builds a
/// fresh top-level environment, so repeated calls are independent of each
/// other and of any other `Script`.
pub struct Script {
    source: String,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Script {
            source: source.into(),
        }
    }

    /// Reads and evaluates every top-level form in source order, returning
    /// the line-oriented output stream the host prints. Aborts on the first
    /// error, per the evaluator's strictly bottom-up propagation.
    pub fn evaluate(&self) -> Result<Vec<String>, LispError> {
        let forms = reader::read(&self.source)?;

        let top = Environment::new();
        builtins::register_all(&top);

        let mut out = Vec::new();
        for form in &forms {
            match eval(form, &top, &top, &mut out)? {
                Outcome::Definition(name) => out.push(format!("UPDATE: {}", name)),
                Outcome::Value(value) => out.push(format!("OUTPUT:  {}", value)),
                // check-expect already pushed its own line during evaluation.
                Outcome::Test => {}
            }
        }
        Ok(out)
    }
}
