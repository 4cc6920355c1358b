// ABOUTME: Evaluator module for executing parsed Lisp expressions

use crate::ast::Node;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Callable, Procedure, Value};
use std::rc::Rc;

/// What evaluating a top-level (or nested) form actually produced. Plain
/// `Value`s are the common case; `Definition`/`Test` are the sentinels the
/// driver recognizes to print `UPDATE:`/the inline test line instead of an
/// `OUTPUT:` value line.
#[derive(Debug, Clone)]
pub enum Outcome {
    Value(Value),
    Definition(String),
    Test,
}

impl Outcome {
    /// Coerces a `define`/`check-expect` outcome down to a `Value` for use
    /// in expression position (e.g. as an argument). This only matters for
    /// the undefined-behaviour case of nesting `define`/`check-expect`
    /// where a value is actually expected.
    fn into_value(self) -> Value {
        match self {
            Outcome::Value(v) => v,
            Outcome::Definition(name) => Value::Symbol(name),
            Outcome::Test => Value::Bool(true),
        }
    }
}

/// Evaluates `node` in `env`, threading `top` through so that `define`
/// always installs into the script's single top-level frame regardless of
/// how deeply nested the current evaluation is. `out` collects the inline
/// lines `check-expect` produces as it runs.
pub fn eval(
    node: &Node,
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    match node {
        Node::NumLit(n) => Ok(Outcome::Value(Value::Number(*n))),
        Node::QuotedSym(s) => Ok(Outcome::Value(Value::Symbol(s.clone()))),
        Node::Ident(name) => Ok(Outcome::Value(env.lookup(name)?)),
        Node::Form(children) => eval_form(children, env, top, out),
    }
}

/// Convenience wrapper for call sites that only ever want a `Value` (all
/// argument positions, `cond` tests, `and`/`or` operands).
fn eval_value(
    node: &Node,
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Value, EvalError> {
    Ok(eval(node, env, top, out)?.into_value())
}

fn eval_form(
    children: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    if children.is_empty() {
        return Err(EvalError::EmptyForm);
    }

    if let Node::Ident(name) = &children[0] {
        match name.as_str() {
            "define" => return eval_define(&children[1..], env, top, out),
            "cond" => return eval_cond(&children[1..], env, top, out),
            "and" => return eval_and(&children[1..], env, top, out),
            "or" => return eval_or(&children[1..], env, top, out),
            "check-expect" => return eval_check_expect(&children[1..], env, top, out),
            _ => {}
        }
    }

    let callee = eval_value(&children[0], env, top, out)?;
    let mut args = Vec::with_capacity(children.len() - 1);
    for arg_node in &children[1..] {
        args.push(eval_value(arg_node, env, top, out)?);
    }
    apply(&callee, &args, top, out)
}

/// Applies a callable to already-evaluated arguments (applicative order —
/// every argument was evaluated left-to-right before this call).
fn apply(
    callee: &Value,
    args: &[Value],
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    match callee {
        Value::Callable(Callable::Primitive(f)) => Ok(Outcome::Value(f(args)?)),
        Value::Callable(Callable::Procedure(procedure)) => {
            if procedure.params.len() != args.len() {
                return Err(EvalError::arity(
                    "<procedure>",
                    procedure.params.len().to_string(),
                    args.len(),
                ));
            }
            let frame = Environment::extend_local(procedure.env.clone(), &procedure.params, args);
            eval(&procedure.body, &frame, top, out)
        }
        _ => Err(EvalError::NotCallable),
    }
}

/// `(define name expr)` or `(define (name p1 .. pk) body)`. Always installs
/// into `top`, never into the lexically current frame — the original
/// interpreter this dialect is modeled on installs into whatever frame
/// happens to be current, which lets a nested evaluation shadow an outer
/// binding by accident; this rewrite rejects that by construction, since
/// `define` has no way to reach any frame but `top`.
fn eval_define(
    args: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    match args {
        [Node::Ident(name), expr] => {
            let value = eval_value(expr, env, top, out)?;
            top.define(name.clone(), value);
            Ok(Outcome::Definition(name.clone()))
        }
        [Node::Form(signature), body] if !signature.is_empty() => {
            let name = match &signature[0] {
                Node::Ident(n) => n.clone(),
                other => {
                    return Err(EvalError::type_mismatch(
                        "define",
                        "identifier",
                        &other.to_string(),
                        0,
                    ))
                }
            };
            let params = signature[1..]
                .iter()
                .enumerate()
                .map(|(i, p)| match p {
                    Node::Ident(n) => Ok(n.clone()),
                    other => Err(EvalError::type_mismatch(
                        "define",
                        "identifier",
                        &other.to_string(),
                        i + 1,
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            let procedure = Procedure {
                params,
                body: body.clone(),
                env: env.clone(),
            };
            top.define(name.clone(), Value::Callable(Callable::Procedure(Rc::new(procedure))));
            Ok(Outcome::Definition(name))
        }
        // Also rejects multi-form bodies: `(define (f x) a b)` has three
        // tail args, which matches neither arm above.
        _ => Err(EvalError::arity("define", "2", args.len())),
    }
}

/// `(cond (test consequent) .. (else consequent))`. `else` is treated as a
/// literal truth; the first truthy test's consequent is evaluated and
/// returned. Falling through every clause is `NoClauseMatched`.
fn eval_cond(
    clauses: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    for clause in clauses {
        let items = match clause {
            Node::Form(items) if items.len() == 2 => items,
            other => {
                return Err(EvalError::type_mismatch(
                    "cond",
                    "(test consequent) clause",
                    &other.to_string(),
                    0,
                ))
            }
        };

        let matched = match &items[0] {
            Node::Ident(keyword) if keyword == "else" => true,
            test => eval_value(test, env, top, out)?.is_truthy(),
        };

        if matched {
            return eval(&items[1], env, top, out);
        }
    }
    Err(EvalError::NoClauseMatched)
}

/// Short-circuiting `and`: stops at the first falsey operand and yields
/// `false`; yields `true` with zero operands or once every operand passes.
fn eval_and(
    exprs: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    for expr in exprs {
        if !eval_value(expr, env, top, out)?.is_truthy() {
            return Ok(Outcome::Value(Value::Bool(false)));
        }
    }
    Ok(Outcome::Value(Value::Bool(true)))
}

/// Short-circuiting `or`: stops at the first truthy operand and yields
/// `true`; yields `false` with zero operands or once every operand fails.
fn eval_or(
    exprs: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    for expr in exprs {
        if eval_value(expr, env, top, out)?.is_truthy() {
            return Ok(Outcome::Value(Value::Bool(true)));
        }
    }
    Ok(Outcome::Value(Value::Bool(false)))
}

/// `(check-expect actual expected)`: structural-equality-checks both
/// operands and appends the pass/fail line to `out` itself, rather than
/// returning a printable value — mirrors the original dialect but prints
/// both sides on failure instead of the actual value twice.
fn eval_check_expect(
    args: &[Node],
    env: &Rc<Environment>,
    top: &Rc<Environment>,
    out: &mut Vec<String>,
) -> Result<Outcome, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("check-expect", "2", args.len()));
    }

    let actual = eval_value(&args[0], env, top, out)?;
    let expected = eval_value(&args[1], env, top, out)?;

    if actual.structural_eq(&expected) {
        out.push("TEST PASSED!".to_string());
    } else {
        out.push(format!("TEST FAILED: {} != {}", actual, expected));
    }
    Ok(Outcome::Test)
}
