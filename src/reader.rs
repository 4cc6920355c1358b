// ABOUTME: Reader module turning raw source text into a forest of AST forms

use crate::ast::Node;
use crate::error::ReaderError;
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    IResult, Parser,
};

const OPEN_BRACES: [char; 2] = ['(', '['];
const CLOSE_BRACES: [char; 2] = [')', ']'];

/// Strips comments and collapses whitespace, per spec: a line containing
/// `;;` anywhere is dropped whole; otherwise a line is truncated at the
/// first `;` (comment-to-end-of-line). Remaining lines are joined by a
/// single space and whitespace runs are collapsed.
pub fn clean(source: &str) -> String {
    let mut lines = Vec::new();
    for line in source.split('\n') {
        if line.contains(";;") {
            continue;
        }
        let before_comment = match line.find(';') {
            Some(pos) => &line[..pos],
            None => line,
        };
        lines.push(before_comment);
    }
    lines.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits `text` into tokens at single spaces occurring at bracket-nesting
/// depth zero. `(`/`[` increase depth, `)`/`]` decrease it; a closing
/// bracket that would take depth below zero is `ReaderError::Unbalanced`,
/// as is text that ends at a nonzero depth.
fn split_depth_zero(text: &str) -> Result<Vec<&str>, ReaderError> {
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0usize;

    for (i, ch) in text.char_indices() {
        if OPEN_BRACES.contains(&ch) {
            depth += 1;
        } else if CLOSE_BRACES.contains(&ch) {
            depth -= 1;
            if depth < 0 {
                return Err(ReaderError::Unbalanced);
            }
        } else if depth == 0 && ch == ' ' {
            if i > start {
                tokens.push(&text[start..i]);
            }
            start = i + 1;
        }
    }

    if depth != 0 {
        return Err(ReaderError::Unbalanced);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    Ok(tokens)
}

/// If `token` is exactly one bracketed form (`(...)` or `[...]`, the two
/// shapes interchangeable), returns its interior; otherwise `None`.
fn strip_one_bracket_pair(token: &str) -> Option<&str> {
    let mut chars = token.char_indices();
    let (_, first) = chars.next()?;
    if !OPEN_BRACES.contains(&first) {
        return None;
    }

    let mut depth = 1i32;
    for (i, ch) in chars {
        if OPEN_BRACES.contains(&ch) {
            depth += 1;
        } else if CLOSE_BRACES.contains(&ch) {
            depth -= 1;
            if depth == 0 {
                // The closing bracket must be the token's final character
                // for this to be a single bracketed form.
                return if i == token.len() - 1 {
                    Some(&token[1..i])
                } else {
                    None
                };
            }
        }
    }
    None
}

/// Parses a number token, requiring the whole token to be consumed.
/// Handles `42`, `-42`, `3.14`, `-3.14`, `.5`, `-.5`.
fn parse_number(input: &str) -> IResult<&str, f64> {
    all_consuming(recognize((
        opt(char('-')),
        alt((
            recognize((digit1, opt((char('.'), opt(digit1))))),
            recognize((char('.'), digit1)),
        )),
    )))
    .map(|s: &str| s.parse::<f64>().expect("validated numeric token"))
    .parse(input)
}

fn looks_numeric(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() || c == '.' => true,
        Some('-') => matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.'),
        _ => false,
    }
}

/// Classifies a childless token per spec §4.1: a leading `'` makes a
/// `QuotedSym`, a token that parses as a float becomes a `NumLit`, and
/// everything else is an `Ident`.
fn classify_leaf(token: &str) -> Result<Node, ReaderError> {
    if let Some(name) = token.strip_prefix('\'') {
        return Ok(Node::QuotedSym(name.to_string()));
    }

    if looks_numeric(token) {
        return match parse_number(token) {
            Ok((_, n)) => Ok(Node::NumLit(n)),
            Err(_) => Err(ReaderError::BadNumber(token.to_string())),
        };
    }

    Ok(Node::Ident(token.to_string()))
}

/// Parses a single token (possibly deeply bracketed) into an AST node,
/// recursing into bracketed forms by stripping one bracket pair and
/// splitting the interior at depth zero.
fn parse_node(token: &str) -> Result<Node, ReaderError> {
    match strip_one_bracket_pair(token) {
        Some(inner) => {
            let child_tokens = split_depth_zero(inner)?;
            if child_tokens.is_empty() {
                return Err(ReaderError::EmptyForm);
            }
            let children = child_tokens
                .into_iter()
                .map(parse_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Form(children))
        }
        None => classify_leaf(token),
    }
}

/// Turns raw source text into an ordered sequence of top-level AST forms.
pub fn read(source: &str) -> Result<Vec<Node>, ReaderError> {
    let cleaned = clean(source);
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }
    split_depth_zero(&cleaned)?
        .into_iter()
        .map(parse_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_is_idempotent() {
        let text = "(+ 1 2 3)";
        assert_eq!(clean(text), text);
        assert_eq!(clean(&clean(text)), clean(text));
    }

    #[test]
    fn clean_drops_double_semicolon_lines_whole() {
        let text = ";; this whole line vanishes\n(+ 1 2)";
        assert_eq!(clean(text), "(+ 1 2)");
    }

    #[test]
    fn clean_truncates_trailing_single_semicolon_comments() {
        let text = "(+ 1 2) ; add them up";
        assert_eq!(clean(text), "(+ 1 2)");
    }

    #[test]
    fn clean_collapses_whitespace_runs() {
        let text = "(+   1\n\n2   3)";
        assert_eq!(clean(text), "(+ 1 2 3)");
    }

    #[test]
    fn bracket_shapes_are_interchangeable() {
        let paren = read("(+ 1 2)").unwrap();
        let bracket = read("[+ 1 2]").unwrap();
        assert_eq!(paren, bracket);
    }

    #[test]
    fn reads_nested_forms() {
        let forms = read("(define (fact n) (cond [(= n 0) 1] [else (* n (fact (- n 1)))]))").unwrap();
        assert_eq!(forms.len(), 1);
        match &forms[0] {
            Node::Form(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Node::Ident("define".to_string()));
            }
            other => panic!("expected a form, got {:?}", other),
        }
    }

    #[test]
    fn classifies_numbers_symbols_and_quoted_symbols() {
        assert_eq!(read("42").unwrap(), vec![Node::NumLit(42.0)]);
        assert_eq!(read("-3.5").unwrap(), vec![Node::NumLit(-3.5)]);
        assert_eq!(read(".5").unwrap(), vec![Node::NumLit(0.5)]);
        assert_eq!(read("foo?").unwrap(), vec![Node::Ident("foo?".to_string())]);
        assert_eq!(
            read("'sym").unwrap(),
            vec![Node::QuotedSym("sym".to_string())]
        );
    }

    #[test]
    fn unbalanced_brackets_are_an_error() {
        assert_eq!(read("(+ 1 2"), Err(ReaderError::Unbalanced));
        assert_eq!(read("+ 1 2)"), Err(ReaderError::Unbalanced));
    }

    #[test]
    fn empty_form_is_an_error() {
        assert_eq!(read("()"), Err(ReaderError::EmptyForm));
    }

    #[test]
    fn multiple_top_level_forms_are_read_in_order() {
        let forms = read("(define pi2 (* 2 pi)) pi2").unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[1], Node::Ident("pi2".to_string()));
    }
}
