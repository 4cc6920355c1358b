// End-to-end scenarios against the public `Script` entry point.

use lisp_embed_core::Script;

#[test]
fn sums_left_to_right() {
    let out = Script::new("(+ 1 2 3)").evaluate().unwrap();
    assert_eq!(out, vec!["OUTPUT:  6.0".to_string()]);
}

#[test]
fn definition_then_reference() {
    let out = Script::new("(define pi2 (* 2 pi)) pi2").evaluate().unwrap();
    assert_eq!(
        out,
        vec![
            "UPDATE: pi2".to_string(),
            "OUTPUT:  6.283185307179586".to_string(),
        ]
    );
}

#[test]
fn recursive_factorial() {
    let out = Script::new(
        "(define (fact n) (cond [(= n 0) 1] [else (* n (fact (- n 1)))]))
         (fact 5)",
    )
    .evaluate()
    .unwrap();
    assert_eq!(
        out,
        vec!["UPDATE: fact".to_string(), "OUTPUT:  120.0".to_string()]
    );
}

#[test]
fn cons_builds_a_right_nested_pair_terminating_in_empty() {
    let out = Script::new("(cons 1 (cons 2 (cons 3 empty)))")
        .evaluate()
        .unwrap();
    assert_eq!(out, vec!["OUTPUT:  (1.0, (2.0, (3.0, None)))".to_string()]);
}

#[test]
fn check_expect_on_modulo_passes() {
    let out = Script::new("(check-expect (modulo 10 3) 1)")
        .evaluate()
        .unwrap();
    assert_eq!(out, vec!["TEST PASSED!".to_string()]);
}

const FIZZ_BUZZ: &str = "
;;
;; the classic fizz-buzz problem, dialect-flavored: multiples of 5 are
;; 'fizz, multiples of 3 are 'buzz, multiples of both are 'fizzbuzz
;;

(define (fizz-buzz x)
  (cond
    [(and (= (modulo x 5) 0) (= (modulo x 3) 0)) 'fizzbuzz]
    [(= (modulo x 5) 0) 'fizz]
    [(= (modulo x 3) 0) 'buzz]
    [else x]))
";

#[test]
fn fizz_buzz_dispatches_on_multiples_of_three_and_five() {
    let run = |n: &str| {
        let source = format!("{}\n(fizz-buzz {})", FIZZ_BUZZ, n);
        Script::new(source).evaluate().unwrap()
    };

    let mut out = run("15");
    assert_eq!(out.pop().unwrap(), "OUTPUT:  fizzbuzz");

    let mut out = run("5");
    assert_eq!(out.pop().unwrap(), "OUTPUT:  fizz");

    let mut out = run("3");
    assert_eq!(out.pop().unwrap(), "OUTPUT:  buzz");

    let mut out = run("4");
    assert_eq!(out.pop().unwrap(), "OUTPUT:  4.0");
}

#[test]
fn bracket_shapes_are_interchangeable_end_to_end() {
    let paren = Script::new("(+ 1 2)").evaluate().unwrap();
    let bracket = Script::new("[+ 1 2]").evaluate().unwrap();
    assert_eq!(paren, bracket);
}

#[test]
fn comments_do_not_change_output() {
    let plain = Script::new("(+ 1 2 3)").evaluate().unwrap();
    let commented = Script::new(";; header\n(+ 1 2 3) ; trailing note")
        .evaluate()
        .unwrap();
    assert_eq!(plain, commented);
}

#[test]
fn check_expect_soundness_for_a_pure_expression() {
    let out = Script::new("(check-expect (* 6 7) (* 6 7))")
        .evaluate()
        .unwrap();
    assert_eq!(out, vec!["TEST PASSED!".to_string()]);
}

#[test]
fn a_procedure_sees_later_top_level_definitions_of_names_it_references() {
    let out = Script::new(
        "(define (double n) (* n factor))
         (define factor 2)
         (double 21)",
    )
    .evaluate()
    .unwrap();
    assert_eq!(
        out,
        vec![
            "UPDATE: double".to_string(),
            "UPDATE: factor".to_string(),
            "OUTPUT:  42.0".to_string(),
        ]
    );
}
