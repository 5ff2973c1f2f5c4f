use modcalc::{
    config::{Config, ExponentMode},
    error::{ConfigError, ErrorKind},
    evaluate,
    interpreter::{outcome::Outcome, session::Session},
    repl::{ReaderLines, run},
};

fn outcomes_with(src: &str, config: &Config) -> Vec<Outcome> {
    evaluate(src, config).unwrap_or_else(|e| panic!("Configuration rejected: {e}"))
}

fn output_with(src: &str, config: &Config) -> String {
    let mut out = Vec::new();
    for outcome in outcomes_with(src, config) {
        outcome.write_to(&mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

fn output(src: &str) -> String {
    output_with(src, &Config::default())
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output(src), expected, "unexpected output for {src:?}");
}

fn assert_value(src: &str, expected: i64) {
    let outcomes = outcomes_with(src, &Config::default());
    assert_eq!(outcomes.len(), 1, "expected a single statement in {src:?}");
    let value = outcomes[0].printable_value()
                           .unwrap_or_else(|| panic!("{src:?} produced no value"));
    assert_eq!(value.value(), expected, "unexpected value for {src:?}");
}

#[test]
fn basic_arithmetic() {
    assert_output("1 + 2\n", "1 2 +\n3\n");
    assert_output("(1+2)*3\n", "1 2 + 3 *\n9\n");
    assert_output("2 ^ 10\n", "2 10 ^\n1024\n");
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("17 % 5", 2);
}

#[test]
fn results_wrap_into_the_field() {
    assert_output("2 - 3\n", "2 3 -\n1234576\n");
    assert_output("1 / 2\n", "1 2 /\n617289\n");
    assert_value("1234576 + 1", 0);
    assert_value("1234576 * 1234576", 1);
    assert_value("2 ^ 30", 894_411);
    assert_value("3 ^ 100", 437_464);
}

#[test]
fn division_multiplies_by_the_inverse() {
    assert_value("1 / 3", 411_526);
    assert_value("1 / 5", 493_831);
    assert_value("3 / 7", 705_473);
    assert_value("100 / 10 / 5", 2);
}

#[test]
fn precedence_and_associativity() {
    assert_output("2 * 3 ^ 2\n", "2 3 2 ^ *\n18\n");
    assert_output("10 - 4 - 3\n", "10 4 - 3 -\n3\n");
    assert_output("1 + 2 * 3\n", "1 2 3 * +\n7\n");
    assert_output("(1 + 2) % 2\n", "1 2 + 2 %\n1\n");
}

#[test]
fn exponent_chains_fold_from_the_left() {
    assert_output("2 ^ 3 ^ 2\n", "2 3 ^ 2 ^\n64\n");
}

#[test]
fn zero_to_the_zero_is_one() {
    assert_output("0 ^ 0\n", "0 0 ^\n1\n");
}

#[test]
fn negative_literals() {
    assert_output("-1\n", "1234576\n1234576\n");
    assert_output("1 - -1\n", "1 1234576 -\n2\n");
    assert_output("-2 ^ 2\n", "1234575 2 ^\n4\n");
    assert_output("-1 % 10\n", "1234576 10 %\n6\n");
}

#[test]
fn negative_exponents_reduce_in_the_field_by_default() {
    assert_output("2 ^ -1\n", "2 1234576 ^\n1\n");
}

#[test]
fn negative_exponents_reduce_in_the_ring_when_asked() {
    let config = Config { exponent_mode: ExponentMode::Ring,
                          ..Config::default() };

    assert_eq!(output_with("2 ^ -1\n", &config), "2 1234575 ^\n617289\n");
    assert_eq!(output_with("2 ^ 1234576\n", &config), "2 0 ^\n1\n");
    // Ordinary operands still reduce modulo the prime.
    assert_eq!(output_with("-1\n", &config), "1234576\n1234576\n");
}

#[test]
fn large_literals_are_reduced_exactly() {
    assert_output("1234577\n", "0\n0\n");
    assert_output("12345678901234567890\n", "1022579\n1022579\n");
    assert_output("-12345678901234567890\n", "211998\n211998\n");
}

#[test]
fn division_by_zero_is_reported_once() {
    let out = output("5 / 0\n");
    assert_eq!(out, "error: division by 0\n5 0 /\n");
    assert_eq!(out.matches("error:").count(), 1);

    assert_output("7 % 0\n", "error: division by 0\n7 0 %\n");
}

#[test]
fn latch_suppresses_later_errors_in_the_statement() {
    let outcomes = outcomes_with("1 / 0 + 2 % 0\n", &Config::default());

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].diagnostics.len(), 1);
    assert_eq!(outcomes[0].error, Some(ErrorKind::DivisionByZero));
    assert_eq!(outcomes[0].printable_value(), None);
    assert_eq!(outcomes[0].trace.as_ref().unwrap().to_string(), "1 0 / 2 0 % +");
}

#[test]
fn latch_suppresses_grammar_errors_after_division_by_zero() {
    assert_output("1 / 0 )\n", "error: division by 0\n");
}

#[test]
fn latch_resets_for_each_statement() {
    assert_output("5 / 0\n6 / 3\n", "error: division by 0\n5 0 /\n6 3 /\n2\n");
}

#[test]
fn illegal_characters_are_skipped() {
    assert_output("1 + & 2\n", "illegal character '&'\n1 2 +\n3\n");
    assert_output("1 $+ 2 @\n", "illegal character '$'\nillegal character '@'\n1 2 +\n3\n");
}

#[test]
fn illegal_characters_can_expose_grammar_errors() {
    assert_output("1 & 2\n", "illegal character '&'\nerror: token '2'\n");
}

#[test]
fn illegal_characters_bypass_the_latch() {
    assert_output("1 ) & 2\n", "error: token ')'\nillegal character '&'\n");

    let outcomes = outcomes_with("1 ) & 2\n", &Config::default());
    assert_eq!(outcomes[0].diagnostics.len(), 2);
    assert_eq!(outcomes[0].error, Some(ErrorKind::UnexpectedToken));
}

#[test]
fn line_of_only_illegal_characters() {
    let outcomes = outcomes_with("&\n4\n", &Config::default());

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].error.is_none());
    assert!(outcomes[0].trace.is_none());
    assert_eq!(output("&\n4\n"), "illegal character '&'\n4\n4\n");
}

#[test]
fn unary_minus_applies_only_to_literals() {
    assert_output("-(1)\n", "error: token '('\n");
    assert_output("--1\n", "error: token '-'\n");
    assert_output("2 ^ (3)\n", "error: token '('\n");
}

#[test]
fn grammar_errors_recover_at_the_next_line() {
    assert_output("1 +\n2\n", "error: token '\\n'\n2\n2\n");
    assert_output("(1 + 2\n3\n", "error: token '\\n'\n3\n3\n");
    assert_output("1 2 3\n4\n", "error: token '2'\n4\n4\n");
    assert_output(")\n5\n", "error: token ')'\n5\n5\n");
}

#[test]
fn end_of_input_terminates_a_statement() {
    assert_output("1 + 2", "1 2 +\n3\n");
    assert_output("1 +", "error: unexpected end of input\n");

    let outcomes = outcomes_with("(1", &Config::default());
    assert_eq!(outcomes[0].error, Some(ErrorKind::UnexpectedEndOfInput));
}

#[test]
fn blank_lines_and_comments_produce_no_output() {
    assert_output("\n\n3\n", "3\n3\n");
    assert_output("# nothing here\n1 # one\n", "1\n1\n");
    assert_output("   \t\n", "");
    assert_output("", "");
}

#[test]
fn comments_continue_over_escaped_line_breaks() {
    assert_output("# first \\\n still a comment\n6\n", "6\n6\n");
    assert_output("# first \\\r\n 5\r\n6\r\n", "6\n6\n");

    let session = Session::new(&Config::default()).unwrap();
    let mut out = Vec::new();
    run(&session, &mut ReaderLines::new("# first \\\r\n 5\r\n6\r\n".as_bytes()), &mut out, false).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "6\n6\n");
}

#[test]
fn line_continuations_join_statements() {
    assert_output("1 + \\\n2\n", "1 2 +\n3\n");
    assert_output("1 + \\\r\n2\r\n", "1 2 +\n3\n");
}

#[test]
fn outcomes_record_their_starting_line() {
    let outcomes = outcomes_with("1\n\n2 + \\\n3\n4\n", &Config::default());
    let lines: Vec<usize> = outcomes.iter().map(|o| o.line).collect();

    assert_eq!(lines, vec![1, 3, 5]);
}

#[test]
fn diagnostics_carry_their_line() {
    let outcomes = outcomes_with("1\n2 / 0\n", &Config::default());

    assert_eq!(outcomes[1].diagnostics[0].line(), 2);
    assert_eq!(outcomes[1].diagnostics[0].kind(), Some(ErrorKind::DivisionByZero));
}

#[test]
fn custom_modulus() {
    let config = Config { modulus: 7,
                          ..Config::default() };

    assert_eq!(output_with("3 / 4\n", &config), "3 4 /\n6\n");
    assert_eq!(output_with("10\n", &config), "3\n3\n");
    assert_eq!(output_with("2 ^ -1\n", &config), "2 6 ^\n1\n");
    assert_eq!(output_with("3 / 7\n", &config), "error: division by 0\n3 0 /\n");
}

#[test]
fn invalid_moduli_are_rejected() {
    let with_modulus = |modulus| {
        evaluate("1\n",
                 &Config { modulus,
                           ..Config::default() })
    };

    assert_eq!(with_modulus(0), Err(ConfigError::ModulusTooSmall { modulus: 0 }));
    assert_eq!(with_modulus(1), Err(ConfigError::ModulusTooSmall { modulus: 1 }));
    assert_eq!(with_modulus(1_234_576), Err(ConfigError::ModulusNotPrime { modulus: 1_234_576 }));
    assert!(matches!(with_modulus(u64::MAX), Err(ConfigError::ModulusTooLarge { .. })));
    assert!(with_modulus(2).is_ok());
}

#[test]
fn success_ignores_lexer_diagnostics() {
    let outcomes = outcomes_with("1 & + 1\n1 / 0\n", &Config::default());

    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
}

#[test]
fn sessions_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
}

#[test]
fn interactive_loop_prompts_for_each_line() {
    let session = Session::new(&Config::default()).unwrap();
    let mut out = Vec::new();

    let failures = run(&session, &mut ReaderLines::new("1\n".as_bytes()), &mut out, true).unwrap();

    assert_eq!(failures, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "> 1\n1\n> \n");
}
