use std::fs;

use turtlec::{ast::Statement, compile, compiler::evaluator::core::Context, error::LexError, parse};
use walkdir::WalkDir;

fn plot(source: &str) -> Vec<String> {
    compile(source).unwrap_or_else(|e| panic!("Script failed: {e}"))
                   .iter()
                   .map(ToString::to_string)
                   .collect()
}

fn assert_output(source: &str, expected: &[&str]) {
    assert_eq!(plot(source), expected, "for script:\n{source}");
}

fn assert_failure(source: &str) {
    if compile(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn forward_with_a_variable() {
    assert_output("x := 10\nFORWARD x", &["M 10"]);
}

#[test]
fn conditional_picks_the_right_branch() {
    assert_output("IF 1 > 0 THEN RIGHT 90 ELSE LEFT 90 FI", &["R -90"]);
    assert_output("IF 0 > 1 THEN RIGHT 90 ELSE LEFT 90 FI", &["R 90"]);
}

#[test]
fn while_loop_repeats_its_body() {
    assert_output("x := 0\nWHILE x < 3 DO FORWARD 1 x := x + 1 OD",
                  &["M 1", "M 1", "M 1"]);
}

#[test]
fn while_with_false_condition_runs_zero_times() {
    assert_output("x := 5\nWHILE x < 0 DO FORWARD 1 OD", &[]);
}

#[test]
fn left_and_right_mirror_each_other() {
    assert_output("LEFT 33.5 RIGHT 33.5", &["R 33.5", "R -33.5"]);
}

#[test]
fn bare_actions_emit_their_letters() {
    assert_output("PENDOWN PENUP HOME PUSHSTATE POPSTATE",
                  &["D", "U", "H", "[", "]"]);
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_output("FORWARD 2 + 3 * 4", &["M 14"]);
    assert_output("FORWARD (2 + 3) * 4", &["M 20"]);
    assert_output("FORWARD -3 + 5", &["M 2"]);
    assert_output("FORWARD +7", &["M 7"]);
    assert_output("FORWARD --4", &["M 4"]);
}

#[test]
fn division_follows_float_semantics() {
    assert_output("FORWARD 10 / 4", &["M 2.5"]);
    assert_output("FORWARD 1 / 0", &["M inf"]);
    assert_output("FORWARD -1 / 0", &["M -inf"]);
    assert_output("FORWARD 0 / 0", &["M NaN"]);
}

#[test]
fn comparisons_yield_canonical_truth() {
    assert_output("IF 2 <= 2 THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 3 >= 4 THEN FORWARD 1 FI", &[]);
    assert_output("IF 1 <> 2 THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 1 = 2 THEN FORWARD 1 FI", &[]);
    assert_output("IF 2 > 1 THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 2 < 1 THEN FORWARD 1 FI", &[]);
}

#[test]
fn not_normalizes_truth() {
    assert_output("x := 2\nIF NOT NOT (x = 2) THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF NOT (1 = 2) THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF NOT (1 = 1) THEN FORWARD 1 FI", &[]);
}

#[test]
fn logical_connectives_combine_comparisons() {
    assert_output("IF 1 = 1 AND 2 = 2 THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 1 = 2 AND 1 = 1 THEN FORWARD 1 FI", &[]);
    assert_output("IF 1 = 2 OR 2 = 2 THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 1 = 2 OR 2 = 3 THEN FORWARD 1 FI", &[]);
}

#[test]
fn and_or_always_evaluate_both_sides() {
    // The left side already decides the result in both scripts; the error
    // can only come from evaluating the right side too.
    assert_failure("x := 0\nIF x = 1 AND y = 2 THEN FORWARD 1 FI");
    assert_failure("IF 1 = 1 OR y = 2 THEN FORWARD 1 FI");
}

#[test]
fn elsif_chains_take_the_first_true_branch() {
    let script = "x := 2\n\
                  IF x = 0 THEN FORWARD 1\n\
                  ELSIF x = 1 THEN FORWARD 2\n\
                  ELSIF x = 2 THEN FORWARD 3\n\
                  ELSE FORWARD 4\n\
                  FI";
    assert_output(script, &["M 3"]);

    assert_output("x := 5\nIF x = 0 THEN FORWARD 1 ELSIF x = 1 THEN FORWARD 2 FI",
                  &[]);
}

#[test]
fn leading_parenthesis_groups_a_condition() {
    assert_output("IF (1 = 1) THEN FORWARD 1 FI", &["M 1"]);
    assert_output("IF 1 + (2 * 3) = 7 THEN FORWARD 1 FI", &["M 1"]);
    // At condition position a parenthesis always opens a boolean group,
    // never an arithmetic operand.
    assert_failure("IF (1 + 2) < 3 THEN FORWARD 1 FI");
}

#[test]
fn conditions_require_a_comparison() {
    assert_failure("x := 1\nWHILE x DO FORWARD 1 OD");
}

#[test]
fn chained_comparisons_are_rejected() {
    assert_failure("IF 1 < 2 < 3 THEN FORWARD 1 FI");
}

#[test]
fn missing_do_is_a_parse_error() {
    let err = compile("WHILE 1 = 1 FORWARD 1 OD").expect_err("expected parse failure");
    assert!(err.to_string().contains("Expected 'DO'"), "got: {err}");
}

#[test]
fn stray_terminators_are_rejected() {
    assert_failure("OD");
    assert_failure("FORWARD 1 OD");
}

#[test]
fn incomplete_assign_operator_is_a_lex_error() {
    let err = compile("x : 5").expect_err("expected lex failure");
    assert!(err.downcast_ref::<LexError>().is_some(),
            "expected a LexError, got: {err}");
}

#[test]
fn unknown_characters_are_lex_errors() {
    let err = compile("FORWARD 5 ~").expect_err("expected lex failure");
    assert!(err.downcast_ref::<LexError>().is_some(),
            "expected a LexError, got: {err}");

    // A trailing dot is not part of a numeric literal.
    assert_failure("FORWARD 10.");
}

#[test]
fn unknown_variable_aborts_before_emitting() {
    let program = parse("FORWARD y").expect("parse failed");
    let mut context = Context::new();

    let result = program.iter()
                        .try_for_each(|statement| context.eval_statement(statement));

    assert!(result.is_err());
    assert!(context.commands.is_empty());
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let program = parse("FORWARD 5 FORWARD y").expect("parse failed");
    let mut context = Context::new();

    let result = program.iter()
                        .try_for_each(|statement| context.eval_statement(statement));

    assert!(result.is_err());
    let emitted: Vec<String> = context.commands.iter().map(ToString::to_string).collect();
    assert_eq!(emitted, ["M 5"]);
}

#[test]
fn errors_carry_line_numbers() {
    let err = compile("x := 1\nFORWARD z").expect_err("expected runtime failure");
    assert!(err.to_string().contains("line 2"), "got: {err}");

    let err = compile("# one\n# two\nFORWARD q").expect_err("expected runtime failure");
    assert!(err.to_string().contains("line 3"), "got: {err}");
}

#[test]
fn comments_are_skipped() {
    assert_output("FORWARD 1 # trailing comment\n# whole-line comment\nFORWARD 2",
                  &["M 1", "M 2"]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_output("forward := 3\nFORWARD forward", &["M 3"]);
}

#[test]
fn assignment_overwrites_the_binding() {
    assert_output("x := 1\nx := x + 1\nFORWARD x", &["M 2"]);
}

#[test]
fn decimal_literals_round_trip() {
    assert_output("FORWARD 3.25", &["M 3.25"]);
}

#[test]
fn empty_programs_compile_to_nothing() {
    assert_output("", &[]);
    assert_output("# nothing but a comment\n", &[]);
}

#[test]
fn nested_loops_interleave_their_commands() {
    let script = "i := 0\n\
                  WHILE i < 2 DO\n\
                  j := 0\n\
                  WHILE j < 2 DO FORWARD 1 j := j + 1 OD\n\
                  LEFT 90\n\
                  i := i + 1\n\
                  OD";
    assert_output(script, &["M 1", "M 1", "R 90", "M 1", "M 1", "R 90"]);
}

#[test]
fn statements_track_source_lines() {
    let program = parse("x := 1\nFORWARD x").expect("parse failed");
    assert_eq!(program.len(), 1);

    match &program[0] {
        Statement::Block { statements, .. } => {
            assert!(matches!(statements[0], Statement::Assignment { line: 1, .. }));
            assert!(matches!(statements[1], Statement::Forward { line: 2, .. }));
        },
        other => panic!("expected a block at top level, got {other:?}"),
    }
}

#[test]
fn same_source_compiles_identically() {
    let script = "a := 4\nWHILE a > 0 DO FORWARD a RIGHT 90 a := a - 1 OD";
    let first = compile(script).expect("first run failed");
    let second = compile(script).expect("second run failed");
    assert_eq!(first, second);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.trtl").expect("missing file");
    let commands = compile(&contents).unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert!(!commands.is_empty());
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "trtl")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        let commands = compile(&source).unwrap_or_else(|e| panic!("{path:?} failed:\n{e}"));
        let actual: Vec<String> = commands.iter().map(ToString::to_string).collect();
        let expected: Vec<&str> = expected.lines().collect();
        assert_eq!(actual, expected, "output mismatch for {path:?}");

        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
