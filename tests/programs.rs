//! Whole-program runs through the library entry points

use tips::{dump_tokens, parse_source, run_source, Environment, InputSource, RunOptions, Value};

fn run_with(source: &str, stdin: &str, options: RunOptions) -> (Result<Environment, String>, String) {
    let mut out = Vec::new();
    let mut input = InputSource::new(stdin.as_bytes());
    let result = run_source(source, &options, &mut out, &mut input).map_err(|e| e.to_string());
    (result, String::from_utf8(out).unwrap())
}

fn run(source: &str) -> String {
    let (result, out) = run_with(source, "", RunOptions::default());
    if let Err(e) = result {
        panic!("run failed: {}", e);
    }
    out
}

fn run_err(source: &str) -> String {
    run_with(source, "", RunOptions::default()).0.unwrap_err()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_mixed_arithmetic_write() {
    let source = r#"
        PROGRAM mix;
        VAR x : INTEGER; y : REAL;
        BEGIN
          x := 3;
          y := x + 1.5;
          WRITE(y)
        END
    "#;
    assert_eq!(run(source), "4.5\n");
}

#[test]
fn test_write_string_and_identifier() {
    let source = r#"
        PROGRAM w;
        VAR x : INTEGER;
        BEGIN
          WRITE("hello");
          x := 4;
          WRITE(x);
          WRITE('two words')
        END
    "#;
    assert_eq!(run(source), "hello\n4\ntwo words\n");
}

#[test]
fn test_integer_division_truncates() {
    let source = r#"
        PROGRAM div;
        VAR a : INTEGER; b : INTEGER; q : INTEGER; r : REAL;
        BEGIN
          a := 7; b := 2;
          q := a / b;
          r := a / b;
          WRITE(q);
          WRITE(r);
          r := a / 2.0;
          WRITE(r)
        END
    "#;
    assert_eq!(run(source), "3\n3\n3.5\n");
}

#[test]
fn test_slot_variant_preserved() {
    let source = r#"
        PROGRAM slots;
        VAR i : INTEGER; r : REAL;
        BEGIN
          i := 9.99;
          r := 2;
          WRITE(i);
          WRITE(r)
        END
    "#;
    let (result, out) = run_with(source, "", RunOptions::default());
    assert_eq!(out, "9\n2\n");
    let env = result.unwrap();
    assert_eq!(env.get("i").unwrap(), Value::Integer(9));
    assert_eq!(env.get("r").unwrap(), Value::Real(2.0));
}

#[test]
fn test_demo_programs() {
    assert_eq!(run(include_str!("../demos/hello.tips")), "hello\n");
    assert_eq!(run(include_str!("../demos/counter.tips")), "23\n11\n2\n4\n");

    let (result, out) = run_with(
        include_str!("../demos/average.tips"),
        "3 4\n8\n",
        RunOptions::default(),
    );
    assert_eq!(out, "mean:\n5\n");
    assert_eq!(result.unwrap().get("mean").unwrap(), Value::Real(5.0));
}

#[test]
fn test_read_follows_slot_type() {
    let source = r#"
        PROGRAM io;
        VAR n : INTEGER; f : REAL;
        BEGIN
          READ(n);
          READ(f);
          f := f * n;
          WRITE(f)
        END
    "#;
    let (result, out) = run_with(source, "3\n0.5\n", RunOptions::default());
    assert!(result.is_ok());
    assert_eq!(out, "1.5\n");

    let (result, _) = run_with(source, "3.5 1", RunOptions::default());
    assert_eq!(result.unwrap_err(), "invalid INTEGER input: '3.5'");

    let (result, _) = run_with(source, "3", RunOptions::default());
    assert_eq!(result.unwrap_err(), "unexpected end of input");
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_duplicate_declaration_fails() {
    let source = "PROGRAM d;\nVAR x : INTEGER;\n    x : INTEGER;\nBEGIN WRITE(x) END";
    assert_eq!(run_err(source), "Parse error (line 3): duplicate declaration of 'x'");
}

#[test]
fn test_runtime_errors_keep_earlier_output() {
    let source = r#"
        PROGRAM partial;
        VAR r : REAL;
        BEGIN
          WRITE("before");
          r := r MOD 2;
          WRITE("after")
        END
    "#;
    let (result, out) = run_with(source, "", RunOptions::default());
    assert_eq!(result.unwrap_err(), "MOD requires INTEGER operands");
    assert_eq!(out, "before\n");
}

#[test]
fn test_runtime_error_messages() {
    let inputs = vec![
        (
            "PROGRAM e; VAR i : INTEGER; BEGIN i := 2 ^^ 3 END",
            "EXPON must only have doubles.",
        ),
        (
            "PROGRAM e; VAR i : INTEGER; BEGIN i := ++5 END",
            "++/-- must apply to an identifier",
        ),
        (
            "PROGRAM e; VAR i : INTEGER; BEGIN i := ++x END",
            "identifier not found: x",
        ),
        ("PROGRAM e; BEGIN WRITE(nope) END", "identifier not found: nope"),
        ("PROGRAM e; BEGIN READ(nope) END", "identifier not found: nope"),
        (
            "PROGRAM e; BEGIN nope := 1 END",
            "identifier not found: nope",
        ),
    ];

    for (source, expected) in inputs {
        assert_eq!(run_err(source), expected, "source {:?}", source);
    }
}

#[test]
fn test_parse_errors_stop_before_execution() {
    let source = "PROGRAM p;\nBEGIN\n  WRITE(\"never\");\n  WRITE(\"x\" \nEND";
    let (result, out) = run_with(source, "", RunOptions::default());
    assert_eq!(
        result.unwrap_err(),
        "Parse error (line 5): expected CLOSEPAREN to close WRITE, got END [END]"
    );
    assert!(out.is_empty());
}

// =============================================================================
// OPTIONS
// =============================================================================

#[test]
fn test_symbol_dump() {
    let source = "PROGRAM s; VAR b : REAL; a : INTEGER; BEGIN a := 4; b := a / 8.0 END";
    let options = RunOptions { dump_symbols: true, ..RunOptions::default() };
    let (result, out) = run_with(source, "", options);
    assert!(result.is_ok());
    assert_eq!(out, "b is 0.5\na is 4\n");
}

#[test]
fn test_print_ast_before_output() {
    let source = "PROGRAM tree; BEGIN WRITE('hi') END";
    let options = RunOptions { print_ast: true, ..RunOptions::default() };
    let (_, out) = run_with(source, "", options);

    let expected = "\
Program
├── name: tree
└── Block
    └── Compound
        └── Write (STRING) \"hi\"
hi
";
    assert_eq!(out, expected);
}

#[test]
fn test_token_dump() {
    let mut out = Vec::new();
    dump_tokens("PROGRAM t;\nx := 1.5", &mut out).unwrap();
    let expected = "1 PROGRAM\n1 IDENT t\n1 SEMICOLON\n2 IDENT x\n2 ASSIGN\n2 FLOATLIT 1.5\n2 EOF\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);

    let mut out = Vec::new();
    let err = dump_tokens("BEGIN ?", &mut out).unwrap_err();
    assert_eq!(err.to_string(), "Lexical error (line 1): unknown lexeme '?'");
    assert_eq!(err.exit_code(), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "1 BEGIN\n1 UNKNOWN ?\n");
}

#[test]
fn test_tokens_only_skips_execution() {
    let options = RunOptions { tokens_only: true, ..RunOptions::default() };
    let (result, out) = run_with("PROGRAM t; BEGIN WRITE('x') END", "", options);
    assert!(result.unwrap().is_empty());
    assert!(out.starts_with("1 PROGRAM\n"));
    assert!(!out.contains("\nx\n"));
}

#[test]
fn test_same_program_runs_identically_twice() {
    let source = "PROGRAM again; VAR n : INTEGER; BEGIN n := ++n + 40; WRITE(n) END";
    let mut env = Environment::new();
    let program = parse_source(source, &mut env).unwrap();

    for _ in 0..2 {
        let mut out = Vec::new();
        program.run(&mut out, &mut InputSource::empty()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "41\n");
    }
}
