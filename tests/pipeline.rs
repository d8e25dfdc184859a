use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tarn::{ParseErrorType, ScanErrorType, SemanticErrorType, Tarn, TarnError};

fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name) }

fn run(source: &str) -> (Result<(), TarnError>, String) {
	let mut output = Vec::new();
	let result = Tarn.run(source, &mut output);
	(result, String::from_utf8(output).unwrap())
}

#[test]
fn runs_fixture_program() {
	let mut output = Vec::new();
	Tarn.run_file(fixture("program.tarn"), &mut output).unwrap();
	let expected = std::fs::read_to_string(fixture("program.out")).unwrap();
	assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn runs_are_deterministic() {
	let source = std::fs::read_to_string(fixture("program.tarn")).unwrap();
	let (first, first_output) = run(&source);
	let (second, second_output) = run(&source);
	assert!(first.is_ok() && second.is_ok());
	assert_eq!(first_output, second_output);
}

#[test]
fn declaration_with_arithmetic() {
	let (result, output) = run("let x: i32 = 1 + 2;\nprint x;");
	result.unwrap();
	assert_eq!(output, "3\n");
}

#[test]
fn for_loop_prints_each_iteration() {
	let (result, output) = run("for (let i: i32 = 0; i < 3; i = i + 1) { print i; }");
	result.unwrap();
	assert_eq!(output, "0\n1\n2\n");
}

#[test]
fn for_loop_variable_does_not_leak() {
	let (result, output) = run("for (let i: i32 = 0; i < 3; i = i + 1) { print i; }\nprint i;");
	let Err(TarnError::SemanticError(error)) = result else {
		panic!("expected a semantic error, got {result:?}");
	};
	assert_eq!(error.r#type, SemanticErrorType::UndefinedVariable);
	assert_eq!(error.line, 2);
	assert_eq!(output, "");
}

#[test]
fn type_mismatch_stops_before_execution() {
	let (result, output) = run("print 1;\nlet x: i32 = \"a\";");
	let Err(error) = result else {
		panic!("expected an error");
	};
	assert_eq!(error.to_string(), "[line 2] Error: Tried to assign a string to an i32.");
	assert_eq!(error.exit_code(), 65);
	assert_eq!(output, "");
}

#[test]
fn arity_mismatch_stops_before_execution() {
	let (result, output) = run("print 1;\nfn f(a: i32, b: i32) { print a + b; }\nf(1, 2, 3);");
	let Err(TarnError::SemanticError(error)) = result else {
		panic!("expected a semantic error, got {result:?}");
	};
	assert_eq!(error.r#type, SemanticErrorType::ArgumentCount { expected: 2, found: 3 });
	assert_eq!(output, "");
}

#[test]
fn reports_every_independent_syntax_error() {
	let (result, output) = run("let a: i32 = 1\nprint a;\nlet b: i32 = (2;\nprint b;");
	let Err(TarnError::ParseErrors(errors)) = &result else {
		panic!("expected parse errors, got {result:?}");
	};
	assert_eq!(errors.len(), 2);
	assert_eq!(errors[0].r#type, ParseErrorType::Expected("Expected ';' after variable declaration."));
	assert_eq!(errors[1].r#type, ParseErrorType::Expected("Expected ')' after expression."));
	assert_eq!(
		result.unwrap_err().to_string(),
		"[line 1] Error at \"1\": Expected ';' after variable declaration.\n[line 3] Error at \"2\": Expected ')' after expression."
	);
	assert_eq!(output, "");
}

#[test]
fn scan_error_is_reported_with_its_line() {
	let (result, _) = run("print 1;\nprint 1 | 2;");
	let Err(TarnError::ScanError(error)) = &result else {
		panic!("expected a scan error, got {result:?}");
	};
	assert_eq!(error.r#type, ScanErrorType::BitwiseOr);
	assert_eq!(result.unwrap_err().to_string(), "[line 2] Error: Bitwise OR not supported.");
}

#[test]
fn runtime_error_keeps_earlier_output() {
	let (result, output) = run("print \"before\";\nprint 1 / 0;");
	let Err(error) = result else {
		panic!("expected a runtime error");
	};
	assert_eq!(error.to_string(), "[line 2] Error: Division by zero.");
	assert_eq!(error.exit_code(), 70);
	assert_eq!(output, "before\n");
}

#[test]
fn missing_file_is_an_internal_error() {
	let result = Tarn.run_file(fixture("missing.tarn"), Vec::new());
	let Err(error) = result else {
		panic!("expected an error");
	};
	assert!(matches!(error, TarnError::InternalError(_)));
	assert!(error.to_string().starts_with("CompilerInternalError: Failed open source file"));
	assert_eq!(error.exit_code(), 74);
}

#[test]
fn conditional_assignment_leaves_variable_uninitialized() {
	for source in ["let x: i32;\nif (0) x = 1;\nprint x;", "let x: i32;\nfn f() { x = 1; }\nprint x;"] {
		let (result, output) = run(source);
		let Err(TarnError::SemanticError(error)) = result else {
			panic!("expected a semantic error for {source:?}, got {result:?}");
		};
		assert_eq!(error.r#type, SemanticErrorType::UninitializedVariable);
		assert_eq!(error.to_string(), "[line 3] Error at \"x\": Tried to use an uninitialized variable.");
		assert_eq!(output, "");
	}
}

#[test]
fn function_sees_names_of_its_caller() {
	let (result, output) = run("fn show() { print x; }\n{ let x: i32 = 1; show(); }\n{ let x: string = \"two\"; show(); }");
	result.unwrap();
	assert_eq!(output, "1\ntwo\n");
}

#[test]
fn caller_shadowing_is_checked_before_execution() {
	let source = "print \"start\";\nlet x: i32 = 1;\nfn f() { let y: i32 = x + 1; print y; }\n{ let x: string = \"a\"; f(); }";
	let (result, output) = run(source);
	let Err(TarnError::SemanticError(error)) = result else {
		panic!("expected a semantic error, got {result:?}");
	};
	assert_eq!(error.r#type, SemanticErrorType::MixedAddition);
	assert_eq!(error.line, 3);
	assert_eq!(output, "");
}
