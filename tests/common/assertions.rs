use clay::codegen::CodegenError;
use clay::parser::{Diagnostic, ParseError};

/// Run the whole pipeline on a source string
pub fn compile(source: &str) -> Result<String, ParseError> {
    let program = clay::parser::parse(source)?;
    Ok(clay::codegen::generate(&program).unwrap_or_else(|e: CodegenError| {
        panic!("codegen failed: {}", e)
    }))
}

/// Assert that compilation succeeds
pub fn assert_compiles(source: &str) -> String {
    compile(source).expect("Expected source to compile successfully")
}

/// Assert that compilation fails and return the rendered diagnostic
pub fn assert_diagnostic(source: &str) -> String {
    match compile(source) {
        Ok(c) => panic!("Expected compilation to fail, got:\n{}", c),
        Err(err) => Diagnostic::from(&err).to_string(),
    }
}

/// The printf lines of generated C, without indentation
pub fn print_calls(c_source: &str) -> Vec<&str> {
    c_source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("printf("))
        .collect()
}
