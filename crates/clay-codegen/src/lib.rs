//! Clay Codegen - C code generation
//!
//! Renders a parsed program as a C `main` that performs the same prints.

mod c;

pub use c::*;

use clay_ast::{Location, Program, Span};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// An expression the tree can hold but the emitter cannot lower yet
    #[error("Unsupported expression: {what}")]
    UnsupportedExpression {
        what: &'static str,
        span: Span,
        location: Location,
    },

    #[error("failed to write generated code")]
    Format,
}

impl CodegenError {
    pub fn span(&self) -> Option<Span> {
        match self {
            CodegenError::UnsupportedExpression { span, .. } => Some(*span),
            CodegenError::Format => None,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            CodegenError::UnsupportedExpression { location, .. } => Some(*location),
            CodegenError::Format => None,
        }
    }
}

/// Generate C source for a program
pub fn generate(program: &Program<'_>) -> Result<String, CodegenError> {
    CGenerator::new().generate(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clay_parser::parse;

    #[test]
    fn test_generate_hello_world() {
        let program = parse("print \"Hello, world!\"\n").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        assert!(c.contains("    printf(\"Hello, world!\\n\");\n"));
        assert!(c.starts_with("#include <stdio.h>\n"));
        assert!(c.ends_with("    return 0;\n}\n"));
    }

    #[test]
    fn test_string_text_is_verbatim() {
        let program = parse("print \"100% \\t 'ok'\"").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        assert!(c.contains("printf(\"100% \\t 'ok'\\n\");"));
    }

    #[test]
    fn test_int_uses_integer_format() {
        let program = parse("print 42").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        assert!(c.contains("    printf(\"%d\\n\", 42);\n"));
    }

    #[test]
    fn test_bare_digit_uses_integer_format() {
        let program = parse("print 3").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        assert!(c.contains("printf(\"%d\\n\", 3);"));
        assert!(!c.contains("%g"));
    }

    #[test]
    fn test_float_uses_general_format() {
        let program = parse("print 3.14").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        assert!(c.contains("    printf(\"%g\\n\", 3.14);\n"));
    }

    #[test]
    fn test_one_call_per_statement_in_order() {
        let program = parse("print \"one\"\nprint \"two\"\nprint \"three\"").expect("parse failed");
        let c = generate(&program).expect("codegen failed");
        let calls: Vec<_> = c.lines().filter(|l| l.contains("printf")).collect();
        assert_eq!(
            calls,
            vec![
                "    printf(\"one\\n\");",
                "    printf(\"two\\n\");",
                "    printf(\"three\\n\");",
            ]
        );
    }
}
