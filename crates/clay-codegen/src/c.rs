//! C code generation

use std::fmt::Write;

use clay_ast::*;
use tracing::{debug, trace};

use crate::CodegenError;

const PROLOGUE: &str = "#include <stdio.h>\n\nint main() {\n";
const EPILOGUE: &str = "    return 0;\n}\n";
const INDENT: &str = "    ";

/// Emits a single C translation unit whose `main` performs every print
pub struct CGenerator {
    out: String,
}

impl CGenerator {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Walk the program once, top to bottom, and return the C source
    pub fn generate(mut self, program: &Program<'_>) -> Result<String, CodegenError> {
        self.out.push_str(PROLOGUE);

        for statement in program {
            self.emit_statement(statement)?;
        }

        self.out.push_str(EPILOGUE);
        debug!(
            statements = program.len(),
            bytes = self.out.len(),
            "generated C source"
        );
        Ok(self.out)
    }

    fn emit_statement(&mut self, statement: &Statement<'_>) -> Result<(), CodegenError> {
        match &statement.kind {
            StatementKind::Print(expr) => self.emit_print(expr),
        }
    }

    fn emit_print(&mut self, expr: &Expr<'_>) -> Result<(), CodegenError> {
        let literal = match &expr.kind {
            ExprKind::Literal(literal) => literal,
            ExprKind::Add { .. } => {
                return Err(CodegenError::UnsupportedExpression {
                    what: "addition",
                    span: expr.span,
                    location: expr.location,
                });
            }
        };

        trace!(kind = literal.kind.describe(), "emit print");
        let written = match literal.kind {
            // Passed through untouched: Clay strings have no escapes of their own
            LiteralKind::String => writeln!(self.out, "{INDENT}printf(\"{}\\n\");", literal.value),
            LiteralKind::Int => writeln!(self.out, "{INDENT}printf(\"%d\\n\", {});", literal.value),
            LiteralKind::Float => writeln!(self.out, "{INDENT}printf(\"%g\\n\", {});", literal.value),
        };
        written.map_err(|_| CodegenError::Format)
    }
}

impl Default for CGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(kind: LiteralKind, value: &str) -> Expr<'_> {
        Expr::literal(kind, value, Span::dummy(), Location::start())
    }

    fn program_of<'a>(exprs: Vec<Expr<'a>>) -> Program<'a> {
        let mut program = Program::new();
        for expr in exprs {
            program.push(Statement::print(expr, Span::dummy(), Location::start()));
        }
        program
    }

    #[test]
    fn test_empty_program_is_prologue_and_epilogue() {
        let c = CGenerator::new().generate(&Program::new()).unwrap();
        assert_eq!(c, "#include <stdio.h>\n\nint main() {\n    return 0;\n}\n");
    }

    #[test]
    fn test_literal_kinds() {
        let program = program_of(vec![
            lit(LiteralKind::String, "hi"),
            lit(LiteralKind::Int, "42"),
            lit(LiteralKind::Float, "2.5"),
        ]);
        let c = CGenerator::new().generate(&program).unwrap();
        assert_eq!(
            c,
            "#include <stdio.h>\n\nint main() {\n\
             \x20   printf(\"hi\\n\");\n\
             \x20   printf(\"%d\\n\", 42);\n\
             \x20   printf(\"%g\\n\", 2.5);\n\
             \x20   return 0;\n}\n"
        );
    }

    #[test]
    fn test_add_is_rejected() {
        let program = program_of(vec![Expr::add(
            lit(LiteralKind::Int, "1"),
            lit(LiteralKind::Int, "2"),
        )]);
        let err = CGenerator::new().generate(&program).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedExpression { what: "addition", .. }));
        assert_eq!(err.to_string(), "Unsupported expression: addition");
    }
}
