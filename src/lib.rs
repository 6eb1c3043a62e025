//! Clay - a line-oriented print language compiled to C
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use clay_ast as ast;
pub use clay_lexer as lexer;
pub use clay_parser as parser;
pub use clay_codegen as codegen;
