//! Pipeline driver: read the source, translate it, persist the result
//!
//! I/O happens only at the two ends. The output file is replaced atomically,
//! so a failed run never leaves a truncated file behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::CliError;

pub fn read_source(path: &Path) -> Result<String, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

/// Scan, parse and generate C for a whole source buffer
pub fn translate(source: &str) -> Result<String, CliError> {
    let program = clay_parser::parse(source)?;
    info!(statements = program.len(), "parsed");
    let c_source = clay_codegen::generate(&program)?;
    Ok(c_source)
}

/// Write `contents` next to `path` in a temp file, then rename it into place
pub fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
