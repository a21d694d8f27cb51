use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use accvm::asm::diag::Diagnostic;
use accvm::assemble;

/// Extension given to object files.
pub const OBJECT_EXT: &str = "o";

/// Outcome of assembling one file from disk.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    /// Written object path; `None` when the file had errors.
    pub object: Option<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn ok(&self) -> bool {
        self.object.is_some()
    }
}

/// `src/prog.s` -> `src/prog.o`
pub fn object_path(source: &Path) -> PathBuf {
    source.with_extension(OBJECT_EXT)
}

pub fn write_object(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write output file '{}'", path.display()))
}

/// Reads, assembles and (on success) writes the object next to the source.
/// I/O failures are returned as errors; problems in the source are reported
/// through the diagnostics. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD.
pub fn assemble_file(source: &Path) -> Result<FileReport> {
    let raw = std::fs::read(source)
        .with_context(|| format!("failed to open file '{}'", source.display()))?;
    let text = String::from_utf8_lossy(&raw);
    let name = source.display().to_string();
    let out = assemble(&name, &text);

    let object = match out.object {
        Some(bytes) => {
            let path = object_path(source);
            write_object(&path, &bytes)?;
            Some(path)
        }
        None => None,
    };
    Ok(FileReport {
        source: source.to_path_buf(),
        object,
        diagnostics: out.diagnostics,
    })
}
