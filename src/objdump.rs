//! Invocation of the external disassembler.
//!
//! The listing is produced by `llvm-objdump -d <object> --no-print-imm-hex`.
//! The tool runs to completion before any parsing starts; there is no
//! streaming.

use crate::error::Error;
use std::path::Path;
use std::process::Command;

/// Disassembler binary used when none is configured.
pub const DEFAULT_OBJDUMP: &str = "llvm-objdump-18";

/// Runs the external disassembler in listing mode.
#[derive(Debug, Clone)]
pub struct Objdump {
    tool: String,
}

impl Objdump {
    /// Creates a runner for the default tool.
    pub fn new() -> Self {
        Self::with_tool(DEFAULT_OBJDUMP)
    }

    /// Creates a runner invoking a specific disassembler binary.
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Disassembles `object` and returns the captured listing text.
    ///
    /// `--no-print-imm-hex` pins the immediate-operand formatting the
    /// encoder test suites were recorded with.
    pub fn disassemble(&self, object: &Path) -> Result<String, Error> {
        let output = Command::new(&self.tool)
            .arg("-d")
            .arg(object)
            .arg("--no-print-imm-hex")
            .output()
            .map_err(|source| Error::Spawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Failed {
                tool: self.tool.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| Error::NonUtf8Listing)
    }
}

impl Default for Objdump {
    fn default() -> Self {
        Self::new()
    }
}
