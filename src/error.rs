//! Error types for thumbvec.

use thiserror::Error;

/// Errors from running the external disassembler.
///
/// Listing lines that fail to parse are not errors; the line transformer
/// silently skips them.
#[derive(Error, Debug)]
pub enum Error {
    /// The disassembler binary could not be started.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The disassembler exited with a failure status.
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The listing was not valid UTF-8.
    #[error("disassembler output is not valid UTF-8")]
    NonUtf8Listing,
}
