//! # thumbvec
//!
//! Converts `llvm-objdump` listings of 16/32-bit Thumb code into compact
//! test vectors for instruction-encoder test suites. Each instruction line
//! in the listing yields one vector pairing the instruction bytes (hex
//! encoded, in little-endian memory order) with the normalized
//! mnemonic/operand text:
//!
//! ```text
//!     1168: fa8c fa8b      qadd    r10, r11, r12
//! ```
//!
//! becomes
//!
//! ```text
//! 8cfa8bfa qadd     r10, r11, r12
//! ```
//!
//! Lines that are not instruction lines (file headers, section headers,
//! symbol labels, blank lines) produce no vector.

pub mod error;
pub mod listing;
pub mod objdump;
pub mod vector;

pub use error::Error;
pub use listing::InstructionLine;
pub use objdump::Objdump;
pub use vector::{vectors, TestVector};
