//! Test-vector construction and formatting.

use crate::listing::InstructionLine;
use std::fmt;

/// One encoder test vector: the instruction bytes in memory order paired
/// with the normalized mnemonic/operand text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// Instruction bytes: 2 for 16-bit encodings, 4 for 32-bit ones.
    pub encoding: Vec<u8>,
    /// Mnemonic string (e.g. "qadd", "mov.w").
    pub mnemonic: String,
    /// Normalized operand text, empty when the instruction has none.
    pub operands: String,
}

impl TestVector {
    /// Parses one listing line into a vector. Returns `None` for lines that
    /// are not instruction lines.
    pub fn parse(line: &str) -> Option<Self> {
        InstructionLine::parse(line).map(Self::from)
    }
}

impl From<InstructionLine> for TestVector {
    fn from(line: InstructionLine) -> Self {
        // The disassembler prints each halfword with its bytes reversed
        // relative to memory order; to_le_bytes undoes that.
        let mut encoding = Vec::with_capacity(4);
        encoding.extend_from_slice(&line.first.to_le_bytes());
        if let Some(second) = line.second {
            encoding.extend_from_slice(&second.to_le_bytes());
        }
        Self {
            encoding,
            mnemonic: line.mnemonic,
            operands: line.operands,
        }
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self
            .encoding
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        let line = format!("{:<8} {:<9}{}", hex, self.mnemonic, self.operands);
        f.write_str(line.trim_end())
    }
}

/// Lazily converts a whole listing into test vectors, skipping lines that
/// are not instruction lines.
pub fn vectors(listing: &str) -> impl Iterator<Item = TestVector> + '_ {
    listing.lines().filter_map(TestVector::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_halfword_vector() {
        let vector = TestVector::parse("    1168: fa8c fa8b      qadd    r10, r11, r12").unwrap();
        assert_eq!(vector.encoding, [0x8c, 0xfa, 0x8b, 0xfa]);
        assert_eq!(vector.to_string(), "8cfa8bfa qadd     r10, r11, r12");
    }

    #[test]
    fn test_branch_with_trailers() {
        let vector = TestVector::parse(
            "    1132: e7f7           b       0x1124 <label_b>        @ imm = #-0x12",
        )
        .unwrap();
        assert_eq!(vector.encoding, [0xf7, 0xe7]);
        assert_eq!(vector.to_string(), "f7e7     b        0x1124");
    }

    #[test]
    fn test_no_operands_no_trailing_whitespace() {
        let vector = TestVector::parse("    10d0: bf00           nop").unwrap();
        assert_eq!(vector.encoding, [0x00, 0xbf]);
        let rendered = vector.to_string();
        assert_eq!(rendered, "00bf     nop");
        assert_eq!(rendered, rendered.trim_end());
    }

    #[test]
    fn test_vectors_skip_non_instruction_lines() {
        let listing = "Disassembly of section .text:\n\n    10d0: bf00           nop\n";
        let collected: Vec<String> = vectors(listing).map(|v| v.to_string()).collect();
        assert_eq!(collected, ["00bf     nop"]);
    }
}
