//! Parser for `llvm-objdump` listing lines.
//!
//! Instruction lines follow a fixed column layout:
//!
//! ```text
//!     1168: fa8c fa8b      qadd    r10, r11, r12
//!     1132: e7f7           b       0x1124 <label_b>        @ imm = #-0x12
//!     10d0: bf00           nop
//! ```
//!
//! Symbol annotations (`<label_b>`), immediate-value comments (`@ imm = ...`)
//! and end-of-line comments (`; ...`) are discarded, regardless of order.
//! Lines that do not follow this layout (file headers, section headers,
//! symbol labels, blank lines) are not instruction lines and parse to `None`.

/// Characters that terminate the operand span and start discarded trailers.
const TRAILER_DELIMITERS: [char; 3] = [';', '<', '@'];

/// A single instruction line extracted from a disassembly listing.
///
/// Halfwords are kept as printed by the disassembler (big-endian hex
/// digits); conversion to memory byte order happens in
/// [`TestVector`](crate::TestVector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionLine {
    /// First halfword of the encoding.
    pub first: u16,
    /// Second halfword, present for 32-bit encodings.
    pub second: Option<u16>,
    /// Mnemonic token, e.g. `mov.w`.
    pub mnemonic: String,
    /// Operand text, lowercased, surrounding whitespace removed. Empty for
    /// instructions without operands.
    pub operands: String,
}

impl InstructionLine {
    /// Parses one listing line, returning `None` when the line is not an
    /// instruction line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut cur = Cursor::new(line);
        cur.skip_whitespace();

        // "<address>:"
        if cur.take_hex_digits().is_empty() {
            return None;
        }
        if !cur.eat(':') {
            return None;
        }
        cur.skip_whitespace();

        // One or two 4-digit halfword groups, space separated.
        let first = cur.take_halfword()?;
        let second = if cur.eat(' ') { cur.take_halfword() } else { None };
        cur.skip_whitespace();

        let mnemonic = cur.take_token();
        if mnemonic.is_empty() {
            return None;
        }

        // Operands run to the first trailer delimiter; the symbol and
        // comment trailers are dropped entirely.
        let operands = cur.take_until_trailer().trim().to_lowercase();

        Some(Self {
            first,
            second,
            mnemonic: mnemonic.to_string(),
            operands,
        })
    }
}

/// Minimal cursor over a listing line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t']);
    }

    /// Consumes `ch` if it is the next character.
    fn eat(&mut self, ch: char) -> bool {
        match self.rest.strip_prefix(ch) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Consumes a run of hex digits. Addresses and encodings are printed in
    /// lowercase, so uppercase digits are not accepted.
    fn take_hex_digits(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !is_hex_digit(c))
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
    }

    /// Consumes exactly 4 hex digits followed by a whitespace or end-of-line
    /// boundary. Consumes nothing on failure.
    fn take_halfword(&mut self) -> Option<u16> {
        let bytes = self.rest.as_bytes();
        if bytes.len() < 4 || !bytes[..4].iter().all(|&b| is_hex_digit(b as char)) {
            return None;
        }
        match bytes.get(4) {
            None | Some(b' ') | Some(b'\t') => {}
            Some(_) => return None,
        }
        let value = u16::from_str_radix(&self.rest[..4], 16).ok()?;
        self.rest = &self.rest[4..];
        Some(value)
    }

    /// Consumes the mnemonic token: everything up to whitespace or a trailer
    /// delimiter.
    fn take_token(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() || TRAILER_DELIMITERS.contains(&c))
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        token
    }

    /// Consumes up to the first trailer delimiter or end of line.
    fn take_until_trailer(&mut self) -> &'a str {
        let end = self.rest.find(TRAILER_DELIMITERS).unwrap_or(self.rest.len());
        let (span, rest) = self.rest.split_at(end);
        self.rest = rest;
        span
    }
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_digit() || ('a'..='f').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_halfword() {
        let line = InstructionLine::parse("    10d0: bf00           nop").unwrap();
        assert_eq!(line.first, 0xbf00);
        assert_eq!(line.second, None);
        assert_eq!(line.mnemonic, "nop");
        assert_eq!(line.operands, "");
    }

    #[test]
    fn test_double_halfword() {
        let line =
            InstructionLine::parse("    1168: fa8c fa8b      qadd    r10, r11, r12").unwrap();
        assert_eq!(line.first, 0xfa8c);
        assert_eq!(line.second, Some(0xfa8b));
        assert_eq!(line.mnemonic, "qadd");
        assert_eq!(line.operands, "r10, r11, r12");
    }

    #[test]
    fn test_tab_separated_columns() {
        let line = InstructionLine::parse("    1000: f04f 0b00    \tmov.w\tr11, #0").unwrap();
        assert_eq!(line.first, 0xf04f);
        assert_eq!(line.second, Some(0x0b00));
        assert_eq!(line.mnemonic, "mov.w");
        assert_eq!(line.operands, "r11, #0");
    }

    #[test]
    fn test_symbol_and_imm_trailers_discarded() {
        let line = InstructionLine::parse(
            "    1132: e7f7           b       0x1124 <label_b>        @ imm = #-0x12",
        )
        .unwrap();
        assert_eq!(line.first, 0xe7f7);
        assert_eq!(line.second, None);
        assert_eq!(line.mnemonic, "b");
        assert_eq!(line.operands, "0x1124");
    }

    #[test]
    fn test_end_of_line_comment_discarded() {
        let line = InstructionLine::parse("    10d0: bf00           nop ; padding").unwrap();
        assert_eq!(line.mnemonic, "nop");
        assert_eq!(line.operands, "");
    }

    #[test]
    fn test_operands_lowercased() {
        let line = InstructionLine::parse("    1004: 6808         \tldr\tR0, [R1]").unwrap();
        assert_eq!(line.operands, "r0, [r1]");
    }

    #[test]
    fn test_non_instruction_lines() {
        for line in [
            "",
            "encode.o:\tfile format elf32-littlearm",
            "Disassembly of section .text:",
            "00001124 <label_b>:",
            "    1124:",
            "not a listing line at all",
        ] {
            assert_eq!(InstructionLine::parse(line), None, "line: {:?}", line);
        }
    }

    #[test]
    fn test_halfword_must_be_four_digits() {
        // A 5-digit hex group is not a halfword; the line is dropped rather
        // than misparsed.
        assert_eq!(InstructionLine::parse("    1000: fa8cf   nop"), None);
        assert_eq!(InstructionLine::parse("    1000: fa8 nop"), None);
    }
}
