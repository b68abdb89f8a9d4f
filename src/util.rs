//! Helper module with utilities shared across the tokenizer's sub-parsers.

/// Nicely format the byte with the given writer.
///
/// This function writes
///
///   * printable ASCII characters as just that, ASCII characters;
///   * replaces common C0 controls with short mnemonics between `‹›`, e.g.
///     `‹bel›`;
///   * formats all other bytes as two-digit hexadecimal numbers, again
///     between `‹›`, e.g. `‹1a›` for SUB.
///
/// # Examples
///
/// ```
/// # use vtscan::util::format_nicely;
/// let mut buffer = String::new();
/// for byte in b"\x1b[31m\x07" {
///     format_nicely(*byte, &mut buffer).unwrap();
/// }
/// assert_eq!(buffer, "‹esc›[31m‹bel›");
/// ```
pub fn format_nicely(byte: u8, writer: &mut impl std::fmt::Write) -> std::fmt::Result {
    if (0x20..=0x7e).contains(&byte) {
        return writer.write_char(byte as char);
    }

    let mnemonic = match byte {
        0x00 => "nul",
        0x07 => "bel",
        0x08 => "bs",
        0x09 => "tab",
        0x0a => "lf",
        0x0b => "vt",
        0x0c => "ff",
        0x0d => "cr",
        0x18 => "can",
        0x1a => "sub",
        0x1b => "esc",
        0x7f => "del",
        _ => "",
    };
    if !mnemonic.is_empty() {
        return write!(writer, "‹{mnemonic}›");
    }

    write!(writer, "‹{byte:02x}›")
}

// ------------------------------------------------------------------------------------------------

/// Parse a byte slice of ASCII decimal digits into a `u32`.
///
/// Returns `None` if the slice is empty, contains a non-digit byte, or
/// overflows `u32`. Unlike a plain `str::parse`, this operates directly on
/// the raw bytes the tokenizer already has in hand, avoiding a UTF-8
/// re-validation of a byte range that is known to be ASCII.
pub(crate) fn parse_decimal_u32(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }

    let mut result: u32 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(byte - b'0');
        result = result.checked_mul(10)?.checked_add(digit)?;
    }
    Some(result)
}
