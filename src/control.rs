//! Helper module with the pure C0/DEL control table.

/// One of the 32 C0 control characters or DEL.
///
/// `ESC` (0x1B) is deliberately excluded — it initiates escape sequences
/// rather than standing on its own, and the tokenizer handles it via
/// [`crate::token::MetaKey`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ControlKey {
    Null,
    Soh,
    Stx,
    Etx,
    Eot,
    Enq,
    Ack,
    Bell,
    Backspace,
    Tab,
    LineFeed,
    VerticalTab,
    FormFeed,
    Return,
    ShiftOut,
    ShiftIn,
    Dle,
    Dc1,
    Dc2,
    Dc3,
    Dc4,
    Nak,
    Syn,
    Etb,
    Cancel,
    Em,
    Sub,
    FileSeparator,
    GroupSeparator,
    RecordSeparator,
    UnitSeparator,
    Delete,
}

/// Map a byte to its [`ControlKey`], if it is a C0 control or DEL.
///
/// Returns `None` for `ESC` (0x1B) and for any byte at or above 0x20 that
/// isn't DEL (0x7F).
pub(crate) fn lookup(byte: u8) -> Option<ControlKey> {
    use ControlKey::*;

    Some(match byte {
        0x00 => Null,
        0x01 => Soh,
        0x02 => Stx,
        0x03 => Etx,
        0x04 => Eot,
        0x05 => Enq,
        0x06 => Ack,
        0x07 => Bell,
        0x08 => Backspace,
        0x09 => Tab,
        0x0a => LineFeed,
        0x0b => VerticalTab,
        0x0c => FormFeed,
        0x0d => Return,
        0x0e => ShiftOut,
        0x0f => ShiftIn,
        0x10 => Dle,
        0x11 => Dc1,
        0x12 => Dc2,
        0x13 => Dc3,
        0x14 => Dc4,
        0x15 => Nak,
        0x16 => Syn,
        0x17 => Etb,
        0x18 => Cancel,
        0x19 => Em,
        0x1a => Sub,
        // 0x1b (ESC) excluded: it starts an escape sequence.
        0x1c => FileSeparator,
        0x1d => GroupSeparator,
        0x1e => RecordSeparator,
        0x1f => UnitSeparator,
        0x7f => Delete,
        _ => return None,
    })
}

#[cfg(test)]
mod test {
    use super::{lookup, ControlKey};

    #[test]
    fn test_bell_and_delete() {
        assert_eq!(lookup(0x07), Some(ControlKey::Bell));
        assert_eq!(lookup(0x7f), Some(ControlKey::Delete));
    }

    #[test]
    fn test_escape_excluded() {
        assert_eq!(lookup(0x1b), None);
    }

    #[test]
    fn test_printable_excluded() {
        assert_eq!(lookup(b'a'), None);
        assert_eq!(lookup(0x20), None);
    }
}
