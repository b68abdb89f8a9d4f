//! Helper module with the tokens this crate's [`Tokenizer`](crate::Tokenizer)
//! emits.

use crate::attr::AttributeSnapshot;
use crate::control::ControlKey;
use crate::mouse::MouseEvent;

/// A token produced by the tokenizer.
///
/// Tokens are immutable, owned values: once dispatched, a token outlives the
/// tokenizer call that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// One or more UTF-8 characters, excluding C0/DEL controls and `ESC`.
    Text(String),
    /// A C0 control character or DEL.
    Control(ControlKey),
    /// A cursor-movement key.
    Cursor(CursorKey),
    /// A function or editing key.
    Function(FunctionKey),
    /// A meta/alt combination, or a lone/aborted escape.
    Meta(MetaKey),
    /// A terminal-to-host response.
    Response(TerminalResponse),
    /// A select-graphic-rendition escape sequence.
    Ansi(AnsiFormat),
    /// A mouse event.
    Mouse(MouseEvent),
}

/// A cursor-movement key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorKey {
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    PageUp,
    PageDown,
}

/// A function or editing key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    /// `F1` through `F12`.
    F(u8),
    Insert,
    Delete,
    /// A well-formed but unrecognized function-key sequence, along with the
    /// raw sequence text for diagnostics or replay.
    Unknown(String),
}

/// A meta/alt key combination, or a lone/aborted escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKey {
    /// `ESC` followed immediately by a printable character: alt/meta-`char`.
    Alt(char),
    /// A lone trailing `ESC`, or `ESC` followed by a C0 control byte.
    Escape,
}

/// A terminal-to-host response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalResponse {
    /// `CSI row ; column R` — the cursor position report.
    CursorPosition(u32, u32),
    /// `CSI [>] Ps [; Ps ...] c` — the device attributes report.
    DeviceAttributes {
        values: Vec<u32>,
        is_private: bool,
    },
    /// `CSI Ps n` — a generic status report.
    StatusReport(u32),
    /// `OSC code ; data (BEL | ST)` — an operating system command.
    OperatingSystemCommand { code: u32, data: String },
    /// A recognized but semantically unmapped CSI final byte, given
    /// verbatim. Recognizable framing never raises an error, even when the
    /// contents are unrecognized.
    Text(String),
}

/// A select-graphic-rendition escape sequence, along with its effect.
///
/// The raw `sequence` is preserved verbatim (decoded as UTF-8) so that the
/// token can be replayed exactly as received.
#[derive(Clone, Debug, PartialEq)]
pub struct AnsiFormat {
    pub sequence: String,
    pub attributes: AttributeSnapshot,
}

/// A terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 8 standard ANSI colors (SGR 30-37/40-47).
    Standard(u8),
    /// One of the 8 bright ANSI colors (SGR 90-97/100-107).
    Bright(u8),
    /// An indexed 256-color palette entry (SGR 38/48;5;n).
    Palette(u8),
    /// A 24-bit truecolor value (SGR 38/48;2;r;g;b).
    Rgb(u8, u8, u8),
}
