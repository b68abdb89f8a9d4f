//! Helper module with the top-level tokenizer state machine.
//!
//! [`Tokenizer`] is the crate's only entry point: feed it bytes as they
//! arrive from wherever they come from (a pty, a test fixture, a replay
//! log — the tokenizer doesn't know or care) via [`Tokenizer::enqueue`], and
//! it calls back once per token or error it can extract from what's been
//! fed so far. Bytes that don't yet form a complete token are held in the
//! internal buffer until the next call supplies the rest.

use crate::attr;
use crate::buffer::ByteBuffer;
use crate::control;
use crate::err::Error;
use crate::mouse;
use crate::opt::Options;
use crate::token::{AnsiFormat, CursorKey, FunctionKey, MetaKey, Token, TerminalResponse};
use crate::util::parse_decimal_u32;

/// The outcome of one parsing step: either a token/error spanning some
/// prefix of the buffer, or a declaration that the buffer doesn't yet hold
/// enough bytes to decide.
enum StepResult {
    Complete(usize, Result<Token, Error>),
    Incomplete,
}

/// The result of scanning for a CSI sequence's final byte.
enum Scan {
    Found(usize),
    NeedMore,
}

/// The result of scanning for an OSC sequence's terminator.
enum OscEnd {
    Bel(usize),
    St(usize),
    NeedMore,
}

/// A resumable, byte-level tokenizer for xterm-compatible terminal input.
///
/// All state lives in one internal [`ByteBuffer`]; the tokenizer never reads
/// from or writes to any I/O source itself.
pub struct Tokenizer {
    buffer: ByteBuffer,
    options: Options,
}

impl Tokenizer {
    /// Create a new tokenizer with default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a new tokenizer with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            buffer: ByteBuffer::with_options(&options),
            options,
        }
    }

    /// Append `bytes` to the tokenizer's internal buffer and dispatch every
    /// token or error that can now be fully determined.
    ///
    /// `dispatch` may be called zero or more times per call to `enqueue`,
    /// including zero times if `bytes` only extends a sequence that's still
    /// incomplete. Bytes that remain part of an incomplete sequence stay
    /// buffered for the next call.
    pub fn enqueue(&mut self, bytes: &[u8], mut dispatch: impl FnMut(Result<Token, Error>)) {
        self.buffer.extend(bytes);

        while let Some(result) = self.step() {
            match result {
                StepResult::Complete(len, outcome) => {
                    self.buffer.drop_front(len);
                    dispatch(outcome);
                }
                StepResult::Incomplete => break,
            }
        }
    }

    /// Attempt one parsing step against the current buffer contents.
    ///
    /// Returns `None` once the buffer is empty, which is the signal that
    /// [`enqueue`](Self::enqueue) should stop looping.
    fn step(&mut self) -> Option<StepResult> {
        let data = self.buffer.as_slice();
        if data.is_empty() {
            return None;
        }

        let first = data[0];
        if first == 0x1b {
            return Some(parse_escape(data, self.options.pathological_size()));
        }
        if let Some(key) = control::lookup(first) {
            return Some(StepResult::Complete(1, Ok(Token::Control(key))));
        }
        Some(parse_text(data))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("buffer", &self.buffer)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Parse the maximal leading run of plain text: bytes that are neither C0
/// controls, `DEL`, nor `ESC`.
fn parse_text(data: &[u8]) -> StepResult {
    let span_len = data
        .iter()
        .position(|&b| b < 0x20 || b == 0x7f)
        .unwrap_or(data.len());
    let span = &data[..span_len];

    match std::str::from_utf8(span) {
        Ok(text) => StepResult::Complete(span.len(), Ok(Token::Text(text.to_owned()))),
        Err(error) => {
            let valid_up_to = error.valid_up_to();
            if valid_up_to > 0 {
                let text = std::str::from_utf8(&span[..valid_up_to])
                    .expect("prefix up to valid_up_to is valid UTF-8 by definition");
                return StepResult::Complete(valid_up_to, Ok(Token::Text(text.to_owned())));
            }

            match error.error_len() {
                // The run is cut short by a control/DEL/ESC byte, yet the
                // bytes preceding it still don't form valid UTF-8, and never
                // will: more input won't fix a run that's already bounded.
                None if span.len() != data.len() => {
                    StepResult::Complete(span.len(), Err(Error::invalid_utf8(span)))
                }
                None => StepResult::Incomplete,
                Some(n) => StepResult::Complete(n, Err(Error::invalid_utf8(&span[..n]))),
            }
        }
    }
}

/// Parse a sequence starting with `ESC`.
fn parse_escape(data: &[u8], pathological: usize) -> StepResult {
    debug_assert_eq!(data[0], 0x1b);

    if data.len() == 1 {
        return StepResult::Complete(1, Ok(Token::Meta(MetaKey::Escape)));
    }

    match data[1] {
        b'[' => parse_csi(data, pathological),
        b'O' => parse_ss3(data),
        b']' => parse_osc(data, pathological),
        second if second < 0x20 => {
            // ESC immediately followed by a control byte (or another ESC,
            // since 0x1b < 0x20 too) is an aborted escape: report it alone
            // and let the next step reprocess the following byte on its own
            // terms.
            StepResult::Complete(1, Ok(Token::Meta(MetaKey::Escape)))
        }
        second => StepResult::Complete(2, Ok(Token::Meta(MetaKey::Alt(second as char)))),
    }
}

/// Parse an SS3 sequence (`ESC O <final>`).
fn parse_ss3(data: &[u8]) -> StepResult {
    if data.len() < 3 {
        return StepResult::Incomplete;
    }

    let token = match data[2] {
        b'A' => Token::Cursor(CursorKey::Up),
        b'B' => Token::Cursor(CursorKey::Down),
        b'C' => Token::Cursor(CursorKey::Right),
        b'D' => Token::Cursor(CursorKey::Left),
        b'H' => Token::Cursor(CursorKey::Home),
        b'F' => Token::Cursor(CursorKey::End),
        b'P' => Token::Function(FunctionKey::F(1)),
        b'Q' => Token::Function(FunctionKey::F(2)),
        b'R' => Token::Function(FunctionKey::F(3)),
        b'S' => Token::Function(FunctionKey::F(4)),
        _ => Token::Function(FunctionKey::Unknown(lossy_text(&data[..3]))),
    };
    StepResult::Complete(3, Ok(token))
}

/// Scan a CSI sequence for its final byte (`0x40..=0x7e`), starting just
/// after `ESC [`. Everything before it is the sequence's parameter text,
/// whatever it contains.
fn scan_csi_tail(data: &[u8]) -> Scan {
    let mut index = 2;
    while index < data.len() {
        if (0x40..=0x7e).contains(&data[index]) {
            return Scan::Found(index);
        }
        index += 1;
    }
    Scan::NeedMore
}

/// Parse a CSI sequence (`ESC [ ...`), including the legacy X10 mouse report
/// framing that hijacks the CSI prefix without following its grammar.
fn parse_csi(data: &[u8], pathological: usize) -> StepResult {
    if data.len() >= 3 && data[2] == b'M' {
        if data.len() < 6 {
            return StepResult::Incomplete;
        }
        let outcome = mouse::decode_legacy(data[3], data[4], data[5]).map(Token::Mouse);
        return StepResult::Complete(6, outcome);
    }

    match scan_csi_tail(data) {
        Scan::NeedMore => {
            if data.len() > pathological {
                StepResult::Complete(data.len(), Err(Error::pathological_sequence(data)))
            } else {
                StepResult::Incomplete
            }
        }
        Scan::Found(final_index) => {
            let full_len = final_index + 1;
            let body = &data[2..final_index];
            let final_byte = data[final_index];
            let outcome = interpret_csi(body, final_byte, &data[..full_len]);
            StepResult::Complete(full_len, outcome)
        }
    }
}

/// Interpret a fully-scanned CSI sequence's body and final byte.
fn interpret_csi(body: &[u8], final_byte: u8, raw: &[u8]) -> Result<Token, Error> {
    if body.first() == Some(&b'<') {
        return interpret_sgr_mouse(&body[1..], final_byte, raw);
    }

    match final_byte {
        b'A' => Ok(Token::Cursor(CursorKey::Up)),
        b'B' => Ok(Token::Cursor(CursorKey::Down)),
        b'C' => Ok(Token::Cursor(CursorKey::Right)),
        b'D' => Ok(Token::Cursor(CursorKey::Left)),
        b'H' => Ok(Token::Cursor(CursorKey::Home)),
        b'F' => Ok(Token::Cursor(CursorKey::End)),
        b'~' => interpret_tilde(body, raw),
        b'R' => interpret_cursor_position(body, raw),
        b'c' => Ok(interpret_device_attributes(body, raw)),
        b'n' => interpret_status_report(body, raw),
        b'm' => {
            let body_str = std::str::from_utf8(body).unwrap_or_default();
            Ok(Token::Ansi(AnsiFormat {
                sequence: lossy_text(raw),
                attributes: attr::reduce(body_str),
            }))
        }
        _ => Ok(fallback_text(raw)),
    }
}

/// Interpret a tilde-terminated editing/function key (`CSI Ps ~`).
fn interpret_tilde(body: &[u8], raw: &[u8]) -> Result<Token, Error> {
    let Some(code) = parse_decimal_u32(body) else {
        return Err(Error::invalid_sequence(raw));
    };

    let token = match code {
        2 => Token::Function(FunctionKey::Insert),
        3 => Token::Function(FunctionKey::Delete),
        5 => Token::Cursor(CursorKey::PageUp),
        6 => Token::Cursor(CursorKey::PageDown),
        15 => Token::Function(FunctionKey::F(5)),
        17..=21 => Token::Function(FunctionKey::F(u8::try_from(code - 11).unwrap_or(0))),
        23..=24 => Token::Function(FunctionKey::F(u8::try_from(code - 12).unwrap_or(0))),
        _ => Token::Function(FunctionKey::Unknown(lossy_text(raw))),
    };
    Ok(token)
}

/// Interpret a cursor position report (`CSI row ; column R`).
fn interpret_cursor_position(body: &[u8], raw: &[u8]) -> Result<Token, Error> {
    match split_decimal_params(body).as_deref() {
        Some([row, column]) => Ok(Token::Response(TerminalResponse::CursorPosition(
            *row, *column,
        ))),
        _ => Err(Error::invalid_sequence(raw)),
    }
}

/// Interpret a generic status report (`CSI Ps n`).
fn interpret_status_report(body: &[u8], raw: &[u8]) -> Result<Token, Error> {
    match split_decimal_params(body).as_deref() {
        Some([value]) => Ok(Token::Response(TerminalResponse::StatusReport(*value))),
        _ => Err(Error::invalid_sequence(raw)),
    }
}

/// Interpret a device attributes report (`CSI [ > ] Ps [; Ps ...] c`).
///
/// Only a leading `>` is recognized as the private-marker prefix; a leading
/// `?` is left in place, which then fails the numeric split below and falls
/// back to [`fallback_text`].
fn interpret_device_attributes(body: &[u8], raw: &[u8]) -> Token {
    let (is_private, rest) = match body.first() {
        Some(b'>') => (true, &body[1..]),
        _ => (false, body),
    };

    match split_decimal_params(rest) {
        Some(values) => Token::Response(TerminalResponse::DeviceAttributes { values, is_private }),
        None => fallback_text(raw),
    }
}

/// Interpret an SGR-1006 mouse report's body, after the leading `<` marker
/// has already been stripped.
fn interpret_sgr_mouse(rest: &[u8], final_byte: u8, raw: &[u8]) -> Result<Token, Error> {
    if final_byte != b'M' && final_byte != b'm' {
        return Ok(fallback_text(raw));
    }

    let token = match split_decimal_params(rest).as_deref() {
        Some([button, column, row]) => {
            Token::Mouse(mouse::decode_sgr(*button, *column, *row, final_byte == b'm'))
        }
        _ => fallback_text(raw),
    };
    Ok(token)
}

/// A recognized but semantically unmapped CSI sequence never raises an
/// error; it's reported verbatim instead.
fn fallback_text(raw: &[u8]) -> Token {
    Token::Response(TerminalResponse::Text(lossy_text(raw)))
}

/// Split a `;`-separated run of decimal parameters. Returns `None` if any
/// component fails to parse, including a deliberately-empty component (CSI
/// responses, unlike SGR, don't tolerate an implicit-zero shorthand).
fn split_decimal_params(bytes: &[u8]) -> Option<Vec<u32>> {
    if bytes.is_empty() {
        return Some(Vec::new());
    }
    bytes.split(|&b| b == b';').map(parse_decimal_u32).collect()
}

/// Scan an OSC sequence's body for its terminator: `BEL` or `ESC \`. A lone
/// `ESC` not followed by `\` is just another body byte; scanning continues
/// past it rather than aborting the sequence.
fn scan_osc(data: &[u8]) -> OscEnd {
    let mut index = 2;
    while index < data.len() {
        match data[index] {
            0x07 => return OscEnd::Bel(index),
            0x1b if data.get(index + 1) == Some(&b'\\') => return OscEnd::St(index),
            _ => index += 1,
        }
    }
    OscEnd::NeedMore
}

/// Parse an OSC sequence (`ESC ] ...`).
fn parse_osc(data: &[u8], pathological: usize) -> StepResult {
    match scan_osc(data) {
        OscEnd::NeedMore => {
            if data.len() > pathological {
                StepResult::Complete(data.len(), Err(Error::pathological_sequence(data)))
            } else {
                StepResult::Incomplete
            }
        }
        OscEnd::Bel(terminator) => {
            let body = &data[2..terminator];
            let full_len = terminator + 1;
            StepResult::Complete(full_len, interpret_osc(body, &data[..full_len]))
        }
        OscEnd::St(terminator) => {
            let body = &data[2..terminator];
            let full_len = terminator + 2;
            StepResult::Complete(full_len, interpret_osc(body, &data[..full_len]))
        }
    }
}

/// Interpret an OSC body as `code ; data`, splitting on the first `;`. If
/// there is no `;` at all, the whole body is the code and `data` is empty.
/// `data` itself is never interpreted beyond decoding it as (possibly lossy)
/// UTF-8.
fn interpret_osc(body: &[u8], raw: &[u8]) -> Result<Token, Error> {
    let (code_bytes, data) = match body.iter().position(|&b| b == b';') {
        Some(separator) => (&body[..separator], lossy_text(&body[separator + 1..])),
        None => (body, String::new()),
    };
    let Some(code) = parse_decimal_u32(code_bytes) else {
        return Err(Error::invalid_sequence(raw));
    };
    Ok(Token::Response(TerminalResponse::OperatingSystemCommand {
        code,
        data,
    }))
}

/// Decode bytes as UTF-8, substituting the replacement character for any
/// invalid sequence rather than failing. Used only for raw-sequence and
/// payload text that the crate otherwise never rejects a token over.
fn lossy_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod test {
    use super::Tokenizer;
    use crate::attr;
    use crate::control::ControlKey;
    use crate::err::ErrorKind;
    use crate::mouse::{MouseAction, MouseButton};
    use crate::token::{Color, CursorKey, FunctionKey, MetaKey, Token, TerminalResponse};

    fn collect(tokenizer: &mut Tokenizer, bytes: &[u8]) -> Vec<Result<Token, crate::err::Error>> {
        let mut results = Vec::new();
        tokenizer.enqueue(bytes, |outcome| results.push(outcome));
        results
    }

    #[test]
    fn test_plain_text() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"hello");
        assert_eq!(results, vec![Ok(Token::Text("hello".to_owned()))]);
    }

    #[test]
    fn test_bell_control() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x07");
        assert_eq!(results, vec![Ok(Token::Control(ControlKey::Bell))]);
    }

    #[test]
    fn test_lone_trailing_escape() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b");
        assert_eq!(results, vec![Ok(Token::Meta(MetaKey::Escape))]);
    }

    #[test]
    fn test_alt_combination() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1bx");
        assert_eq!(results, vec![Ok(Token::Meta(MetaKey::Alt('x')))]);
    }

    #[test]
    fn test_escape_followed_by_control_byte_aborts_the_escape() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b\x01");
        assert_eq!(
            results,
            vec![
                Ok(Token::Meta(MetaKey::Escape)),
                Ok(Token::Control(ControlKey::Soh)),
            ]
        );
    }

    #[test]
    fn test_alt_delete_is_not_escape_then_delete() {
        // DEL (0x7F) is >= 0x20, so it's an alt combination, not an aborted
        // escape -- even though DEL is itself a control-table entry.
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b\x7f");
        assert_eq!(results, vec![Ok(Token::Meta(MetaKey::Alt('\u{7f}')))]);
    }

    #[test]
    fn test_alt_combination_with_high_byte() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, &[0x1b, 0xc3]);
        assert_eq!(results, vec![Ok(Token::Meta(MetaKey::Alt('\u{c3}')))]);
    }

    #[test]
    fn test_cursor_up() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[A");
        assert_eq!(results, vec![Ok(Token::Cursor(CursorKey::Up))]);
    }

    #[test]
    fn test_function_key_f5() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[15~");
        assert_eq!(results, vec![Ok(Token::Function(FunctionKey::F(5)))]);
    }

    #[test]
    fn test_ss3_f1() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1bOP");
        assert_eq!(results, vec![Ok(Token::Function(FunctionKey::F(1)))]);
    }

    #[test]
    fn test_cursor_position_response() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[24;80R");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::CursorPosition(24, 80)))]
        );
    }

    #[test]
    fn test_operating_system_command() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b]0;title\x07");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 0,
                data: "title".to_owned(),
            }))]
        );
    }

    #[test]
    fn test_operating_system_command_without_semicolon() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b]4\x07");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::OperatingSystemCommand {
                code: 4,
                data: String::new(),
            }))]
        );
    }

    #[test]
    fn test_operating_system_command_non_numeric_code_is_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b]x;y\x07");
        assert_eq!(results.len(), 1);
        assert!(matches!(&results[0], Err(e) if e.kind() == ErrorKind::InvalidSequence));
    }

    #[test]
    fn test_tilde_non_numeric_parameter_is_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[x~");
        assert_eq!(results.len(), 1);
        assert!(matches!(&results[0], Err(e) if e.kind() == ErrorKind::InvalidSequence));
    }

    #[test]
    fn test_tilde_code_eleven_is_unknown_not_f1() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[11~");
        assert_eq!(
            results,
            vec![Ok(Token::Function(FunctionKey::Unknown("\x1b[11~".to_owned())))]
        );
    }

    #[test]
    fn test_cursor_position_malformed_is_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[24R");
        assert_eq!(results.len(), 1);
        assert!(matches!(&results[0], Err(e) if e.kind() == ErrorKind::InvalidSequence));
    }

    #[test]
    fn test_status_report_malformed_is_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[1;2n");
        assert_eq!(results.len(), 1);
        assert!(matches!(&results[0], Err(e) if e.kind() == ErrorKind::InvalidSequence));
    }

    #[test]
    fn test_device_attributes_question_mark_is_not_stripped() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[?1;2c");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::Text(
                "\x1b[?1;2c".to_owned()
            )))]
        );
    }

    #[test]
    fn test_device_attributes_strips_leading_angle_bracket() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[>1;2c");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::DeviceAttributes {
                values: vec![1, 2],
                is_private: true,
            }))]
        );
    }

    #[test]
    fn test_cursor_key_ignores_stray_parameter() {
        // The dispatch table keys cursor movement off the final byte alone;
        // any parameter bytes before it are ignored rather than rejected.
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[5A");
        assert_eq!(results, vec![Ok(Token::Cursor(CursorKey::Up))]);
    }

    #[test]
    fn test_sgr_chunked_across_two_enqueues() {
        let mut tokenizer = Tokenizer::new();
        let mut results = Vec::new();
        tokenizer.enqueue(b"\x1b[1;3", |outcome| results.push(outcome));
        assert!(results.is_empty());
        tokenizer.enqueue(b"1m", |outcome| results.push(outcome));
        assert_eq!(results.len(), 1);
        let Ok(Token::Ansi(format)) = &results[0] else {
            panic!("expected an Ansi token, got {:?}", results[0]);
        };
        assert_eq!(format.sequence, "\x1b[1;31m");
        assert_eq!(format.attributes, attr::reduce("1;31"));
    }

    #[test]
    fn test_sgr_mouse_press() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[<0;10;20M");
        let Ok(Token::Mouse(event)) = &results[0] else {
            panic!("expected a Mouse token, got {:?}", results[0]);
        };
        assert_eq!(event.button, MouseButton::Left);
        assert_eq!(event.action, MouseAction::Press);
        assert_eq!((event.column, event.row), (10, 20));
    }

    #[test]
    fn test_legacy_mouse_press() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[M\x20\x21\x22");
        let Ok(Token::Mouse(event)) = &results[0] else {
            panic!("expected a Mouse token, got {:?}", results[0]);
        };
        assert_eq!(event.button, MouseButton::Left);
        assert_eq!((event.column, event.row), (1, 2));
    }

    #[test]
    fn test_unrecognized_csi_final_byte_is_text_not_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[5z");
        assert_eq!(
            results,
            vec![Ok(Token::Response(TerminalResponse::Text("\x1b[5z".to_owned())))]
        );
    }

    #[test]
    fn test_invalid_utf8_reported_as_error() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, &[0xff, b'x']);
        assert_eq!(results.len(), 2);
        assert!(matches!(&results[0], Err(e) if e.kind() == ErrorKind::InvalidUtf8));
        assert_eq!(results[1], Ok(Token::Text("x".to_owned())));
    }

    #[test]
    fn test_chunked_utf8_across_two_enqueues() {
        let mut tokenizer = Tokenizer::new();
        let mut results = Vec::new();
        // "é" is 0xC3 0xA9 in UTF-8.
        tokenizer.enqueue(&[0xc3], |outcome| results.push(outcome));
        assert!(results.is_empty());
        tokenizer.enqueue(&[0xa9], |outcome| results.push(outcome));
        assert_eq!(results, vec![Ok(Token::Text("é".to_owned()))]);
    }

    #[test]
    fn test_pathological_csi_is_bounded() {
        let mut tokenizer = Tokenizer::with_options(
            crate::opt::Options::builder().pathological_size(8).build(),
        );
        let mut results = Vec::new();
        tokenizer.enqueue(b"\x1b[1111111111111111111", |outcome| results.push(outcome));
        assert_eq!(results.len(), 1);
        assert!(matches!(
            &results[0],
            Err(e) if e.kind() == ErrorKind::PathologicalSequence
        ));
    }

    #[test]
    fn test_truecolor_background() {
        let mut tokenizer = Tokenizer::new();
        let results = collect(&mut tokenizer, b"\x1b[48;2;1;2;3m");
        let Ok(Token::Ansi(format)) = &results[0] else {
            panic!("expected an Ansi token, got {:?}", results[0]);
        };
        assert_eq!(format.attributes.background(), Some(Color::Rgb(1, 2, 3)));
    }
}
