//! # vtscan
//!
//! An incremental, resumable tokenizer for xterm-compatible terminal input.
//!
//! Feed it bytes as they arrive — from a pty, a test fixture, a replay log,
//! it doesn't matter which — via [`Tokenizer::enqueue`], and it calls back
//! once for every [`Token`] or [`Error`](err::Error) it can extract from
//! what's been fed so far. A sequence split across two `enqueue` calls
//! yields exactly the tokens and errors it would have yielded whole; bytes
//! that don't yet form a complete token stay buffered until the rest
//! arrives.
//!
//! This crate does not read bytes from a file descriptor, does not generate
//! terminal output, and does not track screen state. It only turns bytes in
//! one direction — from the terminal to the application — into structured
//! tokens.
//!
//! # Example
//!
//! ```
//! # use vtscan::Tokenizer;
//! # use vtscan::token::{Token, CursorKey};
//! let mut tokenizer = Tokenizer::new();
//! let mut tokens = Vec::new();
//! tokenizer.enqueue(b"hi\x1b[A", |outcome| tokens.push(outcome));
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0], Ok(Token::Text("hi".to_string())));
//! assert_eq!(tokens[1], Ok(Token::Cursor(CursorKey::Up)));
//! ```
//!
//! # Modules
//!
//! [`token`] defines the [`Token`] enumeration this crate emits and its
//! payload types. [`attr`] and [`projector`] together handle SGR attribute
//! changes: folding a parameter list into a snapshot, and projecting a
//! snapshot into an ordered list of changes for replay. [`mouse`] decodes
//! both SGR-1006 and legacy X10 mouse reports. [`opt`] configures a
//! [`Tokenizer`]; [`err`] is its error type.

pub mod attr;
pub mod control;
pub mod err;
pub mod mouse;
pub mod opt;
pub mod projector;
pub mod token;
pub mod util;

mod buffer;
mod tokenizer;

pub use err::Error;
pub use token::Token;
pub use tokenizer::Tokenizer;
