//! Helper module with the SGR attribute snapshot and its reducer.
//!
//! The hard part of select-graphic-rendition parsing isn't the table of
//! codes — it's remembering, for each attribute, whether the most recent SGR
//! sequence *mentioned* it at all. A naive representation that only stores
//! booleans or only stores optional colors silently conflates "not
//! mentioned" with "explicitly turned off", which loses SGR 39/22/24
//! semantics. [`AttributeSnapshot::specified`] is the authoritative record of
//! what was mentioned; the color slots are a cache of the mentioned values.

use crate::token::Color;
use crate::util::parse_decimal_u32;

/// Per-attribute record of whether the most recent SGR sequence mentioned
/// that attribute, and if so, what value it requested.
///
/// `Some(true)` means explicitly enabled, `Some(false)` means explicitly
/// disabled (including the "reset to default" forms SGR 39/49), and `None`
/// means the attribute was not mentioned at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Specified {
    pub reset: Option<bool>,
    pub bold: Option<bool>,
    pub faint: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub inverse: Option<bool>,
    pub foreground: Option<bool>,
    pub background: Option<bool>,
}

/// A snapshot of the attribute changes requested by one SGR sequence.
///
/// Equality is structural over `(foreground, background, specified)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSnapshot {
    foreground: Option<Color>,
    background: Option<Color>,
    specified: Specified,
}

impl AttributeSnapshot {
    /// The snapshot produced by SGR `0`: both colors cleared, and only
    /// `reset` marked as specified.
    fn reset() -> Self {
        Self {
            foreground: None,
            background: None,
            specified: Specified {
                reset: Some(true),
                ..Specified::default()
            },
        }
    }

    /// Get the foreground color, if one is specified and non-default.
    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    /// Get the background color, if one is specified and non-default.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Get the specified-attribute record.
    pub fn specified(&self) -> Specified {
        self.specified
    }
}

/// Split an SGR parameter body on `;`, mapping each empty component (and an
/// entirely empty body) to the integer `0`.
fn split_params(body: &str) -> Vec<u32> {
    if body.is_empty() {
        return vec![0];
    }
    body.split(';')
        .map(|part| parse_decimal_u32(part.as_bytes()).unwrap_or(0))
        .collect()
}

/// Consume the extended-color parameters following a `38`/`48` code.
///
/// `index` points at the `38`/`48` parameter itself; on success it is
/// advanced past the consumed sub-parameters. On failure (unknown selector
/// or too few remaining parameters) the 38/48 is silently ignored and
/// `index` is left untouched, matching spec.md's "no attribute change, no
/// error" rule.
fn extended_color(params: &[u32], index: &mut usize) -> Option<Color> {
    let start = *index;
    match params.get(start + 1)? {
        2 => {
            if start + 4 >= params.len() {
                return None;
            }
            let clamp = |n: u32| u8::try_from(n).unwrap_or(u8::MAX);
            let color = Color::Rgb(
                clamp(params[start + 2]),
                clamp(params[start + 3]),
                clamp(params[start + 4]),
            );
            *index += 4;
            Some(color)
        }
        5 => {
            if start + 2 >= params.len() {
                return None;
            }
            let palette = u8::try_from(params[start + 2]).unwrap_or(u8::MAX);
            *index += 2;
            Some(Color::Palette(palette))
        }
        _ => None,
    }
}

/// Fold an SGR parameter body into an [`AttributeSnapshot`].
///
/// `body` is the CSI `m` sequence's parameter text, excluding the leading
/// `CSI` and the trailing `m`.
pub(crate) fn reduce(body: &str) -> AttributeSnapshot {
    let params = split_params(body);
    let mut snapshot = AttributeSnapshot::default();

    let mut index = 0;
    while index < params.len() {
        let code = params[index];
        match code {
            0 => snapshot = AttributeSnapshot::reset(),
            1 => snapshot.specified.bold = Some(true),
            2 => snapshot.specified.faint = Some(true),
            3 => snapshot.specified.italic = Some(true),
            4 => snapshot.specified.underlined = Some(true),
            7 => snapshot.specified.inverse = Some(true),
            22 => {
                snapshot.specified.bold = Some(false);
                snapshot.specified.faint = Some(false);
            }
            23 => snapshot.specified.italic = Some(false),
            24 => snapshot.specified.underlined = Some(false),
            27 => snapshot.specified.inverse = Some(false),
            30..=37 => {
                snapshot.foreground = Some(Color::Standard(u8::try_from(code - 30).unwrap_or(0)));
                snapshot.specified.foreground = Some(true);
            }
            39 => {
                snapshot.foreground = None;
                snapshot.specified.foreground = Some(false);
            }
            40..=47 => {
                snapshot.background = Some(Color::Standard(u8::try_from(code - 40).unwrap_or(0)));
                snapshot.specified.background = Some(true);
            }
            49 => {
                snapshot.background = None;
                snapshot.specified.background = Some(false);
            }
            90..=97 => {
                snapshot.foreground = Some(Color::Bright(u8::try_from(code - 90).unwrap_or(0)));
                snapshot.specified.foreground = Some(true);
            }
            100..=107 => {
                snapshot.background = Some(Color::Bright(u8::try_from(code - 100).unwrap_or(0)));
                snapshot.specified.background = Some(true);
            }
            38 => {
                if let Some(color) = extended_color(&params, &mut index) {
                    snapshot.foreground = Some(color);
                    snapshot.specified.foreground = Some(true);
                }
            }
            48 => {
                if let Some(color) = extended_color(&params, &mut index) {
                    snapshot.background = Some(color);
                    snapshot.specified.background = Some(true);
                }
            }
            _ => {}
        }
        index += 1;
    }

    snapshot
}
