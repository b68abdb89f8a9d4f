//! Helper module that projects an [`AttributeSnapshot`] into an ordered list
//! of attribute changes.
//!
//! A snapshot records *what was specified*; a projection turns that record
//! into something a renderer can fold over directly, in a fixed field order
//! so that two equal snapshots always project to the same sequence.

use crate::attr::AttributeSnapshot;
use crate::token::Color;

/// One attribute change extracted from an [`AttributeSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Reset,
    Bold(bool),
    Faint(bool),
    Italic(bool),
    Underlined(bool),
    Inverse(bool),
    Foreground(Color),
    ForegroundDefault,
    Background(Color),
    BackgroundDefault,
}

/// Project a snapshot's specified attributes into an ordered list of
/// changes, in the fixed order: reset, bold, faint, italic, underlined,
/// inverse, foreground, background.
///
/// Unspecified attributes are omitted entirely rather than projected as a
/// no-op, since the snapshot never recorded what they should become.
pub fn project(snapshot: &AttributeSnapshot) -> Vec<Attribute> {
    let specified = snapshot.specified();
    let mut changes = Vec::new();

    if specified.reset.is_some() {
        changes.push(Attribute::Reset);
    }
    if let Some(value) = specified.bold {
        changes.push(Attribute::Bold(value));
    }
    if let Some(value) = specified.faint {
        changes.push(Attribute::Faint(value));
    }
    if let Some(value) = specified.italic {
        changes.push(Attribute::Italic(value));
    }
    if let Some(value) = specified.underlined {
        changes.push(Attribute::Underlined(value));
    }
    if let Some(value) = specified.inverse {
        changes.push(Attribute::Inverse(value));
    }
    if specified.foreground.is_some() {
        changes.push(match snapshot.foreground() {
            Some(color) => Attribute::Foreground(color),
            None => Attribute::ForegroundDefault,
        });
    }
    if specified.background.is_some() {
        changes.push(match snapshot.background() {
            Some(color) => Attribute::Background(color),
            None => Attribute::BackgroundDefault,
        });
    }

    changes
}

#[cfg(test)]
mod test {
    use super::{project, Attribute};
    use crate::attr;
    use crate::token::Color;

    #[test]
    fn test_bold_and_palette_foreground_order() {
        let snapshot = attr::reduce("1;38;5;12");
        assert_eq!(
            project(&snapshot),
            vec![
                Attribute::Bold(true),
                Attribute::Foreground(Color::Palette(12)),
            ]
        );
    }

    #[test]
    fn test_reset_and_foreground_order() {
        let snapshot = attr::reduce(";31");
        assert_eq!(
            project(&snapshot),
            vec![Attribute::Reset, Attribute::Foreground(Color::Standard(1))]
        );
    }

    #[test]
    fn test_bold_off_and_faint_off_order() {
        let snapshot = attr::reduce("22");
        assert_eq!(
            project(&snapshot),
            vec![Attribute::Bold(false), Attribute::Faint(false)]
        );
    }

    #[test]
    fn test_default_foreground_projection() {
        let snapshot = attr::reduce("39");
        assert_eq!(project(&snapshot), vec![Attribute::ForegroundDefault]);
    }

    #[test]
    fn test_empty_snapshot_projects_nothing() {
        let snapshot = crate::attr::AttributeSnapshot::default();
        assert!(project(&snapshot).is_empty());
    }
}
