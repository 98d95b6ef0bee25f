//! Banner text form state.
//!
//! `FormState` is the single owned snapshot of everything the user has typed
//! or selected outside the color channels: the input text, the banner style,
//! the alignment, and the raw comma-separated color-target list. The host
//! binds inputs to one `FormState` value and reads the derived accessors
//! (`parsed_targets`, `counter_label`) instead of re-deriving rules in the
//! view layer.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::TEXT_SOFT_LIMIT;

/// Banner style offered by the rendering service: `(value, label)`.
pub const BANNER_STYLES: &[(&str, &str)] = &[
    ("standard", "Standard"),
    ("shadow", "Shadow"),
    ("thinkertoy", "Thinkertoy"),
];

/// Banner style selected before the user touches the dropdown.
pub const DEFAULT_BANNER: &str = "standard";

/// Label for a banner style value, if it is one of [`BANNER_STYLES`].
#[must_use]
pub fn banner_label(value: &str) -> Option<&'static str> {
    BANNER_STYLES
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, label)| *label)
}

/// Horizontal placement of the rendered art inside the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// All alignments, in display order.
pub const ALIGNMENTS: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

impl Alignment {
    /// Wire value sent to the rendering service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Label shown next to the alignment radio.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }

    /// CSS class applied to the preview container after a successful render.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Alignment::Left => "align-left",
            Alignment::Center => "align-center",
            Alignment::Right => "align-right",
        }
    }

    /// Parse a wire value back into an alignment. Used by the CLI flag.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Everything the form inputs hold, minus the three color channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    /// Raw input text, untrimmed.
    pub text: String,
    /// Selected banner style value (one of [`BANNER_STYLES`]).
    pub banner: String,
    /// Selected alignment.
    pub alignment: Alignment,
    /// Raw comma-separated target list as typed; parsed on demand.
    pub color_targets: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            banner: DEFAULT_BANNER.to_owned(),
            alignment: Alignment::default(),
            color_targets: String::new(),
        }
    }
}

impl FormState {
    /// Input text with surrounding whitespace removed. Empty means "nothing
    /// to render" and suppresses generation entirely.
    #[must_use]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Targets parsed from the comma-separated list: trimmed, empties
    /// dropped, duplicates kept (the service accepts repeats).
    #[must_use]
    pub fn parsed_targets(&self) -> Vec<String> {
        self.color_targets
            .split(',')
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Character count backing the counter display.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the counter should show its over-limit style.
    #[must_use]
    pub fn over_limit(&self) -> bool {
        self.char_count() > TEXT_SOFT_LIMIT
    }

    /// Counter text, e.g. `42/1000000`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), TEXT_SOFT_LIMIT)
    }

    /// Restore every field to its default. Used by the clear action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
