//! Color channels and their preset radio mirrors.
//!
//! The studio tracks three colors: the global text color, the per-target
//! override color, and the preview background. Each is a `ColorChannel` whose
//! identity (defaults, radio group name, preset table, reaction to changes) is
//! fixed by its `ChannelKind` for the lifetime of the page, while the hex value
//! moves with user input. The radio mirroring rule lives here: a preset radio
//! is checked exactly when its value equals the channel's current color on the
//! canonical lowercase `#rrggbb` form, so picker-cased values like `#FF0000`
//! still select their preset and unknown colors leave the whole group
//! unchecked.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use crate::consts::{DEFAULT_BACKGROUND_COLOR, DEFAULT_GLOBAL_COLOR, DEFAULT_TARGET_COLOR};

/// Preset options for the global text color: `(value, label)`.
pub const GLOBAL_PRESETS: &[(&str, &str)] = &[
    ("#ff0000", "Red"),
    ("#0066ff", "Blue"),
    ("#ffcc00", "Gold"),
    ("#ffffff", "White"),
];

/// Preset options for the per-target override color.
pub const TARGET_PRESETS: &[(&str, &str)] = &[
    ("#00ffff", "Cyan"),
    ("#ff00ff", "Magenta"),
    ("#7fff00", "Lime"),
];

/// Preset options for the preview background.
pub const BACKGROUND_PRESETS: &[(&str, &str)] = &[
    ("#f8f9f9", "Paper"),
    ("#22262e", "Charcoal"),
    ("#e7f6ef", "Mint"),
];

/// What a color change should do to the rest of the studio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelReaction {
    /// Feed the debounce scheduler; the art itself must be re-rendered.
    ScheduleRender,
    /// Repaint the preview background immediately, bypassing the debounce.
    RepaintBackground,
}

/// Identity of one of the three color channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Global,
    Target,
    Background,
}

/// All channel kinds, in display order.
pub const CHANNEL_KINDS: [ChannelKind; 3] = [
    ChannelKind::Global,
    ChannelKind::Target,
    ChannelKind::Background,
];

impl ChannelKind {
    /// Hex value the channel starts with and returns to on clear.
    #[must_use]
    pub fn default_hex(self) -> &'static str {
        match self {
            ChannelKind::Global => DEFAULT_GLOBAL_COLOR,
            ChannelKind::Target => DEFAULT_TARGET_COLOR,
            ChannelKind::Background => DEFAULT_BACKGROUND_COLOR,
        }
    }

    /// Radio group name. Unique per channel so the three groups never capture
    /// each other's selection.
    #[must_use]
    pub fn radio_group(self) -> &'static str {
        match self {
            ChannelKind::Global => "global-color",
            ChannelKind::Target => "target-color",
            ChannelKind::Background => "background-color",
        }
    }

    /// Preset table mirrored by this channel's radio group.
    #[must_use]
    pub fn presets(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ChannelKind::Global => GLOBAL_PRESETS,
            ChannelKind::Target => TARGET_PRESETS,
            ChannelKind::Background => BACKGROUND_PRESETS,
        }
    }

    /// How a change on this channel propagates.
    #[must_use]
    pub fn reaction(self) -> ChannelReaction {
        match self {
            ChannelKind::Global | ChannelKind::Target => ChannelReaction::ScheduleRender,
            ChannelKind::Background => ChannelReaction::RepaintBackground,
        }
    }

    /// Heading shown above the channel's picker and radios.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ChannelKind::Global => "Text color",
            ChannelKind::Target => "Target color",
            ChannelKind::Background => "Background",
        }
    }
}

/// One color channel: a kind fixing its identity plus the current hex.
///
/// The hex is stored canonically (lowercase `#rrggbb`) so preset matching is a
/// plain equality check regardless of how the picker cases its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorChannel {
    pub kind: ChannelKind,
    hex: String,
}

impl ColorChannel {
    #[must_use]
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            hex: kind.default_hex().to_owned(),
        }
    }

    /// Current color, canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Store a new color from the picker or a preset radio.
    pub fn set(&mut self, value: &str) {
        self.hex = canonical_hex(value);
    }

    /// Whether the given preset value mirrors the current color.
    #[must_use]
    pub fn matches_preset(&self, preset: &str) -> bool {
        self.hex == canonical_hex(preset)
    }

    /// The preset value whose radio should be checked, if any. `None` leaves
    /// the whole group unchecked, which is valid state, not an error.
    #[must_use]
    pub fn checked_preset(&self) -> Option<&'static str> {
        self.kind
            .presets()
            .iter()
            .find(|(value, _)| self.matches_preset(value))
            .map(|(value, _)| *value)
    }

    /// Return to the channel default. Does not schedule anything.
    pub fn reset(&mut self) {
        self.hex = self.kind.default_hex().to_owned();
    }
}

/// The three channels as one owned state value, shared by the components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorBoard {
    pub global: ColorChannel,
    pub target: ColorChannel,
    pub background: ColorChannel,
}

impl Default for ColorBoard {
    fn default() -> Self {
        Self {
            global: ColorChannel::new(ChannelKind::Global),
            target: ColorChannel::new(ChannelKind::Target),
            background: ColorChannel::new(ChannelKind::Background),
        }
    }
}

impl ColorBoard {
    #[must_use]
    pub fn channel(&self, kind: ChannelKind) -> &ColorChannel {
        match kind {
            ChannelKind::Global => &self.global,
            ChannelKind::Target => &self.target,
            ChannelKind::Background => &self.background,
        }
    }

    pub fn channel_mut(&mut self, kind: ChannelKind) -> &mut ColorChannel {
        match kind {
            ChannelKind::Global => &mut self.global,
            ChannelKind::Target => &mut self.target,
            ChannelKind::Background => &mut self.background,
        }
    }

    /// Current hex of one channel; convenience for view bindings.
    #[must_use]
    pub fn hex(&self, kind: ChannelKind) -> &str {
        self.channel(kind).hex()
    }

    pub fn set(&mut self, kind: ChannelKind, value: &str) {
        self.channel_mut(kind).set(value);
    }

    /// Reset all three channels to their defaults. Used by the clear action.
    pub fn reset(&mut self) {
        self.global.reset();
        self.target.reset();
        self.background.reset();
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    let hex = &trimmed[1..];
    // Length checks below count bytes; reject multi-byte input before slicing.
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let Ok(r) = u8::from_str_radix(&hex[0..1].repeat(2), 16) else {
                return None;
            };
            let Ok(g) = u8::from_str_radix(&hex[1..2].repeat(2), 16) else {
                return None;
            };
            let Ok(b) = u8::from_str_radix(&hex[2..3].repeat(2), 16) else {
                return None;
            };
            Some((r, g, b))
        }
        6 => {
            let Ok(r) = u8::from_str_radix(&hex[0..2], 16) else {
                return None;
            };
            let Ok(g) = u8::from_str_radix(&hex[2..4], 16) else {
                return None;
            };
            let Ok(b) = u8::from_str_radix(&hex[4..6], 16) else {
                return None;
            };
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Canonical lowercase `#rrggbb` form of a color value.
///
/// Values that do not parse as hex colors are kept as trimmed lowercase text
/// so comparisons still behave case-insensitively.
#[must_use]
pub fn canonical_hex(value: &str) -> String {
    match parse_hex_rgb(value) {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => value.trim().to_ascii_lowercase(),
    }
}
