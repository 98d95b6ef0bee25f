use super::*;

// --- ChannelKind identity ---

#[test]
fn channel_defaults() {
    assert_eq!(ChannelKind::Global.default_hex(), "#ff0000");
    assert_eq!(ChannelKind::Target.default_hex(), "#00ffff");
    assert_eq!(ChannelKind::Background.default_hex(), "#f8f9f9");
}

#[test]
fn radio_groups_are_pairwise_distinct() {
    for (i, a) in CHANNEL_KINDS.iter().enumerate() {
        for b in &CHANNEL_KINDS[i + 1..] {
            assert_ne!(a.radio_group(), b.radio_group());
        }
    }
}

#[test]
fn preset_values_are_distinct_within_each_group() {
    for kind in CHANNEL_KINDS {
        let presets = kind.presets();
        for (i, (a, _)) in presets.iter().enumerate() {
            for (b, _) in &presets[i + 1..] {
                assert_ne!(a, b, "{kind:?} lists {a} twice");
            }
        }
    }
}

#[test]
fn default_hex_is_a_listed_preset() {
    for kind in CHANNEL_KINDS {
        assert!(
            kind.presets()
                .iter()
                .any(|(value, _)| *value == kind.default_hex()),
            "{kind:?} default has no preset radio"
        );
    }
}

#[test]
fn only_background_bypasses_the_debounce() {
    assert_eq!(ChannelKind::Global.reaction(), ChannelReaction::ScheduleRender);
    assert_eq!(ChannelKind::Target.reaction(), ChannelReaction::ScheduleRender);
    assert_eq!(
        ChannelKind::Background.reaction(),
        ChannelReaction::RepaintBackground
    );
}

// --- ColorChannel ---

#[test]
fn new_channel_starts_at_its_default() {
    for kind in CHANNEL_KINDS {
        let channel = ColorChannel::new(kind);
        assert_eq!(channel.hex(), kind.default_hex());
    }
}

#[test]
fn set_canonicalizes_case_and_shorthand() {
    let mut channel = ColorChannel::new(ChannelKind::Global);
    channel.set("#FFCC00");
    assert_eq!(channel.hex(), "#ffcc00");
    channel.set("#AbC");
    assert_eq!(channel.hex(), "#aabbcc");
    channel.set("  #112233 ");
    assert_eq!(channel.hex(), "#112233");
}

#[test]
fn picker_cased_value_checks_its_preset() {
    let mut channel = ColorChannel::new(ChannelKind::Global);
    channel.set("#FFCC00");
    assert!(channel.matches_preset("#ffcc00"));
    assert_eq!(channel.checked_preset(), Some("#ffcc00"));
}

#[test]
fn every_preset_round_trips_through_the_picker() {
    for kind in CHANNEL_KINDS {
        let mut channel = ColorChannel::new(kind);
        for (value, _) in kind.presets() {
            channel.set(&value.to_ascii_uppercase());
            assert_eq!(channel.checked_preset(), Some(*value));
        }
    }
}

#[test]
fn unknown_color_leaves_the_group_unchecked() {
    let mut channel = ColorChannel::new(ChannelKind::Target);
    channel.set("#123456");
    assert_eq!(channel.checked_preset(), None);
    for (value, _) in ChannelKind::Target.presets() {
        assert!(!channel.matches_preset(value));
    }
}

#[test]
fn reset_restores_default_and_keeps_identity() {
    let mut channel = ColorChannel::new(ChannelKind::Background);
    channel.set("#000000");
    channel.reset();
    assert_eq!(channel.hex(), "#f8f9f9");
    assert_eq!(channel.kind, ChannelKind::Background);
    assert_eq!(channel.kind.radio_group(), "background-color");
}

// --- ColorBoard ---

#[test]
fn board_default_holds_three_channel_defaults() {
    let board = ColorBoard::default();
    assert_eq!(board.hex(ChannelKind::Global), "#ff0000");
    assert_eq!(board.hex(ChannelKind::Target), "#00ffff");
    assert_eq!(board.hex(ChannelKind::Background), "#f8f9f9");
}

#[test]
fn board_set_touches_only_the_named_channel() {
    let mut board = ColorBoard::default();
    board.set(ChannelKind::Target, "#445566");
    assert_eq!(board.hex(ChannelKind::Target), "#445566");
    assert_eq!(board.hex(ChannelKind::Global), "#ff0000");
    assert_eq!(board.hex(ChannelKind::Background), "#f8f9f9");
}

#[test]
fn board_reset_restores_all_channels() {
    let mut board = ColorBoard::default();
    board.set(ChannelKind::Global, "#111111");
    board.set(ChannelKind::Target, "#222222");
    board.set(ChannelKind::Background, "#333333");
    board.reset();
    assert_eq!(board, ColorBoard::default());
}

// --- Hex parsing ---

#[test]
fn parse_hex_rgb_accepts_long_form() {
    assert_eq!(parse_hex_rgb("#112233"), Some((0x11, 0x22, 0x33)));
    assert_eq!(parse_hex_rgb("#FFCC00"), Some((0xff, 0xcc, 0x00)));
}

#[test]
fn parse_hex_rgb_expands_shorthand() {
    assert_eq!(parse_hex_rgb("#abc"), Some((0xaa, 0xbb, 0xcc)));
    assert_eq!(parse_hex_rgb("#fff"), Some((0xff, 0xff, 0xff)));
}

#[test]
fn parse_hex_rgb_rejects_malformed_input() {
    assert_eq!(parse_hex_rgb("112233"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#1122334"), None);
    assert_eq!(parse_hex_rgb("#gg0000"), None);
    assert_eq!(parse_hex_rgb("#ÿÿÿ"), None);
    assert_eq!(parse_hex_rgb(""), None);
}

#[test]
fn canonical_hex_passes_unparseable_text_through_lowercased() {
    assert_eq!(canonical_hex(" Red "), "red");
    assert_eq!(canonical_hex("#Not-Hex"), "#not-hex");
}
