use super::*;

// --- Banner table ---

#[test]
fn default_banner_is_offered() {
    assert_eq!(banner_label(DEFAULT_BANNER), Some("Standard"));
}

#[test]
fn unknown_banner_has_no_label() {
    assert_eq!(banner_label("graffiti"), None);
    assert_eq!(banner_label(""), None);
}

// --- Alignment ---

#[test]
fn alignment_defaults_to_left() {
    assert_eq!(Alignment::default(), Alignment::Left);
}

#[test]
fn alignment_wire_values() {
    assert_eq!(Alignment::Left.as_str(), "left");
    assert_eq!(Alignment::Center.as_str(), "center");
    assert_eq!(Alignment::Right.as_str(), "right");
}

#[test]
fn alignment_css_classes() {
    assert_eq!(Alignment::Left.css_class(), "align-left");
    assert_eq!(Alignment::Center.css_class(), "align-center");
    assert_eq!(Alignment::Right.css_class(), "align-right");
}

#[test]
fn alignment_from_name_round_trips() {
    for align in ALIGNMENTS {
        assert_eq!(Alignment::from_name(align.as_str()), Some(align));
    }
}

#[test]
fn alignment_from_name_rejects_unknown() {
    assert_eq!(Alignment::from_name("justify"), None);
    assert_eq!(Alignment::from_name(""), None);
    assert_eq!(Alignment::from_name("Left"), None);
}

// --- FormState defaults ---

#[test]
fn form_defaults() {
    let form = FormState::default();
    assert_eq!(form.text, "");
    assert_eq!(form.banner, "standard");
    assert_eq!(form.alignment, Alignment::Left);
    assert_eq!(form.color_targets, "");
}

#[test]
fn default_banner_is_listed() {
    assert!(BANNER_STYLES.iter().any(|(value, _)| *value == DEFAULT_BANNER));
}

// --- Text accessors ---

#[test]
fn trimmed_text_strips_whitespace() {
    let form = FormState {
        text: "  Hello \n".to_owned(),
        ..FormState::default()
    };
    assert_eq!(form.trimmed_text(), "Hello");
}

#[test]
fn trimmed_text_of_whitespace_is_empty() {
    let form = FormState {
        text: " \t\n ".to_owned(),
        ..FormState::default()
    };
    assert_eq!(form.trimmed_text(), "");
}

#[test]
fn counter_label_formats_count_over_limit() {
    let form = FormState {
        text: "Hello".to_owned(),
        ..FormState::default()
    };
    assert_eq!(form.counter_label(), "5/1000000");
}

#[test]
fn over_limit_only_beyond_the_cap() {
    let mut form = FormState {
        text: "a".repeat(1_000_000),
        ..FormState::default()
    };
    assert!(!form.over_limit());
    form.text.push('a');
    assert!(form.over_limit());
}

// --- Target parsing ---

#[test]
fn parsed_targets_trims_and_drops_empties() {
    let form = FormState {
        color_targets: " H , e,,l  ,".to_owned(),
        ..FormState::default()
    };
    assert_eq!(form.parsed_targets(), vec!["H", "e", "l"]);
}

#[test]
fn parsed_targets_keeps_duplicates() {
    let form = FormState {
        color_targets: "l,l".to_owned(),
        ..FormState::default()
    };
    assert_eq!(form.parsed_targets(), vec!["l", "l"]);
}

#[test]
fn parsed_targets_of_blank_input_is_empty() {
    assert!(FormState::default().parsed_targets().is_empty());
    let form = FormState {
        color_targets: " , ,".to_owned(),
        ..FormState::default()
    };
    assert!(form.parsed_targets().is_empty());
}

// --- Reset ---

#[test]
fn reset_restores_defaults() {
    let mut form = FormState {
        text: "Hello".to_owned(),
        banner: "shadow".to_owned(),
        alignment: Alignment::Right,
        color_targets: "H,e".to_owned(),
    };
    form.reset();
    assert_eq!(form, FormState::default());
}
