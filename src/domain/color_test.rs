use super::*;

#[test]
fn parse_hex_rgb_accepts_long_form_with_or_without_hash() {
    assert_eq!(parse_hex_rgb("#dbeafe"), Some((219, 234, 254)));
    assert_eq!(parse_hex_rgb("  374151 "), Some((55, 65, 81)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("#abc"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("blue"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
    assert_eq!(parse_hex_rgb("#+f+f+f"), None);
    assert_eq!(normalize_hex_color("+1+2+3"), None);
}

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize_hex_color("#1E40AF").as_deref(), Some("#1e40af"));
    assert_eq!(normalize_hex_color("nope"), None);
}

#[test]
fn light_palette_entries_get_dark_text() {
    for value in ["#ffffff", "#dbeafe", "#dcfce7", "#fef3c7", "#e9d5ff", "#ccfbf1"] {
        assert_eq!(contrast_color(value), "#1f2937", "{value}");
    }
}

#[test]
fn dark_palette_entries_get_white_text() {
    for value in ["#1e40af", "#166534", "#7c3aed", "#dc2626", "#374151"] {
        assert_eq!(contrast_color(value), "#ffffff", "{value}");
    }
}

#[test]
fn unparseable_background_is_treated_as_white() {
    assert_eq!(contrast_color("transparent"), "#1f2937");
}

#[test]
fn label_colors_cycle() {
    assert_eq!(label_color(0), "bg-blue-500");
    assert_eq!(label_color(5), "bg-orange-500");
    assert_eq!(label_color(6), "bg-blue-500");
}

#[test]
fn palette_values_are_unique_and_canonical() {
    let mut values: Vec<&str> = CARD_COLORS.iter().map(|c| c.value).collect();
    for value in &values {
        assert_eq!(normalize_hex_color(value).as_deref(), Some(*value));
    }
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), CARD_COLORS.len());
}
