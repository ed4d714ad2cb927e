//! Card palette and text contrast helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

pub const DEFAULT_CARD_COLOR: &str = "#ffffff";

const DARK_TEXT: &str = "#1f2937";
const LIGHT_TEXT: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

const fn swatch(name: &'static str, value: &'static str, label: &'static str) -> PaletteColor {
    PaletteColor { name, value, label }
}

pub const CARD_COLORS: [PaletteColor; 15] = [
    swatch("Default", "#ffffff", "White"),
    swatch("Blue", "#dbeafe", "Light Blue"),
    swatch("Green", "#dcfce7", "Light Green"),
    swatch("Yellow", "#fef3c7", "Light Yellow"),
    swatch("Purple", "#e9d5ff", "Light Purple"),
    swatch("Pink", "#fce7f3", "Light Pink"),
    swatch("Orange", "#fed7aa", "Light Orange"),
    swatch("Red", "#fecaca", "Light Red"),
    swatch("Indigo", "#c7d2fe", "Light Indigo"),
    swatch("Teal", "#ccfbf1", "Light Teal"),
    swatch("Dark Blue", "#1e40af", "Dark Blue"),
    swatch("Dark Green", "#166534", "Dark Green"),
    swatch("Dark Purple", "#7c3aed", "Dark Purple"),
    swatch("Dark Red", "#dc2626", "Dark Red"),
    swatch("Dark Gray", "#374151", "Dark Gray"),
];

const LABEL_COLORS: [&str; 6] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-orange-500",
];

/// Badge class for the label at `index` on a card.
pub fn label_color(index: usize) -> &'static str {
    LABEL_COLORS[index % LABEL_COLORS.len()]
}

/// Parse `#rrggbb` (leading `#` optional) into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would let a sign through ("+f").
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Canonical lowercase `#rrggbb`, or `None` when the input doesn't parse.
pub fn normalize_hex_color(raw: &str) -> Option<String> {
    parse_hex_rgb(raw).map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Dark text on light backgrounds, white text on dark ones.
pub fn contrast_color(background: &str) -> &'static str {
    let (r, g, b) = parse_hex_rgb(background).unwrap_or((255, 255, 255));
    let luminance =
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luminance > 0.5 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
