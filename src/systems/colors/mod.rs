use bevy::prelude::*;
use phf::phf_map;

pub const DEFAULT_BG: Color = Color::BLACK;
pub const LIGHT_BG: Color = Color::WHITE;
pub const LIGHT_TEXT: Color = Color::WHITE;
pub const DARK_TEXT: Color = Color::BLACK;

// The color names the descriptor files are written in. Values are sRGB
// triplets matching the classic named-color table the store was authored
// against.
static NAMED: phf::Map<&'static str, [f32; 3]> = phf_map! {
    "black" => [0.0, 0.0, 0.0],
    "white" => [1.0, 1.0, 1.0],
    "red" => [1.0, 0.0, 0.0],
    "green" => [0.0, 1.0, 0.0],
    "blue" => [0.0, 0.0, 1.0],
    "yellow" => [1.0, 1.0, 0.0],
    "cyan" => [0.0, 1.0, 1.0],
    "magenta" => [1.0, 0.0, 1.0],
    "orange" => [1.0, 0.647, 0.0],
    "purple" => [0.627, 0.125, 0.941],
    "pink" => [1.0, 0.753, 0.796],
    "brown" => [0.647, 0.165, 0.165],
    "grey" => [0.745, 0.745, 0.745],
    "gray" => [0.745, 0.745, 0.745],
};

/// Looks a descriptor line up in the named-color table. Leading/trailing
/// whitespace and letter case are forgiven; anything else is the caller's
/// problem.
pub fn named(name: &str) -> Option<Color> {
    NAMED
        .get(name.trim().to_ascii_lowercase().as_str())
        .map(|[red, green, blue]| Color::srgb(*red, *green, *blue))
}

/// Two-color scheme: the light background swaps to dark text, every other
/// background gets light text. Deliberately not a luminance computation.
pub fn contrasting_text(background: Color) -> Color {
    if background == LIGHT_BG {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
