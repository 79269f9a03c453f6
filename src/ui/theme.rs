use fltk::{enums::Color, prelude::*, text::TextEditor};

use crate::app::palette::Rgb;

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn from_color(color: Color) -> Rgb {
    let (r, g, b) = color.to_rgb();
    Rgb::new(r, g, b)
}

/// Apply a palette pair to the text area. The cursor follows the text color
/// so it stays visible on the black background.
pub fn apply_theme(editor: &mut TextEditor, background: Rgb, foreground: Rgb) {
    let fg = to_color(foreground);
    editor.set_color(to_color(background));
    editor.set_text_color(fg);
    editor.set_cursor_color(fg);
    editor.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::palette::Palette;

    #[test]
    fn test_palette_colors_survive_conversion() {
        for entry in Palette::entries() {
            assert_eq!(from_color(to_color(entry.color)), entry.color, "{}", entry.name);
        }
    }
}
