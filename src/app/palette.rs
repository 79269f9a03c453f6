//! Background colors cycled by Edit/Toggle Theme.
//!
//! The palette is fixed and never persisted. Text is drawn white on the black
//! entry and black on every other one.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
}

const ENTRIES: [PaletteEntry; 10] = [
    PaletteEntry { name: "white", color: Rgb::WHITE },
    PaletteEntry { name: "black", color: Rgb::BLACK },
    PaletteEntry { name: "#B1DDC6", color: Rgb::new(0xb1, 0xdd, 0xc6) },
    PaletteEntry { name: "#e0f0e0", color: Rgb::new(0xe0, 0xf0, 0xe0) },
    PaletteEntry { name: "#e0e0e0", color: Rgb::new(0xe0, 0xe0, 0xe0) },
    PaletteEntry { name: "#e0e0f0", color: Rgb::new(0xe0, 0xe0, 0xf0) },
    PaletteEntry { name: "#f0e0e0", color: Rgb::new(0xf0, 0xe0, 0xe0) },
    PaletteEntry { name: "#d0c7d0", color: Rgb::new(0xd0, 0xc7, 0xd0) },
    PaletteEntry { name: "#c0d5e0", color: Rgb::new(0xc0, 0xd5, 0xe0) },
    PaletteEntry { name: "#c6d7d0", color: Rgb::new(0xc6, 0xd7, 0xd0) },
];

/// Result of advancing the palette by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStep {
    pub index: usize,
    pub background: Rgb,
    pub foreground: Rgb,
    /// The current background was not a palette color; the step reset to index 0.
    pub recovered: bool,
}

pub struct Palette;

impl Palette {
    pub fn entries() -> &'static [PaletteEntry] {
        &ENTRIES
    }

    pub fn len() -> usize {
        ENTRIES.len()
    }

    /// Index of `color` in the palette, if present.
    pub fn position(color: Rgb) -> Option<usize> {
        ENTRIES.iter().position(|e| e.color == color)
    }

    /// Background/foreground pair for the entry at `index` (wrapped).
    pub fn step_at(index: usize) -> ThemeStep {
        let index = index % ENTRIES.len();
        let entry = ENTRIES[index];
        let foreground = if entry.name == "black" { Rgb::WHITE } else { Rgb::BLACK };
        ThemeStep {
            index,
            background: entry.color,
            foreground,
            recovered: false,
        }
    }

    /// The colors the text area starts with.
    pub fn initial() -> ThemeStep {
        Self::step_at(0)
    }

    /// Advance from `current` to the next palette entry, wrapping at the end.
    /// An unknown `current` resets to index 0.
    pub fn next_after(current: Rgb) -> ThemeStep {
        match Self::position(current) {
            Some(i) => Self::step_at(i + 1),
            None => ThemeStep {
                recovered: true,
                ..Self::step_at(0)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_ten_distinct_colors() {
        assert_eq!(Palette::len(), 10);
        for (i, entry) in Palette::entries().iter().enumerate() {
            assert_eq!(Palette::position(entry.color), Some(i), "{} is duplicated", entry.name);
        }
    }

    #[test]
    fn test_initial_is_white_on_black_text() {
        let step = Palette::initial();
        assert_eq!(step.index, 0);
        assert_eq!(step.background, Rgb::WHITE);
        assert_eq!(step.foreground, Rgb::BLACK);
    }

    #[test]
    fn test_white_advances_to_black_with_white_text() {
        let step = Palette::next_after(Rgb::WHITE);
        assert_eq!(step.index, 1);
        assert_eq!(step.background, Rgb::BLACK);
        assert_eq!(step.foreground, Rgb::WHITE);
        assert!(!step.recovered);
    }

    #[test]
    fn test_non_black_entries_use_black_text() {
        for i in 0..Palette::len() {
            let step = Palette::step_at(i);
            if i == 1 {
                assert_eq!(step.foreground, Rgb::WHITE);
            } else {
                assert_eq!(step.foreground, Rgb::BLACK);
            }
        }
    }

    #[test]
    fn test_last_entry_wraps_to_first() {
        let last = Palette::entries()[Palette::len() - 1].color;
        let step = Palette::next_after(last);
        assert_eq!(step.index, 0);
        assert_eq!(step.background, Rgb::WHITE);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let start = Rgb::new(0xe0, 0xe0, 0xf0);
        let mut current = start;
        for _ in 0..Palette::len() {
            current = Palette::next_after(current).background;
        }
        assert_eq!(current, start);
    }

    #[test]
    fn test_unknown_color_resets_to_first_entry() {
        let step = Palette::next_after(Rgb::new(1, 2, 3));
        assert!(step.recovered);
        assert_eq!(step.index, 0);
        assert_eq!(step.background, Rgb::WHITE);
        assert_eq!(step.foreground, Rgb::BLACK);
    }

    #[test]
    fn test_step_at_wraps_index() {
        assert_eq!(Palette::step_at(12).index, 2);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(0xb1, 0xdd, 0xc6).to_string(), "#B1DDC6");
    }
}
