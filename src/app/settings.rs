/// Startup appearance of the editor window. Fixed at build time; nothing is
/// read from or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub window_width: i32,
    pub window_height: i32,
    pub font_size: i32,
    pub word_wrap: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            font_size: 12,
            word_wrap: true,
        }
    }
}
