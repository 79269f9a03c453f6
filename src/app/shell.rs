use super::file_filters::FileFilter;
use super::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAction {
    Cut,
    Copy,
    Paste,
}

/// Static text for the Help/About dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

impl AboutInfo {
    pub fn current() -> Self {
        Self {
            name: "Simple Text Editor",
            version: env!("CARGO_PKG_VERSION"),
            author: "(C) 2024 Arghir Eduard",
        }
    }
}

/// Everything the handlers in [`AppState`](super::state::AppState) need from
/// the window: widgets, native dialogs and the text buffer.
///
/// Dialog methods block until the user answers.
pub trait Shell {
    /// `None` when the user cancels.
    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<String>;
    /// `None` when the user cancels.
    fn pick_save_path(&mut self, filter: &FileFilter) -> Option<String>;

    fn buffer_text(&self) -> String;
    fn clear_buffer(&mut self);
    /// Append at the end of the buffer.
    fn insert_text(&mut self, text: &str);
    fn clipboard(&mut self, action: ClipboardAction);

    fn set_title(&mut self, title: &str);
    fn set_status(&mut self, message: &str);

    fn show_error(&mut self, title: &str, message: &str);
    fn show_about(&mut self, info: &AboutInfo);
    fn confirm(&mut self, title: &str, question: &str) -> bool;

    fn background(&self) -> Rgb;
    fn set_colors(&mut self, background: Rgb, foreground: Rgb);

    /// Close the main window, ending the event loop.
    fn close(&mut self);
}
