use fltk::{
    frame::Frame,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::dialogs::about::show_about_dialog;
use super::dialogs::{ask_yes_no, show_error_dialog};
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::main_window::MainWidgets;
use super::theme::{apply_theme, from_color};
use crate::app::file_filters::FileFilter;
use crate::app::palette::Rgb;
use crate::app::shell::{AboutInfo, ClipboardAction, Shell};

/// The real window. Owns every widget handle `AppState` touches.
pub struct FltkShell {
    pub window: Window,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

impl FltkShell {
    pub fn new(widgets: MainWidgets) -> Self {
        Self {
            window: widgets.wind,
            editor: widgets.text_editor,
            buffer: widgets.buffer,
            status_bar: widgets.status_bar,
        }
    }
}

/// FLTK treats '@' in labels as a symbol prefix; "@@" draws a literal one.
fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// Label text for a status message; it renders as exactly `message`.
fn status_label(message: &str) -> String {
    escape_label(message)
}

impl Shell for FltkShell {
    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<String> {
        native_open_dialog(filter)
    }

    fn pick_save_path(&mut self, filter: &FileFilter) -> Option<String> {
        native_save_dialog(filter)
    }

    fn buffer_text(&self) -> String {
        self.buffer.text()
    }

    fn clear_buffer(&mut self) {
        self.buffer.set_text("");
    }

    fn insert_text(&mut self, text: &str) {
        self.buffer.append(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn clipboard(&mut self, action: ClipboardAction) {
        match action {
            ClipboardAction::Cut => self.editor.cut(),
            ClipboardAction::Copy => self.editor.copy(),
            ClipboardAction::Paste => self.editor.paste(),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn set_status(&mut self, message: &str) {
        self.status_bar.set_label(&status_label(message));
        self.status_bar.redraw();
    }

    fn show_error(&mut self, title: &str, message: &str) {
        show_error_dialog(title, message);
    }

    fn show_about(&mut self, info: &AboutInfo) {
        show_about_dialog(info);
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        ask_yes_no(title, question)
    }

    fn background(&self) -> Rgb {
        from_color(self.editor.color())
    }

    fn set_colors(&mut self, background: Rgb, foreground: Rgb) {
        apply_theme(&mut self.editor, background, foreground);
    }

    fn close(&mut self) {
        self.window.hide();
    }
}
