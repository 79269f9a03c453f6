use tracing::{debug, info, warn};

use super::document::Document;
use super::error::AppError;
use super::file_filters::FileFilter;
use super::file_io::{read_document, write_document};
use super::messages::Message;
use super::palette::{Palette, ThemeStep};
use super::shell::{AboutInfo, ClipboardAction, Shell};
use super::status::Status;

pub struct AppState<S: Shell> {
    pub shell: S,
    pub document: Document,
    pub filter: FileFilter,
}

impl<S: Shell> AppState<S> {
    /// Take ownership of the widgets and put them in the startup state:
    /// empty buffer, default title, "Ready" status, first palette colors.
    pub fn new(shell: S, filter: FileFilter) -> Self {
        let mut state = Self {
            shell,
            document: Document::new(),
            filter,
        };
        let initial = Palette::initial();
        state.shell.set_colors(initial.background, initial.foreground);
        state.update_window_title();
        state.update_status_bar(&Status::Ready.to_string());
        state
    }

    pub fn dispatch(&mut self, msg: Message) {
        match msg {
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::FileExit | Message::WindowClose => {
                self.file_exit();
            }
            Message::EditCut => self.shell.clipboard(ClipboardAction::Cut),
            Message::EditCopy => self.shell.clipboard(ClipboardAction::Copy),
            Message::EditPaste => self.shell.clipboard(ClipboardAction::Paste),
            Message::ToggleTheme => {
                self.toggle_theme();
            }
            Message::ShowAbout => self.show_about(),
        }
    }

    pub fn update_window_title(&mut self) {
        let title = self.document.title();
        self.shell.set_title(&title);
    }

    pub fn update_status_bar(&mut self, message: &str) {
        self.shell.set_status(message);
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let Some(path) = self.shell.pick_open_path(&self.filter) else {
            debug!("open dialog canceled");
            return;
        };

        // The buffer is emptied before the read is attempted; a failed open
        // leaves it empty and the previous text is gone.
        self.shell.clear_buffer();

        match read_document(&path) {
            Ok(content) => {
                self.shell.insert_text(&content);
                info!(path = %path, bytes = content.len(), "file opened");
                self.document.set_path(path.clone());
                self.update_window_title();
                self.update_status_bar(&Status::Opened(path).to_string());
            }
            Err(e) => self.report_failure(&e, Status::OpenFailed),
        }
    }

    /// Always asks for a destination, same as Save As.
    pub fn file_save(&mut self) {
        self.file_save_as();
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = self.shell.pick_save_path(&self.filter) else {
            debug!("save dialog canceled");
            return;
        };

        let text = self.shell.buffer_text();
        match write_document(&path, &text) {
            Ok(()) => {
                info!(path = %path, bytes = text.len(), "file saved");
                self.document.set_path(path.clone());
                self.update_window_title();
                self.update_status_bar(&Status::Saved(path).to_string());
            }
            Err(e) => self.report_failure(&e, Status::SaveFailed),
        }
    }

    fn report_failure(&mut self, err: &AppError, status: Status) {
        warn!(path = %err.path(), error = %err, "file operation failed");
        self.shell.show_error("Error", &err.to_string());
        self.update_status_bar(&status.to_string());
    }

    /// Ask before closing. Returns `true` if the window was closed.
    pub fn file_exit(&mut self) -> bool {
        if self.shell.confirm("Exit", "Do you want to exit?") {
            info!("exiting");
            self.shell.close();
            true
        } else {
            false
        }
    }

    // --- View ---

    pub fn toggle_theme(&mut self) -> ThemeStep {
        let current = self.shell.background();
        let step = Palette::next_after(current);
        if step.recovered {
            warn!(background = %current, "background not in palette, resetting theme");
        }
        debug!(index = step.index, background = %step.background, "theme toggled");
        self.shell.set_colors(step.background, step.foreground);
        step
    }

    pub fn show_about(&mut self) {
        self.shell.show_about(&AboutInfo::current());
    }
}
