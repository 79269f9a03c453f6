pub mod about;

use fltk::{app, dialog, prelude::*, window::Window};

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. the main window goes away while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

pub fn show_error_dialog(title: &str, message: &str) {
    dialog::message_title(title);
    dialog::alert_default(message);
}

/// Yes/No question. Closing the box counts as "No".
pub fn ask_yes_no(title: &str, question: &str) -> bool {
    dialog::message_title(title);
    dialog::choice2_default(question, "No", "Yes", "") == Some(1)
}
