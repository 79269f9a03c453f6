use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::FileFilter;

fn run_chooser(kind: FileDialogType, title: &str, filter: &FileFilter) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&filter.to_fltk());
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(filter: &FileFilter) -> Option<String> {
    run_chooser(FileDialogType::BrowseFile, "Open", filter)
}

/// No overwrite confirmation is requested; an existing file is replaced.
pub fn native_save_dialog(filter: &FileFilter) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save As", filter)
}
