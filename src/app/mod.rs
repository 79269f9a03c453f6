//! Toolkit-independent application layer.
//!
//! - `state` - `AppState`, the handler for every menu action
//! - `shell` - the trait the FLTK window implements for `AppState`
//! - `document`, `status`, `palette` - the little state the editor keeps
//! - `file_io`, `error` - reading and writing the buffer
//! - `settings`, `file_filters`, `messages` - startup appearance and event plumbing

pub mod document;
pub mod error;
pub mod file_filters;
pub mod file_io;
pub mod messages;
pub mod palette;
pub mod settings;
pub mod shell;
pub mod state;
pub mod status;

pub use document::Document;
pub use error::AppError;
pub use file_filters::FileFilter;
pub use messages::Message;
pub use palette::{Palette, Rgb, ThemeStep};
pub use settings::EditorSettings;
pub use shell::{AboutInfo, ClipboardAction, Shell};
pub use state::AppState;
pub use status::Status;
