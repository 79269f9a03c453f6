use std::fmt;

/// Outcome text for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Opened(String),
    OpenFailed,
    Saved(String),
    SaveFailed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Opened(path) => write!(f, "File opened: {}", path),
            Status::OpenFailed => write!(f, "File open failed."),
            Status::Saved(path) => write!(f, "File saved: {}", path),
            Status::SaveFailed => write!(f, "File save failed."),
        }
    }
}
