/// Title shown while no file has been opened or saved.
pub const DEFAULT_TITLE: &str = "Text Editor";

/// The editor's single document. The text itself lives in the toolkit's
/// buffer; this only tracks which file it was last loaded from or saved to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: String) {
        self.path = Some(path);
    }

    pub fn title(&self) -> String {
        match self.path {
            Some(ref path) => format!("{} - {}", DEFAULT_TITLE, path),
            None => DEFAULT_TITLE.to_string(),
        }
    }
}
