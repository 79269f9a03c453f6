/// A single file-picker filter entry.
///
/// Filters only suggest an extension; the dialogs still accept any name the
/// user types and nothing is appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(description: &str, pattern: &str) -> Self {
        Self {
            description: description.to_string(),
            pattern: pattern.to_string(),
        }
    }

    /// Plain text files, the only filter the editor offers.
    pub fn text_files() -> Self {
        Self::new("Text Files", "*.txt")
    }

    /// Render in FLTK's native chooser format: "Description\tPattern".
    /// An empty description falls back to the bare pattern.
    pub fn to_fltk(&self) -> String {
        if self.description.is_empty() {
            self.pattern.clone()
        } else {
            format!("{}\t{}", self.description, self.pattern)
        }
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::text_files()
    }
}
