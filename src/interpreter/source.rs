use std::{fs, io};

/// Source-loading seam consumed by the `import$` statement handler.
///
/// The core never touches the filesystem directly; the evaluator asks its
/// provider for the full text of a file and reports a runtime error when the
/// provider fails. Tests substitute an in-memory provider.
pub trait SourceProvider {
    /// Returns the full contents of the file at `path`.
    ///
    /// # Errors
    /// Returns an `io::Error` when the file cannot be found or read.
    fn load(&self, path: &str) -> io::Result<String>;
}

/// The default provider: reads files from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProvider;

impl SourceProvider for FileProvider {
    fn load(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
