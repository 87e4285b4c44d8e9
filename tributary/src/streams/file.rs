//! Document-backed stream.

use camino::Utf8PathBuf;

use crate::document;
use crate::error::{TributaryError, TributaryResult};
use crate::stream::{Contribution, Stream};

/// A stream that reads one document named after itself from a directory.
///
/// The document is located through [`document::find_document`], so the
/// format follows from whichever candidate extension exists on disk. A
/// declared file stream whose document is missing is a hard error; the
/// aggregator does not degrade to an empty contribution.
#[derive(Clone, Debug)]
pub struct FileStream {
    directory: Utf8PathBuf,
    base: String,
}

impl FileStream {
    /// A file stream reading `<directory>/<base>.<ext>`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>, base: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            base: base.into(),
        }
    }
}

impl Stream for FileStream {
    fn name(&self) -> &str {
        &self.base
    }

    fn get(&self) -> TributaryResult<Contribution> {
        match document::find_document(&self.directory, &self.base)? {
            Some((_, contribution)) => Ok(contribution),
            None => Err(TributaryError::file(
                &self.directory.join(&self.base),
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!(
                        "no document named '{}' under '{}'",
                        self.base, self.directory
                    ),
                ),
            )),
        }
    }
}
