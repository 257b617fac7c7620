use crate::error::XpdfError;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::{debug, warn};

/// A PDF handed to the library: either a file the caller owns, or raw bytes
/// that must be materialized to disk before a tool can read them.
#[derive(Debug, Clone)]
pub enum PdfInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for PdfInput {
    fn from(path: PathBuf) -> Self {
        PdfInput::Path(path)
    }
}

impl From<&Path> for PdfInput {
    fn from(path: &Path) -> Self {
        PdfInput::Path(path.to_path_buf())
    }
}

impl From<&str> for PdfInput {
    fn from(path: &str) -> Self {
        PdfInput::Path(PathBuf::from(path))
    }
}

impl From<String> for PdfInput {
    fn from(path: String) -> Self {
        PdfInput::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for PdfInput {
    fn from(bytes: Vec<u8>) -> Self {
        PdfInput::Bytes(bytes)
    }
}

impl From<&[u8]> for PdfInput {
    fn from(bytes: &[u8]) -> Self {
        PdfInput::Bytes(bytes.to_vec())
    }
}

// Direct conversions into the fan-out input shape, so callers can pass a
// bare path or buffer where one-or-many inputs are accepted.
impl From<&str> for crate::one_or_many::OneOrMany<PdfInput> {
    fn from(path: &str) -> Self {
        Self::One(PdfInput::from(path))
    }
}

impl From<String> for crate::one_or_many::OneOrMany<PdfInput> {
    fn from(path: String) -> Self {
        Self::One(PdfInput::from(path))
    }
}

impl From<&Path> for crate::one_or_many::OneOrMany<PdfInput> {
    fn from(path: &Path) -> Self {
        Self::One(PdfInput::from(path))
    }
}

impl From<PathBuf> for crate::one_or_many::OneOrMany<PdfInput> {
    fn from(path: PathBuf) -> Self {
        Self::One(PdfInput::from(path))
    }
}

impl From<Vec<u8>> for crate::one_or_many::OneOrMany<PdfInput> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::One(PdfInput::from(bytes))
    }
}

impl PdfInput {
    /// Resolve this input to a path on disk.
    ///
    /// Path inputs pass through untouched; byte inputs are written to a
    /// uniquely named `xpdfkit-*.pdf` file under the OS temp directory that
    /// the returned guard owns and deletes when dropped.
    pub fn materialize(&self) -> Result<MaterializedPdf, XpdfError> {
        match self {
            PdfInput::Path(path) => Ok(MaterializedPdf {
                path: path.clone(),
                temp: None,
            }),
            PdfInput::Bytes(bytes) => {
                let mut file = tempfile::Builder::new()
                    .prefix("xpdfkit-")
                    .suffix(".pdf")
                    .tempfile()?;
                file.write_all(bytes)?;
                file.flush()?;
                let temp = file.into_temp_path();
                debug!(path = %temp.display(), "materialized buffer input");
                Ok(MaterializedPdf {
                    path: temp.to_path_buf(),
                    temp: Some(temp),
                })
            }
        }
    }
}

/// A usable filesystem path for a [`PdfInput`].
///
/// For buffer-backed inputs this owns the temporary file; dropping the guard
/// deletes it on every exit path. Deletion failures are swallowed, since a
/// leaked temp file must never mask the caller's real error.
#[derive(Debug)]
pub struct MaterializedPdf {
    path: PathBuf,
    temp: Option<TempPath>,
}

impl MaterializedPdf {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MaterializedPdf {
    fn drop(&mut self) {
        if let Some(temp) = self.temp.take() {
            if let Err(e) = temp.close() {
                warn!(error = %e, "failed to delete temp PDF");
            }
        }
    }
}

/// Scoped materialization: hand `f` a usable path, then clean up however `f`
/// settles.
pub async fn with_pdf_path<T, F, Fut>(input: &PdfInput, f: F) -> Result<T, XpdfError>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, XpdfError>>,
{
    let materialized = input.materialize()?;
    let result = f(materialized.path().to_path_buf()).await;
    drop(materialized);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_input_passes_through() {
        let input = PdfInput::from("/some/file.pdf");
        let m = input.materialize().unwrap();
        assert_eq!(m.path(), Path::new("/some/file.pdf"));
        // No temp file, so dropping must not touch the caller's path.
        drop(m);
    }

    #[test]
    fn test_buffer_input_creates_named_temp_file() {
        let input = PdfInput::from(b"%PDF-1.4 fake".as_slice());
        let m = input.materialize().unwrap();
        let name = m.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("xpdfkit-"));
        assert!(name.ends_with(".pdf"));
        assert_eq!(std::fs::read(m.path()).unwrap(), b"%PDF-1.4 fake");
    }

    #[test]
    fn test_temp_file_deleted_on_drop() {
        let input = PdfInput::from(vec![1u8, 2, 3]);
        let m = input.materialize().unwrap();
        let path = m.path().to_path_buf();
        assert!(path.exists());
        drop(m);
        assert!(!path.exists());
    }

    #[test]
    fn test_concurrent_materializations_get_distinct_paths() {
        let input = PdfInput::from(vec![0u8; 16]);
        let a = input.materialize().unwrap();
        let b = input.materialize().unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[tokio::test]
    async fn test_with_pdf_path_cleans_up_on_success() {
        let input = PdfInput::from(vec![0u8; 8]);
        let mut seen = PathBuf::new();
        let out = with_pdf_path(&input, |path| {
            seen = path.clone();
            async move { Ok(path.exists()) }
        })
        .await
        .unwrap();
        assert!(out);
        assert!(!seen.exists());
    }

    #[tokio::test]
    async fn test_with_pdf_path_cleans_up_on_error() {
        let input = PdfInput::from(vec![0u8; 8]);
        let mut seen = PathBuf::new();
        let out: Result<(), XpdfError> = with_pdf_path(&input, |path| {
            seen = path.clone();
            async move {
                Err(XpdfError::UnknownTool("boom".into()))
            }
        })
        .await;
        assert!(out.is_err());
        assert!(!seen.exists());
    }
}
