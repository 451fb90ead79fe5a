use thiserror::Error;

/// Failures the split pipeline can hit. All of them abort the whole
/// invocation; no partial archive is ever produced.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to parse spreadsheet: {0}")]
    Sheet(#[from] calamine::Error),

    #[error("failed to build archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
