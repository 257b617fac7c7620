use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Xpdf(#[from] xpdfkit_core::XpdfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
