/// Widget error types. Lookup misses on update/touch/remove are deliberately
/// not errors; those operations silently no-op on an unknown id.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid file format: {0}")]
    Format(String),

    #[error("Error reading file: {0}")]
    Parse(#[from] serde_json::Error),
}
