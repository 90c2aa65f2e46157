use thiserror::Error;

/// Failure reported by an export adapter.
///
/// Export is the only fallible operation the editor exposes. A failed export never
/// touches the document, which stays editable.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export rejected: {0}")]
    Rejected(String),
}

impl ExportError {
    /// Stable machine-readable code, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::Io(_) => "IO_ERROR",
            ExportError::Rejected(_) => "EXPORT_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: ExportError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_rejected_message() {
        let err = ExportError::Rejected("printer offline".to_string());
        assert_eq!(err.to_string(), "Export rejected: printer offline");
        assert_eq!(err.code(), "EXPORT_REJECTED");
    }

    #[test]
    fn test_every_variant_has_a_distinct_code() {
        let all = [
            ExportError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
            ExportError::Rejected("bad name".to_string()),
        ];
        let codes: Vec<&str> = all
            .iter()
            .map(|e| match e {
                ExportError::Io(_) | ExportError::Rejected(_) => e.code(),
            })
            .collect();
        assert_eq!(codes, vec!["IO_ERROR", "EXPORT_REJECTED"]);
    }
}
