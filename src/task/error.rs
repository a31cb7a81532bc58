use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Cannot access task file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", malformed_message(.path.as_deref(), .reason))]
    Malformed {
        path: Option<PathBuf>,
        reason: String,
    },
}

fn malformed_message(path: Option<&std::path::Path>, reason: &str) -> String {
    match path {
        Some(path) => format!("Malformed task file {}: {}", path.display(), reason),
        None => format!("Malformed task record: {}", reason),
    }
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attach the file a malformed record came from.
    pub(crate) fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Malformed { path: None, reason } => Self::Malformed {
                path: Some(file.into()),
                reason,
            },
            other => other,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = TaskError::MissingField {
            field: "description",
        };
        assert_eq!(err.to_string(), "description is required");
    }

    #[test]
    fn test_malformed_without_path() {
        let err = TaskError::malformed("missing key 'priority'");
        assert_eq!(
            err.to_string(),
            "Malformed task record: missing key 'priority'"
        );
        assert!(err.is_malformed());
        assert!(!err.is_io());
    }

    #[test]
    fn test_in_file_attaches_path() {
        let err = TaskError::malformed("expected an array").in_file("/tmp/tasks.json");
        assert_eq!(
            err.to_string(),
            "Malformed task file /tmp/tasks.json: expected an array"
        );
    }

    #[test]
    fn test_in_file_keeps_existing_path() {
        let err = TaskError::Malformed {
            path: Some(PathBuf::from("a.json")),
            reason: "bad".to_string(),
        }
        .in_file("b.json");
        assert!(err.to_string().contains("a.json"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = TaskError::io("/nope/tasks.json", io_err);
        assert!(err.is_io());
        assert!(err.to_string().contains("/nope/tasks.json"));
        assert!(err.to_string().contains("file not found"));
    }
}
