use std::fmt;

use crate::error::NetworkError;

/// Errors raised while reading configuration or example files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: String, source: std::io::Error },
    /// A line could not be parsed; `line` is 1-based. `path` is set when the
    /// text came from a file.
    Parse {
        path: Option<String>,
        line: usize,
        msg: String,
    },
    /// A required configuration key never appeared.
    MissingKey(&'static str),
    /// The assembled spec failed validation.
    Spec(NetworkError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Parse {
                path: Some(path),
                line,
                msg,
            } => write!(f, "{path}:{line}: {msg}"),
            Self::Parse {
                path: None,
                line,
                msg,
            } => write!(f, "line {line}: {msg}"),
            Self::MissingKey(key) => write!(f, "missing configuration key `{key}`"),
            Self::Spec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Spec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NetworkError> for LoadError {
    fn from(e: NetworkError) -> Self {
        Self::Spec(e)
    }
}

impl LoadError {
    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            line,
            msg: msg.into(),
        }
    }

    /// Attaches `path` to a parse error that has none; other errors pass through.
    pub(crate) fn in_file(self, path: &str) -> Self {
        match self {
            Self::Parse {
                path: None,
                line,
                msg,
            } => Self::Parse {
                path: Some(path.to_string()),
                line,
                msg,
            },
            other => other,
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_its_file_once_attached() {
        let err = LoadError::parse(4, "bad token");
        assert_eq!(err.to_string(), "line 4: bad token");

        let err = err.in_file("data.txt");
        assert_eq!(err.to_string(), "data.txt:4: bad token");

        // A second attach keeps the first path.
        assert_eq!(err.in_file("other.txt").to_string(), "data.txt:4: bad token");
    }

    #[test]
    fn in_file_leaves_other_errors_alone() {
        let err = LoadError::MissingKey("alpha").in_file("conf.props");
        assert!(matches!(err, LoadError::MissingKey("alpha")));
    }
}
