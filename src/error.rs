use std::{fmt, io, path::PathBuf, result};

pub type Result<T> = result::Result<T, IconError>;

#[derive(Debug)]
pub enum IconError {
    /// The source file is missing, in an unsupported format, or corrupt.
    SourceUnreadable { path: PathBuf, reason: String },
    /// Creating the output directory or writing the icon file failed.
    OutputUnwritable { path: PathBuf, source: io::Error },
    /// Resampling or container serialization failed.
    EncodingFailure { reason: String },
    /// The target dimension list cannot be expressed in an icon container.
    InvalidDimensions { reason: String },
}

impl IconError {
    pub(crate) fn source_unreadable(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        IconError::SourceUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn output_unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn encoding(reason: impl fmt::Display) -> Self {
        IconError::EncodingFailure {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_dimensions(reason: impl fmt::Display) -> Self {
        IconError::InvalidDimensions {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceUnreadable { path, reason } => {
                write!(f, "cannot read source image {}: {reason}", path.display())
            }
            IconError::OutputUnwritable { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            IconError::EncodingFailure { reason } => write!(f, "encoding failed: {reason}"),
            IconError::InvalidDimensions { reason } => {
                write!(f, "invalid target dimensions: {reason}")
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::OutputUnwritable { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn messages_name_the_cause() {
        let e = IconError::source_unreadable("a/app.png", "No such file or directory");
        assert_eq!(
            e.to_string(),
            "cannot read source image a/app.png: No such file or directory"
        );

        let e = IconError::invalid_dimensions("list is empty");
        assert_eq!(e.to_string(), "invalid target dimensions: list is empty");
    }

    #[test]
    fn output_error_keeps_io_source() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e = IconError::output_unwritable("out/app.ico", io);
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("cannot write out/app.ico"));
    }
}
