use std::fmt;

/// Error types for h3up operations
#[derive(Debug)]
pub enum H3upError {
    /// IO error (report writing, etc.)
    Io(std::io::Error),

    /// HTTP client error
    Http(reqwest::Error),
}

impl fmt::Display for H3upError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            H3upError::Io(err) => write!(f, "IO error: {err}"),
            H3upError::Http(err) => write!(f, "HTTP error: {err}"),
        }
    }
}

impl std::error::Error for H3upError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            H3upError::Io(err) => Some(err),
            H3upError::Http(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for H3upError {
    fn from(err: std::io::Error) -> Self {
        H3upError::Io(err)
    }
}

impl From<reqwest::Error> for H3upError {
    fn from(err: reqwest::Error) -> Self {
        H3upError::Http(err)
    }
}

/// Type alias for Results using H3upError
pub type Result<T> = std::result::Result<T, H3upError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let h3up_error = H3upError::from(io_error);
        assert_eq!(format!("{h3up_error}"), "IO error: pipe closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let h3up_error = H3upError::from(io_error);

        match h3up_error {
            H3upError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let h3up_error = H3upError::from(io_error);

        assert!(h3up_error.source().is_some());
    }

    #[test]
    fn test_error_from_reqwest() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let reqwest_error = rt.block_on(async {
            reqwest::get("http://invalid-domain-that-does-not-exist.com")
                .await
                .unwrap_err()
        });
        let h3up_error = H3upError::from(reqwest_error);

        match h3up_error {
            H3upError::Http(_) => {} // Expected
            _ => panic!("Expected Http variant"),
        }
    }
}
