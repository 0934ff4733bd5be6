//! Bundle host errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// `dist_dir` has no `index.html`; the front end was never built
    #[error("No front-end bundle at {0:?} (run `trunk build` in echo-ui/)")]
    MissingBundle(PathBuf),

    /// Socket bind or other IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server loop exited with an error
    #[error("Server error: {0}")]
    Serve(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::MissingBundle(PathBuf::from("dist"));
        assert!(err.to_string().contains("\"dist\""));

        let err: ServerError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken").into();
        assert_eq!(err.to_string(), "IO error: taken");
    }
}
