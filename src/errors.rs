use std::fmt;

/// Custom error type that includes exit codes
#[derive(Debug)]
pub enum ShimError {
    /// Selector could not be parsed in strict mode (exit code 2)
    MalformedSelector { selector: String, reason: String },
    /// Settings could not be read, written or updated (exit code 3)
    Config(String),
    /// Selectors could not be read from a file or stdin (exit code 4)
    Input(String),
    /// Generic error (exit code 1)
    Other(anyhow::Error),
}

impl ShimError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShimError::MalformedSelector { .. } => 2,
            ShimError::Config(_) => 3,
            ShimError::Input(_) => 4,
            ShimError::Other(_) => 1,
        }
    }
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::MalformedSelector { selector, reason } => {
                write!(f, "Malformed selector '{}': {}", selector, reason)
            }
            ShimError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ShimError::Input(msg) => write!(f, "Failed to read selectors: {}", msg),
            ShimError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ShimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShimError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ShimError {
    fn from(err: anyhow::Error) -> Self {
        // Handlers raise ShimError directly where the category is known
        let err = match err.downcast::<ShimError>() {
            Ok(shim_err) => return shim_err,
            Err(err) => err,
        };

        if err.downcast_ref::<std::io::Error>().is_some() {
            ShimError::Input(format!("{:#}", err))
        } else {
            ShimError::Other(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let malformed = ShimError::MalformedSelector {
            selector: "div:contains(x)".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(malformed.exit_code(), 2);
        assert_eq!(ShimError::Config("x".to_string()).exit_code(), 3);
        assert_eq!(ShimError::Input("x".to_string()).exit_code(), 4);
        assert_eq!(ShimError::Other(anyhow::anyhow!("x")).exit_code(), 1);
    }

    #[test]
    fn test_from_anyhow_keeps_shim_errors() {
        let err = anyhow::Error::new(ShimError::Config("Unknown setting".to_string()));
        let shim_err: ShimError = err.into();
        assert!(matches!(shim_err, ShimError::Config(_)));
        assert_eq!(shim_err.to_string(), "Configuration error: Unknown setting");
    }

    #[test]
    fn test_from_anyhow_detects_io_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let shim_err: ShimError = anyhow::Error::new(io_err).into();
        assert!(matches!(shim_err, ShimError::Input(_)));
        assert_eq!(shim_err.exit_code(), 4);
    }

    #[test]
    fn test_from_anyhow_generic() {
        let shim_err: ShimError = anyhow::anyhow!("something else").into();
        assert!(matches!(shim_err, ShimError::Other(_)));
        assert_eq!(shim_err.to_string(), "something else");
    }
}
