use thiserror::Error;

/// Errors returned by the threshold setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LogError {
    /// The requested rank is outside `[DEBUG, FATAL]`.
    #[error("invalid threshold {0}: need one between DEBUG (0) and FATAL (4)")]
    InvalidThreshold(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rejected_rank() {
        let msg = LogError::InvalidThreshold(999).to_string();
        assert!(msg.contains("999"), "got: {msg}");
        assert!(msg.contains("DEBUG") && msg.contains("FATAL"), "got: {msg}");
    }
}
