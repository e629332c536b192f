//! Tests for error types.

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("log_file_content", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument 'log_file_content': must not be empty"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_io());
    }

    #[test]
    fn test_config_display() {
        let err = Error::config("format name cannot be empty");
        assert_eq!(
            err.to_string(),
            "configuration error: format name cannot be empty"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let err = Error::UnknownFormat("binlog".to_string());
        assert_eq!(err.to_string(), "unknown log file format 'binlog'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_kind_preserved() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match Error::from(io_err) {
            Error::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<i32> {
            Err(Error::invalid_argument("format", "not set"))
        }

        fn outer() -> Result<i32> {
            let _ = inner()?;
            Ok(0)
        }

        let result = outer();
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid argument 'format': not set"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::invalid_argument("repository_root", "path is empty");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("InvalidArgument"));
        assert!(debug_str.contains("repository_root"));
    }
}
