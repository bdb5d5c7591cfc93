//! Tests for error construction, messages and kind predicates

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use gridpaint::io::error::{PaintError, degenerate, invalid_argument, not_found};

    // Messages name the offending parameter
    // Verified by dropping the parameter from the message
    #[test]
    fn test_invalid_argument_message() {
        let error = invalid_argument("name", &"must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'name': must not be empty"
        );
        assert!(error.is_invalid_argument());
        assert!(!error.is_not_found());
    }

    // Not found errors carry the kind and name
    // Verified by swapping kind and name in the message
    #[test]
    fn test_not_found_message() {
        let error = not_found("pattern strategy", &"waves");
        assert_eq!(
            error.to_string(),
            "No pattern strategy named 'waves' is registered"
        );
        assert!(error.is_not_found());
        assert!(degenerate(&"empty").is_degenerate());
    }

    // Wrapped I/O errors are exposed as the source
    // Verified by removing the #[source] attribute
    #[test]
    fn test_file_system_source_chain() {
        let error = PaintError::FileSystem {
            path: PathBuf::from("out/colors.json"),
            operation: "write color dump",
            source: std::io::Error::other("disk full"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("out/colors.json"));
    }
}
