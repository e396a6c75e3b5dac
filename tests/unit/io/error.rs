//! Tests for error types including source chaining, messages and exit codes

#[cfg(test)]
mod tests {
    use ditherprune::PruneError;
    use ditherprune::io::error::{file_system_error, invalid_parameter, invalid_size};
    use std::error::Error;
    use std::io::ErrorKind;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = file_system_error(
            "/tmp/items.txt",
            "read",
            std::io::Error::new(ErrorKind::NotFound, "file not found"),
        );

        assert!(error.source().is_some());
        assert!(invalid_size(-3, &"negative").source().is_none());
    }

    // Tests messages carry the offending values
    // Verified by omitting the value from each message
    #[test]
    fn test_error_messages() {
        let message = invalid_size(-1, &"must not be negative").to_string();
        assert!(message.contains("-1"));
        assert!(message.contains("must not be negative"));

        let message = PruneError::InvalidScale { scale: -0.5 }.to_string();
        assert!(message.contains("-0.5"));

        let message = invalid_parameter("factor", &f64::NAN, &"must be a finite number").to_string();
        assert!(message.contains("factor"));
        assert!(message.contains("NaN"));
        assert!(message.contains("must be a finite number"));

        let message = file_system_error(
            "/restricted/out.txt",
            "write",
            std::io::Error::new(ErrorKind::PermissionDenied, "access denied"),
        )
        .to_string();
        assert!(message.contains("/restricted/out.txt"));
        assert!(message.contains("write"));
        assert!(message.contains("access denied"));
    }

    // Tests domain errors map to 64, interrupts to 130 and everything else to 1
    // Verified by classifying file system errors as domain errors
    #[test]
    fn test_exit_codes() {
        let size = invalid_size(-1, &"negative");
        assert!(size.is_domain_error());
        assert_eq!(size.exit_code(), 64);

        let scale = PruneError::InvalidScale { scale: 0.0 };
        assert!(scale.is_domain_error());
        assert_eq!(scale.exit_code(), 64);

        let io: PruneError = std::io::Error::other("disk on fire").into();
        assert!(!io.is_domain_error());
        assert_eq!(io.exit_code(), 1);
        assert_eq!(io.kind(), "FileSystem");

        let interrupted: PruneError =
            std::io::Error::new(ErrorKind::Interrupted, "interrupted").into();
        assert_eq!(interrupted.exit_code(), 130);
    }
}
