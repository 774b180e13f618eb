use std::io;

use retab::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ProcessError {
        path: "templates/app/pro/a.yml.hbs".to_string(),
        message: "permission denied".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to process 'templates/app/pro/a.yml.hbs': permission denied."
    );
}
