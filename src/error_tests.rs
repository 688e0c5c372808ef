use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = WordTallyError::Config("width must be positive".to_string());
    assert_eq!(err.to_string(), "Configuration error: width must be positive");
}

#[test]
fn error_display_input_read() {
    let err = WordTallyError::from(InputError::Read {
        path: PathBuf::from("docs.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    });
    assert_eq!(err.to_string(), "Failed to read input file: docs.csv");
}

#[test]
fn error_display_missing_column() {
    let err = InputError::MissingColumn {
        path: PathBuf::from("docs.csv"),
        column: "Text".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Input file docs.csv is missing required column 'Text'"
    );
}

#[test]
fn error_display_empty_table() {
    let err = WordTallyError::from(RenderError::EmptyTable);
    assert_eq!(err.to_string(), "Nothing to plot: summary table is empty");
}

#[test]
fn error_display_unsupported_format() {
    let err = RenderError::UnsupportedFormat {
        path: PathBuf::from("chart.pdf"),
    };
    assert!(err.to_string().contains("chart.pdf"));
}

#[test]
fn input_read_error_keeps_source() {
    use std::error::Error as _;

    let err = InputError::Read {
        path: PathBuf::from("docs.csv"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        WordTallyError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        WordTallyError::from(InputError::Empty {
            path: PathBuf::from("a.csv")
        })
        .error_type(),
        "Input"
    );
    assert_eq!(
        WordTallyError::from(RenderError::EmptyTable).error_type(),
        "Render"
    );
    assert_eq!(
        WordTallyError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn exit_codes_distinguish_input_and_render_failures() {
    let input = WordTallyError::from(InputError::Empty {
        path: PathBuf::from("a.csv"),
    });
    let render = WordTallyError::from(RenderError::EmptyTable);
    let config = WordTallyError::Config("bad".to_string());

    assert_eq!(input.exit_code(), crate::EXIT_INPUT_ERROR);
    assert_eq!(render.exit_code(), crate::EXIT_RENDER_ERROR);
    assert_eq!(config.exit_code(), crate::EXIT_CONFIG_ERROR);
    assert_ne!(input.exit_code(), crate::EXIT_SUCCESS);
}
