use llmwl::generator::create_backend;
use llmwl::{BackendKind, LlmwlError, MaskCatalog, PipelineConfig};
use std::path::PathBuf;

#[test]
fn exit_codes_by_category() {
    let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

    assert_eq!(LlmwlError::MissingRequiredInput { field: "prompt" }.exit_code(), 2);
    assert_eq!(
        LlmwlError::FileReadFailure { path: PathBuf::from("base.txt"), source: io() }.exit_code(),
        3
    );
    assert_eq!(
        LlmwlError::FileWriteFailure { path: PathBuf::from("out.txt"), source: io() }.exit_code(),
        4
    );
    assert_eq!(LlmwlError::GenerationTimeout { timeout: 5 }.exit_code(), 5);
    assert_eq!(LlmwlError::TaskFailed("panicked".to_string()).exit_code(), 1);
}

#[test]
fn messages_are_human_readable() {
    let err = LlmwlError::FileWriteFailure {
        path: PathBuf::from("/tmp/out.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write wordlist /tmp/out.txt: denied");

    let err = LlmwlError::GenerationFailure {
        backend: "local".to_string(),
        message: "exit status: 1".to_string(),
    };
    assert_eq!(err.to_string(), "Generation failed (local): exit status: 1");
}

#[test]
fn catalog_selection_error_names_template() {
    let err = MaskCatalog::default().select(&["{word}2099"]).unwrap_err();
    assert!(err.to_string().contains("{word}2099"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn backend_creation_for_both_kinds() {
    let config = PipelineConfig::default();
    assert!(create_backend(BackendKind::Api, &config).is_ok());
    assert!(create_backend(BackendKind::Local, &config).is_ok());
}
