use solid_ac::utils::logger::{init_cli_logger, LogFormat};
use solid_ac::AcError;

// Own test binary: the global subscriber can only be installed once per process.
#[test]
fn test_logger_installs_once() {
    assert!(init_cli_logger(false, LogFormat::Compact).is_ok());

    let err = init_cli_logger(true, LogFormat::Json).unwrap_err();
    assert!(matches!(err, AcError::LoggerInit { .. }));
}
