// tests/logging_level.rs

use shaderwatch::cli::LogLevel;
use shaderwatch::logging::resolve_level;

#[test]
fn cli_flag_wins_over_environment() {
    assert_eq!(
        resolve_level(Some(LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
}

#[test]
fn environment_is_used_when_flag_is_absent() {
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("trace")), tracing::Level::TRACE);
}

#[test]
fn falls_back_to_info() {
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
}
