//! Constants used throughout the application
//!
//! This module centralizes UI text and layout values. The Korean strings are
//! shown verbatim to the user and must not be reworded.

// UI Text
pub const TITLE: &str = "할 일 목록";
pub const INPUT_PLACEHOLDER: &str = "새로운 할 일을 입력하세요...";
pub const EMPTY_LIST_MESSAGE: &str = "할 일이 없습니다. 새로운 할 일을 추가해보세요!";
pub const COUNTER_PREFIX: &str = "완료";
pub const CLEAR_COMPLETED_LABEL: &str = "완료된 항목 삭제";
pub const KEY_HINTS: &str =
    "Tab: focus  Enter/Space: activate  j/k: move  d: delete  Ctrl+T: icons  Ctrl+L: logs  Esc: quit";
pub const LOG_PANEL_TITLE: &str = " Logs - Esc/Ctrl+L: close, c: clear ";

// Config
pub const APP_NAME: &str = "tallylist";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "tallylist.toml";
pub const LOG_FILE_NAME: &str = "tallylist.log";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const GENERATE_CONFIG_FLAG: &str = "--generate-config";

// Layout Constants
/// Minimum width of the centered list column
pub const LIST_MIN_WIDTH: u16 = 30;
/// Maximum width of the centered list column
pub const LIST_MAX_WIDTH: u16 = 120;
/// Default width of the centered list column
pub const LIST_DEFAULT_WIDTH: u16 = 60;

/// Header counter text, e.g. "완료: 1 / 2"
pub fn counter_text(completed: usize, total: usize) -> String {
    format!("{}: {} / {}", COUNTER_PREFIX, completed, total)
}

/// Clear-completed control label, e.g. "완료된 항목 삭제 (3)"
pub fn clear_completed_label(completed: usize) -> String {
    format!("{} ({})", CLEAR_COMPLETED_LABEL, completed)
}
