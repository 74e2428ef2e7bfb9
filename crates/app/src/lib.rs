pub mod app_loop;
pub mod fixed_step;
pub mod seed;
pub mod settings_file;
pub mod ui_scale;

use crawl_core::RunStatus;

pub const APP_NAME: &str = "Crawl";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Short label for the run status, shown in the window title and logs.
pub fn status_label(status: RunStatus) -> String {
    match status {
        RunStatus::Playing => "playing".to_string(),
        RunStatus::LevelTransition { next_level } => format!("entering level {next_level}"),
        RunStatus::GameOver => "game over".to_string(),
    }
}
