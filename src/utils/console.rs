// src/utils/console.rs

//! Console formatting helpers on top of the `log` facade.

const RULE_WIDTH: usize = 60;

/// Log a header framed by double rules.
pub fn header(title: &str) {
    let border = "═".repeat(RULE_WIDTH);
    log::info!("{border}");
    log::info!("  {title}");
    log::info!("{border}");
}

/// Log a step in a process.
pub fn step(step_num: usize, total: usize, message: &str) {
    log::info!("[STEP {step_num}/{total}] {message}");
}

/// Log a separator line.
pub fn separator() {
    log::info!("{}", "─".repeat(RULE_WIDTH));
}

/// Log a sub-item (indented).
pub fn sub_item(message: &str) {
    log::info!("    {message}");
}

/// Level for per-item progress lines: info when shown, debug otherwise.
pub fn progress_level(show_progress: bool) -> log::Level {
    if show_progress {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

/// Log a summary section.
pub fn summary(title: &str, items: &[(&str, String)]) {
    log::info!("[SUMMARY] {title}");
    for (key, value) in items {
        log::info!("    {key}: {value}");
    }
}
