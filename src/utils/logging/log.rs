//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - URL or path being operated on
pub fn log_operation_start(operation: &str, target: &str) {
    log::info!("{operation} {target}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - URL or path that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: &str,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items from {target} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items from {target}");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `target` - Optional URL or path related to the warning
pub fn log_warning(message: &str, target: Option<&str>) {
    if let Some(target) = target {
        log::warn!("{message}: {target}");
    } else {
        log::warn!("{message}");
    }
}
