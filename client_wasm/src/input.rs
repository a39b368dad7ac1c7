//! Pointer and touch input helpers

use game_core::to_logical;

/// Platform fragments that mark a touch-first device
const TOUCH_PLATFORMS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Best-effort guess at whether the user agent belongs to a touch device
pub fn is_touch_device(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    TOUCH_PLATFORMS.iter().any(|platform| ua.contains(platform))
}

/// Logical y of a pointer given in client coordinates.
///
/// `rect_top` and `rect_height` describe the canvas as currently displayed.
pub fn pointer_to_logical(
    client_y: f32,
    rect_top: f32,
    rect_height: f32,
    logical_height: f32,
) -> f32 {
    to_logical(client_y - rect_top, rect_height, logical_height)
}
