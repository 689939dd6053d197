//! Splitting a model reply into its menu and alert sections.

use crate::models::PlanResponse;

/// Marker that opens the alert section, matched ignoring ASCII case.
pub const ALERT_MARKER: &str = "ALERTA:";

/// Splits `raw` at the first case-insensitive occurrence of [`ALERT_MARKER`].
///
/// Without a marker the whole trimmed reply is the menu. With one, the menu is
/// the trimmed text before it and the alert is the trimmed text from the
/// marker onwards. The first match wins, even if it sits inside ordinary menu
/// prose.
///
/// # Examples
///
/// ```rust
/// use nutriplanner_core::split_response;
///
/// let response = split_response("Menu text\nALERTA: stop eating sugar");
/// assert_eq!(response.menu_text, "Menu text");
/// assert_eq!(response.alert_text.as_deref(), Some("ALERTA: stop eating sugar"));
/// ```
pub fn split_response(raw: &str) -> PlanResponse {
    match find_marker(raw) {
        Some(offset) => PlanResponse {
            menu_text: raw[..offset].trim().to_string(),
            alert_text: Some(raw[offset..].trim().to_string()),
        },
        None => PlanResponse {
            menu_text: raw.trim().to_string(),
            alert_text: None,
        },
    }
}

/// Byte offset of the first marker occurrence. The marker is ASCII, so any
/// match starts on a char boundary.
fn find_marker(haystack: &str) -> Option<usize> {
    let marker = ALERT_MARKER.as_bytes();
    haystack
        .as_bytes()
        .windows(marker.len())
        .position(|window| window.eq_ignore_ascii_case(marker))
}
