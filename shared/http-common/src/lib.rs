//! Shared HTTP utilities for the kitchen API workspace.
//!
//! Provides framework-agnostic JSON error bodies and small parsing helpers
//! used by the api-server.

// ============================================================================
// JSON Response Helpers (framework-agnostic)
// ============================================================================

/// Create a structured error JSON with a default message based on the code.
///
/// Returns: `{"error": {"code": "<code>", "message": "<default message>"}}`
pub fn json_err(code: &str) -> serde_json::Value {
    let message = match code {
        "not_found" => "Resource not found",
        _ => code, // Fallback to code as message for unknown codes
    };
    serde_json::json!({"error": {"code": code, "message": message}})
}

/// Create a structured error JSON with a custom message.
///
/// Returns: `{"error": {"code": "<code>", "message": "<message>"}}`
pub fn json_error_with_message(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message}})
}

// ============================================================================
// Parsing Helpers
// ============================================================================

/// Interpret a flag value such as an environment variable.
///
/// `1`, `true`, `yes` and `on` (any case) are true; everything else is false.
pub fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Check an optional id carried in a request body against the id in the path.
///
/// Absent ids are accepted; the path always decides which record is targeted.
pub fn body_id_matches(path_id: &str, body_id: Option<&str>) -> bool {
    body_id.map_or(true, |b| b == path_id)
}
