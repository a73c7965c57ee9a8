pub mod validation;

use validator::ValidationErrors;

/// Flattens a `validator` error set into one `"; "`-joined message for the response envelope.
/// Identical messages from different fields are reported once.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}
