//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

/// Analyze request without overrides.
pub fn analyze_request(master: &str, typed: &str) -> Value {
    json!({
        "master_text": master,
        "typed_text": typed,
    })
}

/// Analyze request with per-call overrides.
pub fn analyze_request_with(master: &str, typed: &str, overrides: Value) -> Value {
    json!({
        "master_text": master,
        "typed_text": typed,
        "overrides": overrides,
    })
}

/// Compare request, optionally forcing equivalence mode.
pub fn compare_request(master: &str, typed: &str, equivalence: Option<bool>) -> Value {
    match equivalence {
        Some(enabled) => json!({
            "master": master,
            "typed": typed,
            "overrides": { "equivalence": enabled },
        }),
        None => json!({ "master": master, "typed": typed }),
    }
}

/// A short Hindi dictation passage.
pub fn sample_passage() -> &'static str {
    "भारत एक विशाल देश है, जहाँ अनेक भाषाएँ बोली जाती हैं। हिन्दी यहाँ की राजभाषा है।"
}
