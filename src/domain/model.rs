use serde::{Deserialize, Serialize};

/// Full text of the target HTML file as produced by the compose tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlDocument {
    pub text: String,
}

/// Patched text plus how many body-close markers were replaced.
/// `replacements == 0` is the no-op case: text passes through unchanged.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub html: String,
    pub replacements: usize,
}
