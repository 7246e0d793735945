// ABOUTME: Classifies model names into provider families.
// ABOUTME: Families decide which provider-native capabilities a request may carry.

/// A model family, derived from the model name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// `gemini-1*` models. Native search must be the only tool.
    Gemini1,
    /// `gemini-2*` models. Native search combines with other tools.
    Gemini2,
    /// Anything else.
    Other,
}

impl ModelFamily {
    /// Classify a model by name.
    pub fn of(model: &str) -> Self {
        if model.starts_with("gemini-1") {
            ModelFamily::Gemini1
        } else if model.starts_with("gemini-2") {
            ModelFamily::Gemini2
        } else {
            ModelFamily::Other
        }
    }
}
