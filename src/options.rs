use serde::{Deserialize, Serialize};

/// Renderer configuration.
///
/// ```rust
/// use hyperspeed::RenderOptions;
/// let opts: RenderOptions = serde_json::from_str(r#"{ "dedupe_attribute_values": true }"#).unwrap();
/// assert!(opts.dedupe_attribute_values);
/// assert!(!RenderOptions::default().dedupe_attribute_values);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Collapse repeated scalars inside one sequence-valued attribute to their
    /// first occurrence, compared by rendered form (`["c1", :c1]` renders `c1`).
    pub dedupe_attribute_values: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dedupe_attribute_values(mut self, enabled: bool) -> Self {
        self.dedupe_attribute_values = enabled;
        self
    }
}
