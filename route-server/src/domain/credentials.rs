//! Provider credentials.

use std::fmt;

/// API key for the directions provider.
///
/// Injected into the translator at construction. `Debug` is redacted so the
/// key never ends up in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_key() {
        let key = ApiKey::new("AIzaSecret123");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("AIzaSecret123"));
        assert_eq!(rendered, "ApiKey(<redacted>)");
    }

    #[test]
    fn exposes_raw_value() {
        let key = ApiKey::new("k");
        assert_eq!(key.as_str(), "k");
        assert!(!key.is_empty());
        assert!(ApiKey::new("").is_empty());
    }
}
