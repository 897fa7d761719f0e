// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};
use tag_grouper_shared_kernel::{DomainError, DomainResult};

use crate::options::{KeyOrder, MalformedPolicy};

/// Options controlling a grouping run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupingConfig {
    pub key_order: KeyOrder,
    pub on_malformed: MalformedPolicy,
}

impl GroupingConfig {
    /// Strict configuration: first-seen key order, fail on malformed records.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Same as [`strict`](Self::strict) but skips malformed records.
    pub fn lenient() -> Self {
        Self { on_malformed: MalformedPolicy::Skip, ..Self::default() }
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Parses a JSON configuration document; absent keys take their defaults.
    pub fn from_json_str(text: &str) -> DomainResult<Self> {
        serde_json::from_str(text).map_err(|e| DomainError::InvalidConfiguration { reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = GroupingConfig::from_json_str("{}").expect("parses");
        assert_eq!(config, GroupingConfig::strict());
    }

    #[test]
    fn reads_snake_case_options() {
        let config = GroupingConfig::from_json_str(r#"{"key_order":"lexicographic","on_malformed":"skip"}"#)
            .expect("parses");
        assert_eq!(config, GroupingConfig::lenient().with_key_order(KeyOrder::Lexicographic));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GroupingConfig::from_json_str(r#"{"order":"sorted"}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration { .. }));
    }
}
