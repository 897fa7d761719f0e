// crates/domain/src/model/record.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tag_grouper_shared_kernel::{DomainError, DomainResult};

use crate::value_objects::Tag;

pub const TAG_FIELD: &str = "tag";
pub const DATA_FIELD: &str = "data";

/// A single tagged input item.
///
/// `T` is the grouping key and only needs equality and hashing for grouping.
/// Records built from dynamic JSON use [`Tag`] and [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T = Tag, D = Value> {
    pub tag: T,
    pub data: D,
}

impl<T, D> Record<T, D> {
    pub fn new(tag: T, data: D) -> Self {
        Self { tag, data }
    }

    pub fn into_parts(self) -> (T, D) {
        (self.tag, self.data)
    }
}

impl Record<Tag, Value> {
    /// Validates a dynamic record taken from position `index` of its input.
    ///
    /// Checks run in order: object shape, `tag` present, `tag` is a scalar,
    /// `data` present. Extra keys such as `file` and `line` are ignored.
    pub fn try_from_value(index: usize, value: Value) -> DomainResult<Self> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(DomainError::InvalidRecord {
                    index,
                    reason: format!("expected an object, found {}", json_kind(&other)),
                });
            }
        };

        let tag = match fields.remove(TAG_FIELD) {
            None => return Err(DomainError::MissingField { index, field: TAG_FIELD }),
            Some(Value::Null) => Tag::Null,
            Some(Value::Bool(tag)) => Tag::Bool(tag),
            Some(Value::Number(tag)) => Tag::Number(tag),
            Some(Value::String(tag)) => Tag::Str(tag),
            Some(other) => {
                return Err(DomainError::InvalidRecord {
                    index,
                    reason: format!("'{TAG_FIELD}' must be a scalar to be used as a key, found {}", json_kind(&other)),
                });
            }
        };

        let data = fields
            .remove(DATA_FIELD)
            .ok_or(DomainError::MissingField { index, field: DATA_FIELD })?;

        Ok(Self { tag, data })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
