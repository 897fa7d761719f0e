// crates/shared-kernel/src/value_objects/tag.rs
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Category label attached to a debug record and used as its grouping key.
///
/// Any JSON scalar can be a tag. Variants never compare equal to each other,
/// so `3` and `"3"` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
}

impl Tag {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Str(_) => 3,
        }
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Self::Str(tag)
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Self::Str(tag.to_string())
    }
}

impl From<bool> for Tag {
    fn from(tag: bool) -> Self {
        Self::Bool(tag)
    }
}

impl From<i64> for Tag {
    fn from(tag: i64) -> Self {
        Self::Number(tag.into())
    }
}

impl From<Number> for Tag {
    fn from(tag: Number) -> Self {
        Self::Number(tag)
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Null < booleans < numbers < strings. Numbers compare by value, then by
/// their text so that `1` and `1.0` stay distinct.
impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => {
                let (x, y) = (a.as_f64().unwrap_or(f64::NAN), b.as_f64().unwrap_or(f64::NAN));
                x.total_cmp(&y).then_with(|| a.to_string().cmp(&b.to_string()))
            }
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Strings print raw; other tags print as their JSON literal.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(tag) => write!(f, "{tag}"),
            Self::Number(tag) => write!(f, "{tag}"),
            Self::Str(tag) => write!(f, "{tag}"),
        }
    }
}
