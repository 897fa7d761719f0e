// crates/domain/src/model/tag_groups.rs
use std::{borrow::Borrow, collections::HashMap, fmt, hash::Hash};

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Mapping from tag to the data values recorded under it.
///
/// Keys iterate in a fixed order decided at construction (first appearance
/// unless sorted). Values keep their input order within each group.
#[derive(Debug, Clone)]
pub struct TagGroups<T, D> {
    index: HashMap<T, usize>,
    groups: Vec<(T, Vec<D>)>,
}

impl<T, D> TagGroups<T, D>
where
    T: Eq + Hash + Clone,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { index: HashMap::with_capacity(capacity), groups: Vec::new() }
    }

    pub(crate) fn push(&mut self, tag: T, data: D) {
        match self.index.get(&tag) {
            Some(&slot) => self.groups[slot].1.push(data),
            None => {
                self.index.insert(tag.clone(), self.groups.len());
                self.groups.push((tag, vec![data]));
            }
        }
    }

    pub fn get<Q>(&self, tag: &Q) -> Option<&[D]>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(tag).map(|&slot| self.groups[slot].1.as_slice())
    }
}

impl<T: Ord, D> TagGroups<T, D> {
    /// Reorders keys by `T`'s ordering; data order inside each group is untouched.
    pub(crate) fn sort_tags(&mut self)
    where
        T: Eq + Hash + Clone,
    {
        self.groups.sort_by(|a, b| a.0.cmp(&b.0));
        for (slot, (tag, _)) in self.groups.iter().enumerate() {
            if let Some(entry) = self.index.get_mut(tag) {
                *entry = slot;
            }
        }
    }
}

impl<T, D> TagGroups<T, D> {
    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of data values across all groups.
    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|(_, data)| data.len()).sum()
    }

    pub fn tags(&self) -> impl Iterator<Item = &T> {
        self.groups.iter().map(|(tag, _)| tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &[D])> {
        self.groups.iter().map(|(tag, data)| (tag, data.as_slice()))
    }
}

impl<T, D> PartialEq for TagGroups<T, D>
where
    T: PartialEq,
    D: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

/// JSON object keys are strings, so each tag is written in its display form.
impl<T: fmt::Display, D: Serialize> Serialize for TagGroups<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (tag, data) in &self.groups {
            map.serialize_entry(&tag.to_string(), data)?;
        }
        map.end()
    }
}
