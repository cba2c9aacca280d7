//! Rendering context built by merging data documents.

use serde::Serialize;
use serde_yaml::mapping::Entry;
use serde_yaml::{Mapping, Value};

use crate::loader::Document;

/// The merged data a template is rendered against.
///
/// Documents are folded in with a deep merge: nested mappings are combined
/// key by key, while on any other conflict the value already present wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: Mapping,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context by merging documents in order.
    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut context = Self::new();
        for document in documents {
            context.merge(document);
        }
        context
    }

    /// Merge a document into this context.
    pub fn merge(&mut self, document: &Document) {
        merge_mappings(&mut self.values, document);
    }

    /// Look up a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no document has contributed any key yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Document> for RenderContext {
    fn from(values: Document) -> Self {
        Self { values }
    }
}

/// Recursively merge `source` into `target`.
///
/// Keys missing from `target` are copied over. When both sides hold a
/// mapping the merge descends into it. Every other conflict keeps the
/// existing `target` value.
pub fn merge_mappings(target: &mut Mapping, source: &Mapping) {
    for (key, incoming) in source {
        match target.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(incoming.clone());
            }
            Entry::Occupied(mut slot) => {
                if let (Value::Mapping(existing), Value::Mapping(nested)) =
                    (slot.get_mut(), incoming)
                {
                    merge_mappings(existing, nested);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn merged(docs: &[&str]) -> RenderContext {
        let docs: Vec<Document> = docs.iter().map(|d| doc(d)).collect();
        RenderContext::from_documents(&docs)
    }

    #[test]
    fn test_disjoint_documents_union() {
        let forward = merged(&["a: 1", "b: 2"]);
        let backward = merged(&["b: 2", "a: 1"]);

        assert_eq!(forward.len(), 2);
        assert_eq!(forward.get("a").and_then(Value::as_u64), Some(1));
        assert_eq!(forward.get("b").and_then(Value::as_u64), Some(2));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_until_a_key_is_merged() {
        let mut context = RenderContext::new();
        context.merge(&doc("{}"));
        assert!(context.is_empty());

        context.merge(&doc("a: {b: 1}"));
        assert!(!context.is_empty());
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let document = doc("name: app\nports: [80, 443]\nnested: {x: 1, y: {z: true}}");

        let mut once = RenderContext::new();
        once.merge(&document);

        let mut twice = RenderContext::new();
        twice.merge(&document);
        twice.merge(&document);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_nested_mappings_merge_deep() {
        let context = merged(&["x: {a: 1}", "x: {b: 2}"]);
        assert_eq!(context, RenderContext::from(doc("x: {a: 1, b: 2}")));
    }

    #[test]
    fn test_scalar_conflict_keeps_first() {
        let context = merged(&["x: 1", "x: 2"]);
        assert_eq!(context, RenderContext::from(doc("x: 1")));
    }

    #[test]
    fn test_sequences_are_not_concatenated() {
        let context = merged(&["items: [1, 2]", "items: [3]"]);
        assert_eq!(context, RenderContext::from(doc("items: [1, 2]")));
    }

    #[test]
    fn test_mapping_vs_scalar_keeps_first() {
        let context = merged(&["x: {a: 1}", "x: plain"]);
        assert_eq!(context, RenderContext::from(doc("x: {a: 1}")));

        let context = merged(&["x: plain", "x: {a: 1}"]);
        assert_eq!(context, RenderContext::from(doc("x: plain")));
    }

    #[test]
    fn test_deep_leaf_conflict_keeps_first() {
        let context = merged(&[
            "db: {host: primary, pool: {size: 5}}",
            "db: {host: replica, port: 5432, pool: {size: 10, timeout: 30}}",
        ]);
        assert_eq!(
            context,
            RenderContext::from(doc(
                "db: {host: primary, port: 5432, pool: {size: 5, timeout: 30}}"
            ))
        );
    }

    #[test]
    fn test_merge_leaves_source_untouched() {
        let first = doc("x: {a: 1}");
        let second = doc("x: {b: 2}");
        let snapshot = second.clone();

        let mut context = RenderContext::new();
        context.merge(&first);
        context.merge(&second);

        assert_eq!(second, snapshot);
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let context = merged(&["a: 1"]);
        assert_eq!(serde_yaml::to_string(&context).unwrap(), "a: 1\n");
    }
}
