//! Parsed translation catalogs and dotted-key traversal

use serde_json::Value;
use std::collections::HashMap;

/// One node of a translation catalog tree
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    /// Keyed mapping of child nodes
    Branch(HashMap<String, CatalogNode>),
    /// Translated text
    Text(String),
    /// Any other JSON value; never returned as a translation
    Other(Value),
}

impl From<Value> for CatalogNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl CatalogNode {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Branch(children) => children.get(segment),
            Self::Text(_) | Self::Other(_) => None,
        }
    }
}

/// All translations for one locale
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: CatalogNode,
}

impl Catalog {
    /// Parse a catalog from its JSON representation
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self { root: value.into() })
    }

    /// Resolve a dot-delimited key to its text.
    ///
    /// Returns `None` when a segment is missing, when the path runs through a
    /// non-mapping node, or when it ends on anything but text.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let node = key
            .split('.')
            .try_fold(&self.root, |node, segment| node.child(segment))?;

        match node {
            CatalogNode::Text(text) => Some(text),
            CatalogNode::Branch(_) | CatalogNode::Other(_) => None,
        }
    }

    /// Dotted paths of every text leaf, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, String::new(), &mut keys);
        keys.sort();
        keys
    }
}

fn collect_keys(node: &CatalogNode, prefix: String, keys: &mut Vec<String>) {
    match node {
        CatalogNode::Branch(children) => {
            for (segment, child) in children {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                collect_keys(child, path, keys);
            }
        }
        // A text root has no addressable key.
        CatalogNode::Text(_) if prefix.is_empty() => {}
        CatalogNode::Text(_) => keys.push(prefix),
        CatalogNode::Other(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"{
                "auth": {
                    "incorrect_credentials": "Incorrect email or password",
                    "nested": { "deep": "Deep value" }
                },
                "count": 3,
                "top": "Top level"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_nested_leaf() {
        let catalog = sample();
        assert_eq!(
            catalog.lookup("auth.incorrect_credentials"),
            Some("Incorrect email or password")
        );
        assert_eq!(catalog.lookup("auth.nested.deep"), Some("Deep value"));
        assert_eq!(catalog.lookup("top"), Some("Top level"));
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = sample();
        assert_eq!(catalog.lookup("auth"), None);
        assert_eq!(catalog.lookup("auth.missing"), None);
        assert_eq!(catalog.lookup("top.below"), None);
        assert_eq!(catalog.lookup("count"), None);
        assert_eq!(catalog.lookup(""), None);
        assert_eq!(catalog.lookup("auth..nested"), None);
    }

    #[test]
    fn test_non_object_root() {
        let catalog = Catalog::from_json("\"just text\"").unwrap();
        assert_eq!(catalog.lookup("anything"), None);
        assert!(catalog.keys().is_empty());
    }

    #[test]
    fn test_keys_of_scalar_roots() {
        for raw in ["\"just text\"", "3", "[\"a\"]", "{}"] {
            assert!(Catalog::from_json(raw).unwrap().keys().is_empty(), "root {raw}");
        }
    }

    #[test]
    fn test_keys_lists_text_leaves() {
        assert_eq!(
            sample().keys(),
            vec!["auth.incorrect_credentials", "auth.nested.deep", "top"]
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
