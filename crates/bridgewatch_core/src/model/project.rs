use serde::{Deserialize, Serialize};

/// One level of the package → route → segment selection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn leaf(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    pub fn branch(label: &str, value: &str, children: Vec<ProjectNode>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            children,
        }
    }

    /// Walks `values` down from a forest of roots, returning the labels of every
    /// matched level. Stops with `None` at the first value that has no node.
    pub fn resolve_path<'a>(roots: &'a [ProjectNode], values: &[String]) -> Option<Vec<&'a str>> {
        let mut level = roots;
        let mut labels = Vec::with_capacity(values.len());
        for value in values {
            let node = level.iter().find(|node| node.value == *value)?;
            labels.push(node.label.as_str());
            level = &node.children;
        }
        Some(labels)
    }
}
