use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a variable was referenced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Directory relative to the scan base, `/`-separated, empty at the base itself
    pub path: String,
    pub filename: String,
    pub line: usize,
}

impl Source {
    pub fn new(path: impl Into<String>, filename: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub sources: Vec<Source>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
        }
    }

    pub fn add_source(&mut self, source: Source) {
        self.sources.push(source);
    }
}

/// Variable name to every place it was found
///
/// Names are unique. Sources keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableIndex {
    variables: HashMap<String, Variable>,
}

impl VariableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, source: Source) {
        self.variables
            .entry(name.to_string())
            .or_insert_with(|| Variable::new(name))
            .add_source(source);
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables ordered case-insensitively, ties broken by the exact name
    pub fn sorted(&self) -> Vec<&Variable> {
        let mut variables: Vec<&Variable> = self.variables.values().collect();
        variables.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
        variables
    }

    pub fn into_sorted(self) -> Vec<Variable> {
        let mut variables: Vec<Variable> = self.variables.into_values().collect();
        variables.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
        variables
    }
}

fn sort_key(name: &str) -> (String, &str) {
    (name.to_lowercase(), name)
}
