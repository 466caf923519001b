use std::collections::HashMap;

/// `#define` name to replacement text. A later definition replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    constants: HashMap<String, String>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.constants.insert(name, value);
    }

    pub fn extend(&mut self, defines: impl IntoIterator<Item = (String, String)>) {
        for (name, value) in defines {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.constants.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Substitutes a single level: the value is not looked up again
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }
}

/// How one call-site token was interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Already a string literal
    Literal(String),
    /// Macro name expanded through the constant table
    Expanded { from: String, to: String },
    /// Macro name with no known definition
    Unresolved(String),
}
