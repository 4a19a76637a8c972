//! # Generation Session
//!
//! Mutable state for one code generation pass: the identifier allocator, the
//! helper routines requested so far and the display names of variables.
//!
//! A session is created per pass and consumed when its helper definitions are
//! flushed, so helper text can only be written out once. Separate passes must
//! use separate sessions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::settings::GeneratorSettings;

/// Words the generated JavaScript cannot use as identifiers, plus the globals
/// the emitted code refers to.
const JS_RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield", "await", "arguments",
    "eval", "undefined", "NaN", "Infinity", "Math", "Array", "Number", "Object", "String",
];

/// Issues identifiers that never collide with anything already in the program.
pub trait IdentifierAllocator: fmt::Debug {
    /// Mark a name as taken without issuing it.
    fn reserve(&mut self, name: &str);

    /// Return an identifier derived from `basis` that differs from every
    /// name reserved or issued so far.
    fn issue_unique_name(&mut self, basis: &str) -> String;
}

/// Default allocator: sanitize the basis, then append the smallest free
/// counter starting at 2.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        let mut registry = Self::default();
        for word in JS_RESERVED_WORDS {
            registry.reserve(word);
        }
        registry
    }

    pub fn with_reserved<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for word in words {
            registry.reserve(word.as_ref());
        }
        registry
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }
}

impl IdentifierAllocator for NameRegistry {
    fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    fn issue_unique_name(&mut self, basis: &str) -> String {
        let base = sanitize_identifier(basis);
        let mut candidate = base.clone();
        let mut counter = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Turn arbitrary text into a JavaScript identifier.
fn sanitize_identifier(basis: &str) -> String {
    let mut name: String = basis
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name.push_str("unnamed");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// A support routine emitted once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperDefinition {
    /// Logical identity, e.g. `math_isPrime`
    pub key: String,
    /// Name issued by the allocator and used at every call site
    pub name: String,
    /// Complete routine source
    pub source: String,
}

#[derive(Debug)]
pub struct Session {
    allocator: Box<dyn IdentifierAllocator>,
    /// Helper definitions in first-registered order
    definitions: Vec<HelperDefinition>,
    /// key -> index into `definitions`
    helper_index: HashMap<String, usize>,
    /// logical variable id -> display name
    variables: HashMap<String, String>,
    settings: GeneratorSettings,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_settings(GeneratorSettings::default())
    }

    pub fn with_settings(settings: GeneratorSettings) -> Self {
        let allocator = NameRegistry::with_reserved(&settings.reserved_words);
        Self::with_allocator(settings, Box::new(allocator))
    }

    /// Use an allocator shared with the rest of the program generator.
    pub fn with_allocator(settings: GeneratorSettings, allocator: Box<dyn IdentifierAllocator>) -> Self {
        Self {
            allocator,
            definitions: Vec::new(),
            helper_index: HashMap::new(),
            variables: HashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn issue_unique_name(&mut self, basis: &str) -> String {
        self.allocator.issue_unique_name(basis)
    }

    /// Return the name of the helper registered under `key`, registering it
    /// first if this is the first request in the session.
    ///
    /// `build` receives the issued name and runs at most once per key.
    pub fn ensure_helper<F>(&mut self, key: &str, build: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(&index) = self.helper_index.get(key) {
            return self.definitions[index].name.clone();
        }

        let name = self.allocator.issue_unique_name(key);
        let source = build(&name);
        tracing::debug!(key, name = %name, "Registered helper routine");

        self.helper_index.insert(key.to_string(), self.definitions.len());
        self.definitions.push(HelperDefinition {
            key: key.to_string(),
            name: name.clone(),
            source,
        });
        name
    }

    pub fn helper_name(&self, key: &str) -> Option<&str> {
        self.helper_index
            .get(key)
            .map(|&index| self.definitions[index].name.as_str())
    }

    pub fn definitions(&self) -> &[HelperDefinition] {
        &self.definitions
    }

    /// Bind a logical variable to a display name. Declaring the same id
    /// again returns the existing name.
    pub fn declare_variable(&mut self, variable_id: &str, basis: &str) -> String {
        if let Some(name) = self.variables.get(variable_id) {
            return name.clone();
        }
        let name = self.allocator.issue_unique_name(basis);
        tracing::debug!(variable_id, name = %name, "Declared variable");
        self.variables.insert(variable_id.to_string(), name.clone());
        name
    }

    pub fn variable_name(&self, variable_id: &str) -> Option<&str> {
        self.variables.get(variable_id).map(String::as_str)
    }

    /// End the session, returning helper definitions in registration order.
    pub fn into_definitions(self) -> Vec<HelperDefinition> {
        self.definitions
    }

    /// End the session, returning all helper routines as one block of text.
    pub fn flush(self) -> String {
        self.definitions
            .into_iter()
            .map(|definition| definition.source)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
