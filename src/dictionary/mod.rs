pub mod keys;

pub use keys::{face_type, refinement_mode, FaceType, RefinementMode};

/// A value stored under a dictionary key.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare word, e.g. `boundary` or `inside`.
    Word(String),
    /// A boolean switch.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A list of values, e.g. refinement levels `((1.0 2))`.
    List(Vec<Value>),
    /// A nested sub-dictionary.
    Dict(Dictionary),
}

impl From<&str> for Value {
    fn from(word: &str) -> Self {
        Self::Word(word.to_owned())
    }
}

impl From<String> for Value {
    fn from(word: String) -> Self {
        Self::Word(word)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Self::Dict(dict)
    }
}

/// Words accepted as `true` by [`Dictionary::lookup_bool`].
const TRUE_WORDS: [&str; 5] = ["true", "yes", "on", "y", "t"];

/// A named, insertion-ordered mapping from keys to values.
///
/// Every lookup is total: a missing key reads as `None` or `false`,
/// never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    name: String,
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Creates a new, empty dictionary.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the dictionary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Dictionary::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if `key` is present, whatever its kind.
    #[must_use]
    pub fn found(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if `key` is present and holds a field (not a sub-dictionary).
    #[must_use]
    pub fn is_field(&self, key: &str) -> bool {
        matches!(self.get(key), Some(value) if !matches!(value, Value::Dict(_)))
    }

    /// Returns `true` if `key` is present and holds a sub-dictionary.
    #[must_use]
    pub fn is_dictionary(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Dict(_)))
    }

    /// Returns the sub-dictionary stored under `key`.
    #[must_use]
    pub fn sub_dictionary(&self, key: &str) -> Option<&Dictionary> {
        match self.get(key)? {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Returns the word stored under `key`.
    ///
    /// Booleans read back as their literal (`true`/`false`); numbers,
    /// lists and sub-dictionaries read as `None`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::Word(word) => Some(word),
            Value::Bool(true) => Some("true"),
            Value::Bool(false) => Some("false"),
            _ => None,
        }
    }

    /// Returns the boolean stored under `key`, or `false` if absent or not a switch.
    #[must_use]
    pub fn lookup_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(value)) => *value,
            Some(Value::Word(word)) => TRUE_WORDS.contains(&word.to_ascii_lowercase().as_str()),
            _ => false,
        }
    }

    /// Returns the number stored under `key`. Integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lookup_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the integer stored under `key`.
    #[must_use]
    pub fn lookup_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
