use serde_json::{Map, Value};
use thiserror::Error;

/// Sentinel token passed as the final argument of every validator call.
///
/// A validator can compare its last argument against this constant to confirm
/// it is being driven through [`check_prop_types`](crate::check_prop_types)
/// rather than called directly. The value is shared by convention across the
/// prop-types ecosystem; no cryptographic property is intended.
pub const SECRET: &str = "SECRET_DO_NOT_PASS_THIS_OR_YOU_WILL_BE_FIRED";

/// A validator capability for one named field.
///
/// Arguments, in order: the full values mapping, the field name under check,
/// the component name exactly as the caller supplied it (no fallback
/// applied), the location tag, a reserved full-name placeholder (always
/// `None`), and [`SECRET`].
pub type ValidatorFn = Box<
    dyn Fn(&Map<String, Value>, &str, Option<&str>, &str, Option<&str>, &str) -> Verdict
        + Send
        + Sync,
>;

/// One declared type spec entry.
pub enum TypeSpec {
    /// An invocable validator.
    Validator(ValidatorFn),
    /// Declared but not invocable (the dynamic-language case of a `null` or
    /// misspelled export). Reported as a configuration error, never invoked.
    NotCallable,
}

impl TypeSpec {
    /// Wrap a closure as a [`TypeSpec::Validator`].
    pub fn validator<F>(f: F) -> Self
    where
        F: Fn(&Map<String, Value>, &str, Option<&str>, &str, Option<&str>, &str) -> Verdict
            + Send
            + Sync
            + 'static,
    {
        TypeSpec::Validator(Box::new(f))
    }
}

impl std::fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSpec::Validator(_) => f.write_str("Validator(..)"),
            TypeSpec::NotCallable => f.write_str("NotCallable"),
        }
    }
}

/// What a validator reported for one field.
#[derive(Debug)]
pub enum Verdict {
    /// The value is acceptable.
    Pass,
    /// The value is invalid, with a human-readable reason.
    Fail(SpecError),
    /// Anything that is neither a pass nor an error-kind value. Carries the
    /// offending value so the configuration error can name its runtime type.
    /// Falsy payloads (`null`, `false`, `""`, `0`) are treated as a pass.
    Malformed(Value),
}

/// The error-kind value a validator returns to reject a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SpecError {
    message: String,
}

impl SpecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Insertion-ordered mapping of field name to [`TypeSpec`].
///
/// Iteration yields entries in the order they were first inserted, which is
/// what determines which failure a check reports when several specs would
/// fail. Inserting an existing name replaces its spec in place.
#[derive(Debug, Default)]
pub struct TypeSpecs {
    entries: Vec<(String, TypeSpec)>,
}

impl TypeSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, spec: TypeSpec) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: TypeSpec) {
        let name = name.into();
        if let Some(position) = self.entries.iter().position(|(existing, _)| *existing == name) {
            self.entries[position].1 = spec;
        } else {
            self.entries.push((name, spec));
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeSpec> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, TypeSpec)> for TypeSpecs {
    fn from_iter<I: IntoIterator<Item = (S, TypeSpec)>>(iter: I) -> Self {
        let mut specs = Self::new();
        for (name, spec) in iter {
            specs.insert(name, spec);
        }
        specs
    }
}
