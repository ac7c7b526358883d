#[cfg(test)]
mod tests;

use std::collections::HashMap;

/// Trait for variable stores that references are resolved against.
///
/// `set_var` is only called by the assigning operators (`${NAME:=word}`,
/// `${NAME=word}`).
pub trait EnvProvider {
    fn get_var(&self, name: &str) -> Option<String>;

    fn set_var(&mut self, name: &str, value: &str);
}

impl<T> EnvProvider for &mut T
where
    T: EnvProvider + ?Sized,
{
    fn get_var(&self, name: &str) -> Option<String> {
        (**self).get_var(name)
    }

    fn set_var(&mut self, name: &str, value: &str) {
        (**self).set_var(name, value)
    }
}

impl EnvProvider for HashMap<String, String> {
    fn get_var(&self, name: &str) -> Option<String> {
        self.get(name).map(ToOwned::to_owned)
    }

    fn set_var(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

/// The store behind [`crate::expand`]: the environment of the running process.
///
/// Values that are not valid UTF-8 are decoded lossily. Assignments that the
/// process environment cannot hold (empty names, names containing `=`, NUL
/// bytes anywhere) are dropped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvProvider;

impl ProcessEnvProvider {
    fn is_exportable(name: &str, value: &str) -> bool {
        !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl EnvProvider for ProcessEnvProvider {
    fn get_var(&self, name: &str) -> Option<String> {
        let value = std::env::var_os(name)?;
        Some(value.into_string().unwrap_or_else(|raw| {
            tracing::debug!(%name, "decoding non UTF-8 value lossily");
            raw.to_string_lossy().into_owned()
        }))
    }

    fn set_var(&mut self, name: &str, value: &str) {
        if !Self::is_exportable(name, value) {
            tracing::warn!(%name, "dropping assignment the process environment cannot hold");
            return;
        }
        std::env::set_var(name, value)
    }
}

/// In-memory store, isolated from the process environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HashMapProvider(HashMap<String, String>);

impl HashMapProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_var(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl EnvProvider for HashMapProvider {
    fn get_var(&self, name: &str) -> Option<String> {
        self.0.get_var(name)
    }

    fn set_var(&mut self, name: &str, value: &str) {
        self.0.set_var(name, value)
    }
}

impl From<HashMap<String, String>> for HashMapProvider {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for HashMapProvider
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(HashMap::from_iter(iter.into_iter().map(|(k, v)| {
            (k.as_ref().to_owned(), v.as_ref().to_owned())
        })))
    }
}
