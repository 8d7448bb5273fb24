use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// String-to-string mapping of protocol parameters.
///
/// Keys are exact, case-sensitive field names (`AccessKeyId`, `PhoneNumbers`, ...).
/// Values are stored as given: no validation, no coercion. Multi-valued fields
/// must be joined by the caller before insertion.
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up the current value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the current pairs.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.set(k, v);
        }
        set
    }
}
