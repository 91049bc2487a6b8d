use serde::{Deserialize, Deserializer, Serialize};

/// A group of columns that must be unique together.
///
/// A single column name is accepted wherever a group is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UniqueKey(pub Vec<String>);

impl UniqueKey {
    pub fn columns(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for UniqueKey {
    fn from(value: &str) -> Self {
        UniqueKey(vec![value.into()])
    }
}

impl From<String> for UniqueKey {
    fn from(value: String) -> Self {
        UniqueKey(vec![value])
    }
}

impl From<Vec<String>> for UniqueKey {
    fn from(value: Vec<String>) -> Self {
        UniqueKey(value)
    }
}

impl<const N: usize> From<[&str; N]> for UniqueKey {
    fn from(value: [&str; N]) -> Self {
        UniqueKey(value.iter().map(|name| name.to_string()).collect())
    }
}

impl<'de> Deserialize<'de> for UniqueKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(name) => UniqueKey::from(name),
            OneOrMany::Many(names) => UniqueKey(names),
        })
    }
}
