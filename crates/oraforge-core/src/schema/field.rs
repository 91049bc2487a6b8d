use super::ColumnAttrs;

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// One entry in the column list of a `CREATE TABLE` statement.
///
/// When deserialized, keys are matched case-insensitively. An entry holding
/// `raw` is a hand-written definition and may not carry any other key; any
/// other entry is a structured column and needs `name` and `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    /// A hand-written column definition, emitted as-is.
    Raw { raw: String },

    /// A named column described by its attributes.
    Column {
        name: String,

        #[serde(flatten)]
        attrs: ColumnAttrs,
    },
}

impl Field {
    pub fn raw(definition: impl Into<String>) -> Field {
        Field::Raw {
            raw: definition.into(),
        }
    }

    pub fn column(name: impl Into<String>, attrs: ColumnAttrs) -> Field {
        Field::Column {
            name: name.into(),
            attrs,
        }
    }

    /// Returns the column name, if this is a structured column.
    pub fn name(&self) -> Option<&str> {
        match self {
            Field::Raw { .. } => None,
            Field::Column { name, .. } => Some(name),
        }
    }
}

const FIELD_KEYS: &[&str] = &[
    "raw",
    "name",
    "type",
    "unsigned",
    "default",
    "null",
    "nullable",
    "constraint",
];

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldVisitor)
    }
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a column table with `name` and `type`, or a `raw` definition")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Field, A::Error> {
        let mut raw: Option<String> = None;
        let mut name: Option<String> = None;
        let mut ty: Option<String> = None;
        let mut attrs = ColumnAttrs::default();
        let mut seen = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            let key = key.to_ascii_lowercase();
            if seen.contains(&key) {
                return Err(de::Error::custom(format!("duplicate key `{key}`")));
            }

            match key.as_str() {
                "raw" => raw = Some(map.next_value()?),
                "name" => name = Some(map.next_value()?),
                "type" => ty = Some(map.next_value()?),
                "unsigned" => attrs.unsigned = map.next_value()?,
                "default" => attrs.default = Some(map.next_value::<Literal>()?.into_string()),
                "null" | "nullable" => attrs.nullable = map.next_value()?,
                "constraint" => attrs.constraint = Some(map.next_value()?),
                _ => return Err(de::Error::unknown_field(&key, FIELD_KEYS)),
            }

            seen.push(key);
        }

        if let Some(raw) = raw {
            if let Some(other) = seen.iter().find(|key| *key != "raw") {
                return Err(de::Error::custom(format!(
                    "`raw` cannot be combined with `{other}`"
                )));
            }
            return Ok(Field::Raw { raw });
        }

        let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
        attrs.ty = ty.ok_or_else(|| de::Error::missing_field("type"))?;

        Ok(Field::Column { name, attrs })
    }
}

/// Table definition files commonly write numeric or boolean defaults without
/// quotes. All of them end up as literal text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    fn into_string(self) -> String {
        match self {
            Literal::String(value) => value,
            Literal::Integer(value) => value.to_string(),
            Literal::Float(value) => value.to_string(),
            Literal::Bool(value) => String::from(if value { "1" } else { "0" }),
        }
    }
}
