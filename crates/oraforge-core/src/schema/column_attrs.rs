use serde::Serialize;

/// Attributes of a structured column.
///
/// Deserialized as part of a [`Field`](super::Field), which accepts the keys
/// `TYPE`, `UNSIGNED`, `DEFAULT`, `NULL` and `CONSTRAINT` in any casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnAttrs {
    /// Column type, emitted verbatim (e.g. `VARCHAR2(100)`).
    #[serde(rename = "type")]
    pub ty: String,

    /// Accepted for compatibility with other backends. Oracle has no unsigned
    /// numeric types, so the flag never changes the output.
    pub unsigned: bool,

    /// Default value, rendered as a quoted literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// When false (the default) the column is `NOT NULL`.
    #[serde(rename = "null")]
    pub nullable: bool,

    /// Trailing constraint text, emitted verbatim after `CONSTRAINT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl ColumnAttrs {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }
}
