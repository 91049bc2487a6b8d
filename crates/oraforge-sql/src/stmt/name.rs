use oraforge_core::schema;

use std::fmt;

/// A possibly schema-qualified identifier, such as `hr.employees`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// Returns true when the name is an expression that must not be split or
    /// escaped, such as a function call or a string literal.
    pub fn is_expr(value: &str) -> bool {
        schema::is_expr(value)
    }

    /// The unqualified part of the name.
    pub fn last(&self) -> Name {
        Name(self.0.last().cloned().into_iter().collect())
    }

    /// Prepends `prefix` to the last part of the name.
    pub(crate) fn prefix(&mut self, prefix: &str) {
        if let Some(last) = self.0.last_mut() {
            if !Name::is_expr(last) {
                last.insert_str(0, prefix);
            }
        }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        if Name::is_expr(value) {
            return Self(vec![value.into()]);
        }

        Self(value.split('.').map(|part| part.trim().to_string()).collect())
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
