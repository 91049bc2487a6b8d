/// Describes which DDL features the target Oracle release accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    /// Supports `CREATE TABLE IF NOT EXISTS`.
    pub create_table_if_not_exists: bool,

    /// Supports `DROP TABLE IF EXISTS`.
    pub drop_table_if_exists: bool,
}

impl Capability {
    /// Oracle Database 23ai and later.
    pub const ORACLE: Self = Self {
        create_table_if_not_exists: true,
        drop_table_if_exists: true,
    };

    /// Oracle releases before 23ai, which reject the `IF [NOT] EXISTS` clauses.
    pub const ORACLE_LEGACY: Self = Self {
        create_table_if_not_exists: false,
        drop_table_if_exists: false,
    };
}

impl Default for Capability {
    fn default() -> Self {
        Self::ORACLE
    }
}
