use crate::database::structs::sql_fragment::SqlFragment;
use std::fmt;

impl SqlFragment {
    /// Wraps trusted SQL text. The caller vouches that it is safe to inline.
    pub fn raw(sql: impl Into<String>) -> SqlFragment {
        SqlFragment(sql.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
