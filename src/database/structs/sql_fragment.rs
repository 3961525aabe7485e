/// Caller-supplied SQL that is inlined verbatim after `WHERE` or `SET`.
///
/// Nothing here is escaped or validated. Anything derived from user input
/// must be sanitized before it is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFragment(pub(crate) String);
