//! Denylist guard for free-text WHERE clauses.
//!
//! Caller-supplied filters are appended to generated SELECT statements
//! verbatim, not parsed into an AST. This guard is a best-effort rejection
//! of clearly dangerous substrings, not a sanitizer: a semantically valid
//! but logically destructive clause still passes.

use oramap_core::{FilterError, Result};

/// Substrings that reject a WHERE clause, matched case-insensitively.
pub const DENYLIST: &[&str] = &[";", "--", "/*", "*/", "xp_", "exec", "drop", "select"];

/// Check a free-text WHERE clause against the denylist.
///
/// The match is on the lowercased text; the error names the offending
/// token and carries the clause verbatim.
pub fn check_where_clause(clause: &str) -> Result<()> {
    let lowered = clause.to_lowercase();
    for token in DENYLIST {
        if lowered.contains(token) {
            return Err(FilterError {
                token,
                clause: clause.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
