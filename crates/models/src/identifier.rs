//! Identifier format checks shared by payload validation and path parsing.

use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;

/// Parse a canonical hyphenated UUID of any version.
pub fn parse_uuid(s: &str) -> Option<Uuid> {
    if s.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::try_parse(s).ok()
}

/// Parse a canonical hyphenated UUID and require version 4.
pub fn parse_uuid_v4(s: &str) -> Option<Uuid> {
    parse_uuid(s).filter(|id| id.get_version_num() == 4)
}
