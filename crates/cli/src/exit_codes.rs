//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                                  |
//! |---------|-----------|----------------------------------------------|
//! | 0       | Universal | Success                                      |
//! | 1       | Universal | General error (unspecified)                  |
//! | 2       | Universal | CLI usage error (bad args, refused action)   |
//! | 3-9     | Local     | IO / parse / empty-export codes              |
//! | 10-19   | API       | Extraction service codes                     |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use lexsift_client::ClientError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, or a destructive action without --force.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Local (3-9)
// =============================================================================

/// IO error - cannot read or write a local file.
pub const EXIT_IO: u8 = 3;

/// Parse error - local input could not be interpreted.
pub const EXIT_PARSE: u8 = 4;

/// Export refused: the projected row set is empty, no file was written.
pub const EXIT_NO_DATA: u8 = 5;

// =============================================================================
// API (10-19) — extraction service codes
// =============================================================================

/// Network failure reaching the extraction service.
pub const EXIT_API_NETWORK: u8 = 10;

/// The service answered with a non-success HTTP status.
pub const EXIT_API_HTTP: u8 = 11;

/// The service answered with a body the client could not parse.
pub const EXIT_API_PARSE: u8 = 12;

/// Map a ClientError to its exit code.
pub fn client_exit_code(err: &ClientError) -> u8 {
    match err {
        ClientError::Network(_) => EXIT_API_NETWORK,
        ClientError::Http(_, _) => EXIT_API_HTTP,
        ClientError::Parse(_) => EXIT_API_PARSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_into_api_range() {
        assert_eq!(client_exit_code(&ClientError::Network("refused".into())), 10);
        assert_eq!(client_exit_code(&ClientError::Http(500, "boom".into())), 11);
        assert_eq!(client_exit_code(&ClientError::Parse("bad json".into())), 12);
    }
}
