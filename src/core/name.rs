//! Name grammar shared by states and actions.
//!
//! A valid name is 1 to 64 characters drawn from `A-Z` and `_`, does not
//! start or end with an underscore, and never contains two underscores in a
//! row.

/// Longest accepted state or action name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Check whether `name` is a well-formed state or action name.
///
/// This is a pure predicate. Mutators turn a `false` result into
/// [`FsmError::InvalidName`](crate::core::FsmError::InvalidName).
///
/// # Example
///
/// ```rust
/// use named_fsm::core::is_valid_name;
///
/// assert!(is_valid_name("ACTIVE"));
/// assert!(is_valid_name("NOT_READY"));
/// assert!(!is_valid_name("_INVALID"));
/// assert!(!is_valid_name("INVALID_"));
/// assert!(!is_valid_name("A__B"));
/// assert!(!is_valid_name("invalid"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();

    if bytes.is_empty() || bytes.len() > MAX_NAME_LEN {
        return false;
    }

    if !bytes.iter().all(|b| b.is_ascii_uppercase() || *b == b'_') {
        return false;
    }

    if bytes[0] == b'_' || bytes[bytes.len() - 1] == b'_' {
        return false;
    }

    !bytes.windows(2).any(|pair| pair == b"__")
}
