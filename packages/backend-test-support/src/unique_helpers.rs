//! Test helpers for generating unique test data
//!
//! Usernames are unique-constrained, so tests that share a database build
//! their names from ULIDs to stay isolated from each other.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique username that fits the 50-character column limit.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_username;
///
/// let name = unique_username("alice");
/// assert!(name.starts_with("alice_"));
/// assert!(name.len() <= 50);
/// ```
pub fn unique_username(prefix: &str) -> String {
    let ulid = Ulid::new().to_string().to_lowercase();
    let mut name = format!("{prefix}_{ulid}");
    name.truncate(50);
    name
}
