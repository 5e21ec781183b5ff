/// Authentication primitives
///
/// - [`password`]: Argon2id password hashing and verification
///
/// Session management is out of scope: a successful login simply returns
/// the user record (minus the hash) to the caller.

pub mod password;
