/// State slices and their reducers
///
/// Each slice owns its own `loading`/`error` pair and is reduced by a pure
/// function: given the current state and a tagged action, it mutates the
/// state in place and returns nothing. Actions follow the request cycle —
/// `Pending`, `Fulfilled(result)`, `Rejected { message }` — plus a few
/// synchronous ones (selection, logout).
///
/// # Slices
///
/// - `auth`: current user
/// - `boards`: normalized board entities with list/current views
/// - `notifications`: notification list with a derived unread count

pub mod auth;
pub mod boards;
pub mod notifications;
