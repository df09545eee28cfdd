/// Authenticated principal attached to a request for its lifetime.
///
/// Populated by the authentication layer upstream; handlers and middleware
/// only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}
