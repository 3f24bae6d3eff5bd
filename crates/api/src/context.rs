use cart_api_core::Username;

/// Authenticated identity for a request.
///
/// Inserted by the auth middleware; present on every `/api/me/*` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    username: Username,
}

impl UserContext {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}
