//! Session gate in front of the board.
//!
//! There is no credential check: any submitted form signs the user in. The
//! state only decides which page is mounted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    user: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Always succeeds and returns the display name that was recorded.
    pub fn login(&mut self, credentials: &Credentials) -> &str {
        let email = credentials.email.trim();
        let name = match email.split_once('@') {
            Some((local, _)) if !local.is_empty() => local,
            _ if !email.is_empty() => email,
            _ => "Guest",
        };
        self.user.insert(name.to_string())
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
