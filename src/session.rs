const TOKEN_STORAGE_KEY: &str = "token";

/// The bearer token issued at login. Absence means unauthenticated; the
/// stored value already carries the `Bearer ` prefix and is attached
/// verbatim as the `Authorization` header of every API call.
///
/// Provided to the component tree through a `ContextProvider`, so every
/// component that issues authenticated calls receives it explicitly instead
/// of reaching into storage on its own.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    token: Option<String>,
}

fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

impl Session {
    /// Restores the session persisted by a previous login, if any.
    pub fn load() -> Self {
        let mut token = None;
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(stored)) = storage.get_item(TOKEN_STORAGE_KEY) {
                    if !stored.is_empty() {
                        token = Some(stored);
                    }
                }
            }
        }
        Self { token }
    }

    /// Persists the freshly issued access token and returns the new session,
    /// overwriting whatever a previous login left behind.
    pub fn login(access_token: &str) -> Self {
        let token = bearer(access_token);
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, &token);
            }
        }
        Self { token: Some(token) }
    }

    /// Clears the persisted token; the caller routes back to the auth screen.
    pub fn logout() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
        Self::default()
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn authorization(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_bearer_prefixed() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.authenticated());
        assert_eq!(session.authorization(), None);
    }
}
