//! The signed-in user, as left in `localStorage` by the login flow.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "access_token";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub uid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl UserSession {
    pub fn from_parts(user_json: &str, token: Option<String>) -> Option<UserSession> {
        let mut session: UserSession = serde_json::from_str(user_json).ok()?;
        if session.uid.trim().is_empty() {
            return None;
        }
        session.access_token = token.filter(|t| !t.is_empty());
        Some(session)
    }

    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.uid
        } else {
            &self.username
        }
    }
}

pub fn load_session() -> Option<UserSession> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let session = UserSession::from_parts(&user_json, token);
    if session.is_none() {
        log::warn!("stored user has no uid");
    }
    session
}
