//! Persisted session markers. Written by the server-rendered pages, only
//! read and cleared here.

use gloo::storage::{LocalStorage, Storage};

use crate::types::UserInfo;

pub const USER_ID_KEY: &str = "user_id";
pub const USER_ROLE_KEY: &str = "user_role";

pub fn load_session() -> Option<UserInfo> {
    let raw = LocalStorage::raw();
    let id = raw.get_item(USER_ID_KEY).ok().flatten()?;
    let role = raw.get_item(USER_ROLE_KEY).ok().flatten()?;
    Some(UserInfo { id, role })
}

pub fn clear_session() {
    let raw = LocalStorage::raw();
    let _ = raw.remove_item(USER_ID_KEY);
    let _ = raw.remove_item(USER_ROLE_KEY);
}
