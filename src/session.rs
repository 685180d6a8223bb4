//! Client-cached session: a locally persisted copy of the authenticated
//! user's profile, written on login success and removed on logout. It only
//! gates UI; the server keeps no notion of "currently logged in". The file
//! name mirrors the storage key the web client used.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const CACHE_FILE: &str = "elegan_user.json";

/// Profile fields cached between runs. Never includes the password column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    /// Cache under `dir`, keyed by the fixed file name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CACHE_FILE),
        }
    }

    /// Persist a successful login.
    pub fn store(&self, user: &SessionUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// The cached user, if any. A missing or unreadable cache reads as
    /// logged out rather than an error.
    pub fn load(&self) -> Option<SessionUser> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Logout: drop the cache. Clearing an absent cache is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(tag: &str) -> SessionCache {
        let dir = std::env::temp_dir().join(format!("elegan-session-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        SessionCache::in_dir(dir)
    }

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Rahim Uddin".into(),
            email: "rahim@example.com".into(),
            phone: "01700000000".into(),
            address: "Dhanmondi, Dhaka".into(),
        }
    }

    #[test]
    fn survives_a_reload() {
        let cache = temp_cache("reload");
        cache.store(&sample_user()).unwrap();

        // a second handle over the same directory sees the login
        let reopened = SessionCache { path: cache.path.clone() };
        assert_eq!(reopened.load(), Some(sample_user()));
        cache.clear().unwrap();
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let cache = temp_cache("logout");
        cache.store(&sample_user()).unwrap();
        cache.clear().unwrap();
        assert_eq!(cache.load(), None);
        cache.clear().unwrap();
    }

    #[test]
    fn corrupt_cache_reads_as_logged_out() {
        let cache = temp_cache("corrupt");
        fs::write(&cache.path, "not json").unwrap();
        assert_eq!(cache.load(), None);
        cache.clear().unwrap();
    }
}
