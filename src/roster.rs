//! User roster - the directory of known users and their roles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::ApiError;

/// Role a user holds within the school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Staff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
            Role::Staff => write!(f, "staff"),
        }
    }
}

/// A user record. The identifier (an email-shaped opaque string, never
/// validated or normalized) lives outside the record as the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub role: Role,
}

#[derive(Default)]
struct RosterState {
    users: HashMap<String, User>,
    /// Identifiers in first-insertion order, for snapshot listing
    order: Vec<String>,
}

/// In-memory user directory. Records are immutable once created and are
/// never deleted; there is no update operation by design.
pub struct UserDirectory {
    state: RwLock<RosterState>,
}

impl UserDirectory {
    /// Create a directory preloaded with the given users, in order
    pub fn new(preload: Vec<(String, Role)>) -> Arc<Self> {
        let dir = Arc::new(Self {
            state: RwLock::new(RosterState::default()),
        });
        for (id, role) in preload {
            // Preload lists carry no duplicates; conflicts are ignored.
            let _ = dir.create(&id, role);
        }
        dir
    }

    /// Look up a user by identifier
    pub fn get(&self, id: &str) -> Option<User> {
        let state = self.state.read().unwrap();
        state.users.get(id).cloned()
    }

    /// Insert a new user, storing the identifier as-is.
    ///
    /// Fails with `UserAlreadyExists` if the identifier is taken and
    /// leaves the existing record untouched.
    pub fn create(&self, id: &str, role: Role) -> Result<User, ApiError> {
        let mut state = self.state.write().unwrap();
        if state.users.contains_key(id) {
            return Err(ApiError::UserAlreadyExists);
        }
        let user = User { role };
        state.users.insert(id.to_string(), user.clone());
        state.order.push(id.to_string());
        Ok(user)
    }

    /// Full snapshot in insertion order
    pub fn snapshot(&self) -> Vec<(String, User)> {
        let state = self.state.read().unwrap();
        state
            .order
            .iter()
            .filter_map(|id| state.users.get(id).map(|u| (id.clone(), u.clone())))
            .collect()
    }

    /// Number of known users
    pub fn user_count(&self) -> usize {
        let state = self.state.read().unwrap();
        state.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let dir = UserDirectory::new(Vec::new());

        let user = dir.create("emma@mergington.edu", Role::Student).unwrap();
        assert_eq!(user.role, Role::Student);

        let fetched = dir.get("emma@mergington.edu").unwrap();
        assert_eq!(fetched.role, Role::Student);
        assert!(dir.get("nobody@mergington.edu").is_none());
    }

    #[test]
    fn test_duplicate_create_rejected() {
        let dir = UserDirectory::new(Vec::new());
        dir.create("emma@mergington.edu", Role::Student).unwrap();

        let err = dir.create("emma@mergington.edu", Role::Teacher).unwrap_err();
        assert_eq!(err, ApiError::UserAlreadyExists);

        // Existing record untouched
        assert_eq!(dir.get("emma@mergington.edu").unwrap().role, Role::Student);
        assert_eq!(dir.user_count(), 1);
    }

    #[test]
    fn test_no_identifier_normalization() {
        let dir = UserDirectory::new(Vec::new());
        dir.create("Emma@Mergington.edu", Role::Student).unwrap();

        // Case variants are distinct identifiers
        assert!(dir.get("emma@mergington.edu").is_none());
        dir.create("emma@mergington.edu", Role::Student).unwrap();
        assert_eq!(dir.user_count(), 2);
    }

    #[test]
    fn test_snapshot_insertion_order() {
        let dir = UserDirectory::new(vec![
            ("b@mergington.edu".to_string(), Role::Student),
            ("a@mergington.edu".to_string(), Role::Teacher),
        ]);
        dir.create("c@mergington.edu", Role::Staff).unwrap();

        let ids: Vec<String> = dir.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec!["b@mergington.edu", "a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::Staff);
        assert!(serde_json::from_str::<Role>("\"wizard\"").is_err());
    }
}
