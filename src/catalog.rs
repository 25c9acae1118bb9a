//! Activity catalog - the activities on offer and their participants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::ApiError;

/// An extracurricular activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled user identifiers, in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether the given identifier is currently a participant
    pub fn is_enrolled(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p == id)
    }

    /// Whether the participant list is at capacity
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

struct CatalogState {
    activities: HashMap<String, Activity>,
    /// Names in catalog order, for snapshot listing
    order: Vec<String>,
}

/// Catalog of activities, preloaded at startup. The public contract is
/// read-only; participant mutation goes through the enrollment service,
/// which uses `with_activity_mut` against the same backing store.
pub struct ActivityCatalog {
    state: RwLock<CatalogState>,
}

impl ActivityCatalog {
    /// Create a catalog preloaded with the given activities, in order
    pub fn new(preload: Vec<(String, Activity)>) -> Arc<Self> {
        let mut activities = HashMap::new();
        let mut order = Vec::new();
        for (name, activity) in preload {
            if activities.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }
        Arc::new(Self {
            state: RwLock::new(CatalogState { activities, order }),
        })
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<Activity> {
        let state = self.state.read().unwrap();
        state.activities.get(name).cloned()
    }

    /// Full snapshot in catalog order
    pub fn snapshot(&self) -> Vec<(String, Activity)> {
        let state = self.state.read().unwrap();
        state
            .order
            .iter()
            .filter_map(|name| state.activities.get(name).map(|a| (name.clone(), a.clone())))
            .collect()
    }

    /// Number of activities on offer
    pub fn activity_count(&self) -> usize {
        let state = self.state.read().unwrap();
        state.activities.len()
    }

    /// Run a check-then-mutate step against one activity while holding the
    /// catalog write lock, so the step is atomic with respect to other
    /// enrollment operations. Fails with `ActivityNotFound` if absent.
    pub(crate) fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut state = self.state.write().unwrap();
        let activity = state
            .activities
            .get_mut(name)
            .ok_or(ApiError::ActivityNotFound)?;
        f(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> (String, Activity) {
        (
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        )
    }

    #[test]
    fn test_get_and_snapshot() {
        let catalog = ActivityCatalog::new(vec![chess_club()]);

        let activity = catalog.get("Chess Club").unwrap();
        assert_eq!(activity.max_participants, 12);
        assert!(activity.is_enrolled("michael@mergington.edu"));
        assert!(!activity.is_enrolled("emma@mergington.edu"));
        assert!(catalog.get("Knitting Circle").is_none());

        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].0, "Chess Club");
    }

    #[test]
    fn test_snapshot_preserves_preload_order() {
        let (name, activity) = chess_club();
        let preload = vec![
            ("Zoology Club".to_string(), activity.clone()),
            (name, activity.clone()),
            ("Astronomy Club".to_string(), activity),
        ];
        let catalog = ActivityCatalog::new(preload);

        let names: Vec<String> = catalog.snapshot().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zoology Club", "Chess Club", "Astronomy Club"]);
    }

    #[test]
    fn test_with_activity_mut_unknown_activity() {
        let catalog = ActivityCatalog::new(vec![chess_club()]);
        let result = catalog.with_activity_mut("Knitting Circle", |_| Ok(()));
        assert_eq!(result.unwrap_err(), ApiError::ActivityNotFound);
    }

    #[test]
    fn test_with_activity_mut_applies_mutation() {
        let catalog = ActivityCatalog::new(vec![chess_club()]);

        catalog
            .with_activity_mut("Chess Club", |activity| {
                activity.participants.push("emma@mergington.edu".to_string());
                Ok(())
            })
            .unwrap();

        assert!(catalog.get("Chess Club").unwrap().is_enrolled("emma@mergington.edu"));
    }

    #[test]
    fn test_is_full() {
        let (_, mut activity) = chess_club();
        activity.max_participants = 2;
        assert!(activity.is_full());
        activity.max_participants = 3;
        assert!(!activity.is_full());
    }
}
