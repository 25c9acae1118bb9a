//! Enrollment service - authorization and invariant checks for activity
//! signup and unregistration.
//!
//! All changes to participant lists go through this service. Each
//! operation is one check-then-mutate step executed under the catalog
//! write lock: it either fully applies its single mutation or applies
//! nothing.

use std::sync::Arc;

use crate::catalog::ActivityCatalog;
use crate::error::ApiError;
use crate::roster::{Role, UserDirectory};

pub struct EnrollmentService {
    roster: Arc<UserDirectory>,
    catalog: Arc<ActivityCatalog>,
}

impl EnrollmentService {
    pub fn new(roster: Arc<UserDirectory>, catalog: Arc<ActivityCatalog>) -> Arc<Self> {
        Arc::new(Self { roster, catalog })
    }

    /// Sign a student up for an activity.
    ///
    /// Returns the confirmation message, or: `ActivityNotFound`,
    /// `NotAStudent` (unknown identifier or non-student role),
    /// `AlreadyEnrolled`, `ActivityFull`.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<String, ApiError> {
        self.catalog.with_activity_mut(activity_name, |activity| {
            let target = self.roster.get(email);
            if !matches!(target, Some(u) if u.role == Role::Student) {
                return Err(ApiError::NotAStudent);
            }
            if activity.is_enrolled(email) {
                return Err(ApiError::AlreadyEnrolled);
            }
            // After the duplicate check, so an existing member of a full
            // activity still sees AlreadyEnrolled.
            if activity.is_full() {
                return Err(ApiError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(format!("Signed up {} for {}", email, activity_name))
        })
    }

    /// Remove a student from an activity. Teacher-only: any other acting
    /// role, staff included, is rejected.
    ///
    /// Returns the confirmation message, or: `ActivityNotFound`,
    /// `NotATeacher` (unknown identifier or non-teacher role),
    /// `NotEnrolled`.
    pub fn unenroll(
        &self,
        activity_name: &str,
        email: &str,
        acting_user: &str,
    ) -> Result<String, ApiError> {
        self.catalog.with_activity_mut(activity_name, |activity| {
            let actor = self.roster.get(acting_user);
            if !matches!(actor, Some(u) if u.role == Role::Teacher) {
                return Err(ApiError::NotATeacher);
            }
            if !activity.is_enrolled(email) {
                return Err(ApiError::NotEnrolled);
            }
            activity.participants.retain(|p| p != email);
            Ok(format!(
                "Unregistered {} from {} by {}",
                email, activity_name, acting_user
            ))
        })
    }
}
