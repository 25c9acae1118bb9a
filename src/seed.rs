//! Preloaded roster and catalog data the process starts with.

use crate::catalog::Activity;
use crate::roster::Role;

/// The initial user roster: students, teachers, and staff
pub fn users() -> Vec<(String, Role)> {
    let entries: &[(&str, Role)] = &[
        ("emma@mergington.edu", Role::Student),
        ("sophia@mergington.edu", Role::Student),
        ("michael@mergington.edu", Role::Student),
        ("daniel@mergington.edu", Role::Student),
        ("john@mergington.edu", Role::Student),
        ("olivia@mergington.edu", Role::Student),
        ("liam@mergington.edu", Role::Student),
        ("noah@mergington.edu", Role::Student),
        ("ava@mergington.edu", Role::Student),
        ("mia@mergington.edu", Role::Student),
        ("amelia@mergington.edu", Role::Student),
        ("harper@mergington.edu", Role::Student),
        ("ella@mergington.edu", Role::Student),
        ("scarlett@mergington.edu", Role::Student),
        ("james@mergington.edu", Role::Student),
        ("benjamin@mergington.edu", Role::Student),
        ("charlotte@mergington.edu", Role::Student),
        ("henry@mergington.edu", Role::Student),
        ("teacher1@mergington.edu", Role::Teacher),
        ("teacher2@mergington.edu", Role::Teacher),
        ("admin@mergington.edu", Role::Staff),
    ];
    entries
        .iter()
        .map(|(email, role)| (email.to_string(), *role))
        .collect()
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> (String, Activity) {
    (
        name.to_string(),
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

/// The initial activity catalog
pub fn activities() -> Vec<(String, Activity)> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let users = users();
        assert_eq!(users.len(), 21);
        assert_eq!(
            users.iter().filter(|(_, r)| *r == Role::Student).count(),
            18
        );
        assert_eq!(
            users.iter().filter(|(_, r)| *r == Role::Teacher).count(),
            2
        );
        assert_eq!(users.iter().filter(|(_, r)| *r == Role::Staff).count(), 1);

        let activities = activities();
        assert_eq!(activities.len(), 9);
        assert_eq!(activities[0].0, "Chess Club");
    }

    #[test]
    fn test_seed_referential_integrity() {
        let students: HashSet<String> = users()
            .into_iter()
            .filter(|(_, r)| *r == Role::Student)
            .map(|(id, _)| id)
            .collect();

        for (name, activity) in activities() {
            assert!(
                activity.participants.len() <= activity.max_participants,
                "{} overfull at seed time",
                name
            );
            for participant in &activity.participants {
                assert!(
                    students.contains(participant),
                    "{} has non-student participant {}",
                    name,
                    participant
                );
            }
        }
    }
}
