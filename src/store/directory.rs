use std::sync::RwLock;

use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Already signed up for this activity")]
    AlreadyRegistered,
    #[error("Not signed up for this activity")]
    NotRegistered,
}

/// In-memory directory of all activities, keyed by name.
///
/// Entries keep their seed order so listings come back the way the table was
/// registered. The table is small and fixed, so lookups are a linear scan.
/// Mutations go through the write lock; requests are served concurrently and
/// the duplicate-email check must not race the append.
pub struct ActivityDirectory {
    entries: RwLock<Vec<(String, Activity)>>,
}

impl ActivityDirectory {
    /// Build the directory from the fixed seed table. Activities are never
    /// created or deleted after this point.
    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(seed_entries()),
        }
    }

    /// Ordered clone of every activity and its roster.
    pub fn snapshot(&self) -> Vec<(String, Activity)> {
        self.entries
            .read()
            .expect("activity directory lock poisoned")
            .clone()
    }

    /// Append `email` to the activity's roster.
    ///
    /// Name matching is exact and case-sensitive. Validation happens before
    /// any write, so a rejected signup leaves the roster untouched.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut entries = self
            .entries
            .write()
            .expect("activity directory lock poisoned");
        let activity = lookup_mut(&mut entries, activity_name)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove exactly one occurrence of `email` from the activity's roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut entries = self
            .entries
            .write()
            .expect("activity directory lock poisoned");
        let activity = lookup_mut(&mut entries, activity_name)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;
        activity.participants.remove(position);
        Ok(())
    }
}

fn lookup_mut<'a>(
    entries: &'a mut [(String, Activity)],
    activity_name: &str,
) -> Result<&'a mut Activity, DirectoryError> {
    entries
        .iter_mut()
        .find_map(|(name, activity)| {
            if name.as_str() == activity_name {
                Some(activity)
            } else {
                None
            }
        })
        .ok_or(DirectoryError::ActivityNotFound)
}

fn seed_entries() -> Vec<(String, Activity)> {
    let entry = |name: &str,
                 description: &str,
                 schedule: &str,
                 max_participants: usize,
                 participants: &[&str]| {
        (
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
    };

    vec![
        entry(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@example.com", "daniel@example.com"],
        ),
        entry(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@example.com", "sophia@example.com"],
        ),
        entry(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@example.com", "olivia@example.com"],
        ),
    ]
}
