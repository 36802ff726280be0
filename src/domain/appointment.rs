//! Domain types representing scheduled appointments.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// The 24 on-the-hour slots an appointment may occupy, `00:00`..`23:00`.
pub static TIME_SLOTS: Lazy<Vec<String>> =
    Lazy::new(|| (0..24).map(|hour| format!("{hour:02}:00")).collect());

/// Returns whether `time` is one of the canonical on-the-hour slots.
pub fn is_canonical_slot(time: &str) -> bool {
    TIME_SLOTS.iter().any(|slot| slot == time)
}

/// A scheduled event owned by a single person.
///
/// `owner_name` is a denormalized snapshot taken when the appointment is
/// created; it does not follow later renames of the owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    /// One of the canonical slots in [`TIME_SLOTS`].
    pub time: String,
    pub description: String,
    pub owner_id: Uuid,
    pub owner_name: String,
}

impl Appointment {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date: date.into(),
            time: time.into(),
            description: String::new(),
            owner_id: Uuid::nil(),
            owner_name: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Identifiable for Appointment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Appointment {
    fn display_label(&self) -> String {
        format!("{} ({} {})", self.title, self.date, self.time)
    }
}
