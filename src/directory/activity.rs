use serde::{Deserialize, Serialize};

use super::DirectoryError;

/// A single extracurricular activity record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used by the seed list and tests
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn open_slots(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Append `email` to the participant list.
    ///
    /// The duplicate check runs before the capacity check, so a student who is
    /// already enrolled in a full activity is told they are already signed up.
    pub fn enroll(&mut self, email: &str) -> Result<(), DirectoryError> {
        if self.is_enrolled(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(DirectoryError::AtCapacity);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Undo the most recent enrollment of `email`. Used by durable stores when
    /// persisting an accepted signup fails.
    pub(crate) fn withdraw_last(&mut self, email: &str) {
        if self.participants.last().map(String::as_str) == Some(email) {
            self.participants.pop();
        }
    }
}
