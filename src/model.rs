use indexmap::IndexMap;
use serde::Deserialize;

/// Activities keyed by name, in the order the server listed them.
pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn count_label(&self) -> String {
        format!(
            "Participants: {} / {}",
            self.participants.len(),
            self.max_participants
        )
    }

    /// Appends `email` unless it is already on the roster.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// Up to two-letter badge for a participant, e.g. `john.doe@x.com` -> `JD`.
pub fn initials_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let tokens: Vec<&str> = local
        .split(['.', '-', '_'])
        .filter(|t| !t.is_empty())
        .collect();

    let badge: String = match tokens.as_slice() {
        [first, second, ..] => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect(),
        [only] => only.chars().take(2).collect(),
        [] => local.chars().take(2).collect(),
    };

    badge.to_uppercase()
}
