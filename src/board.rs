use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use yew::functional::Reducible;

use crate::model::{Activity, ActivityMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Why a signup was refused before any request went out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupRejection {
    #[error("Please provide both email and activity.")]
    MissingField,
    #[error("Selected activity not found.")]
    UnknownActivity,
    #[error("This student is already signed up.")]
    AlreadySignedUp,
    #[error("Activity is full.")]
    Full,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Loaded(ActivityMap),
    LoadFailed,
    /// A write request for the activity went out.
    Began(String),
    /// A write request for the activity came back, whatever the outcome.
    Settled(String),
    Joined { activity: String, email: String },
    Left { activity: String, email: String },
}

/// Client-side cache of the activity list. Lives for the page, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    status: LoadStatus,
    activities: ActivityMap,
    in_flight: HashMap<String, u32>,
}

impl Board {
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn activities(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.activities.keys()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn is_pending(&self, name: &str) -> bool {
        self.in_flight.get(name).is_some_and(|n| *n > 0)
    }

    /// Local checks, in order, for a signup of an already-trimmed email.
    pub fn check_signup(&self, activity: &str, email: &str) -> Result<(), SignupRejection> {
        if email.is_empty() || activity.is_empty() {
            return Err(SignupRejection::MissingField);
        }
        let entry = self
            .activities
            .get(activity)
            .ok_or(SignupRejection::UnknownActivity)?;
        if entry.has_participant(email) {
            return Err(SignupRejection::AlreadySignedUp);
        }
        if entry.is_full() {
            return Err(SignupRejection::Full);
        }
        Ok(())
    }

    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Loaded(activities) => {
                self.activities = activities;
                self.status = LoadStatus::Ready;
            }
            BoardAction::LoadFailed => {
                self.activities.clear();
                self.status = LoadStatus::Failed;
            }
            BoardAction::Began(name) => {
                *self.in_flight.entry(name).or_insert(0) += 1;
            }
            BoardAction::Settled(name) => {
                if let Some(n) = self.in_flight.get_mut(&name) {
                    *n = n.saturating_sub(1);
                    if *n == 0 {
                        self.in_flight.remove(&name);
                    }
                }
            }
            BoardAction::Joined { activity, email } => {
                if let Some(entry) = self.activities.get_mut(&activity) {
                    entry.add_participant(&email);
                }
            }
            BoardAction::Left { activity, email } => {
                if let Some(entry) = self.activities.get_mut(&activity) {
                    entry.remove_participant(&email);
                }
            }
        }
    }
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: usize, participants: &[&str]) -> Activity {
        Activity {
            description: "Weekly meetup".into(),
            schedule: "Mondays".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn loaded() -> Board {
        let mut map = ActivityMap::new();
        map.insert("Chess Club".into(), activity(2, &["john.doe@x.com"]));
        map.insert("Art Club".into(), activity(1, &["ada@x.com"]));
        map.insert("Drama".into(), activity(3, &[]));
        let mut board = Board::default();
        board.apply(BoardAction::Loaded(map));
        board
    }

    #[test]
    fn starts_loading_and_becomes_ready() {
        let board = Board::default();
        assert_eq!(board.status(), LoadStatus::Loading);
        let board = loaded();
        assert_eq!(board.status(), LoadStatus::Ready);
        assert_eq!(board.names().count(), 3);
        let names: Vec<&String> = board.names().collect();
        assert_eq!(names, ["Chess Club", "Art Club", "Drama"]);
    }

    #[test]
    fn load_failure_clears_board() {
        let mut board = loaded();
        board.apply(BoardAction::LoadFailed);
        assert_eq!(board.status(), LoadStatus::Failed);
        assert!(board.is_empty());
    }

    #[test]
    fn signup_checks_run_in_order() {
        let board = loaded();
        assert_eq!(
            board.check_signup("", ""),
            Err(SignupRejection::MissingField)
        );
        assert_eq!(
            board.check_signup("Chess Club", ""),
            Err(SignupRejection::MissingField)
        );
        assert_eq!(
            board.check_signup("", "new@x.com"),
            Err(SignupRejection::MissingField)
        );
        assert_eq!(
            board.check_signup("Robotics", "new@x.com"),
            Err(SignupRejection::UnknownActivity)
        );
        // duplicate wins over full
        assert_eq!(
            board.check_signup("Art Club", "ada@x.com"),
            Err(SignupRejection::AlreadySignedUp)
        );
        assert_eq!(
            board.check_signup("Art Club", "new@x.com"),
            Err(SignupRejection::Full)
        );
        assert_eq!(board.check_signup("Chess Club", "new@x.com"), Ok(()));
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            SignupRejection::MissingField.to_string(),
            "Please provide both email and activity."
        );
        assert_eq!(
            SignupRejection::UnknownActivity.to_string(),
            "Selected activity not found."
        );
        assert_eq!(
            SignupRejection::AlreadySignedUp.to_string(),
            "This student is already signed up."
        );
        assert_eq!(SignupRejection::Full.to_string(), "Activity is full.");
    }

    #[test]
    fn join_and_leave_are_idempotent() {
        let mut board = loaded();
        let join = BoardAction::Joined {
            activity: "Drama".into(),
            email: "kim@x.com".into(),
        };
        board.apply(join.clone());
        board.apply(join);
        assert_eq!(board.get("Drama").unwrap().participants, ["kim@x.com"]);

        let leave = BoardAction::Left {
            activity: "Drama".into(),
            email: "kim@x.com".into(),
        };
        board.apply(leave.clone());
        board.apply(leave);
        assert!(board.get("Drama").unwrap().participants.is_empty());
    }

    #[test]
    fn updates_to_unknown_activity_are_ignored() {
        let mut board = loaded();
        let before = board.clone();
        board.apply(BoardAction::Joined {
            activity: "Robotics".into(),
            email: "kim@x.com".into(),
        });
        assert_eq!(board, before);
    }

    #[test]
    fn completions_for_different_activities_commute() {
        let a = BoardAction::Joined {
            activity: "Drama".into(),
            email: "kim@x.com".into(),
        };
        let b = BoardAction::Left {
            activity: "Chess Club".into(),
            email: "john.doe@x.com".into(),
        };

        let mut first = loaded();
        first.apply(a.clone());
        first.apply(b.clone());

        let mut second = loaded();
        second.apply(b);
        second.apply(a);

        assert_eq!(first, second);
    }

    #[test]
    fn pending_counts_overlapping_requests() {
        let mut board = loaded();
        assert!(!board.is_pending("Drama"));
        board.apply(BoardAction::Began("Drama".into()));
        board.apply(BoardAction::Began("Drama".into()));
        board.apply(BoardAction::Settled("Drama".into()));
        assert!(board.is_pending("Drama"));
        board.apply(BoardAction::Settled("Drama".into()));
        assert!(!board.is_pending("Drama"));
        board.apply(BoardAction::Settled("Drama".into()));
        assert!(!board.is_pending("Drama"));
    }

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let before = Rc::new(loaded());
        let after = before.clone().reduce(BoardAction::Joined {
            activity: "Drama".into(),
            email: "kim@x.com".into(),
        });
        assert!(before.get("Drama").unwrap().participants.is_empty());
        assert_eq!(after.get("Drama").unwrap().participants, ["kim@x.com"]);
    }
}
