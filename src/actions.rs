//! The two write flows behind the board: signing a student up and taking one off a roster.
//!
//! Both return what the view needs to apply: on success the board change and the
//! text to flash, on failure only the text. Nothing here touches the board itself.

use gloo::console;
use thiserror::Error;

use crate::api::{ActivityApi, ApiError};
use crate::board::{Board, BoardAction, SignupRejection};

pub const SIGNUP_FALLBACK: &str = "Signup failed";
pub const REMOVAL_FALLBACK: &str = "Removal failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error(transparent)]
    Rejected(#[from] SignupRejection),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SignupError {
    pub fn user_message(&self) -> String {
        match self {
            SignupError::Rejected(r) => r.to_string(),
            SignupError::Api(e) => e.user_message(SIGNUP_FALLBACK),
        }
    }
}

/// A confirmed change: apply `change` to the board and show `message`.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmed {
    pub change: BoardAction,
    pub message: String,
}

/// Validates against `board`, then asks the server. No request goes out when a check fails.
pub async fn sign_up<A: ActivityApi>(
    api: &A,
    board: &Board,
    activity: &str,
    email: &str,
) -> Result<Confirmed, SignupError> {
    let email = email.trim();
    board.check_signup(activity, email)?;

    if let Err(e) = api.sign_up(activity, email).await {
        if !matches!(e, ApiError::Rejected { .. }) {
            console::error!(format!("Error signing up {email} for {activity}: {e}"));
        }
        return Err(e.into());
    }

    Ok(Confirmed {
        change: BoardAction::Joined {
            activity: activity.to_string(),
            email: email.to_string(),
        },
        message: format!("Signed up {email} for {activity}"),
    })
}

pub async fn remove_participant<A: ActivityApi>(
    api: &A,
    activity: &str,
    email: &str,
) -> Result<Confirmed, String> {
    match api.remove_participant(activity, email).await {
        Ok(reply) => Ok(Confirmed {
            change: BoardAction::Left {
                activity: activity.to_string(),
                email: email.to_string(),
            },
            message: reply
                .message
                .unwrap_or_else(|| format!("Removed {email} from {activity}")),
        }),
        Err(e) => {
            if !matches!(e, ApiError::Rejected { .. }) {
                console::error!(format!("Error removing {email} from {activity}: {e}"));
            }
            Err(e.user_message(REMOVAL_FALLBACK))
        }
    }
}
