mod activity_card;
mod message_area;
mod signup_form;

pub use activity_card::{ActivityCard, ActivityCardProps, ParticipantItem, ParticipantItemProps};
pub use message_area::{MessageArea, MessageAreaProps};
pub use signup_form::{SignupForm, SignupFormProps};
