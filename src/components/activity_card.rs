use yew::prelude::*;

use crate::model::{initials_from_email, Activity};

#[derive(Properties, PartialEq)]
pub struct ParticipantItemProps {
    pub email: AttrValue,
    pub on_remove: Callback<String>,
}

#[function_component(ParticipantItem)]
pub fn participant_item(props: &ParticipantItemProps) -> Html {
    let onclick = {
        let email = props.email.to_string();
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(email.clone()))
    };
    let label = format!("Remove {}", props.email);

    html! {
        <li class="participant">
            <span class="participant-avatar">{ initials_from_email(&props.email) }</span>
            <span class="participant-email">{ props.email.clone() }</span>
            <button
                type="button"
                class="participant-remove"
                title={label.clone()}
                aria-label={label}
                {onclick}
            >
                {"✕"}
            </button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
    #[prop_or_default]
    pub pending: bool,
    /// Fired with the participant's email when its remove button is clicked.
    pub on_remove: Callback<String>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;
    let class = classes!("activity-card", props.pending.then_some("pending"));

    let roster = if activity.participants.is_empty() {
        html! { <li class="participants-empty">{"No participants yet."}</li> }
    } else {
        activity
            .participants
            .iter()
            .map(|email| {
                // Rosters hold no duplicate emails, so the email is a stable key.
                html! {
                    <ParticipantItem
                        key={email.clone()}
                        email={AttrValue::from(email.clone())}
                        on_remove={props.on_remove.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <div {class}>
            <h4>{ props.name.clone() }</h4>
            <p>{ activity.description.clone() }</p>
            <p class="schedule">{ format!("Schedule: {}", activity.schedule) }</p>
            <div class="participant-meta">{ activity.count_label() }</div>
            <ul class="participants">
                { roster }
            </ul>
        </div>
    }
}
