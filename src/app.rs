use std::rc::Rc;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions;
use crate::api::{ActivityApi, HttpApi};
use crate::board::{Board, BoardAction, LoadStatus};
use crate::components::{ActivityCard, MessageArea, SignupForm};
use crate::config::Config;
use crate::flash::{use_flash, Flash};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::from_document());
    let api = use_memo(config.api_base.clone(), |base| HttpApi::new(base.clone()));

    html! { <BoardView<HttpApi> {api} config={(*config).clone()} /> }
}

#[derive(Properties)]
pub struct BoardViewProps<A: ActivityApi + 'static> {
    pub api: Rc<A>,
    pub config: Config,
}

impl<A: ActivityApi + 'static> PartialEq for BoardViewProps<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.config == other.config
    }
}

/// The whole board page, over any [`ActivityApi`].
#[function_component(BoardView)]
pub fn board_view<A: ActivityApi + 'static>(props: &BoardViewProps<A>) -> Html {
    let api = props.api.clone();
    let config = &props.config;

    let board = use_reducer(Board::default);
    let flash = use_flash(config.message_timeout_ms);

    let email = use_state(String::new);
    let selected = use_state(String::new);

    // Load the board once on mount
    {
        let api = api.clone();
        let board = board.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.list_activities().await {
                    Ok(activities) => {
                        console::log!(format!("Loaded {} activities", activities.len()));
                        board.dispatch(BoardAction::Loaded(activities));
                    }
                    Err(e) => {
                        console::error!(format!("Error fetching activities: {e}"));
                        board.dispatch(BoardAction::LoadFailed);
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let api = api.clone();
        let board = board.clone();
        let flash = flash.clone();
        let email = email.clone();
        let selected = selected.clone();

        Callback::from(move |()| {
            let snapshot: Board = (*board).clone();
            let activity = (*selected).clone();
            let typed = (*email).clone();

            if let Err(rejection) = snapshot.check_signup(&activity, typed.trim()) {
                flash.show(Flash::error(rejection.to_string()));
                return;
            }

            let api = api.clone();
            let board = board.clone();
            let flash = flash.clone();
            let email = email.clone();
            let selected = selected.clone();

            board.dispatch(BoardAction::Began(activity.clone()));
            flash.show(Flash::info(format!("Signing up {} for {activity}...", typed.trim())));
            spawn_local(async move {
                match actions::sign_up(&*api, &snapshot, &activity, &typed).await {
                    Ok(done) => {
                        board.dispatch(done.change);
                        email.set(String::new());
                        selected.set(String::new());
                        flash.show(Flash::success(done.message));
                    }
                    Err(e) => flash.show(Flash::error(e.user_message())),
                }
                board.dispatch(BoardAction::Settled(activity));
            });
        })
    };

    let on_remove = {
        let api = api.clone();
        let board = board.clone();
        let flash = flash.clone();

        Callback::from(move |(activity, participant): (String, String)| {
            let api = api.clone();
            let board = board.clone();
            let flash = flash.clone();

            board.dispatch(BoardAction::Began(activity.clone()));
            flash.show(Flash::info(format!("Removing {participant} from {activity}...")));
            spawn_local(async move {
                match actions::remove_participant(&*api, &activity, &participant).await {
                    Ok(done) => {
                        board.dispatch(done.change);
                        flash.show(Flash::success(done.message));
                    }
                    Err(text) => flash.show(Flash::error(text)),
                }
                board.dispatch(BoardAction::Settled(activity));
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |v: String| email.set(v))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |v: String| selected.set(v))
    };

    let listing = match board.status() {
        LoadStatus::Loading => html! { <p>{"Loading activities..."}</p> },
        LoadStatus::Failed => html! { <p class="error">{"Failed to load activities."}</p> },
        LoadStatus::Ready if board.is_empty() => html! { <p>{"No activities available."}</p> },
        LoadStatus::Ready => board
            .activities()
            .map(|(name, activity)| {
                let card_name = name.clone();
                let on_remove = on_remove.reform(move |participant: String| {
                    (card_name.clone(), participant)
                });
                html! {
                    <ActivityCard
                        key={name.clone()}
                        name={AttrValue::from(name.clone())}
                        activity={activity.clone()}
                        pending={board.is_pending(name)}
                        {on_remove}
                    />
                }
            })
            .collect::<Html>(),
    };

    let names: Vec<AttrValue> = board
        .names()
        .map(|n| AttrValue::from(n.clone()))
        .collect();

    html! {
        <>
            <header>
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main>
                <section id="activities-container">
                    <h3>{"Available Activities"}</h3>
                    <div id="activities-list">
                        { listing }
                    </div>
                </section>
                <section id="signup-container">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupForm
                        activities={names}
                        email={AttrValue::from((*email).clone())}
                        selected={AttrValue::from((*selected).clone())}
                        {on_email}
                        {on_select}
                        {on_submit}
                    />
                    <MessageArea state={flash.state().clone()} />
                </section>
            </main>
        </>
    }
}
