use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names, in board order.
    pub activities: Vec<AttrValue>,
    pub email: AttrValue,
    pub selected: AttrValue,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // Option `selected` attributes stop applying once the user has picked one,
    // so the value is pushed onto the element instead.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.selected.clone(), props.activities.len()),
            move |(selected, _)| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(selected);
                }
                || ()
            },
        );
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    value={props.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" ref={select_ref} {onchange}>
                    <option value="">{"-- Select an activity --"}</option>
                    { for props.activities.iter().map(|name| html! {
                        <option key={name.to_string()} value={name.clone()}>
                            { name.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}
