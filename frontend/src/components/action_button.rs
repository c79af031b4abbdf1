use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub onclick: Callback<()>,
    #[prop_or(false)]
    pub dark: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Full-width primary button. The caller picks the label.
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let on_click = props.onclick.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <button
            type="submit"
            class={classes!("btn", "btn-primary", "btn-block", props.dark.then_some("btn-primary--dark"))}
            onclick={on_click}
        >
            { props.children.clone() }
        </button>
    }
}
