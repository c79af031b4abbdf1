use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DarkModeToggleProps {
    pub enabled: bool,
    pub ontoggle: Callback<()>,
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle(props: &DarkModeToggleProps) -> Html {
    let on_click = props.ontoggle.reform(|_: MouseEvent| ());

    html! {
        <div class="theme-toggle">
            <button
                type="button"
                role="switch"
                aria-checked={props.enabled.to_string()}
                class={classes!("switch", props.enabled.then_some("switch--on"))}
                onclick={on_click}
            >
                <div class="switch-knob"></div>
            </button>
        </div>
    }
}
