use login_core::{LoginForm, ScreenConfig, SocialProvider};
use yew::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::input_field::InputField;
use crate::components::social_icon::SocialIcon;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub config: ScreenConfig,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let form = {
        let config = props.config.clone();
        use_state(move || LoginForm::from_config(&config))
    };
    let dark = form.is_dark_mode();
    let mode = form.mode();

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            match next.submit() {
                Ok(diagnostic) => log::info!("{diagnostic}"),
                Err(err) => log::warn!("{} submit rejected: {err}", next.mode().as_str()),
            }
            form.set(next);
        })
    };

    let on_form_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let on_toggle_mode = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_mode();
            log::debug!("switched to {} mode", next.mode().as_str());
            form.set(next);
        })
    };

    let on_toggle_dark = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            next.toggle_dark_mode();
            log::debug!("dark mode: {}", next.is_dark_mode());
            form.set(next);
        })
    };

    let fields = form
        .visible_fields()
        .into_iter()
        .map(|id| {
            let onchange = {
                let form = form.clone();
                Callback::from(move |value: String| {
                    let mut next = (*form).clone();
                    next.set_field(id, value);
                    form.set(next);
                })
            };
            html! {
                <InputField
                    key={id.element_id()}
                    label={id.label()}
                    id={id.element_id()}
                    kind={id.kind()}
                    placeholder={id.placeholder()}
                    value={form.field(id).to_string()}
                    {onchange}
                    {dark}
                />
            }
        })
        .collect::<Html>();

    let socials = SocialProvider::all()
        .iter()
        .map(|&provider| {
            let onclick = {
                let form = form.clone();
                Callback::from(move |_: ()| {
                    log::info!("{}", form.social_login(provider));
                })
            };
            html! {
                <SocialIcon
                    glyph={provider.glyph()}
                    color={provider.color()}
                    title={provider.as_str()}
                    {onclick}
                    {dark}
                />
            }
        })
        .collect::<Html>();

    let error = form.error_message();
    let (prompt, switch_label) = mode.switch_prompt();

    html! {
        <div class={classes!("login-container", dark.then_some("login-container--dark"))}>
            <DarkModeToggle enabled={dark} ontoggle={on_toggle_dark} />
            <div class={classes!("login-card", dark.then_some("login-card--dark"))}>
                <div class="login-brand">
                    <span class="login-logo">{ "f" }</span>
                    <h1 class="login-title">{ props.config.brand.clone() }</h1>
                </div>
                <form onsubmit={on_form_submit}>
                    { fields }
                    if !error.is_empty() {
                        <p class="error">{ error }</p>
                    }
                    <ActionButton onclick={on_submit} {dark}>
                        { mode.submit_label() }
                    </ActionButton>
                    <div class="forgot-password">
                        <a
                            href={props.config.forgot_password_href.clone()}
                            class={classes!("link", dark.then_some("link--dark"))}
                        >
                            { "Forgot Password?" }
                        </a>
                    </div>
                    <hr />
                    <div class="social-row">
                        { socials }
                    </div>
                </form>
                <p class={classes!("login-switch", dark.then_some("login-switch--dark"))}>
                    { prompt }
                    <span class="link" onclick={on_toggle_mode}>{ switch_label }</span>
                </p>
            </div>
        </div>
    }
}
