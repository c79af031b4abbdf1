use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SocialIconProps {
    pub glyph: AttrValue,
    pub color: AttrValue,
    pub title: AttrValue,
    pub onclick: Callback<()>,
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(SocialIcon)]
pub fn social_icon(props: &SocialIconProps) -> Html {
    let on_click = props.onclick.reform(|_: MouseEvent| ());

    html! {
        <div
            class={classes!(
                "social-icon",
                format!("social-icon--{}", props.color),
                props.dark.then_some("social-icon--dark")
            )}
            title={props.title.clone()}
            onclick={on_click}
        >
            { &*props.glyph }
        </div>
    }
}
