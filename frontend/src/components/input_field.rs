use login_core::InputKind;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub kind: InputKind,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or(false)]
    pub dark: bool,
}

/// Labelled text input. Every keystroke is forwarded as-is.
#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let on_input = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            onchange.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()} class={classes!("field-label", props.dark.then_some("field-label--dark"))}>
                { &*props.label }
            </label>
            <input
                class={classes!("field-input", props.dark.then_some("field-input--dark"))}
                id={props.id.clone()}
                type={props.kind.as_str()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}
