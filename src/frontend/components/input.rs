use leptos::html::Input;
use leptos::prelude::*;

use crate::common::ValidationError;

const ERROR_BORDER: &str = "border-color: #e74c3c; animation: shake 0.5s ease-in-out";

#[component]
pub fn FormInput(
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: Signal<String>,
    /// Font Awesome icon class shown inside the field
    #[prop(into)] icon: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<ValidationError>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
    /// Receives the `KeyboardEvent::key` of every keydown
    #[prop(into)] on_key: Callback<String>,
    #[prop(optional)] node_ref: Option<NodeRef<Input>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let style = move || error.get().map(|_| ERROR_BORDER).unwrap_or_default();

    view! {
        <div class="input-group">
            <div class="input-wrapper">
                <i class=format!("fas {} input-icon", icon)></i>
                <input
                    node_ref=node_ref
                    type=move || input_type.get()
                    id=name.clone()
                    name=name
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    style=style
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:keydown=move |ev| on_key.run(ev.key())
                />
                {children.map(|c| c())}
            </div>
            {move || error.get().map(|e| view! {
                <div class="error-alert field-error">{e.to_string()}</div>
            })}
        </div>
    }
}

/// Password field with a visibility toggle
#[component]
pub fn PasswordInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<ValidationError>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_key: Callback<String>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let input_type = Signal::derive(move || {
        if visible.get() { "text" } else { "password" }.to_string()
    });

    view! {
        <FormInput
            name="password"
            placeholder="Contraseña"
            input_type=input_type
            icon="fa-lock"
            value=value
            error=error
            disabled=disabled
            on_input=on_input
            on_key=on_key
        >
            <button
                type="button"
                class="password-toggle"
                disabled=move || disabled.get()
                on:click=move |_| on_toggle.run(())
            >
                <i class=move || if visible.get() { "fas fa-eye" } else { "fas fa-eye-slash" }></i>
            </button>
        </FormInput>
    }
}
