use leptos::prelude::*;

use crate::login::SubmitLabel;

#[component]
pub fn SubmitButton(
    #[prop(into)] label: Signal<SubmitLabel>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let classes = move || match label.get() {
        SubmitLabel::SignIn => "login-submit-btn",
        SubmitLabel::Loading => "login-submit-btn loading",
        SubmitLabel::Blocked => "login-submit-btn blocked",
    };

    let icon = move || match label.get() {
        SubmitLabel::SignIn => "fas fa-sign-in-alt",
        SubmitLabel::Loading => "fas fa-spinner fa-spin",
        SubmitLabel::Blocked => "fas fa-lock",
    };

    view! {
        <button
            type="button"
            class=classes
            disabled=move || label.get() != SubmitLabel::SignIn
            on:click=move |_| on_click.run(())
        >
            <i class=icon></i>
            " "
            {move || label.get().text()}
        </button>
    }
}
