use leptos::prelude::*;

use crate::login::{Notification, NotificationKind};

fn appearance(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Error => ("fa-exclamation-triangle", "#e74c3c"),
        NotificationKind::Success => ("fa-check-circle", "#00b894"),
        NotificationKind::Warning => ("fa-info-circle", "#f39c12"),
        NotificationKind::Info => ("fa-info-circle", "#3498db"),
    }
}

#[component]
pub fn AlertBanner(notification: Notification) -> impl IntoView {
    let (icon, background) = appearance(notification.kind);

    view! {
        <div
            class=format!("{}-alert floating-alert", notification.kind)
            style=format!("background-color: {}", background)
            role="status"
        >
            <i class=format!("fas {}", icon)></i>
            <span>{notification.message}</span>
        </div>
    }
}

/// Floating top-right stack, oldest notification first
#[component]
pub fn AlertStack(#[prop(into)] notifications: Signal<Vec<Notification>>) -> impl IntoView {
    view! {
        <div class="alert-stack">
            <For
                each=move || notifications.get()
                key=|notification| notification.id
                children=move |notification| view! { <AlertBanner notification=notification/> }
            />
        </div>
    }
}
