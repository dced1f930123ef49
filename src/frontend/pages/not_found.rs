//! 404 page for Inmobiliaria Mendoza

use leptos::prelude::*;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-content">
                <h1 class="not-found-code">"404"</h1>
                <p class="not-found-message">"Página no encontrada"</p>
                <p class="not-found-desc">"La página que busca no existe o fue movida."</p>
                <a href="/" class="back-link">"Volver al inicio"</a>
            </div>
        </div>
    }
}
