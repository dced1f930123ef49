use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 Inmobiliaria Mendoza. Todos los derechos reservados."</p>
        </footer>
    }
}
