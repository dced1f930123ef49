use leptos::prelude::*;

pub const LOGO_SRC: &str = "/images/LOGITO.png";

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="top-nav">
            <div class="nav-container">
                <div class="nav-left">
                    <img src=LOGO_SRC alt="Logo" class="nav-logo"/>
                </div>
                <div class="nav-right">
                    <a href="/" class="nav-link"><i class="fas fa-home"></i>" Inicio"</a>
                    <a href="/propiedades" class="nav-link"><i class="fas fa-building"></i>" Propiedades"</a>
                    <a href="/registro" class="nav-link"><i class="bi bi-person-fill-add"></i>" Registrarse"</a>
                    <a href="tel:977220220" class="nav-link"><i class="fas fa-phone"></i>" 977 220 220"</a>
                </div>
            </div>
        </nav>
    }
}
