use leptos::prelude::*;

use crate::frontend::components::{Footer, PropertyCard};
use crate::models::featured_properties;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="app-container">
            <header class="header">
                <h1>"Inmobiliaria Mendoza"</h1>
                <nav class="nav">
                    <a href="/">"Inicio"</a>
                    <a href="/propiedades">"Propiedades"</a>
                    <a href="#nosotros">"Nosotros"</a>
                    <a href="#contacto">"Contacto"</a>
                    <a href="/login">"Iniciar Sesión"</a>
                </nav>
            </header>

            <main class="main">
                <h2>"Propiedades destacadas"</h2>
                <div class="cards">
                    {featured_properties()
                        .iter()
                        .map(|property| view! { <PropertyCard property=property/> })
                        .collect_view()}
                </div>
            </main>

            <Footer/>
        </div>
    }
}
