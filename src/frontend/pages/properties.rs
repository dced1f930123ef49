//! Property listing for Inmobiliaria Mendoza

use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav, PropertyCard};
use crate::models::featured_properties;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let properties = featured_properties();

    view! {
        <div class="app-container">
            <Nav/>
            <main class="main">
                <h2>"Propiedades"</h2>
                <p class="listing-count">{format!("{} propiedades disponibles", properties.len())}</p>
                <div class="cards">
                    {properties
                        .iter()
                        .map(|property| view! { <PropertyCard property=property/> })
                        .collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}
