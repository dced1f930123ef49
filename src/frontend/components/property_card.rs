use leptos::prelude::*;

use crate::models::Property;

#[component]
pub fn PropertyCard(property: &'static Property) -> impl IntoView {
    view! {
        <div class="card" id=property.slug>
            <img src=property.image_url alt=property.image_alt/>
            <h3>{property.title}</h3>
            <p>{property.details()}</p>
        </div>
    }
}
