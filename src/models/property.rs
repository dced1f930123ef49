#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub slug: &'static str,
    pub title: &'static str,
    /// Short line under the title, e.g. rooms and bathrooms
    pub summary: &'static str,
    pub price_usd: u32,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

impl Property {
    /// Price as shown on the cards: `$120,000`
    pub fn formatted_price(&self) -> String {
        let digits = self.price_usd.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        format!("${}", grouped)
    }

    /// Card subtitle with the price appended
    pub fn details(&self) -> String {
        format!("{} · {}", self.summary, self.formatted_price())
    }
}

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

static FEATURED: [Property; 3] = [
    Property {
        slug: "casa-moderna",
        title: "Casa Moderna",
        summary: "3 habitaciones · 2 baños",
        price_usd: 120_000,
        image_url: PLACEHOLDER_IMAGE,
        image_alt: "Casa moderna",
    },
    Property {
        slug: "departamento-centrico",
        title: "Departamento Céntrico",
        summary: "2 habitaciones · 1 baño",
        price_usd: 80_000,
        image_url: PLACEHOLDER_IMAGE,
        image_alt: "Departamento céntrico",
    },
    Property {
        slug: "terreno-amplio",
        title: "Terreno Amplio",
        summary: "500m² · Excelente ubicación",
        price_usd: 50_000,
        image_url: PLACEHOLDER_IMAGE,
        image_alt: "Terreno amplio",
    },
];

/// Properties highlighted on the landing page
pub fn featured_properties() -> &'static [Property] {
    &FEATURED
}
