#[cfg(test)]
pub mod models_tests {
    use inmobiliaria_mendoza::models::*;

    fn property_with_price(price_usd: u32) -> Property {
        Property {
            slug: "test",
            title: "Test",
            summary: "1 habitación",
            price_usd,
            image_url: "",
            image_alt: "",
        }
    }

    #[test]
    fn test_property_formatted_price() {
        assert_eq!(property_with_price(0).formatted_price(), "$0");
        assert_eq!(property_with_price(999).formatted_price(), "$999");
        assert_eq!(property_with_price(1_000).formatted_price(), "$1,000");
        assert_eq!(property_with_price(50_000).formatted_price(), "$50,000");
        assert_eq!(property_with_price(120_000).formatted_price(), "$120,000");
        assert_eq!(property_with_price(1_250_000).formatted_price(), "$1,250,000");
    }

    #[test]
    fn test_featured_properties_catalogue() {
        let titles: Vec<&str> = featured_properties().iter().map(|p| p.title).collect();

        assert_eq!(
            titles,
            vec!["Casa Moderna", "Departamento Céntrico", "Terreno Amplio"]
        );
    }

    #[test]
    fn test_featured_properties_details() {
        let details: Vec<String> = featured_properties().iter().map(Property::details).collect();

        assert_eq!(
            details,
            vec![
                "3 habitaciones · 2 baños · $120,000",
                "2 habitaciones · 1 baño · $80,000",
                "500m² · Excelente ubicación · $50,000",
            ]
        );
    }

    #[test]
    fn test_featured_properties_have_unique_slugs() {
        let mut slugs: Vec<&str> = featured_properties().iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();

        assert_eq!(slugs.len(), featured_properties().len());
    }
}
