//! The fixed set of purchasable products. Read-only for the lifetime of
//! the process; there are no mutation operations.

use std::sync::LazyLock;

use crate::models::Product;

const PANT_DESCRIPTION: &str = "* Premium-quality Woven Cotton Blended with 2% Spandex\n\n\
     * Tailored straight fit\n\n\
     * Flat front with sharp creases \n\n\
     * Comfortable, breathable, and durable\n\n\
     * Ideal for office, business, and formal wear";

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: 1,
            name: "Man's Formal Pant - Cream".into(),
            price: 1050,
            original_price: 1400,
            image: "https://i.imgur.com/k0ZGqdb.jpeg".into(),
            images: vec!["https://i.imgur.com/k0ZGqdb.jpeg".into()],
            fabric: "Woven Cotton".into(),
            fit: "Slim Fit".into(),
            description: PANT_DESCRIPTION.into(),
            sizes: vec![30, 32, 34, 36, 38],
            rating: 4.8,
            reviews: 124,
        },
        Product {
            id: 2,
            name: "Man's Formal Pant - Black".into(),
            price: 1050,
            original_price: 1400,
            image: "https://i.imgur.com/HRM9Abj.jpeg".into(),
            images: vec!["https://i.imgur.com/HRM9Abj.jpeg".into()],
            fabric: "Woven Cotton".into(),
            fit: "Regular Fit".into(),
            description: PANT_DESCRIPTION.into(),
            sizes: vec![30, 32, 34, 36, 38],
            rating: 4.9,
            reviews: 89,
        },
        Product {
            id: 3,
            name: "Man's Formal Pant - Light Ash".into(),
            price: 1050,
            original_price: 1400,
            image: "https://i.imgur.com/CHMzGLP.jpeg".into(),
            images: vec!["https://i.imgur.com/CHMzGLP.jpeg".into()],
            fabric: "Woven Cotton".into(),
            fit: "Slim Fit".into(),
            description: PANT_DESCRIPTION.into(),
            sizes: vec![30, 32, 34, 36, 38],
            rating: 4.7,
            reviews: 210,
        },
        Product {
            id: 4,
            name: "Man's Formal Pant - Dark Navy Blue".into(),
            price: 1050,
            original_price: 1400,
            image: "https://i.imgur.com/yJ1rBRX.jpeg".into(),
            images: vec!["https://i.imgur.com/yJ1rBRX.jpeg".into()],
            fabric: "Woven Cotton".into(),
            fit: "Tapered Fit".into(),
            description: PANT_DESCRIPTION.into(),
            sizes: vec![30, 32, 34, 36, 38],
            rating: 4.6,
            reviews: 56,
        },
    ]
});

pub fn all() -> &'static [Product] {
    &PRODUCTS
}

pub fn get(id: i64) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let product = get(2).unwrap();
        assert_eq!(product.name, "Man's Formal Pant - Black");
        assert_eq!(product.price, 1050);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(get(999).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<i64> = all().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }
}
