//! The fixed catalog the storefront ships with.

use crate::catalog::{BannerSlide, Product};
use crate::money::Money;

const PLACEHOLDER: &str = "https://via.placeholder.com/280x250?text=";
const BANNER: &str = "https://via.placeholder.com/600x300?text=";

/// The six products on sale, in display order.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Ceramic Bowl",
            "Beautiful handcrafted ceramic bowl perfect for serving",
            Money::usd(2499),
            format!("{PLACEHOLDER}Ceramic+Bowl"),
        )
        .with_category("bowls"),
        Product::new(
            "2",
            "Dinner Plate Set",
            "Set of 4 elegant dinner plates",
            Money::usd(4999),
            format!("{PLACEHOLDER}Dinner+Plate"),
        )
        .with_category("plates"),
        Product::new(
            "3",
            "Tea Cup",
            "Delicate porcelain tea cup with handle",
            Money::usd(1299),
            format!("{PLACEHOLDER}Tea+Cup"),
        )
        .with_category("cups"),
        Product::new(
            "4",
            "Serving Platter",
            "Large serving platter for special occasions",
            Money::usd(5999),
            format!("{PLACEHOLDER}Serving+Platter"),
        )
        .with_category("plates"),
        Product::new(
            "5",
            "Soup Bowl",
            "Deep soup bowl with beautiful glaze",
            Money::usd(1599),
            format!("{PLACEHOLDER}Soup+Bowl"),
        )
        .with_category("bowls"),
        Product::new(
            "6",
            "Coffee Mug Set",
            "Set of 2 cozy coffee mugs",
            Money::usd(2299),
            format!("{PLACEHOLDER}Coffee+Mug+Set"),
        )
        .with_category("cups"),
    ]
}

/// Images for the catalog page banner.
pub fn banner_slides() -> Vec<BannerSlide> {
    [
        "Canister",
        "Borddil Kettle",
        "Cutlery Set Gold",
        "Nuts Tray",
        "Premium Jug Set",
        "Wooden Cup and Saucer",
    ]
    .into_iter()
    .zip(1..)
    .map(|(alt, id)| BannerSlide::new(id, format!("{BANNER}{}", alt.replace(' ', "+")), alt))
    .collect()
}
