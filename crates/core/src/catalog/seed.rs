//! Sample catalog data.
//!
//! Six sarees across the five categories. This is the dataset the demo
//! storefront launches with and the fixture the test suites lean on, so the
//! ids, prices, and category spread here are load-bearing.

use crate::product::Product;
use crate::types::{Category, Price, ProductId};

fn product(
    id: u32,
    name: &str,
    category: Category,
    price: u32,
    original_price: u32,
    images: &[&str],
    description: &str,
    fabric: &str,
    color: &str,
    stock: u32,
    rating: f64,
    review_count: u32,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_rupees(price),
        original_price: Price::from_rupees(original_price),
        description: description.to_owned(),
        fabric: fabric.to_owned(),
        color: color.to_owned(),
        stock,
        rating,
        review_count,
        images: images.iter().map(|&uri| uri.to_owned()).collect(),
        featured,
    }
}

/// The six sample products, in catalog order.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Banarasi Silk Saree",
            Category::Silk,
            8999,
            12999,
            &[
                "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=800",
                "https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b?w=800",
            ],
            "Exquisite Banarasi silk saree with intricate golden zari work. \
             Perfect for weddings and special occasions.",
            "Pure Silk",
            "Maroon",
            15,
            4.8,
            124,
            true,
        ),
        product(
            2,
            "Bridal Red Saree",
            Category::Bridal,
            15999,
            20999,
            &[
                "https://images.unsplash.com/photo-1617627143750-d86bc21e42bb?w=800",
                "https://images.unsplash.com/photo-1583391733981-9c0c8b0b7b7b?w=800",
            ],
            "Stunning bridal saree with heavy embroidery and stone work. \
             Make your special day unforgettable.",
            "Georgette with Silk",
            "Red",
            8,
            4.9,
            89,
            true,
        ),
        product(
            3,
            "Casual Cotton Saree",
            Category::Casual,
            1499,
            2499,
            &["https://images.unsplash.com/photo-1598258636081-44d89b6d4c3d?w=800"],
            "Comfortable cotton saree for daily wear. Breathable fabric \
             perfect for all-day comfort.",
            "Pure Cotton",
            "Blue",
            25,
            4.5,
            210,
            false,
        ),
        product(
            4,
            "Designer Georgette Saree",
            Category::Designer,
            6999,
            9999,
            &["https://images.unsplash.com/photo-1610030469751-64387df5c114?w=800"],
            "Contemporary designer saree with modern prints and elegant drape.",
            "Georgette",
            "Green",
            12,
            4.7,
            156,
            true,
        ),
        product(
            5,
            "Festive Gold Saree",
            Category::Festive,
            5499,
            7999,
            &["https://images.unsplash.com/photo-1617627143750-d86bc21e42bb?w=800"],
            "Beautiful festive saree with golden border and traditional motifs.",
            "Art Silk",
            "Gold",
            18,
            4.6,
            98,
            false,
        ),
        product(
            6,
            "Chanderi Silk Saree",
            Category::Silk,
            4999,
            6999,
            &["https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b?w=800"],
            "Lightweight Chanderi silk saree with delicate handwoven patterns.",
            "Chanderi Silk",
            "Peach",
            20,
            4.7,
            143,
            false,
        ),
    ]
}
