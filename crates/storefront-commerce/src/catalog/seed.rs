//! Demo catalog used by the CLI and tests.

use crate::catalog::specs::{CPU, DISPLAY, GENERATION, RAM, STORAGE};
use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: Category,
    price_cents: i64,
    cpu: &'static str,
    generation: &'static str,
    ram: &'static str,
    storage: &'static str,
    display: &'static str,
    description: &'static str,
    image: &'static str,
    stock: i64,
}

/// The six demo PCs, priced in USD.
pub fn demo_products() -> Vec<Product> {
    seeds()
        .into_iter()
        .map(|s| {
            Product::new(s.id, s.name, s.category, Money::new(s.price_cents, Currency::USD))
                .with_brand("Pitory")
                .with_description(s.description)
                .with_image(s.image)
                .with_stock(s.stock)
                .with_spec(CPU, s.cpu)
                .with_spec(GENERATION, s.generation)
                .with_spec(RAM, s.ram)
                .with_spec(STORAGE, s.storage)
                .with_spec(DISPLAY, s.display)
        })
        .collect()
}

fn seeds() -> Vec<Seed> {
    vec![
        Seed {
            id: "1",
            name: "Gaming Beast Pro",
            category: Category::Gaming,
            price_cents: 129999,
            cpu: "Intel Core i7-13700K",
            generation: "13th Gen",
            ram: "32GB DDR4",
            storage: "1TB NVMe SSD",
            display: "27\" 144Hz",
            description: "Ultimate gaming powerhouse designed for 4K gaming and streaming.",
            image: "https://images.unsplash.com/photo-1587831990711-23ca6441447b?w=500&h=400&fit=crop",
            stock: 15,
        },
        Seed {
            id: "2",
            name: "Office Elite",
            category: Category::Work,
            price_cents: 79999,
            cpu: "Intel Core i5-13600K",
            generation: "13th Gen",
            ram: "16GB DDR4",
            storage: "512GB NVMe SSD",
            display: "24\" IPS",
            description: "Perfect for productivity and business tasks.",
            image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=500&h=400&fit=crop",
            stock: 25,
        },
        Seed {
            id: "3",
            name: "Creator Station",
            category: Category::Creative,
            price_cents: 159999,
            cpu: "AMD Ryzen 9 7900X",
            generation: "7th Gen",
            ram: "64GB DDR5",
            storage: "2TB NVMe SSD",
            display: "32\" 4K",
            description: "Massive RAM and storage for video editing, 3D rendering and design.",
            image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=500&h=400&fit=crop",
            stock: 8,
        },
        Seed {
            id: "4",
            name: "Budget Starter",
            category: Category::GeneralUse,
            price_cents: 49999,
            cpu: "Intel Core i3-13100",
            generation: "13th Gen",
            ram: "8GB DDR4",
            storage: "256GB NVMe SSD",
            display: "21.5\" HD",
            description: "Affordable computer for browsing, email and light productivity.",
            image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=500&h=400&fit=crop",
            stock: 30,
        },
        Seed {
            id: "5",
            name: "Gaming Pro Max",
            category: Category::Gaming,
            price_cents: 189999,
            cpu: "AMD Ryzen 9 7950X",
            generation: "7th Gen",
            ram: "32GB DDR5",
            storage: "2TB NVMe SSD",
            display: "34\" Ultrawide 144Hz",
            description: "Top-tier gaming machine with an ultrawide display.",
            image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=500&h=400&fit=crop",
            stock: 12,
        },
        Seed {
            id: "6",
            name: "Home Office Plus",
            category: Category::Work,
            price_cents: 89999,
            cpu: "Intel Core i7-13700",
            generation: "13th Gen",
            ram: "16GB DDR4",
            storage: "1TB NVMe SSD",
            display: "27\" IPS",
            description: "Larger display and faster processor for demanding work applications.",
            image: "https://images.unsplash.com/photo-1483058712412-4245e9b90334?w=500&h=400&fit=crop",
            stock: 20,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpecSchema;

    #[test]
    fn test_demo_products_are_valid() {
        let products = demo_products();
        assert_eq!(products.len(), 6);
        for product in &products {
            assert!(SpecSchema::validate(&product.category, &product.specifications).is_ok());
            assert!(product.is_in_stock());
        }
    }
}
