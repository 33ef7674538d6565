//! Static fallback catalog
//!
//! Used whenever the live sheet cannot be fetched or parses to nothing, so
//! the calculator always has something to quote against.

use crate::models::{slugify, Category, Service};

fn entry(name: &str, price: f64, category: Category, description: &str) -> Service {
    Service {
        id: slugify(name),
        name: name.to_string(),
        price,
        category,
        description: description.to_string(),
    }
}

/// Build the built-in service list
pub fn fallback_catalog() -> Vec<Service> {
    vec![
        entry("Repair", 49.99, Category::Repair, "Standard repair service"),
        entry(
            "Government Repair",
            149.99,
            Category::Repair,
            "Government repair service",
        ),
        entry("Lock Pick", 29.99, Category::Services, "Lock pick tool"),
        entry("Spare Key", 19.99, Category::Services, "Spare key"),
        entry("Spray Kit", 49.99, Category::Services, "Spray kit"),
        entry("Tire Kit", 39.99, Category::Services, "Tire kit"),
        entry(
            "Standard Restoration Kit",
            79.99,
            Category::RestorationKits,
            "Standard restoration kit",
        ),
        entry(
            "Advanced Restoration Kit",
            129.99,
            Category::RestorationKits,
            "Advanced restoration kit",
        ),
        entry(
            "Standard Suspension",
            299.99,
            Category::Suspensions,
            "Standard suspension",
        ),
        entry(
            "Performance Suspension",
            499.99,
            Category::Suspensions,
            "Performance suspension",
        ),
        entry("Standard Brakes", 199.99, Category::Brakes, "Standard brakes"),
        entry(
            "Performance Brakes",
            349.99,
            Category::Brakes,
            "Performance brakes",
        ),
        entry("Standard Engine", 999.99, Category::Engines, "Standard engine"),
        entry(
            "Performance Engine",
            1999.99,
            Category::Engines,
            "Performance engine",
        ),
        entry(
            "Standard Transmission",
            799.99,
            Category::Transmissions,
            "Standard transmission",
        ),
        entry(
            "Performance Transmission",
            1499.99,
            Category::Transmissions,
            "Performance transmission",
        ),
        entry("Standard Tires", 399.99, Category::Tires, "Standard tires"),
        entry(
            "Performance Tires",
            699.99,
            Category::Tires,
            "Performance tires",
        ),
        entry("Turbo", 899.99, Category::Turbo, "Turbo upgrade"),
    ]
}
