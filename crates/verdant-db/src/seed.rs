//! # Seed Data
//!
//! Sample catalog and discount data for development databases.
//!
//! The `seed` binary applies this through [`seed_database`]; tests use it
//! to get a realistic in-memory catalog without fixtures of their own.
//!
//! ## Generated Records
//! - 8 catalog plants across houseplant / succulent / flowering categories
//! - 3 discount codes:
//!   - `SPRING20` - 20% off
//!   - `SAVE10`   - $10.00 off orders of $25.00 or more
//!   - `LEAFY15`  - 15% off, deactivated (exercises the "no longer active"
//!     path end to end)
//!
//! Expiry dates are relative to the seeding instant so the codes work
//! whenever the seed is run.

use chrono::{Duration, Utc};
use tracing::info;

use crate::error::DbResult;
use crate::pool::Database;
use verdant_core::{DiscountCode, DiscountKind, Plant};

/// Sample plants: (id, name, description, care, sunlight, category,
/// price_cents, stock, image_url, weight_grams)
const SAMPLE_PLANTS: &[(
    &str,
    &str,
    &str,
    &str,
    &str,
    &str,
    i64,
    i64,
    &str,
    i64,
)] = &[
    (
        "plant_001",
        "Monstera Deliciosa",
        "Beautiful tropical plant with large, glossy leaves and natural splits. Perfect for bright, indirect light.",
        "Water when top inch of soil is dry. Provide bright, indirect light. Mist occasionally for humidity.",
        "Bright, indirect light",
        "houseplant",
        2999,
        25,
        "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc",
        3500,
    ),
    (
        "plant_002",
        "Snake Plant",
        "Low-maintenance succulent with upright, sword-like leaves. Great for beginners and low-light conditions.",
        "Water every 2-3 weeks. Tolerates low light but prefers bright, indirect light.",
        "Low to bright, indirect light",
        "houseplant",
        1999,
        40,
        "https://images.unsplash.com/photo-1470058869958-2a77ade41c02",
        2000,
    ),
    (
        "plant_003",
        "Fiddle Leaf Fig",
        "Statement plant with large, violin-shaped leaves. A popular choice for modern interiors.",
        "Water when top 2 inches of soil are dry. Needs bright, indirect light and consistent watering.",
        "Bright, indirect light",
        "houseplant",
        4999,
        15,
        "https://images.unsplash.com/photo-1601985705806-5b9a71f6004f",
        4000,
    ),
    (
        "plant_004",
        "Pothos",
        "Trailing vine with heart-shaped leaves. Perfect for hanging baskets or climbing up poles.",
        "Water when soil surface is dry. Thrives in various light conditions.",
        "Low to bright, indirect light",
        "houseplant",
        1599,
        35,
        "https://images.pexels.com/photos/807598/pexels-photo-807598.jpeg",
        1500,
    ),
    (
        "plant_005",
        "Succulent Collection",
        "Beautiful collection of mixed succulents in decorative pots. Low maintenance and colorful.",
        "Water sparingly, every 2-3 weeks. Provide bright light and good drainage.",
        "Bright, direct light",
        "succulent",
        2499,
        20,
        "https://images.pexels.com/photos/1470171/pexels-photo-1470171.jpeg",
        2500,
    ),
    (
        "plant_006",
        "Peace Lily",
        "Elegant plant with white flowers and glossy green leaves. Great for low-light areas.",
        "Keep soil moist but not soggy. Prefers low to medium light.",
        "Low to medium, indirect light",
        "flowering",
        2799,
        18,
        "https://images.pexels.com/photos/776656/pexels-photo-776656.jpeg",
        3000,
    ),
    (
        "plant_007",
        "Rubber Plant",
        "Glossy, dark green leaves on a sturdy stem. A classic houseplant that grows into a beautiful tree.",
        "Water when top inch of soil is dry. Wipe leaves regularly to maintain shine.",
        "Bright, indirect light",
        "houseplant",
        3499,
        22,
        "https://images.unsplash.com/photo-1592150621744-aca64f48394a",
        4500,
    ),
    (
        "plant_008",
        "ZZ Plant",
        "Extremely low-maintenance plant with waxy, dark green leaves. Perfect for offices and low-light areas.",
        "Water every 2-4 weeks. Tolerates neglect and low light very well.",
        "Low to bright, indirect light",
        "houseplant",
        3299,
        30,
        "https://images.unsplash.com/photo-1583753075968-1236ccb83c66",
        2800,
    ),
];

/// Builds the sample plant records.
pub fn sample_plants() -> Vec<Plant> {
    let now = Utc::now();

    SAMPLE_PLANTS
        .iter()
        .map(
            |&(id, name, description, care, sunlight, category, price_cents, stock, image, weight)| {
                Plant {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    care_instructions: care.to_string(),
                    sunlight_requirements: sunlight.to_string(),
                    category: category.to_string(),
                    price_cents,
                    stock_quantity: stock,
                    image_url: image.to_string(),
                    weight_grams: weight,
                    created_at: now,
                    updated_at: now,
                }
            },
        )
        .collect()
}

/// Builds the sample discount code records.
pub fn sample_discount_codes() -> Vec<DiscountCode> {
    let now = Utc::now();

    vec![
        DiscountCode {
            code: "SPRING20".to_string(),
            kind: DiscountKind::Percentage,
            value: 2000, // 20%
            active: true,
            expires_at: now + Duration::days(90),
            min_subtotal_cents: None,
            created_at: now,
        },
        DiscountCode {
            code: "SAVE10".to_string(),
            kind: DiscountKind::FixedAmount,
            value: 1000, // $10.00
            active: true,
            expires_at: now + Duration::days(365),
            min_subtotal_cents: Some(2500), // $25.00 minimum
            created_at: now,
        },
        DiscountCode {
            code: "LEAFY15".to_string(),
            kind: DiscountKind::Percentage,
            value: 1500, // 15%
            active: false,
            expires_at: now + Duration::days(90),
            min_subtotal_cents: None,
            created_at: now,
        },
    ]
}

/// Seeds an empty database with the sample catalog and discount codes.
///
/// Idempotent at the table level: tables that already have rows are left
/// untouched, so re-running the seed never duplicates data.
///
/// ## Returns
/// Number of records inserted across both tables.
pub async fn seed_database(db: &Database) -> DbResult<usize> {
    let mut inserted = 0;

    let plants = db.plants();
    if plants.count().await? == 0 {
        for plant in sample_plants() {
            plants.insert(&plant).await?;
            inserted += 1;
        }
        info!(count = SAMPLE_PLANTS.len(), "Seeded sample plants");
    } else {
        info!("Plants table already populated, skipping");
    }

    let codes = db.discount_codes();
    if codes.count().await? == 0 {
        let records = sample_discount_codes();
        for record in &records {
            codes.insert(record).await?;
            inserted += 1;
        }
        info!(count = records.len(), "Seeded sample discount codes");
    } else {
        info!("Discount codes table already populated, skipping");
    }

    Ok(inserted)
}

// =============================================================================
// Unit Tests
// =============================================================================
