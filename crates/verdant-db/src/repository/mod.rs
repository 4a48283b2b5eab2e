//! # Repository Module
//!
//! Database repository implementations for the Verdant Nursery backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  API Handler                                                           │
//! │       │                                                                 │
//! │       │  db.plants().get_by_ids(&ids)                                  │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  PlantRepository                                                       │
//! │  ├── list(&self, category, search)                                     │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── get_by_ids(&self, ids)                                            │
//! │  └── insert(&self, plant)                                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Can swap database implementations                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`plant::PlantRepository`] - Catalog reads and seeding inserts
//! - [`discount::DiscountCodeRepository`] - Discount rule record lookup

pub mod discount;
pub mod plant;
