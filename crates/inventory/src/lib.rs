//! Pantry inventory domain module.
//!
//! This crate contains the business rules layered over shelf-life
//! predictions: pantry items and their prediction history, urgency
//! classification, insights statistics and user feedback. Pure domain logic
//! (no IO, no HTTP, no storage).

pub mod feedback;
pub mod insights;
pub mod item;
pub mod urgency;

pub use feedback::{Feedback, SubmitFeedback};
pub use insights::{CategoryCount, InsightsConfig, InsightsSummary};
pub use item::{
    CreateItem, MAX_NOTES_LEN, PantryItem, PredictionRecord, ProductProfile, StorageMethod,
    UpdateItem,
};
pub use urgency::{ExpiryStatus, Urgency, days_until_expiry, needing_attention};
