//! `pantry-shelf-life`: rule-based shelf-life estimation.
//!
//! Given a product's shelf-life profile, the storage method it is kept in,
//! the observed ambient conditions and whether the package has been opened,
//! [`estimate`] predicts an expiry date and a confidence score.
//!
//! Everything here is a pure function of its inputs: no IO, no clock, no
//! shared state. Callers validate inputs with [`ShelfLifeInputs::validate`]
//! (or use [`try_estimate`]) and decide when to persist the result.

pub mod estimator;
pub mod inputs;
pub mod penalty;
pub mod storage;
pub mod validation;

pub use estimator::{MODEL_VERSION, Prediction, estimate, try_estimate};
pub use inputs::{AmbientConditions, ShelfLifeInputs, ShelfLifeProfile};
pub use penalty::{PenaltyBreakdown, explain};
pub use storage::{StorageCondition, select_base_days};
