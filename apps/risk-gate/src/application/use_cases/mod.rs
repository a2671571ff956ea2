//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod batch_validate;

pub use batch_validate::{BatchValidateUseCase, SlotOutcome};
