//! Risk Gate Domain Services

mod risk_validator;

pub use risk_validator::{DEFAULT_RISK_THRESHOLD, RiskValidator};
