//! RevelaCode Legal — get and upsert of legal documents keyed on type.

pub mod service;

pub use service::LegalService;
