// Domain layer - Core types and pure rules of the copy workflow
pub mod credentials;
pub mod dashboard;
pub mod error;
pub mod status;
