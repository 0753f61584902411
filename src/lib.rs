pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod llm;
pub mod search;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::ProposalError;
pub use generator::workflow::{ProposalOutcome, generate_proposal, launch};
