// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod rules;
pub mod scoring;

pub use matcher::{MatchOutcome, Matcher};
pub use rules::ServiceRules;
