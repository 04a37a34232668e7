// src/fields/mod.rs
//
// The five field heuristics. Each operates purely on normalized text and
// degrades to the "NA" sentinel instead of erroring; a miss is "unknown", not
// a failure.

pub mod contact;
pub mod name;
pub mod projects;
pub mod skills;

/// Sentinel for a field that could not be determined.
pub const NA: &str = "NA";

pub use contact::{extract_email, extract_phone};
pub use name::extract_name;
pub use projects::extract_projects;
pub use skills::extract_skills;
