//! Jurisdiction resolution: maps free-text county names onto a reference table.

mod abbrev;
mod matcher;
mod ratio;

pub use matcher::{
    ABBREVIATION_CONFIDENCE, EXACT_CONFIDENCE, JurisdictionMatch, JurisdictionMatcher, MatchKind,
};
