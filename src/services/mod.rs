//! Service layer for school lookups.
//!
//! This module contains the business logic for:
//! - School search by postal code (`SchoolSearch`)
//! - Color and logo guessing (`IdentityGuesser`)
//! - Name extraction from directory pages (`NameExtractor`)

pub mod extract;
mod identity;
mod schools;

pub use extract::{NameExtractor, PatternExtractor};
pub use identity::IdentityGuesser;
pub use schools::SchoolSearch;
