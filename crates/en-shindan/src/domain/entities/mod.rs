//! Domain Entities
//!
//! - Input: raw form and validated diagnosis input
//! - Profile: the assembled diagnosis result

mod input;
mod profile;

pub use input::*;
pub use profile::*;
