//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod area;
mod biorhythm_phase;
mod bond_type;
mod element;
mod phenomenon;
mod roman_name;

pub use area::*;
pub use biorhythm_phase::*;
pub use bond_type::*;
pub use element::*;
pub use phenomenon::*;
pub use roman_name::*;
