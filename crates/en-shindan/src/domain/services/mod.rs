//! Domain Services
//!
//! - `calendar`: 60-way natural classification (生まれ持った縁)
//! - `name_acoustics`: name bond type (名前の縁)
//! - `attraction`: element attraction type (引き寄せてきた縁)
//! - `biorhythm`: 10-phase biorhythm cycle
//! - `region`: prefecture element energy
//! - `diagnosis`: validation and assembly of the full profile

pub mod attraction;
pub mod biorhythm;
pub mod calendar;
pub mod diagnosis;
pub mod name_acoustics;
pub mod region;
