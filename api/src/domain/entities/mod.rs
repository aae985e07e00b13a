//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod page;
pub mod player;
pub mod team;

pub use page::{Page, PageRequest};
pub use player::{Player, PlayerDetails, PlayerId};
pub use team::{Team, TeamDetails, TeamId, MAX_BUDGET, MAX_COMMISSION_PERCENT, MONEY_SCALE};
