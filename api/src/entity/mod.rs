//! SeaORM entities for the `teams` and `players` tables

pub mod players;
pub mod teams;
