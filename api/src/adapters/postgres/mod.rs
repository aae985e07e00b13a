//! PostgreSQL adapters
//!
//! Implementations of the port traits using SeaORM and PostgreSQL.

pub mod player_repo;
pub mod schema;
pub mod team_repo;
pub mod unit_of_work;


pub use player_repo::PostgresPlayerRepository;
pub use schema::ensure_schema;
pub use team_repo::PostgresTeamRepository;
pub use unit_of_work::PostgresUnitOfWork;
