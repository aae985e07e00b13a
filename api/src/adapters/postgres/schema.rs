//! Schema bootstrap
//!
//! Creates the tables on start-up when they do not exist yet. Existing tables
//! are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const STATEMENTS: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS teams (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        transfer_commission_percent NUMERIC(5, 2) NOT NULL
            CHECK (transfer_commission_percent >= 0 AND transfer_commission_percent < 100),
        budget NUMERIC(15, 2) NOT NULL CHECK (budget >= 0)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS players (
        id UUID PRIMARY KEY,
        first_name VARCHAR(255) NOT NULL,
        last_name VARCHAR(255) NOT NULL,
        birth_date DATE NOT NULL,
        career_start_date DATE NOT NULL,
        team_id UUID REFERENCES teams (id)
    )"#,
    "CREATE INDEX IF NOT EXISTS players_team_id_idx ON players (team_id)",
];

/// Create the `teams` and `players` tables if missing
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in STATEMENTS {
        db.execute_unprepared(statement).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
