//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture gets a fresh id and can be customized afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::entities::{Player, PlayerDetails, PlayerId, Team, TeamDetails, TeamId};

/// Details of a valid team
pub fn test_team_details() -> TeamDetails {
    TeamDetails {
        name: "Test FC".to_string(),
        transfer_commission_percent: dec!(5),
        budget: dec!(1000000.00),
    }
}

/// Create a test team with default values
pub fn test_team() -> Team {
    Team::from_details(TeamId::new(), test_team_details())
}

/// Create a test team with a specific commission and budget
pub fn test_team_with(commission_percent: Decimal, budget: Decimal) -> Team {
    Team {
        transfer_commission_percent: commission_percent,
        budget,
        ..test_team()
    }
}

/// Details of a valid, unassigned player
pub fn test_player_details() -> PlayerDetails {
    PlayerDetails {
        first_name: "Test".to_string(),
        last_name: "Player".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
        career_start_date: NaiveDate::from_ymd_opt(2013, 8, 1).unwrap(),
        team_id: None,
    }
}

/// Create an unassigned test player
pub fn test_player() -> Player {
    test_player_on(None)
}

/// Create a test player on the given team
pub fn test_player_on(team_id: Option<TeamId>) -> Player {
    Player::from_details(
        PlayerId::new(),
        PlayerDetails {
            team_id,
            ..test_player_details()
        },
    )
}
