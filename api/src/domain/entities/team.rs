//! Team domain entity
//!
//! A football club with a transfer budget and the commission it charges on
//! every player it sells.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Largest budget a team may hold (`numeric(15, 2)`)
pub const MAX_BUDGET: Decimal = dec!(9999999999999.99);

/// Exclusive upper bound of the transfer commission percentage
pub const MAX_COMMISSION_PERCENT: Decimal = dec!(100);

/// Number of decimal places money and percentages are stored with
pub const MONEY_SCALE: u32 = 2;

/// Unique identifier for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub Uuid);

impl TeamId {
    /// Time-ordered, so sorting by id follows creation order
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TeamId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A football team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Percentage added on top of the base fee when this team sells a player
    pub transfer_commission_percent: Decimal,
    pub budget: Decimal,
}

impl Team {
    /// Build a team from stored fields under an existing id
    pub fn from_details(id: TeamId, details: TeamDetails) -> Self {
        Self {
            id,
            name: details.name,
            transfer_commission_percent: details.transfer_commission_percent,
            budget: details.budget,
        }
    }
}

/// Mutable fields of a team, used for creation and full-record updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetails {
    pub name: String,
    pub transfer_commission_percent: Decimal,
    pub budget: Decimal,
}

impl TeamDetails {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("Team name is required".to_string()));
        }

        let commission = self.transfer_commission_percent;
        if commission.is_sign_negative() && !commission.is_zero() {
            return Err(DomainError::Validation(
                "Transfer commission must be greater than or equal to 0".to_string(),
            ));
        }
        if commission >= MAX_COMMISSION_PERCENT {
            return Err(DomainError::Validation(
                "Transfer commission must be less than 100".to_string(),
            ));
        }
        if commission.normalize().scale() > MONEY_SCALE {
            return Err(DomainError::Validation(
                "Transfer commission allows at most 2 decimal places".to_string(),
            ));
        }

        let budget = self.budget;
        if budget.is_sign_negative() && !budget.is_zero() {
            return Err(DomainError::Validation(
                "Budget must be greater than or equal to 0".to_string(),
            ));
        }
        if budget > MAX_BUDGET {
            return Err(DomainError::Validation(format!(
                "The maximum allowable budget is {}",
                MAX_BUDGET
            )));
        }
        if budget.normalize().scale() > MONEY_SCALE {
            return Err(DomainError::Validation(
                "Budget allows at most 2 decimal places".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> TeamDetails {
        TeamDetails {
            name: "Dynamo".to_string(),
            transfer_commission_percent: dec!(5),
            budget: dec!(1000000),
        }
    }

    #[test]
    fn valid_details_pass() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        let mut d = details();
        d.name = "   ".to_string();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn commission_bounds() {
        let mut d = details();

        d.transfer_commission_percent = dec!(0);
        assert!(d.validate().is_ok());

        d.transfer_commission_percent = dec!(99.99);
        assert!(d.validate().is_ok());

        d.transfer_commission_percent = dec!(100);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));

        d.transfer_commission_percent = dec!(-0.01);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn commission_precision() {
        let mut d = details();
        d.transfer_commission_percent = dec!(2.125);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));

        // Trailing zeros do not count as precision
        d.transfer_commission_percent = dec!(2.500);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn budget_bounds() {
        let mut d = details();

        d.budget = dec!(0.00);
        assert!(d.validate().is_ok());

        d.budget = MAX_BUDGET;
        assert!(d.validate().is_ok());

        d.budget = dec!(10000000000000.00);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));

        d.budget = dec!(-1);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));

        d.budget = dec!(10.001);
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn team_id_display() {
        let id = TeamId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn team_ids_sort_by_creation() {
        let first = TeamId::new();
        let second = TeamId::new();
        assert!(first < second);
    }
}
