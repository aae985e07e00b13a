//! Transfer fee calculation
//!
//! The fee a buying team pays is derived from the player's experience and age
//! plus the selling team's commission:
//!
//! ```text
//! base       = round2(experience_months * 100000 / age_years)
//! commission = round2(base * commission_percent / 100)
//! fee        = base + commission
//! ```
//!
//! Both roundings are half-up. Month and year counts use calendar period
//! arithmetic: a month only counts once its day-of-month has been reached.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::entities::{Player, Team, MONEY_SCALE};
use crate::error::DomainError;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Base amount earned per month of experience, before dividing by age
pub const BASE_AMOUNT_PER_MONTH: Decimal = dec!(100000);

/// Breakdown of a computed transfer fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFee {
    pub experience_months: i64,
    pub age_years: i64,
    pub base_amount: Decimal,
    pub commission: Decimal,
    pub total: Decimal,
}

/// Whole calendar months elapsed from `start` to `end`.
/// Negative when `end` is before `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_month = i64::from(start.year()) * MONTHS_PER_YEAR + i64::from(start.month0());
    let end_month = i64::from(end.year()) * MONTHS_PER_YEAR + i64::from(end.month0());
    let mut months = end_month - start_month;

    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }

    months
}

/// Whole calendar years elapsed from `start` to `end`
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i64 {
    whole_months_between(start, end) / MONTHS_PER_YEAR
}

/// Round to money precision, half away from zero
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the fee from its raw inputs
pub fn compute_fee(
    career_start_date: NaiveDate,
    birth_date: NaiveDate,
    commission_percent: Decimal,
    today: NaiveDate,
) -> Result<TransferFee, DomainError> {
    let experience_months = whole_months_between(career_start_date, today);
    if experience_months < 0 {
        return Err(DomainError::Validation(format!(
            "Career start date {} is in the future",
            career_start_date
        )));
    }

    let age_years = whole_years_between(birth_date, today);
    if age_years <= 0 {
        return Err(DomainError::InvalidPlayerAge(format!(
            "Player born on {} is {} full years old; a transfer fee needs an age of at least one year",
            birth_date, age_years
        )));
    }

    let base_amount = round_money(
        Decimal::from(experience_months) * BASE_AMOUNT_PER_MONTH / Decimal::from(age_years),
    );
    let commission = round_money(base_amount * commission_percent / dec!(100));

    Ok(TransferFee {
        experience_months,
        age_years,
        base_amount,
        commission,
        total: base_amount + commission,
    })
}

/// Compute the fee for selling `player` out of `selling_team` on `today`
pub fn calculate_transfer_fee(
    player: &Player,
    selling_team: &Team,
    today: NaiveDate,
) -> Result<TransferFee, DomainError> {
    compute_fee(
        player.career_start_date,
        player.birth_date,
        selling_team.transfer_commission_percent,
        today,
    )
}
