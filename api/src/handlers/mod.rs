//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Handlers are generic over the
//! [`Backend`](crate::Backend) so the router can run on any storage adapter.

pub mod players;
pub mod teams;

use serde::Deserialize;

use crate::config::Config;
use crate::domain::entities::PageRequest;
use crate::error::AppError;

pub use players::{
    add_player_to_team, create_player, delete_player, get_player, list_players, transfer_player,
    update_player,
};
pub use teams::{create_team, delete_team, get_team, list_teams, update_team};

/// Paging parameters shared by list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageQuery {
    /// Resolve defaults and check bounds against the configured page sizes
    pub fn page_request(&self, config: &Config) -> Result<PageRequest, AppError> {
        let size = self.size.unwrap_or(config.default_page_size);
        if size == 0 || size > config.max_page_size {
            return Err(AppError::BadRequest(format!(
                "size must be between 1 and {}",
                config.max_page_size
            )));
        }

        // The offset is bound as a signed 64-bit SQL parameter
        let page = self.page.unwrap_or(0);
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(PageRequest::new(page, size)),
            _ => Err(AppError::BadRequest(format!(
                "page {} is out of range for size {}",
                page, size
            ))),
        }
    }
}
