//! Create-or-update of market records.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Market, MarketId, MarketRequest, Provisioned};
use crate::error::Result;
use crate::port::outbound::store::MarketStore;

/// Upserts markets keyed by `(profile, receive_address)`.
pub struct MarketRecordStore {
    markets: Arc<dyn MarketStore>,
}

impl MarketRecordStore {
    pub fn new(markets: Arc<dyn MarketStore>) -> Self {
        Self { markets }
    }

    /// Update the market with the request's profile and receive address, or
    /// create it when there is none.
    ///
    /// An existing row is always overwritten with the full request, even
    /// when nothing changed.
    pub async fn upsert(&self, request: &MarketRequest) -> Result<Provisioned<Market>> {
        let found = self
            .markets
            .find_by_profile_and_address(request.profile_id, &request.receive_address)
            .await?;

        match found {
            Some(existing) => {
                debug!(market = %existing.id, address = %request.receive_address, "found market, updating");
                let updated = self.markets.update(existing.id, request).await?;
                Ok(Provisioned::AlreadyExisted(updated))
            }
            None => {
                debug!(address = %request.receive_address, "did not find market, creating");
                let created = self.markets.create(request).await?;
                Ok(Provisioned::Created(created))
            }
        }
    }

    pub async fn find_one(&self, id: MarketId) -> Result<Option<Market>> {
        self.markets.find_one(id).await
    }
}
