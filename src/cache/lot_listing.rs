//! Read-through cache for the lot listing.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::{
    cache::CacheStore,
    data::lot::LotRepository,
    error::AppError,
    model::lot::LotDto,
};

const CACHE_KEY: &str = "parkinglots";
const CACHE_TTL: Duration = Duration::from_secs(30);

/// Read-through cache of the serialized lot listing with a 30-second TTL.
///
/// Cache failures are never surfaced to the caller; a miss, a stale entry, an
/// undecodable entry, and a store error all fall through to the database.
#[derive(Clone)]
pub struct LotListingCache {
    store: Arc<dyn CacheStore>,
}

impl LotListingCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Returns the lot listing, from cache when fresh, else from the database.
    ///
    /// On a miss the listing is recomputed and the cache repopulated. Lot
    /// mutations do not invalidate the entry; staleness is bounded by the TTL.
    pub async fn get_or_rebuild(&self, db: &DatabaseConnection) -> Result<Vec<LotDto>, AppError> {
        match self.store.get(CACHE_KEY).await {
            Ok(Some(cached)) => {
                if let Ok(lots) = serde_json::from_str::<Vec<LotDto>>(&cached) {
                    return Ok(lots);
                }
                tracing::warn!("Discarding undecodable lot listing cache entry");
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("Lot listing cache read failed: {}", err);
            }
        }

        let lots: Vec<LotDto> = LotRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|lot| lot.into_dto())
            .collect();

        match serde_json::to_string(&lots) {
            Ok(serialized) => {
                if let Err(err) = self.store.set_ex(CACHE_KEY, &serialized, CACHE_TTL).await {
                    tracing::warn!("Lot listing cache write failed: {}", err);
                }
            }
            Err(err) => {
                tracing::warn!("Failed to serialize lot listing for cache: {}", err);
            }
        }

        Ok(lots)
    }
}
