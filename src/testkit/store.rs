//! In-memory implementation of the store ports.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    Address, Market, MarketId, MarketRequest, ProfileId, Setting, Wallet, WalletCreateRequest,
    WalletId,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{MarketStore, SettingStore, WalletStore};

#[derive(Default)]
struct Tables {
    settings: Vec<Setting>,
    wallets: Vec<Wallet>,
    markets: Vec<Market>,
    market_writes: usize,
    wallet_creates: usize,
}

/// Settings, wallets and markets behind one mutex, with the same uniqueness
/// rules as the SQLite schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a setting without going through the port.
    pub fn with_setting(self, profile: ProfileId, key: &str, value: &str) -> Self {
        self.tables.lock().settings.push(Setting {
            profile_id: profile,
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn wallets(&self) -> Vec<Wallet> {
        self.tables.lock().wallets.clone()
    }

    pub fn markets(&self) -> Vec<Market> {
        self.tables.lock().markets.clone()
    }

    /// Number of market creates plus updates.
    pub fn market_writes(&self) -> usize {
        self.tables.lock().market_writes
    }

    pub fn wallet_creates(&self) -> usize {
        self.tables.lock().wallet_creates
    }

    /// True when nothing but seeded settings has been written.
    pub fn is_untouched(&self) -> bool {
        let tables = self.tables.lock();
        tables.wallet_creates == 0 && tables.market_writes == 0
    }
}

fn market_from(id: MarketId, request: &MarketRequest) -> Market {
    Market {
        id,
        wallet_id: request.wallet_id,
        profile_id: request.profile_id,
        name: request.name.clone(),
        market_type: request.market_type,
        receive_key: request.receive_key.clone(),
        receive_address: request.receive_address.clone(),
        publish_key: request.publish_key.clone(),
        publish_address: request.publish_address.clone(),
    }
}

#[async_trait]
impl SettingStore for MemoryStore {
    async fn find_all_by_profile(&self, profile: ProfileId) -> Result<Vec<Setting>> {
        Ok(self
            .tables
            .lock()
            .settings
            .iter()
            .filter(|s| s.profile_id == profile)
            .cloned()
            .collect())
    }

    async fn upsert(&self, profile: ProfileId, key: &str, value: &str) -> Result<Setting> {
        let mut tables = self.tables.lock();
        let setting = Setting {
            profile_id: profile,
            key: key.to_string(),
            value: value.to_string(),
        };
        match tables
            .settings
            .iter()
            .position(|s| s.profile_id == profile && s.key == key)
        {
            Some(index) => tables.settings[index] = setting.clone(),
            None => tables.settings.push(setting.clone()),
        }
        Ok(setting)
    }
}

#[async_trait]
impl WalletStore for MemoryStore {
    async fn find_one(&self, id: WalletId) -> Result<Option<Wallet>> {
        Ok(self
            .tables
            .lock()
            .wallets
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn find_by_name(&self, profile: ProfileId, name: &str) -> Result<Option<Wallet>> {
        Ok(self
            .tables
            .lock()
            .wallets
            .iter()
            .find(|w| w.profile_id == profile && w.name == name)
            .cloned())
    }

    async fn create(&self, request: &WalletCreateRequest) -> Result<Wallet> {
        let mut tables = self.tables.lock();
        if tables
            .wallets
            .iter()
            .any(|w| w.profile_id == request.profile_id && w.name == request.name)
        {
            return Err(Error::Database(
                "UNIQUE constraint failed: wallets.profile_id, wallets.name".into(),
            ));
        }
        let wallet = Wallet {
            id: WalletId::new(tables.wallets.len() as i32 + 1),
            profile_id: request.profile_id,
            name: request.name.clone(),
        };
        tables.wallets.push(wallet.clone());
        tables.wallet_creates += 1;
        Ok(wallet)
    }
}

#[async_trait]
impl MarketStore for MemoryStore {
    async fn find_one(&self, id: MarketId) -> Result<Option<Market>> {
        Ok(self
            .tables
            .lock()
            .markets
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_by_profile_and_address(
        &self,
        profile: ProfileId,
        receive_address: &Address,
    ) -> Result<Option<Market>> {
        Ok(self
            .tables
            .lock()
            .markets
            .iter()
            .find(|m| m.profile_id == profile && &m.receive_address == receive_address)
            .cloned())
    }

    async fn create(&self, request: &MarketRequest) -> Result<Market> {
        let mut tables = self.tables.lock();
        if tables.markets.iter().any(|m| {
            m.profile_id == request.profile_id && m.receive_address == request.receive_address
        }) {
            return Err(Error::Database(
                "UNIQUE constraint failed: markets.profile_id, markets.receive_address".into(),
            ));
        }
        let market = market_from(MarketId::new(tables.markets.len() as i32 + 1), request);
        tables.markets.push(market.clone());
        tables.market_writes += 1;
        Ok(market)
    }

    async fn update(&self, id: MarketId, request: &MarketRequest) -> Result<Market> {
        let mut tables = self.tables.lock();
        let updated = market_from(id, request);
        let slot = tables
            .markets
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::Database(format!("market {id} not found")))?;
        *slot = updated.clone();
        tables.market_writes += 1;
        Ok(updated)
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Market>> {
        Ok(self
            .tables
            .lock()
            .markets
            .iter()
            .filter(|m| m.profile_id == profile)
            .cloned()
            .collect())
    }
}
