//! SQLite store for settings, wallets and markets.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    MarketChanges, MarketRow, NewMarketRow, NewSettingRow, NewWalletRow, SettingRow, WalletRow,
};
use crate::adapter::outbound::sqlite::database::schema::{markets, settings, wallets};
use crate::domain::{
    Address, Market, MarketId, MarketRequest, PrivateKey, ProfileId, Setting, Wallet,
    WalletCreateRequest, WalletId,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{MarketStore, SettingStore, WalletStore};

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed implementation of every store port.
///
/// Uniqueness of `(profile, key)`, `(profile, name)` and
/// `(profile, receive_address)` is enforced by the schema.
#[derive(Clone)]
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn now() -> String {
        Utc::now().to_rfc3339()
    }

    fn setting_from_row(row: SettingRow) -> Setting {
        Setting {
            profile_id: ProfileId::new(row.profile_id),
            key: row.key,
            value: row.value,
        }
    }

    fn wallet_from_row(row: WalletRow) -> Wallet {
        Wallet {
            id: WalletId::new(row.id),
            profile_id: ProfileId::new(row.profile_id),
            name: row.name,
        }
    }

    fn market_from_row(row: MarketRow) -> Result<Market> {
        let market_type = row.market_type.parse().map_err(Error::Parse)?;
        Ok(Market {
            id: MarketId::new(row.id),
            wallet_id: WalletId::new(row.wallet_id),
            profile_id: ProfileId::new(row.profile_id),
            name: row.name,
            market_type,
            receive_key: PrivateKey::from(row.receive_key),
            receive_address: Address::from(row.receive_address),
            publish_key: row.publish_key.map(PrivateKey::from),
            publish_address: row.publish_address.map(Address::from),
        })
    }

    fn market_changes<'a>(request: &'a MarketRequest, now: &'a str) -> MarketChanges<'a> {
        MarketChanges {
            profile_id: request.profile_id.get(),
            wallet_id: request.wallet_id.get(),
            name: &request.name,
            market_type: request.market_type.as_str(),
            receive_key: request.receive_key.expose(),
            receive_address: request.receive_address.as_str(),
            publish_key: request.publish_key.as_ref().map(PrivateKey::expose),
            publish_address: request.publish_address.as_ref().map(Address::as_str),
            updated_at: now,
        }
    }

    fn load_market(conn: &mut Conn, id: MarketId) -> Result<Option<Market>> {
        let row: Option<MarketRow> = markets::table
            .find(id.get())
            .select(MarketRow::as_select())
            .first(conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        row.map(Self::market_from_row).transpose()
    }
}

#[async_trait]
impl SettingStore for SqliteStore {
    async fn find_all_by_profile(&self, profile: ProfileId) -> Result<Vec<Setting>> {
        let mut conn = self.conn()?;
        let rows: Vec<SettingRow> = settings::table
            .filter(settings::profile_id.eq(profile.get()))
            .order(settings::key.asc())
            .select(SettingRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.into_iter().map(Self::setting_from_row).collect())
    }

    async fn upsert(&self, profile: ProfileId, key: &str, value: &str) -> Result<Setting> {
        let mut conn = self.conn()?;
        let now = Self::now();
        let row = NewSettingRow {
            profile_id: profile.get(),
            key,
            value,
            created_at: &now,
            updated_at: &now,
        };

        diesel::insert_into(settings::table)
            .values(&row)
            .on_conflict((settings::profile_id, settings::key))
            .do_update()
            .set((settings::value.eq(value), settings::updated_at.eq(&now)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Setting {
            profile_id: profile,
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[async_trait]
impl WalletStore for SqliteStore {
    async fn find_one(&self, id: WalletId) -> Result<Option<Wallet>> {
        let mut conn = self.conn()?;
        let row: Option<WalletRow> = wallets::table
            .find(id.get())
            .select(WalletRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(Self::wallet_from_row))
    }

    async fn find_by_name(&self, profile: ProfileId, name: &str) -> Result<Option<Wallet>> {
        let mut conn = self.conn()?;
        let row: Option<WalletRow> = wallets::table
            .filter(wallets::profile_id.eq(profile.get()))
            .filter(wallets::name.eq(name))
            .select(WalletRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(Self::wallet_from_row))
    }

    async fn create(&self, request: &WalletCreateRequest) -> Result<Wallet> {
        let mut conn = self.conn()?;
        let now = Self::now();
        let row = NewWalletRow {
            profile_id: request.profile_id.get(),
            name: &request.name,
            created_at: &now,
            updated_at: &now,
        };

        let created: WalletRow = conn
            .transaction(|conn| {
                diesel::insert_into(wallets::table)
                    .values(&row)
                    .execute(conn)?;
                wallets::table
                    .filter(wallets::profile_id.eq(row.profile_id))
                    .filter(wallets::name.eq(row.name))
                    .select(WalletRow::as_select())
                    .first(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Self::wallet_from_row(created))
    }
}

#[async_trait]
impl MarketStore for SqliteStore {
    async fn find_one(&self, id: MarketId) -> Result<Option<Market>> {
        let mut conn = self.conn()?;
        Self::load_market(&mut conn, id)
    }

    async fn find_by_profile_and_address(
        &self,
        profile: ProfileId,
        receive_address: &Address,
    ) -> Result<Option<Market>> {
        let mut conn = self.conn()?;
        let row: Option<MarketRow> = markets::table
            .filter(markets::profile_id.eq(profile.get()))
            .filter(markets::receive_address.eq(receive_address.as_str()))
            .select(MarketRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        row.map(Self::market_from_row).transpose()
    }

    async fn create(&self, request: &MarketRequest) -> Result<Market> {
        let mut conn = self.conn()?;
        let now = Self::now();
        let row = NewMarketRow {
            changes: Self::market_changes(request, &now),
            created_at: &now,
        };

        let created: MarketRow = conn
            .transaction(|conn| {
                diesel::insert_into(markets::table)
                    .values(&row)
                    .execute(conn)?;
                markets::table
                    .filter(markets::profile_id.eq(row.changes.profile_id))
                    .filter(markets::receive_address.eq(row.changes.receive_address))
                    .select(MarketRow::as_select())
                    .first(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Self::market_from_row(created)
    }

    async fn update(&self, id: MarketId, request: &MarketRequest) -> Result<Market> {
        let mut conn = self.conn()?;
        let now = Self::now();
        let changes = Self::market_changes(request, &now);

        let updated = diesel::update(markets::table.find(id.get()))
            .set(&changes)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        if updated == 0 {
            return Err(Error::Database(format!("market {id} not found")));
        }

        Self::load_market(&mut conn, id)?
            .ok_or_else(|| Error::Database(format!("market {id} not found")))
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Market>> {
        let mut conn = self.conn()?;
        let rows: Vec<MarketRow> = markets::table
            .filter(markets::profile_id.eq(profile.get()))
            .order(markets::id.asc())
            .select(MarketRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.into_iter().map(Self::market_from_row).collect()
    }
}
