//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{markets, settings, wallets};

/// Database row for a setting (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingRow {
    pub id: i32,
    pub profile_id: i32,
    pub key: String,
    pub value: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for a setting (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = settings)]
pub struct NewSettingRow<'a> {
    pub profile_id: i32,
    pub key: &'a str,
    pub value: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

/// Database row for a wallet (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = wallets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WalletRow {
    pub id: i32,
    pub profile_id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for a wallet (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = wallets)]
pub struct NewWalletRow<'a> {
    pub profile_id: i32,
    pub name: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

/// Database row for a market (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = markets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketRow {
    pub id: i32,
    pub profile_id: i32,
    pub wallet_id: i32,
    pub name: String,
    pub market_type: String,
    pub receive_key: String,
    pub receive_address: String,
    pub publish_key: Option<String>,
    pub publish_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Market columns written on both insert and update.
///
/// `None` publish fields are written as `NULL` on update.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = markets)]
#[diesel(treat_none_as_null = true)]
pub struct MarketChanges<'a> {
    pub profile_id: i32,
    pub wallet_id: i32,
    pub name: &'a str,
    pub market_type: &'a str,
    pub receive_key: &'a str,
    pub receive_address: &'a str,
    pub publish_key: Option<&'a str>,
    pub publish_address: Option<&'a str>,
    pub updated_at: &'a str,
}

/// Database row for a market (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = markets)]
pub struct NewMarketRow<'a> {
    #[diesel(embed)]
    pub changes: MarketChanges<'a>,
    pub created_at: &'a str,
}
