//! Persisted market records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::{Address, MarketId, ProfileId, WalletId};
use super::key::PrivateKey;

/// Kind of market a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketType {
    Marketplace,
    Storefront,
    StorefrontAdmin,
}

impl MarketType {
    /// Stored tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marketplace => "MARKETPLACE",
            Self::Storefront => "STOREFRONT",
            Self::StorefrontAdmin => "STOREFRONT_ADMIN",
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MARKETPLACE" => Ok(Self::Marketplace),
            "STOREFRONT" => Ok(Self::Storefront),
            "STOREFRONT_ADMIN" => Ok(Self::StorefrontAdmin),
            other => Err(format!("unknown market type: {other}")),
        }
    }
}

/// A market record. Unique by `(profile_id, receive_address)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    pub id: MarketId,
    pub wallet_id: WalletId,
    pub profile_id: ProfileId,
    pub name: String,
    pub market_type: MarketType,
    pub receive_key: PrivateKey,
    pub receive_address: Address,
    pub publish_key: Option<PrivateKey>,
    pub publish_address: Option<Address>,
}

/// Desired state of a market, used for both create and update.
///
/// Updates overwrite every field, whether or not it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRequest {
    pub wallet_id: WalletId,
    pub profile_id: ProfileId,
    pub name: String,
    pub market_type: MarketType,
    pub receive_key: PrivateKey,
    pub receive_address: Address,
    pub publish_key: Option<PrivateKey>,
    pub publish_address: Option<Address>,
}

/// A market request that has not been bound to a wallet row yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDraft {
    pub name: String,
    pub market_type: MarketType,
    pub receive_key: PrivateKey,
    pub receive_address: Address,
    pub publish_key: Option<PrivateKey>,
    pub publish_address: Option<Address>,
}

impl MarketDraft {
    /// Draft for a marketplace that receives and publishes with one key.
    pub fn marketplace(name: impl Into<String>, key: PrivateKey, address: Address) -> Self {
        Self {
            name: name.into(),
            market_type: MarketType::Marketplace,
            receive_key: key.clone(),
            receive_address: address.clone(),
            publish_key: Some(key),
            publish_address: Some(address),
        }
    }

    /// Bind the draft to a profile and wallet.
    #[must_use]
    pub fn into_request(self, profile_id: ProfileId, wallet_id: WalletId) -> MarketRequest {
        MarketRequest {
            wallet_id,
            profile_id,
            name: self.name,
            market_type: self.market_type,
            receive_key: self.receive_key,
            receive_address: self.receive_address,
            publish_key: self.publish_key,
            publish_address: self.publish_address,
        }
    }
}

impl Market {
    /// Publish key and address, when both are set and the key differs from
    /// the receive key.
    ///
    /// Keys are compared by value; an equal key behind a different address
    /// still yields `None`.
    #[must_use]
    pub fn distinct_publish_pair(&self) -> Option<(&PrivateKey, &Address)> {
        match (&self.publish_key, &self.publish_address) {
            (Some(key), Some(address)) if *key != self.receive_key => Some((key, address)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(publish_key: Option<&str>, publish_address: Option<&str>) -> Market {
        Market {
            id: MarketId::new(1),
            wallet_id: WalletId::new(1),
            profile_id: ProfileId::new(1),
            name: "Alice Market".into(),
            market_type: MarketType::Marketplace,
            receive_key: PrivateKey::from("K1"),
            receive_address: Address::from("A1"),
            publish_key: publish_key.map(PrivateKey::from),
            publish_address: publish_address.map(Address::from),
        }
    }

    #[test]
    fn market_type_round_trips_through_tag() {
        for kind in [
            MarketType::Marketplace,
            MarketType::Storefront,
            MarketType::StorefrontAdmin,
        ] {
            assert_eq!(kind.as_str().parse::<MarketType>().unwrap(), kind);
        }
        assert!("BAZAAR".parse::<MarketType>().is_err());
    }

    #[test]
    fn publish_pair_skipped_when_key_equals_receive_key() {
        assert!(market(Some("K1"), Some("A1")).distinct_publish_pair().is_none());
        assert!(market(Some("K1"), Some("A2")).distinct_publish_pair().is_none());
    }

    #[test]
    fn publish_pair_requires_key_and_address() {
        assert!(market(None, Some("A2")).distinct_publish_pair().is_none());
        assert!(market(Some("K2"), None).distinct_publish_pair().is_none());
    }

    #[test]
    fn publish_pair_returned_for_distinct_key() {
        let m = market(Some("K2"), Some("A2"));
        let (key, address) = m.distinct_publish_pair().unwrap();
        assert_eq!(key, &PrivateKey::from("K2"));
        assert_eq!(address.as_str(), "A2");
    }

    #[test]
    fn marketplace_draft_publishes_with_receive_pair() {
        let req = MarketDraft::marketplace("Alice Market", PrivateKey::from("K1"), Address::from("A1"))
            .into_request(ProfileId::new(1), WalletId::new(2));
        assert_eq!(req.wallet_id, WalletId::new(2));
        assert_eq!(req.market_type, MarketType::Marketplace);
        assert_eq!(req.publish_key, Some(PrivateKey::from("K1")));
        assert_eq!(req.publish_address, Some(Address::from("A1")));
    }
}
