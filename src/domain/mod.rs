//! Domain types for market bootstrap.

pub mod id;
pub mod key;
pub mod market;
pub mod outcome;
pub mod setting;
pub mod wallet;

pub use id::{Address, MarketId, ProfileId, WalletId};
pub use key::{KeyBinding, PrivateKey, PublicKey};
pub use market::{Market, MarketDraft, MarketRequest, MarketType};
pub use outcome::{NodeWalletState, Provisioned, WalletCreation, WalletLoad};
pub use setting::{DefaultMarketSettings, Setting};
pub use wallet::{Wallet, WalletCreateRequest, WalletInfo, DEFAULT_MARKET_WALLET};
