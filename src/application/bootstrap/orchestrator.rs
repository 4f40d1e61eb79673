//! Reconciliation pass sequencing.
//!
//! ```text
//! ReadingConfig ─▶ ResolvingWallet ─▶ UpsertingMarket ─▶ EnsuringNodeWallet
//!        │                                                     │
//!        ▼ (ConfigurationMissing)                              ▼
//!      fail                         ImportingReceiveKey ─▶ ImportingPublishKey?
//!                                                              │
//!                    Done ◀─ ActivatingMessagingWallet ◀─ RegisteringAddresses
//! ```
//!
//! There is no rollback. A failed pass leaves every completed step in
//! place and the next pass converges from there.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use super::config::BootstrapConfig;
use super::gate::ProfileGate;
use super::key::KeyImporter;
use super::messaging::MessagingRegistrar;
use super::record::MarketRecordStore;
use super::settings::SettingsResolver;
use super::wallet::WalletProvisioner;
use crate::domain::{Address, KeyBinding, MarketDraft, PrivateKey, ProfileId};
use crate::error::{BootstrapError, Result};
use crate::port::inbound::bootstrap::{BootstrapReport, MarketBootstrap};
use crate::port::outbound::messaging::SecureMessaging;
use crate::port::outbound::node::WalletNode;
use crate::port::outbound::store::{MarketStore, SettingStore, WalletStore};

/// Step of a reconciliation pass, used to label failures in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStage {
    ReadingConfig,
    ResolvingWallet,
    UpsertingMarket,
    EnsuringNodeWallet,
    ImportingReceiveKey,
    ImportingPublishKey,
    RegisteringAddresses,
    ActivatingMessagingWallet,
    Done,
}

impl BootstrapStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadingConfig => "reading_config",
            Self::ResolvingWallet => "resolving_wallet",
            Self::UpsertingMarket => "upserting_market",
            Self::EnsuringNodeWallet => "ensuring_node_wallet",
            Self::ImportingReceiveKey => "importing_receive_key",
            Self::ImportingPublishKey => "importing_publish_key",
            Self::RegisteringAddresses => "registering_addresses",
            Self::ActivatingMessagingWallet => "activating_messaging_wallet",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External systems a pass depends on.
#[derive(Clone)]
pub struct BootstrapPorts {
    pub settings: Arc<dyn SettingStore>,
    pub wallets: Arc<dyn WalletStore>,
    pub markets: Arc<dyn MarketStore>,
    pub node: Arc<dyn WalletNode>,
    pub messaging: Arc<dyn SecureMessaging>,
}

/// Sequences settings, wallet, market, key and messaging steps into one
/// reconciliation pass per profile.
pub struct BootstrapOrchestrator {
    settings: SettingsResolver,
    wallets: WalletProvisioner,
    records: MarketRecordStore,
    keys: KeyImporter,
    registrar: MessagingRegistrar,
    gate: ProfileGate,
    wallet_name: String,
}

/// Log a failed step with its stage and hand the error back unchanged.
fn at_stage<T>(stage: BootstrapStage, profile: ProfileId, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        error!(%profile, %stage, error = %err, "market bootstrap failed");
    }
    result
}

impl BootstrapOrchestrator {
    pub fn new(ports: BootstrapPorts, config: &BootstrapConfig) -> Self {
        Self {
            settings: SettingsResolver::new(ports.settings),
            wallets: WalletProvisioner::new(ports.wallets, ports.node),
            records: MarketRecordStore::new(ports.markets),
            keys: KeyImporter::new(Arc::clone(&ports.messaging), config.on_key_rejected),
            registrar: MessagingRegistrar::new(ports.messaging),
            gate: ProfileGate::new(),
            wallet_name: config.wallet_name.clone(),
        }
    }

    /// Import one key; a rejected import is remembered instead of resolved.
    #[allow(clippy::too_many_arguments)]
    async fn import_key(
        &self,
        stage: BootstrapStage,
        profile: ProfileId,
        wallet: &str,
        key: &PrivateKey,
        address: &Address,
        resolved: &mut Vec<KeyBinding>,
        rejected: &mut Vec<Address>,
    ) -> Result<()> {
        let imported = self.keys.import_and_resolve(wallet, key, address).await;
        match at_stage(stage, profile, imported)? {
            Some(public_key) => resolved.push(KeyBinding {
                address: address.clone(),
                public_key,
            }),
            None => rejected.push(address.clone()),
        }
        Ok(())
    }

    /// One pass without taking the gate. Callers hold it.
    async fn run_pass(
        &self,
        profile: ProfileId,
        wallet_name: &str,
        draft: MarketDraft,
    ) -> Result<BootstrapReport> {
        use BootstrapStage::{
            ActivatingMessagingWallet, Done, EnsuringNodeWallet, ImportingPublishKey,
            ImportingReceiveKey, RegisteringAddresses, ResolvingWallet, UpsertingMarket,
        };

        let wallet = at_stage(
            ResolvingWallet,
            profile,
            self.wallets.resolve_local(profile, wallet_name).await,
        )?;

        let request = draft.into_request(profile, wallet.get().id);
        let upserted = at_stage(UpsertingMarket, profile, self.records.upsert(&request).await)?;
        let market_outcome = upserted.clone().map(|_| ());
        let market = upserted.into_inner();

        let node_wallet = at_stage(
            EnsuringNodeWallet,
            profile,
            self.wallets.ensure_on_node(wallet_name).await,
        )?;

        let mut resolved = Vec::with_capacity(2);
        let mut rejected = Vec::new();
        self.import_key(
            ImportingReceiveKey,
            profile,
            wallet_name,
            &market.receive_key,
            &market.receive_address,
            &mut resolved,
            &mut rejected,
        )
        .await?;
        if let Some((key, address)) = market.distinct_publish_pair() {
            self.import_key(
                ImportingPublishKey,
                profile,
                wallet_name,
                key,
                address,
                &mut resolved,
                &mut rejected,
            )
            .await?;
        }

        for binding in &resolved {
            at_stage(
                RegisteringAddresses,
                profile,
                self.registrar.register(wallet_name, binding).await,
            )?;
        }

        at_stage(
            ActivatingMessagingWallet,
            profile,
            self.registrar.set_active_wallet(wallet_name).await,
        )?;

        let found = self.records.find_one(market.id).await.and_then(|found| {
            found.ok_or_else(|| BootstrapError::MarketVanished(market.id.get()).into())
        });
        let finalized = at_stage(Done, profile, found)?;

        info!(
            %profile,
            market = %finalized.id,
            wallet = wallet_name,
            market_outcome = market_outcome.label(),
            node_wallet = node_wallet.as_str(),
            registered = resolved.len(),
            rejected = rejected.len(),
            "market bootstrap complete"
        );

        Ok(BootstrapReport {
            market: finalized,
            market_outcome,
            wallet,
            node_wallet,
            registered: resolved,
            rejected,
        })
    }
}

#[async_trait]
impl MarketBootstrap for BootstrapOrchestrator {
    #[instrument(skip(self))]
    async fn seed_default_market(&self, profile: ProfileId) -> Result<BootstrapReport> {
        let _guard = self.gate.acquire(profile).await;

        let settings = at_stage(
            BootstrapStage::ReadingConfig,
            profile,
            self.settings.resolve(profile).await,
        )?;
        let draft = MarketDraft::marketplace(settings.name, settings.private_key, settings.address);
        self.run_pass(profile, &self.wallet_name, draft).await
    }

    #[instrument(skip(self, draft), fields(address = %draft.receive_address))]
    async fn reconcile_market(
        &self,
        profile: ProfileId,
        wallet_name: &str,
        draft: MarketDraft,
    ) -> Result<BootstrapReport> {
        let _guard = self.gate.acquire(profile).await;
        self.run_pass(profile, wallet_name, draft).await
    }
}
