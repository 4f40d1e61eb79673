//! Composition root: wires the SQLite store and the node adapters into a
//! [`BootstrapOrchestrator`].

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::particl::{ParticlMessaging, ParticlNode, RpcClient};
use crate::adapter::outbound::sqlite::{create_pool, run_migrations, SqliteStore};
use crate::application::bootstrap::{BootstrapOrchestrator, BootstrapPorts};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::bootstrap::MarketBootstrap;
use crate::port::outbound::messaging::SecureMessaging;
use crate::port::outbound::node::WalletNode;

/// Service graph of the bootstrap command, built once from [`Config`].
pub struct Services {
    pub bootstrap: Arc<dyn MarketBootstrap>,
}

/// Open the database at `database` and bring its schema up to date.
///
/// # Errors
/// Returns an error if the pool cannot be created or migrations fail.
pub fn open_store(database: &str) -> Result<Arc<SqliteStore>> {
    let pool = create_pool(database)?;
    run_migrations(&pool)?;
    info!(database, "database ready");
    Ok(Arc::new(SqliteStore::new(pool)))
}

/// Build an orchestrator over `store` and the given node and messaging ports.
#[must_use]
pub fn build_orchestrator(
    config: &Config,
    store: Arc<SqliteStore>,
    node: Arc<dyn WalletNode>,
    messaging: Arc<dyn SecureMessaging>,
) -> BootstrapOrchestrator {
    let ports = BootstrapPorts {
        settings: store.clone(),
        wallets: store.clone(),
        markets: store,
        node,
        messaging,
    };
    BootstrapOrchestrator::new(ports, &config.bootstrap)
}

/// Wire the full service graph against the configured database and node.
///
/// # Errors
/// Returns an error if the database cannot be opened or the node url is invalid.
pub fn build(config: &Config) -> Result<Services> {
    let store = open_store(&config.database)?;

    // Node and messaging share one connection pool; wallets are named per call.
    let rpc = Arc::new(RpcClient::new(&config.node)?);
    let node = Arc::new(ParticlNode::new(Arc::clone(&rpc)));
    let messaging = Arc::new(ParticlMessaging::new(rpc));

    let orchestrator = build_orchestrator(config, store, node, messaging);
    Ok(Services {
        bootstrap: Arc::new(orchestrator),
    })
}
