//! Smoke tests against a running Particl node.
//!
//! Build with `--features integration-tests` and set `MARKET_SEED_LIVE=1`,
//! `MARKET_SEED_NODE_URL` and, if the node needs auth,
//! `MARKET_SEED_RPC_USER` / `MARKET_SEED_RPC_PASSWORD`.

#![cfg(feature = "integration-tests")]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use market_seed::adapter::outbound::particl::{ParticlMessaging, ParticlNode, RpcClient};
use market_seed::infrastructure::config::node::NodeConfig;
use market_seed::port::outbound::messaging::SecureMessaging;
use market_seed::port::outbound::node::WalletNode;
use tokio::time::timeout;

fn live_enabled() -> bool {
    matches!(env::var("MARKET_SEED_LIVE").ok().as_deref(), Some("1"))
}

fn live_client() -> Arc<RpcClient> {
    let config = NodeConfig {
        url: env::var("MARKET_SEED_NODE_URL").unwrap_or_else(|_| "http://127.0.0.1:51735".into()),
        user: env::var("MARKET_SEED_RPC_USER").ok(),
        password: env::var("MARKET_SEED_RPC_PASSWORD").ok(),
        ..NodeConfig::default()
    };
    Arc::new(RpcClient::new(&config).expect("valid node config"))
}

const SMOKE_WALLET: &str = "market-seed-smoke.dat";

async fn ensure_smoke_wallet(node: &ParticlNode) {
    if !node.wallet_exists(SMOKE_WALLET).await.expect("listwalletdir") {
        node.create_and_load_wallet(SMOKE_WALLET)
            .await
            .expect("createwallet");
    }
    if !node.wallet_loaded(SMOKE_WALLET).await.expect("listwallets") {
        node.load_wallet(SMOKE_WALLET).await.expect("loadwallet");
    }
}

#[tokio::test]
#[ignore = "requires MARKET_SEED_LIVE=1 and a running node"]
async fn live_wallet_is_ready_after_two_ensures() {
    if !live_enabled() {
        eprintln!("Skipping live test (set MARKET_SEED_LIVE=1 to enable)");
        return;
    }

    let node = ParticlNode::new(live_client());
    ensure_smoke_wallet(&node).await;
    ensure_smoke_wallet(&node).await;

    assert!(node.wallet_exists(SMOKE_WALLET).await.unwrap());
    assert!(node.wallet_loaded(SMOKE_WALLET).await.unwrap());
    node.set_active_wallet(SMOKE_WALLET).await.expect("getwalletinfo");
}

#[tokio::test]
#[ignore = "requires MARKET_SEED_LIVE=1 and a running node"]
async fn live_lists_smsg_keys() {
    if !live_enabled() {
        eprintln!("Skipping live test (set MARKET_SEED_LIVE=1 to enable)");
        return;
    }

    let client = live_client();
    ensure_smoke_wallet(&ParticlNode::new(Arc::clone(&client))).await;
    let messaging = ParticlMessaging::new(client);

    let keys = timeout(Duration::from_secs(20), messaging.list_local_keys(SMOKE_WALLET))
        .await
        .expect("timed out listing smsg keys")
        .expect("smsglocalkeys");

    for binding in keys {
        assert!(!binding.address.as_str().is_empty());
    }
}
