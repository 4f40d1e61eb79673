//! Particl node adapters.
//!
//! One [`rpc::RpcClient`] carries both the wallet lifecycle calls of
//! [`node::ParticlNode`] and the secure-messaging calls of
//! [`smsg::ParticlMessaging`].

pub mod node;
pub mod rpc;
pub mod smsg;

pub use node::ParticlNode;
pub use rpc::{RpcClient, RpcError};
pub use smsg::ParticlMessaging;
