#![allow(dead_code)]

pub mod rpc_server;
pub mod temp_db;
