#[macro_use]
extern crate log;

use activitydb_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, cfg: Cfg, version: &'static str) {
    web::run(connections.into(), cfg, version).await;
}
