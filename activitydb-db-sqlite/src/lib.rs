#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection, Connection as _};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    ops::Deref,
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// A pooled connection that holds a lock on its pool.
///
/// The kind of lock `G` decides whether the access is shared
/// with other readers or exclusive.
pub struct Db<G> {
    _locked_pool: G,
    conn: RefCell<PooledConnection>,
}

pub type DbReadOnly<'a> = Db<RwLockReadGuard<'a, ConnectionPool>>;
pub type DbReadWrite<'a> = Db<RwLockWriteGuard<'a, ConnectionPool>>;

impl<G> Db<G>
where
    G: Deref<Target = ConnectionPool>,
{
    fn try_new(locked_pool: G, access: &str) -> Fallible<Self> {
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for {access} access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    fn conn(&self) -> RefMut<'_, PooledConnection> {
        self.conn.borrow_mut()
    }
}

/// Pool of SQLite connections.
///
/// Readers may use the pool concurrently while a writer
/// locks it exclusively. Concurrent writers would otherwise
/// fail with SQLITE_LOCKED.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

/// Configure the database engine
///
/// The text encoding only takes effect for a newly created database.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    connection.batch_execute(
        r#"
PRAGMA journal_mode = WAL;        -- readers do not block the writer
PRAGMA synchronous = NORMAL;      -- safe in WAL mode
PRAGMA wal_checkpoint(TRUNCATE);  -- shrink the WAL file of the last run
PRAGMA automatic_index = 1;
PRAGMA encoding = 'UTF-8';
"#,
    )?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fail early if the database is inaccessible, r2d2 would
        // keep retrying and only log the errors.
        SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::new(url))?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        Db::try_new(self.pool.read(), "read-only")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        Db::try_new(self.pool.write(), "read/write")
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut conn = db.conn();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    for version in applied {
        log::debug!("Applied database migration {version}");
    }
    Ok(())
}
