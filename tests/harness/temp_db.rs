use std::path::PathBuf;
use std::sync::Arc;

use diesel::prelude::*;
use market_seed::adapter::outbound::sqlite::{create_pool, run_migrations, DbPool, SqliteStore};
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The backing directory is removed when the value drops.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("market-seed-{name}.db"));

        let pool = create_pool(&path.to_string_lossy()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        // WAL mode improves concurrent writer behavior in tests.
        {
            let mut conn = pool.get().expect("get sqlite connection");
            diesel::sql_query("PRAGMA journal_mode=WAL")
                .execute(&mut conn)
                .expect("enable WAL mode");
        }

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> Arc<SqliteStore> {
        Arc::new(SqliteStore::new(self.pool.clone()))
    }

    /// Row count of `table`, read straight from SQLite.
    pub fn count(&self, table: &str) -> i64 {
        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            n: i64,
        }

        let mut conn = self.pool.get().expect("get sqlite connection");
        diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {table}"))
            .get_result::<Count>(&mut conn)
            .expect("count rows")
            .n
    }
}
