use customer_grid::db::{DbPool, establish_connection_pool};
use customer_grid::domain::customer::NewCustomer;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite database with migrations applied; the backing files are
/// removed when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        drop(conn);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Fifty deterministic customers; exactly three phone numbers (ids 7, 21 and
/// 42) contain the substring "555", and no other field does.
#[allow(dead_code)]
pub fn seed_customers() -> Vec<NewCustomer> {
    (1..=50)
        .map(|i| {
            let phone = if matches!(i, 7 | 21 | 42) {
                format!("(030) 555-{i:04}")
            } else {
                format!("(030) 2000-{i:04}")
            };
            NewCustomer::new(
                format!("Customer {i:02}"),
                phone,
                format!("{i} Main Street"),
                format!("{:05}", 10000 + i),
            )
        })
        .collect()
}
