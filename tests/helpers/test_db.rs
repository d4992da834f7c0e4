use deskattrs::infrastructure::persistence::Database;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed SQLite database with every migration applied. The file is
/// removed when the value is dropped.
pub struct TestDatabase {
    db: Database,
    path: PathBuf,
}

impl TestDatabase {
    pub fn db(&self) -> Database {
        self.db.clone()
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn setup_test_db() -> TestDatabase {
    let test_db = setup_unmigrated_test_db().await;

    test_db
        .db
        .run_migrations()
        .await
        .expect("Failed to run migrations");

    test_db
}

/// Connected database with an empty schema, for stepping through
/// migrations by hand.
pub async fn setup_unmigrated_test_db() -> TestDatabase {
    // Unique file per test so tests can run in parallel
    let path = std::env::temp_dir().join(format!("deskattrs_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    TestDatabase { db, path }
}
