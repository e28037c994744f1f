use std::path::Path;

use rusqlite::Connection;

/// Base tables created over a fresh store. `IF NOT EXISTS` keeps the
/// bootstrap safe to run on every startup.
const BOOTSTRAP: &str = "
    CREATE TABLE IF NOT EXISTS Users (
        username TEXT PRIMARY KEY,
        password TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS Login_History (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        login_time DATETIME DEFAULT CURRENT_TIMESTAMP,
        logout_time DATETIME,
        FOREIGN KEY(username) REFERENCES Users(username)
    );

    CREATE TABLE IF NOT EXISTS Uploaded_Files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        filename TEXT NOT NULL,
        upload_time DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY(username) REFERENCES Users(username)
    );
";

/// Create the base tables, committing before any client is accepted.
pub fn bootstrap(store: &Path) -> Result<(), rusqlite::Error> {
    let conn = Connection::open(store)?;
    conn.execute_batch(BOOTSTRAP)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn bootstrap_creates_tables() {
        let dir = TempDir::new("sqlgate").unwrap();
        let store = dir.path().join("test.db");

        bootstrap(&store).unwrap();

        let conn = Connection::open(&store).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table'
                 AND name IN ('Users', 'Login_History', 'Uploaded_Files')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let dir = TempDir::new("sqlgate").unwrap();
        let store = dir.path().join("test.db");

        bootstrap(&store).unwrap();
        bootstrap(&store).unwrap();
    }
}
