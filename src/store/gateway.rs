use std::{path::PathBuf, time::Duration};

use rusqlite::{Connection, types::ValueRef};

/// How long a call waits on SQLite's file lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const MUTATION_OK: &str = "done";

/// Executes classified commands against the persistent store.
///
/// Every call opens its own connection and drops it before returning, on
/// success and failure alike; nothing is pooled or reused across requests.
/// Storage failures of any kind are rendered into the textual `Error: ...`
/// payload instead of surfacing to the caller, so a session can keep
/// serving after a bad statement.
#[derive(Debug, Clone)]
pub struct StorageGateway {
    store: PathBuf,
}

impl StorageGateway {
    pub fn new(store: PathBuf) -> Self {
        Self { store }
    }

    /// Run a statement that returns no rows; commits on success.
    pub fn execute_mutation(&self, command: &str) -> String {
        match self.mutate(command) {
            Ok(()) => String::from(MUTATION_OK),
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Run a row-returning statement and serialize the result set.
    ///
    /// Fields are joined by a single space, rows by newline, with no header
    /// and no trailing newline. Zero rows serialize to an empty string.
    pub fn execute_query(&self, command: &str) -> String {
        match self.query(command) {
            Ok(rows) => rows,
            Err(e) => format!("Error: {e}"),
        }
    }

    fn open(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.store)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    fn mutate(&self, command: &str) -> Result<(), rusqlite::Error> {
        let conn = self.open()?;
        conn.execute(command, [])?;
        Ok(())
    }

    fn query(&self, command: &str) -> Result<String, rusqlite::Error> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(command)?;
        let columns = stmt.column_count();
        let mut rows = stmt.query([])?;

        let mut lines = Vec::new();
        while let Some(row) = rows.next()? {
            let mut fields = Vec::with_capacity(columns);
            for i in 0..columns {
                fields.push(render(row.get_ref(i)?));
            }
            lines.push(fields.join(" "));
        }

        Ok(lines.join("\n"))
    }
}

fn render(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::from("NULL"),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}
