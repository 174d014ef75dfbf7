//! The only owner of SQL. Handlers and the sweep go through [`Store`];
//! business rules stay out of here.

mod messages;
mod participants;

use sqlx::SqlitePool;

/// `name` being the primary key is what makes two concurrent registrations
/// of the same name impossible; registration inserts blindly and reports
/// the constraint violation instead of checking first.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS participants (
    name TEXT PRIMARY KEY,
    last_status INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS messages (
    id TEXT PRIMARY KEY,
    sender TEXT NOT NULL,
    recipient TEXT NOT NULL,
    text TEXT NOT NULL,
    kind TEXT NOT NULL,
    time TEXT NOT NULL
);
";

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}
