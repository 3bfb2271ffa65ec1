//! CRM table definitions and shape verification.
//!
//! [`ensure_schema`] creates any missing table and then checks that every
//! table, new or pre-existing, has the shape the repositories and the SQLite
//! tool connector rely on. A store created by an older or foreign tool with
//! a diverging layout is rejected with a [`SchemaError`] instead of being
//! written into.

use sqlx::FromRow;

use crate::DbPool;

/// Expected column of a CRM table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Declared SQLite type, compared case-insensitively.
    pub decl_type: &'static str,
    pub primary_key: bool,
    /// Backed by a single-column unique index.
    pub unique: bool,
}

/// Expected `FOREIGN KEY(column) REFERENCES table(to)` clause.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKeySpec {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub create_sql: &'static str,
    pub indexes: &'static [&'static str],
    pub columns: &'static [ColumnSpec],
    pub foreign_keys: &'static [ForeignKeySpec],
}

const fn column(name: &'static str, decl_type: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        decl_type,
        primary_key: false,
        unique: false,
    }
}

const fn unique_column(name: &'static str, decl_type: &'static str) -> ColumnSpec {
    ColumnSpec {
        unique: true,
        ..column(name, decl_type)
    }
}

const ID: ColumnSpec = ColumnSpec {
    name: "id",
    decl_type: "INTEGER",
    primary_key: true,
    unique: false,
};

pub const PROSPECTS: TableSpec = TableSpec {
    name: "prospects",
    create_sql: "CREATE TABLE IF NOT EXISTS prospects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        email TEXT,
        last_contact TEXT,
        status TEXT,
        last_activity TEXT
    )",
    indexes: &[],
    columns: &[
        ID,
        unique_column("name", "TEXT"),
        column("email", "TEXT"),
        column("last_contact", "TEXT"),
        column("status", "TEXT"),
        column("last_activity", "TEXT"),
    ],
    foreign_keys: &[],
};

pub const COMPANIES: TableSpec = TableSpec {
    name: "companies",
    create_sql: "CREATE TABLE IF NOT EXISTS companies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        industry TEXT,
        address TEXT,
        website TEXT
    )",
    indexes: &[],
    columns: &[
        ID,
        unique_column("name", "TEXT"),
        column("industry", "TEXT"),
        column("address", "TEXT"),
        column("website", "TEXT"),
    ],
    foreign_keys: &[],
};

pub const INTERACTIONS: TableSpec = TableSpec {
    name: "interactions",
    create_sql: "CREATE TABLE IF NOT EXISTS interactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        prospect_name TEXT,
        type TEXT,
        content TEXT,
        date TEXT,
        FOREIGN KEY(prospect_name) REFERENCES prospects(name)
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_interactions_prospect_name \
                ON interactions(prospect_name)"],
    columns: &[
        ID,
        column("prospect_name", "TEXT"),
        column("type", "TEXT"),
        column("content", "TEXT"),
        column("date", "TEXT"),
    ],
    foreign_keys: &[ForeignKeySpec {
        column: "prospect_name",
        references_table: "prospects",
        references_column: "name",
    }],
};

pub const DEALS: TableSpec = TableSpec {
    name: "deals",
    create_sql: "CREATE TABLE IF NOT EXISTS deals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        prospect_id INTEGER,
        title TEXT,
        amount REAL,
        stage TEXT,
        close_date TEXT,
        FOREIGN KEY(prospect_id) REFERENCES prospects(id)
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_deals_prospect_id ON deals(prospect_id)"],
    columns: &[
        ID,
        column("prospect_id", "INTEGER"),
        column("title", "TEXT"),
        column("amount", "REAL"),
        column("stage", "TEXT"),
        column("close_date", "TEXT"),
    ],
    foreign_keys: &[ForeignKeySpec {
        column: "prospect_id",
        references_table: "prospects",
        references_column: "id",
    }],
};

pub const TASKS: TableSpec = TableSpec {
    name: "tasks",
    create_sql: "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        prospect_id INTEGER,
        title TEXT,
        due_date TEXT,
        completed BOOLEAN,
        FOREIGN KEY(prospect_id) REFERENCES prospects(id)
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_tasks_prospect_id ON tasks(prospect_id)"],
    columns: &[
        ID,
        column("prospect_id", "INTEGER"),
        column("title", "TEXT"),
        column("due_date", "TEXT"),
        column("completed", "BOOLEAN"),
    ],
    foreign_keys: &[ForeignKeySpec {
        column: "prospect_id",
        references_table: "prospects",
        references_column: "id",
    }],
};

/// All CRM tables, parents before children.
pub const TABLES: [TableSpec; 5] = [PROSPECTS, COMPANIES, INTERACTIONS, DEALS, TASKS];

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Table {table} is missing column {column}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("Column {table}.{column} should be {expected}, got {found:?}")]
    ColumnType {
        table: &'static str,
        column: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Column {table}.{column} primary key mismatch (expected primary key: {expected})")]
    PrimaryKey {
        table: &'static str,
        column: &'static str,
        expected: bool,
    },

    #[error("Column {table}.{column} has no unique index")]
    MissingUnique {
        table: &'static str,
        column: &'static str,
    },

    #[error("Table {table} has unknown NOT NULL column {column} without a default")]
    UnexpectedRequiredColumn { table: &'static str, column: String },

    #[error("Table {table} is missing foreign key {column} -> {references}")]
    MissingForeignKey {
        table: &'static str,
        column: &'static str,
        references: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, FromRow)]
struct ColumnInfo {
    name: String,
    decl_type: String,
    not_null: i64,
    dflt_value: Option<String>,
    pk: i64,
}

#[derive(Debug, FromRow)]
struct IndexInfo {
    name: String,
    is_unique: i64,
    partial: i64,
}

#[derive(Debug, FromRow)]
struct ForeignKeyInfo {
    from_column: String,
    to_table: String,
    to_column: Option<String>,
}

/// Create every missing CRM table and verify the shape of all of them.
///
/// Safe to call on every run: existing tables and rows are left untouched.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    for table in &TABLES {
        sqlx::query(table.create_sql).execute(pool).await?;
        verify_table(pool, table).await?;
        for index in table.indexes.iter().copied() {
            sqlx::query(index).execute(pool).await?;
        }
        tracing::debug!(table = table.name, "Table shape verified");
    }
    Ok(())
}

/// Compare the live shape of `table` against its expected columns and keys.
///
/// Extra nullable or defaulted columns are tolerated; the tool connector
/// may have added them.
pub async fn verify_table(pool: &DbPool, table: &TableSpec) -> Result<(), SchemaError> {
    let columns = sqlx::query_as::<_, ColumnInfo>(
        "SELECT name, type AS decl_type, \"notnull\" AS not_null, dflt_value, pk \
         FROM pragma_table_info(?1)",
    )
    .bind(table.name)
    .fetch_all(pool)
    .await?;

    for expected in table.columns {
        let actual = columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(expected.name))
            .ok_or(SchemaError::MissingColumn {
                table: table.name,
                column: expected.name,
            })?;

        if !actual.decl_type.trim().eq_ignore_ascii_case(expected.decl_type) {
            return Err(SchemaError::ColumnType {
                table: table.name,
                column: expected.name,
                expected: expected.decl_type,
                found: actual.decl_type.clone(),
            });
        }

        if (actual.pk > 0) != expected.primary_key {
            return Err(SchemaError::PrimaryKey {
                table: table.name,
                column: expected.name,
                expected: expected.primary_key,
            });
        }
    }

    let required_unique: Vec<&'static str> = table
        .columns
        .iter()
        .filter(|c| c.unique)
        .map(|c| c.name)
        .collect();
    if !required_unique.is_empty() {
        let unique_columns = unique_index_columns(pool, table.name).await?;
        if let Some(column) = required_unique
            .into_iter()
            .find(|name| !unique_columns.iter().any(|c| c.eq_ignore_ascii_case(name)))
        {
            return Err(SchemaError::MissingUnique {
                table: table.name,
                column,
            });
        }
    }

    let known = |name: &str| {
        table
            .columns
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
    };
    if let Some(extra) = columns
        .iter()
        .find(|c| !known(&c.name) && c.not_null != 0 && c.dflt_value.is_none() && c.pk == 0)
    {
        return Err(SchemaError::UnexpectedRequiredColumn {
            table: table.name,
            column: extra.name.clone(),
        });
    }

    if table.foreign_keys.is_empty() {
        return Ok(());
    }

    let foreign_keys = sqlx::query_as::<_, ForeignKeyInfo>(
        "SELECT \"from\" AS from_column, \"table\" AS to_table, \"to\" AS to_column \
         FROM pragma_foreign_key_list(?1)",
    )
    .bind(table.name)
    .fetch_all(pool)
    .await?;

    for expected in table.foreign_keys {
        let present = foreign_keys.iter().any(|fk| {
            fk.from_column.eq_ignore_ascii_case(expected.column)
                && fk.to_table.eq_ignore_ascii_case(expected.references_table)
                && match fk.to_column.as_deref() {
                    Some(to) => to.eq_ignore_ascii_case(expected.references_column),
                    // An implicit target is the parent's primary key.
                    None => expected.references_column == "id",
                }
        });
        if !present {
            return Err(SchemaError::MissingForeignKey {
                table: table.name,
                column: expected.column,
                references: format!(
                    "{}({})",
                    expected.references_table, expected.references_column
                ),
            });
        }
    }

    Ok(())
}

/// Columns of `table` that are the sole key of a full (non-partial) unique
/// index. Only those can be the parent key of a foreign key.
async fn unique_index_columns(pool: &DbPool, table: &str) -> Result<Vec<String>, sqlx::Error> {
    let indexes = sqlx::query_as::<_, IndexInfo>(
        "SELECT name, \"unique\" AS is_unique, partial FROM pragma_index_list(?1)",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    let mut columns = Vec::new();
    for index in indexes.iter().filter(|i| i.is_unique != 0 && i.partial == 0) {
        let keys = sqlx::query_scalar::<_, Option<String>>(
            "SELECT name FROM pragma_index_info(?1)",
        )
        .bind(&index.name)
        .fetch_all(pool)
        .await?;

        if let [Some(column)] = keys.as_slice() {
            columns.push(column.clone());
        }
    }
    Ok(columns)
}
