use assert_matches::assert_matches;
use leadbase_db::schema::{ensure_schema, SchemaError, TABLES};
use sqlx::SqlitePool;

async fn table_names(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

/// An empty store gets all five CRM tables.
#[sqlx::test(migrations = false)]
async fn test_creates_all_tables(pool: SqlitePool) {
    ensure_schema(&pool).await.unwrap();

    assert_eq!(
        table_names(&pool).await,
        ["companies", "deals", "interactions", "prospects", "tasks"]
    );
}

/// Running schema ensure twice is a no-op and keeps rows.
#[sqlx::test(migrations = false)]
async fn test_ensure_is_idempotent(pool: SqlitePool) {
    ensure_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO prospects (name) VALUES ('Alice Reed')")
        .execute(&pool)
        .await
        .unwrap();

    ensure_schema(&pool).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prospects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Every foreign key column must have a corresponding index.
#[sqlx::test(migrations = false)]
async fn test_all_fks_have_indexes(pool: SqlitePool) {
    ensure_schema(&pool).await.unwrap();

    for table in &TABLES {
        for fk in table.foreign_keys {
            let indexed: Vec<String> = sqlx::query_scalar(
                "SELECT ii.name
                 FROM pragma_index_list(?1) AS il
                 JOIN pragma_index_info(il.name) AS ii",
            )
            .bind(table.name)
            .fetch_all(&pool)
            .await
            .unwrap();

            assert!(
                indexed.iter().any(|c| c == fk.column),
                "FK column {}.{} has no index",
                table.name,
                fk.column
            );
        }
    }
}

/// A pre-existing table with a wrong column type is rejected.
#[sqlx::test(migrations = false)]
async fn test_rejects_wrong_column_type(pool: SqlitePool) {
    sqlx::query("CREATE TABLE prospects (id INTEGER PRIMARY KEY, name INTEGER UNIQUE)")
        .execute(&pool)
        .await
        .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(
        err,
        SchemaError::ColumnType { table: "prospects", column: "name", expected: "TEXT", .. }
    );
}

/// A store using the French `contenu` column for interaction content is
/// not silently accepted.
#[sqlx::test(migrations = false)]
async fn test_rejects_missing_column(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE interactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            prospect_name TEXT,
            type TEXT,
            contenu TEXT,
            date TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(
        err,
        SchemaError::MissingColumn { table: "interactions", column: "content" }
    );
}

/// `id` must stay the primary key.
#[sqlx::test(migrations = false)]
async fn test_rejects_primary_key_mismatch(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE companies (
            id INTEGER,
            name TEXT PRIMARY KEY,
            industry TEXT,
            address TEXT,
            website TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(err, SchemaError::PrimaryKey { table: "companies", column: "id", .. });
}

/// Extra nullable columns are tolerated, required ones are not.
#[sqlx::test(migrations = false)]
async fn test_extra_columns(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE,
            industry TEXT,
            address TEXT,
            website TEXT,
            notes TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    ensure_schema(&pool).await.unwrap();

    sqlx::query("ALTER TABLE prospects ADD COLUMN owner TEXT NOT NULL DEFAULT 'me'")
        .execute(&pool)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();

    sqlx::query("DROP TABLE tasks").execute(&pool).await.unwrap();
    sqlx::query(
        "CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            prospect_id INTEGER,
            title TEXT,
            due_date TEXT,
            completed BOOLEAN,
            priority INTEGER NOT NULL,
            FOREIGN KEY(prospect_id) REFERENCES prospects(id)
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(
        err,
        SchemaError::UnexpectedRequiredColumn { table: "tasks", ref column } if column == "priority"
    );
}

/// Interactions reference prospects by name, so the name must be unique.
#[sqlx::test(migrations = false)]
async fn test_rejects_name_without_unique_index(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE prospects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT,
            last_contact TEXT,
            status TEXT,
            last_activity TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(err, SchemaError::MissingUnique { table: "prospects", column: "name" });
}

/// A partial or multi-column unique index does not make `name` a key.
#[sqlx::test(migrations = false)]
async fn test_rejects_partial_or_composite_unique(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            industry TEXT,
            address TEXT,
            website TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("CREATE UNIQUE INDEX idx_companies_name_industry ON companies(name, industry)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE UNIQUE INDEX idx_companies_name_set ON companies(name) WHERE name > ''")
        .execute(&pool)
        .await
        .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();
    assert_matches!(err, SchemaError::MissingUnique { table: "companies", column: "name" });

    // A plain unique index created after the fact is enough.
    sqlx::query("CREATE UNIQUE INDEX idx_companies_name ON companies(name)")
        .execute(&pool)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
}

/// A child table without its foreign key declaration is rejected.
#[sqlx::test(migrations = false)]
async fn test_rejects_missing_foreign_key(pool: SqlitePool) {
    sqlx::query(
        "CREATE TABLE deals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            prospect_id INTEGER,
            title TEXT,
            amount REAL,
            stage TEXT,
            close_date TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = ensure_schema(&pool).await.unwrap_err();

    assert_matches!(
        err,
        SchemaError::MissingForeignKey { table: "deals", column: "prospect_id", ref references }
            if references == "prospects(id)"
    );
}
