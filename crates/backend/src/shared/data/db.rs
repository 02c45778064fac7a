use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Таблицы админ-панели. Id выдаёт SQLite.
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_brand",
        r#"
        CREATE TABLE IF NOT EXISTS a001_brand (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "a003_doctor",
        r#"
        CREATE TABLE IF NOT EXISTS a003_doctor (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            specialization TEXT
        );
        "#,
    ),
    (
        "a002_commission_setting",
        r#"
        CREATE TABLE IF NOT EXISTS a002_commission_setting (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            doctor_id INTEGER,
            commission_type TEXT NOT NULL DEFAULT '',
            source TEXT NOT NULL DEFAULT '',
            value REAL,
            calculation_type TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
];

/// Врачи, которыми заполняется пустой справочник
const SEED_DOCTORS: &[(&str, &str)] = &[
    ("Dr. Anita Sharma", "Cardiology"),
    ("Dr. Rahul Verma", "Orthopedics"),
    ("Dr. Meera Iyer", "Pediatrics"),
    ("Dr. Karan Mehta", "General Medicine"),
];

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    seed_doctors(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Создать недостающие таблицы
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, sql) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

/// Заполнить справочник врачей, если он пуст
pub async fn seed_doctors(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let rows = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM a003_doctor;".to_string(),
        ))
        .await?;
    let count: i64 = match rows {
        Some(row) => row.try_get("", "cnt")?,
        None => 0,
    };
    if count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding a003_doctor with {} doctors", SEED_DOCTORS.len());
    for (name, specialization) in SEED_DOCTORS {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO a003_doctor (name, specialization) VALUES (?, ?);",
            [(*name).into(), (*specialization).into()],
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Чистая in-memory база со схемой, для тестов репозиториев
#[cfg(test)]
pub async fn memory_database() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    bootstrap_schema(&conn).await.expect("schema");
    conn
}
