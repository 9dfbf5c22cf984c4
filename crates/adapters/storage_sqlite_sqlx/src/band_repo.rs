//! `SQLite` implementation of [`BandRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bandservice_app::ports::BandRepository;
use bandservice_domain::band::{Band, NewBand};
use bandservice_domain::error::{BandError, NotFoundError, ValidationError};
use bandservice_domain::id::BandId;
use bandservice_domain::task::Task;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Band`].
struct Wrapper(Band);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Band> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let genre: Option<String> = row.try_get("genre")?;
        let members_json: String = row.try_get("members")?;
        let tasks_json: String = row.try_get("tasks")?;
        let created_at: String = row.try_get("created_at")?;

        let members: Vec<String> = serde_json::from_str(&members_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let tasks: Vec<Task> =
            serde_json::from_str(&tasks_json).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.to_utc())
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Band {
            id: BandId::new(id),
            name,
            genre,
            members,
            tasks,
            created_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO bands (name, genre, members, tasks, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM bands WHERE id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM bands WHERE name = ?";
const SELECT_ALL: &str = "SELECT * FROM bands ORDER BY id";
const UPDATE: &str = "UPDATE bands SET name = ?, genre = ?, members = ?, tasks = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM bands WHERE id = ?";

/// Map a failed write, turning a `UNIQUE(name)` hit into a duplicate-name error.
fn write_error(err: sqlx::Error, name: &str) -> BandError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ValidationError::DuplicateName(name.to_string()).into()
        }
        other => StorageError::from(other).into(),
    }
}

/// `SQLite`-backed band repository.
pub struct SqliteBandRepository {
    pool: SqlitePool,
}

impl SqliteBandRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BandRepository for SqliteBandRepository {
    async fn create(&self, band: NewBand) -> Result<Band, BandError> {
        let members_json = serde_json::to_string(&band.members).map_err(StorageError::from)?;
        let tasks_json = serde_json::to_string(&band.tasks).map_err(StorageError::from)?;

        let result = sqlx::query(INSERT)
            .bind(&band.name)
            .bind(&band.genre)
            .bind(&members_json)
            .bind(&tasks_json)
            .bind(band.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|err| write_error(err, &band.name))?;

        Ok(band.into_band(BandId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: BandId) -> Result<Option<Band>, BandError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Band>, BandError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Band>, BandError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, band: Band) -> Result<Band, BandError> {
        let members_json = serde_json::to_string(&band.members).map_err(StorageError::from)?;
        let tasks_json = serde_json::to_string(&band.tasks).map_err(StorageError::from)?;

        let result = sqlx::query(UPDATE)
            .bind(&band.name)
            .bind(&band.genre)
            .bind(&members_json)
            .bind(&tasks_json)
            .bind(band.id.get())
            .execute(&self.pool)
            .await
            .map_err(|err| write_error(err, &band.name))?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Band",
                id: band.id.to_string(),
            }
            .into());
        }
        Ok(band)
    }

    async fn delete(&self, id: BandId) -> Result<(), BandError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            tracing::debug!(band_id = %id, "delete matched no band");
        }
        Ok(())
    }
}
