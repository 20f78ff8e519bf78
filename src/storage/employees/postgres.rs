//! Employee store implementation using PostgreSQL.

use super::{EmployeeStore, StoreResult};
use crate::domain::employee::{Employee, EmployeeDraft};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const RECONNECT_INTERVAL: Duration = Duration::from_secs(2);

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL CHECK (name <> ''),
    location TEXT NOT NULL CHECK (location <> ''),
    position TEXT NOT NULL CHECK (position <> ''),
    salary DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const COLUMNS: &str = "id, name, location, position, salary, created_at";

/// An employee store backed by a PostgreSQL connection pool.
///
/// `connected` is cleared when a query fails because the server cannot be
/// reached, and set again by the next successful query. While it is clear a
/// background task pings the database so the `/api` gate can reopen.
#[derive(Clone)]
pub struct PostgresEmployeeStore {
    pool: PgPool,
    connected: Arc<AtomicBool>,
    reconnecting: Arc<AtomicBool>,
}

impl PostgresEmployeeStore {
    /// Connects to `database_url` and makes sure the `employees` table exists.
    ///
    /// `acquire_timeout` bounds how long a request waits for a connection
    /// before the store reports itself disconnected.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        let store = Self::new_with_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wraps an existing pool. The store starts out connected.
    pub fn new_with_pool(pool: PgPool) -> Self {
        Self {
            pool,
            connected: Arc::new(AtomicBool::new(true)),
            reconnecting: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Updates the connectivity flag from a query outcome.
    fn track<T>(&self, result: Result<T, sqlx::Error>) -> StoreResult<T> {
        match result {
            Ok(value) => {
                self.connected.store(true, Ordering::SeqCst);
                Ok(value)
            }
            Err(err) => {
                if is_connection_error(&err) {
                    self.mark_disconnected(&err);
                }
                Err(err.into())
            }
        }
    }

    fn mark_disconnected(&self, err: &sqlx::Error) {
        if self.connected.swap(false, Ordering::SeqCst) {
            log::error!("Lost database connection: {}", err);
        }
        if self
            .reconnecting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let pool = self.pool.clone();
        let connected = Arc::clone(&self.connected);
        let reconnecting = Arc::clone(&self.reconnecting);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(RECONNECT_INTERVAL).await;
                if pool.is_closed() || connected.load(Ordering::SeqCst) {
                    break;
                }
                match sqlx::query("SELECT 1").execute(&pool).await {
                    Ok(_) => {
                        log::info!("Database connection restored.");
                        connected.store(true, Ordering::SeqCst);
                        break;
                    }
                    Err(e) => log::debug!("database still unreachable: {}", e),
                }
            }
            reconnecting.store(false, Ordering::SeqCst);
        });
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    )
}

fn employee_from_row(row: &PgRow) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        position: row.try_get("position")?,
        salary: row.try_get("salary")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl EmployeeStore for PostgresEmployeeStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst) && !self.pool.is_closed()
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY created_at, id", COLUMNS);
        let rows = self.track(sqlx::query(&sql).fetch_all(&self.pool).await)?;
        let mut employees = Vec::with_capacity(rows.len());
        for row in &rows {
            employees.push(employee_from_row(row)?);
        }
        Ok(employees)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", COLUMNS);
        let row = self.track(sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await)?;
        Ok(row.as_ref().map(employee_from_row).transpose()?)
    }

    async fn create(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
        let employee = Employee::from_draft(draft);
        let sql = format!(
            "INSERT INTO employees ({}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS, COLUMNS
        );
        let row = self.track(
            sqlx::query(&sql)
                .bind(employee.id)
                .bind(&employee.name)
                .bind(&employee.location)
                .bind(&employee.position)
                .bind(employee.salary)
                .bind(employee.created_at)
                .fetch_one(&self.pool)
                .await,
        )?;
        Ok(employee_from_row(&row)?)
    }

    async fn update(&self, id: Uuid, draft: EmployeeDraft) -> StoreResult<Option<Employee>> {
        let sql = format!(
            "UPDATE employees SET name = $2, location = $3, position = $4, salary = $5
             WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        let row = self.track(
            sqlx::query(&sql)
                .bind(id)
                .bind(&draft.name)
                .bind(&draft.location)
                .bind(&draft.position)
                .bind(draft.salary)
                .fetch_optional(&self.pool)
                .await,
        )?;
        Ok(row.as_ref().map(employee_from_row).transpose()?)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        let sql = format!("DELETE FROM employees WHERE id = $1 RETURNING {}", COLUMNS);
        let row = self.track(sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await)?;
        Ok(row.as_ref().map(employee_from_row).transpose()?)
    }
}
