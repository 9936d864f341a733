use crate::app_config::AppConfig;
use crate::domain::DeviceRow;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::{info, instrument};

const SCHEMA_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS summit_usage (
    summit_id             BIGINT NOT NULL,
    carrier               TEXT,
    customer_name         TEXT,
    customer_id           BIGINT,
    your_device_id        TEXT,
    signal_strength       TEXT,
    description           TEXT,
    device_model          TEXT,
    serial_number         TEXT,
    device_up_time        TEXT,
    static_ip             TEXT,
    snapshot_refresh_time BIGINT,
    last_check_in_time    BIGINT,
    signal_quality        TEXT,
    data_plan             BIGINT,
    data_used_date        DATE,
    data_used             BIGINT
)
"#;

const INSERT_ROW: &str = r#"
INSERT INTO summit_usage (
    summit_id, carrier, customer_name, customer_id, your_device_id,
    signal_strength, description, device_model, serial_number, device_up_time,
    static_ip, snapshot_refresh_time, last_check_in_time, signal_quality,
    data_plan, data_used_date, data_used
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
"#;

/// The relational sink the flattened rows are reported from.
pub struct UsageStore {
    pool: PgPool,
}

impl UsageStore {
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(config.database().url())
            .await?;
        Ok(UsageStore { pool })
    }

    /// Creates the destination table when it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_INIT).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts the whole batch inside a single transaction, so a failed run
    /// commits nothing.
    #[instrument(skip_all)]
    pub async fn insert_rows(&self, rows: &[DeviceRow]) -> Result<(), StoreError> {
        info!("Storing {} rows...", rows.len());

        let mut tx = self.pool.begin().await?;
        for row in rows {
            sqlx::query(INSERT_ROW)
                .bind(row.summit_id)
                .bind(&row.carrier)
                .bind(&row.customer_name)
                .bind(row.customer_id)
                .bind(&row.your_device_id)
                .bind(&row.signal_strength)
                .bind(&row.description)
                .bind(&row.device_model)
                .bind(&row.serial_number)
                .bind(&row.device_up_time)
                .bind(&row.static_ip)
                .bind(row.snapshot_refresh_time)
                .bind(row.last_check_in_time)
                .bind(&row.signal_quality)
                .bind(row.data_plan)
                .bind(row.data_used_date)
                .bind(row.data_used)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!("Storing {} rows... OK", rows.len());

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
