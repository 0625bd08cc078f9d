//! Storage layer: read access to the index database
//!
//! [`IndexDb`] owns one `tokio-postgres` client. [`IndexDb::fetch_row_sets`]
//! dispatches the five export queries together and waits for all of them;
//! the first failure fails the whole fetch.

pub mod queries;
pub mod rows;

pub use rows::FromRow;

use std::time::Instant;

use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::config::SslMode;
use tokio_postgres::tls::MakeTlsConnect;
use tokio_postgres::{Client, Config, NoTls, Socket};

use crate::error::{ExportError, ExportResult};
use crate::models::{BalanceRow, RowSets, SignupRow, TrustRelationRow};

/// Connection to the index database
pub struct IndexDb {
    client: Client,
}

impl IndexDb {
    /// Connect to the index database
    ///
    /// With `tls` the connection requires TLS unless the connection string
    /// sets its own `sslmode`. Without it TLS is never attempted.
    ///
    /// The connection driver runs on its own task. Errors it reports after the
    /// handshake are logged; queries in flight then fail on their own.
    pub async fn connect(connection_string: &str, tls: bool) -> ExportResult<Self> {
        let mut config: Config = connection_string
            .parse()
            .map_err(|e: tokio_postgres::Error| ExportError::Connect(e.to_string()))?;

        let client = if tls {
            if matches!(config.get_ssl_mode(), SslMode::Prefer) {
                config.ssl_mode(SslMode::Require);
            }
            let connector = native_tls::TlsConnector::new()
                .map_err(|e| ExportError::Connect(format!("TLS setup failed: {}", e)))?;
            spawn_connection(&config, MakeTlsConnector::new(connector)).await?
        } else {
            config.ssl_mode(SslMode::Disable);
            spawn_connection(&config, NoTls).await?
        };

        tracing::debug!(tls, "connected to index database");
        Ok(Self { client })
    }

    /// Fetch the latest block and the four row sets
    pub async fn fetch_row_sets(&self) -> ExportResult<RowSets> {
        let started = Instant::now();

        let (block_number, signups, incoming_trusts, outgoing_trusts, balances) = tokio::try_join!(
            self.latest_block(),
            self.query_rows::<SignupRow>("signups", queries::SIGNUPS),
            self.query_rows::<TrustRelationRow>("incoming_trusts", queries::INCOMING_TRUSTS),
            self.query_rows::<TrustRelationRow>("outgoing_trusts", queries::OUTGOING_TRUSTS),
            self.query_rows::<BalanceRow>("balances", queries::BALANCES),
        )?;

        let rows = RowSets {
            block_number,
            signups,
            incoming_trusts,
            outgoing_trusts,
            balances,
        };

        tracing::info!(
            block_number = ?rows.block_number,
            signups = rows.signups.len(),
            incoming_trusts = rows.incoming_trusts.len(),
            outgoing_trusts = rows.outgoing_trusts.len(),
            balances = rows.balances.len(),
            total_rows = rows.row_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched row sets"
        );

        Ok(rows)
    }

    /// Latest indexed block, `None` when the block table is empty
    async fn latest_block(&self) -> ExportResult<Option<i64>> {
        let row = self
            .client
            .query_one(queries::BLOCK, &[])
            .await
            .map_err(|e| ExportError::fetch("block", e))?;
        rows::optional_integer_column(&row, "block", "block")
    }

    async fn query_rows<T: FromRow>(&self, query: &'static str, sql: &str) -> ExportResult<Vec<T>> {
        let started = Instant::now();
        let raw = self
            .client
            .query(sql, &[])
            .await
            .map_err(|e| ExportError::fetch(query, e))?;

        tracing::debug!(
            query,
            rows = raw.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query finished"
        );

        raw.iter().map(|row| T::from_row(row, query)).collect()
    }
}

async fn spawn_connection<T>(config: &Config, tls: T) -> ExportResult<Client>
where
    T: MakeTlsConnect<Socket>,
    T::Stream: Send + 'static,
{
    let (client, connection) = config
        .connect(tls)
        .await
        .map_err(|e| ExportError::Connect(e.to_string()))?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!(error = %e, "index database connection failed");
        }
    });

    Ok(client)
}
