use std::sync::Arc;

use anyhow::Context;
use finscore_core::{
    fscores::FScoreRecord,
    scores::{ScoreService, ScoreServiceTrait},
    zscores::ZScoreRecord,
};
use finscore_sheets::{GoogleSheetsClient, GridSource, SheetsConfig};
use finscore_storage_sqlite::{
    db::{self, DbPool},
    FScoreRepository, ZScoreRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub zscore_service: Arc<dyn ScoreServiceTrait<ZScoreRecord>>,
    pub fscore_service: Arc<dyn ScoreServiceTrait<FScoreRecord>>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FINSCORE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the state with the Google Sheets client described by `config`.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let sheets_config = SheetsConfig::new(&config.sheets_api_key, &config.spreadsheet_id)
        .with_timeout(config.sheets_timeout);
    let client = GoogleSheetsClient::new(sheets_config).context("Failed to build Sheets client")?;
    build_state_with_source(config, Arc::new(client)).await
}

/// Builds the state around an arbitrary grid source.
pub async fn build_state_with_source(
    config: &Config,
    source: Arc<dyn GridSource>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path).context("Failed to initialise database")?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    tracing::info!("Database ready at {}", db_path);

    let writer = db::spawn_writer((*pool).clone());

    let zscore_repository = Arc::new(ZScoreRepository::new(pool.clone(), writer.clone()));
    let fscore_repository = Arc::new(FScoreRepository::new(pool.clone(), writer));

    let zscore_service: Arc<dyn ScoreServiceTrait<ZScoreRecord>> = Arc::new(
        ScoreService::<ZScoreRecord>::new(zscore_repository, source.clone(), &config.zscore_sheet),
    );
    let fscore_service: Arc<dyn ScoreServiceTrait<FScoreRecord>> = Arc::new(
        ScoreService::<FScoreRecord>::new(fscore_repository, source, &config.fscore_sheet),
    );

    Ok(Arc::new(AppState {
        zscore_service,
        fscore_service,
        pool,
    }))
}
