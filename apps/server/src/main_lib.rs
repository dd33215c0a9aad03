use std::sync::Arc;

use crate::config::Config;
use budgetbook_core::{
    authors::{AuthorService, AuthorServiceTrait},
    budget::{BudgetService, BudgetServiceTrait},
};
use budgetbook_storage_sqlite::{
    authors::AuthorRepository,
    budget::BudgetRepository,
    db::{self, write_actor},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub author_service: Arc<dyn AuthorServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("BB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;

    let author_repository = Arc::new(AuthorRepository::new(writer.clone()));
    let author_service = Arc::new(AuthorService::new(author_repository));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(budget_repository));

    Ok(Arc::new(AppState {
        author_service,
        budget_service,
    }))
}
