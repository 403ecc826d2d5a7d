use crate::db::migration;
use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use practica_core::generate::{CourseGenerator, OpenRouterGenerator};
use practica_core::identity::{IdentityProvider, NameIdentityProvider};
use practica_core::llm_config::LlmConfig;
use practica_utils::net::create_listener;
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use url::Url;

mod app;
mod db;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

pub(crate) struct InnerAppConfig {
    llm_config: LlmConfig,
    identity: Arc<dyn IdentityProvider>,
    generator: Arc<dyn CourseGenerator>,
}

/// Process wide collaborators, shared with every handler through an `Extension`.
#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    fn new(llm_config: LlmConfig, identity: Arc<dyn IdentityProvider>, generator: Arc<dyn CourseGenerator>) -> Self {
        Self(Arc::new(InnerAppConfig {
            llm_config,
            identity,
            generator,
        }))
    }

    /// Default collaborators: name based identity and generation through OpenRouter.
    pub(crate) fn from_llm_config(llm_config: LlmConfig) -> Self {
        let generator = Arc::new(OpenRouterGenerator::new(llm_config.clone()));
        Self::new(llm_config, Arc::new(NameIdentityProvider), generator)
    }

    pub fn llm_config(&self) -> &LlmConfig {
        &self.0.llm_config
    }

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.0.identity.as_ref()
    }

    pub fn generator(&self) -> &dyn CourseGenerator {
        self.0.generator.as_ref()
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = practica_utils::tracing::setup(
        practica_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env.clone())
            .build(),
    )?;

    let migrations = migration(&opt.database_url)
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;
    tracing::info!(applied = migrations.len(), "database migrated");

    let seaorm_pool_options = build_connect_options(&opt.db, opt.database_url);
    let seaorm_pool = Database::connect(seaorm_pool_options).await?;

    let llm_config: LlmConfig = opt.llm.into();
    if llm_config.api_key().is_none() {
        tracing::warn!("no OpenRouter key configured, course generation is disabled");
    }
    tracing::info!(model = llm_config.model(), "using llm model");
    let app_config = AppConfig::from_llm_config(llm_config);

    let app = app::create_app(app_config, &opt.origins, seaorm_pool)?;

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: Url) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
