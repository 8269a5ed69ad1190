mod app;
mod cli_helper;
mod command;
mod logging;

use std::sync::Arc;

use anyhow::Result;
use coiffe_application::AuthSession;
use coiffe_core::catalog::CatalogRepository;
use coiffe_core::user::ProfileRepository;
use coiffe_infrastructure::{
    CoiffePaths, ConfigService, LocalAuthProvider, SecretService, TomlCatalogRepository,
    TomlProfileRepository,
};

use crate::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let config_service = ConfigService::new(CoiffePaths::default_config_dir()?.join("config.toml"));
    let config = config_service.load()?;
    let paths = CoiffePaths::resolve(config.data_dir.as_deref())?;

    let _log_guard = logging::init(&paths.logs_dir(), &config.log_level)?;
    tracing::info!(data_dir = %paths.data_dir().display(), "Starting coiffe");

    let profiles: Arc<dyn ProfileRepository> = Arc::new(TomlProfileRepository::from_paths(&paths));
    let catalog: Arc<dyn CatalogRepository> = Arc::new(TomlCatalogRepository::from_paths(&paths));
    let auth = AuthSession::new(
        Arc::new(LocalAuthProvider::from_paths(&paths)),
        profiles.clone(),
    );
    let secrets = SecretService::new(paths.secret_file());

    let mut app = App::new(config, secrets, profiles, catalog, auth)?;
    app.run().await
}
