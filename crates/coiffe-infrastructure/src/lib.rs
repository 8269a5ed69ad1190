pub mod config_service;
pub mod dto;
pub mod local_auth_provider;
pub mod paths;
pub mod secret_service;
pub mod storage;
pub mod toml_catalog_repository;
pub mod toml_profile_repository;

pub use crate::config_service::ConfigService;
pub use crate::local_auth_provider::LocalAuthProvider;
pub use crate::paths::CoiffePaths;
pub use crate::secret_service::SecretService;
pub use crate::toml_catalog_repository::TomlCatalogRepository;
pub use crate::toml_profile_repository::TomlProfileRepository;
