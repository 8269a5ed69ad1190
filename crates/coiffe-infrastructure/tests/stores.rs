use coiffe_core::auth::AuthProvider;
use coiffe_core::catalog::{CatalogRepository, sample_products};
use coiffe_core::user::{HairProfileUpdate, ProfileRepository, UserRecord};
use coiffe_infrastructure::{
    CoiffePaths, ConfigService, LocalAuthProvider, TomlCatalogRepository, TomlProfileRepository,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_stores_share_one_data_dir() {
    let root = TempDir::new().unwrap();
    let paths = CoiffePaths::with_root(root.path());

    let auth = LocalAuthProvider::from_paths(&paths);
    let profiles = TomlProfileRepository::from_paths(&paths);
    let catalog = TomlCatalogRepository::from_paths(&paths);

    let user_id = auth
        .create_account("linh@example.com", "Secret1")
        .await
        .unwrap();
    profiles
        .save(&UserRecord::new(&user_id, "linh@example.com", "Linh", "0912345678"))
        .await
        .unwrap();
    profiles
        .update_hair(
            &user_id,
            &HairProfileUpdate {
                hair_concerns: Some("frizz".into()),
                ..HairProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    for product in sample_products() {
        catalog.add(&product).await.unwrap();
    }

    assert!(paths.accounts_file().exists());
    assert!(paths.profiles_file().exists());
    assert!(paths.catalog_file().exists());

    // A fresh handle reads what the first one wrote.
    let reopened = TomlProfileRepository::from_paths(&paths);
    let record = reopened.get(&user_id).await.unwrap().unwrap();
    assert_eq!(record.hair_concerns.as_deref(), Some("frizz"));
    assert_eq!(
        TomlCatalogRepository::from_paths(&paths)
            .list_all()
            .await
            .unwrap()
            .len(),
        sample_products().len()
    );
}

#[tokio::test]
async fn test_deleted_product_never_reappears() {
    let root = TempDir::new().unwrap();
    let catalog = TomlCatalogRepository::from_paths(&CoiffePaths::with_root(root.path()));
    let mut ids = Vec::new();
    for product in sample_products().into_iter().take(3) {
        ids.push(catalog.add(&product).await.unwrap());
    }

    catalog.delete(&ids[1]).await.unwrap();
    assert!(catalog.delete(&ids[1]).await.unwrap_err().is_not_found());

    let remaining: Vec<String> = catalog
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining.len(), 2);
    assert!(!remaining.contains(&ids[1]));
}

#[test]
fn test_config_lives_in_config_dir() {
    let root = TempDir::new().unwrap();
    let paths = CoiffePaths::with_root(root.path());
    ConfigService::new(paths.config_file()).load().unwrap();
    assert!(root.path().join("config/config.toml").exists());
}
