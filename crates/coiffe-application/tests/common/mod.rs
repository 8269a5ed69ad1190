//! Hand-written collaborators for application tests.
#![allow(dead_code)]

use coiffe_core::auth::AuthProvider;
use coiffe_core::catalog::{CatalogRepository, Product};
use coiffe_core::error::{CoiffeError, Result};
use coiffe_core::generation::TextGenerator;
use coiffe_core::user::{HairProfileUpdate, ProfileRepository, UserRecord};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Replies are consumed in order; every prompt is recorded.
///
/// When `gated`, each call waits for a permit released by the test.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn gated(replies: &[&str]) -> Self {
        let mut generator = Self::replying(replies);
        generator.gate = Some(Semaphore::new(0));
        generator
    }

    /// Lets `n` pending or future calls complete.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .expect("gate is never closed")
                .forget();
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoiffeError::network("no scripted reply left")))
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    records: Mutex<HashMap<String, UserRecord>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryProfiles {
    pub fn with(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(
                records
                    .into_iter()
                    .map(|r| (r.user_id.clone(), r))
                    .collect(),
            ),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>> {
        if self.fail_reads {
            return Err(CoiffeError::network("profile store unreachable"));
        }
        Ok(self.records.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, record: &UserRecord) -> Result<()> {
        if self.fail_writes {
            return Err(CoiffeError::io("profile store is read-only"));
        }
        self.records
            .lock()
            .unwrap()
            .insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    async fn update_hair(&self, user_id: &str, update: &HairProfileUpdate) -> Result<UserRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(user_id)
            .ok_or_else(|| CoiffeError::not_found("user", user_id))?;
        record.apply(update);
        Ok(record.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCatalog {
    products: Mutex<BTreeMap<String, Product>>,
    next_id: AtomicUsize,
    fail_reads: bool,
}

impl InMemoryCatalog {
    pub fn with(products: Vec<Product>) -> Self {
        let catalog = Self::default();
        {
            let mut map = catalog.products.lock().unwrap();
            for product in products {
                let id = format!("p-{}", catalog.next_id.fetch_add(1, Ordering::SeqCst));
                map.insert(id.clone(), product.with_id(id));
            }
        }
        catalog
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Product>> {
        if self.fail_reads {
            return Err(CoiffeError::network("catalog unreachable"));
        }
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn add(&self, product: &Product) -> Result<String> {
        let id = format!("p-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.products
            .lock()
            .unwrap()
            .insert(id.clone(), product.clone().with_id(&id));
        Ok(id)
    }

    async fn update(&self, id: &str, product: &Product) -> Result<()> {
        let mut products = self.products.lock().unwrap();
        let slot = products
            .get_mut(id)
            .ok_or_else(|| CoiffeError::not_found("product", id))?;
        *slot = product.clone().with_id(id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.products
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoiffeError::not_found("product", id))
    }
}

/// Accepts any password for known emails; rejects duplicates like a real provider.
#[derive(Default)]
pub struct FakeAuthProvider {
    accounts: Mutex<HashMap<String, (String, String)>>,
    reject_create_with: Option<String>,
}

impl FakeAuthProvider {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_create_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<String> {
        if let Some(message) = &self.reject_create_with {
            return Err(CoiffeError::auth(message.clone()));
        }
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(CoiffeError::auth(
                "The email address is already in use by another account.",
            ));
        }
        let user_id = format!("uid-{}", accounts.len() + 1);
        accounts.insert(email.to_string(), (user_id.clone(), password.to_string()));
        Ok(user_id)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<String> {
        match self.accounts.lock().unwrap().get(email) {
            Some((user_id, stored)) if stored == password => Ok(user_id.clone()),
            _ => Err(CoiffeError::auth("Invalid email or password.")),
        }
    }
}

pub fn product(name: &str, category: &str) -> Product {
    Product {
        id: String::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price: 12.0,
        stock_amount: 10,
        category: category.to_string(),
        brand: String::new(),
        image_url: String::new(),
        is_available: true,
    }
}

pub fn an_with_wavy_hair() -> UserRecord {
    let mut record = UserRecord::new("u-an", "an@example.com", "An", "0901234567");
    record.hair_style = Some("wavy".to_string());
    record.hair_concerns = Some("frizz".to_string());
    record
}
