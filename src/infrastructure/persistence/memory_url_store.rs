//! In-memory [`UrlStore`] implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::entities::{UrlRecord, User, UserId};
use crate::domain::repositories::{StoreError, UrlStore};
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator, is_reserved};

/// Settings that shape issued short URLs.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Prefix prepended to every code, e.g. `http://localhost:3000/`.
    pub base_url: String,
    /// Number of characters in each generated code.
    pub code_length: usize,
    /// Candidates tried per create before giving up.
    pub max_code_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            code_length: 10,
            max_code_attempts: 10,
        }
    }
}

#[derive(Debug, Default)]
struct Keyspace {
    users: HashMap<UserId, User>,
    codes: HashMap<String, Arc<UrlRecord>>,
}

/// Process-local store holding users and issued codes.
///
/// Both mappings sit behind a single [`RwLock`]. Creates hold the write lock
/// for the whole operation, so two concurrent creates can never observe the
/// same code as free, and a reader never sees a record present in one
/// mapping but not the other. Lookups share the read lock.
///
/// Nothing survives a restart.
pub struct InMemoryUrlStore {
    config: StoreConfig,
    generator: Arc<dyn CodeGenerator>,
    keyspace: RwLock<Keyspace>,
}

impl InMemoryUrlStore {
    /// Creates an empty store that draws codes from [`RandomCodeGenerator`].
    pub fn new(config: StoreConfig) -> Self {
        Self::with_generator(config, Arc::new(RandomCodeGenerator))
    }

    /// Creates an empty store with a custom code source.
    pub fn with_generator(config: StoreConfig, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            config,
            generator,
            keyspace: RwLock::new(Keyspace::default()),
        }
    }

    /// Returns the user for `user_id`, creating it if unknown.
    ///
    /// Idempotent: a second call with the same id finds the user created by
    /// the first. The returned value is a snapshot of the user's URLs at the
    /// time of the call.
    pub async fn get_or_create_user(&self, user_id: UserId) -> User {
        let mut keyspace = self.keyspace.write().await;
        keyspace
            .users
            .entry(user_id.clone())
            .or_insert_with(|| {
                debug!(%user_id, "created user");
                User::new(user_id)
            })
            .clone()
    }

    /// Number of codes issued so far.
    pub async fn code_count(&self) -> usize {
        self.keyspace.read().await.codes.len()
    }

    /// Number of users seen so far.
    pub async fn user_count(&self) -> usize {
        self.keyspace.read().await.users.len()
    }

    /// Draws candidates until one is neither issued nor reserved.
    fn allocate_code(
        &self,
        codes: &HashMap<String, Arc<UrlRecord>>,
    ) -> Result<String, StoreError> {
        let length = self.config.code_length;

        for attempt in 1..=self.config.max_code_attempts {
            let code = self.generator.generate(length);

            if !codes.contains_key(&code) && !is_reserved(&code) {
                return Ok(code);
            }

            debug!(attempt, "short code collision, retrying");
        }

        warn!(
            attempts = self.config.max_code_attempts,
            length, "short code space exhausted"
        );

        Err(StoreError::CodeSpaceExhausted {
            attempts: self.config.max_code_attempts,
            length,
        })
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn create_short_url(
        &self,
        user_id: UserId,
        long_url: String,
    ) -> Result<String, StoreError> {
        let mut keyspace = self.keyspace.write().await;
        let Keyspace { users, codes } = &mut *keyspace;

        let user = users.entry(user_id.clone()).or_insert_with(|| {
            debug!(%user_id, "created user");
            User::new(user_id.clone())
        });

        let code = self.allocate_code(codes)?;
        let record = Arc::new(UrlRecord::new(code.clone(), long_url.clone()));

        codes.insert(code.clone(), Arc::clone(&record));
        user.urls.insert(long_url, record);

        debug!(%user_id, %code, "issued short code");

        Ok(format!("{}{}", self.config.base_url, code))
    }

    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StoreError> {
        let keyspace = self.keyspace.read().await;

        Ok(keyspace
            .codes
            .get(short_code)
            .map(|record| record.long_url.clone()))
    }
}
