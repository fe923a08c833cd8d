// src/store.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::product::{Product, ProductPatch};

/// Ids are drawn from `[0, MAX_PRODUCT_ID)`.
pub const MAX_PRODUCT_ID: i64 = 999_999_999;

/// The whole catalog persisted as one JSON array.
///
/// Every read and every load-modify-save cycle runs under `guard`, so two
/// mutations never interleave and no update is lost.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    guard: Mutex<()>,
}

/// Fields for a product that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
    pub image: String,
    pub quantity: i64,
}

impl CatalogStore {
    /// Opens the document at `path`, creating an empty catalog if it is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|source| StoreError::Read { path: path.clone(), source })?
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Write { path: path.clone(), source })?;
            }
            write_document(&path, &[]).await?;
            info!(path = %path.display(), "Created empty catalog document");
        }
        Ok(Self {
            path,
            guard: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<Product>, StoreError> {
        let _held = self.guard.lock().await;
        read_document(&self.path).await
    }

    pub async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let _held = self.guard.lock().await;
        write_document(&self.path, products).await
    }

    /// Runs `f` against the loaded catalog and saves the result, all under
    /// the store guard. Nothing is written when `f` fails.
    pub async fn mutate<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Product>) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.modify(|products| f(products).map(|out| (out, true))).await
    }

    // Like `mutate`, but `f` also reports whether it changed anything;
    // the document is only rewritten when it did.
    async fn modify<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Product>) -> Result<(T, bool), E>,
        E: From<StoreError>,
    {
        let _held = self.guard.lock().await;
        let mut products = read_document(&self.path).await?;
        let (out, changed) = f(&mut products)?;
        if changed {
            write_document(&self.path, &products).await?;
        }
        Ok(out)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|p| p.name_contains(term))
            .collect())
    }

    /// Appends a product under a freshly drawn id that no stored product uses.
    pub async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        self.mutate(|products| {
            let taken: HashSet<i64> = products.iter().map(|p| p.id).collect();
            let product = Product {
                id: unused_id(&taken),
                product_name: new.product_name,
                price: new.price,
                image: new.image,
                quantity: new.quantity,
            };
            products.push(product.clone());
            Ok(product)
        })
        .await
    }

    /// Merges `patch` into the product with `id`. `None` when no product matches.
    pub async fn update(
        &self,
        id: i64,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        self.modify(|products| {
            let updated = products.iter_mut().find(|p| p.id == id).map(|p| {
                p.apply(patch);
                p.clone()
            });
            let changed = updated.is_some();
            Ok((updated, changed))
        })
        .await
    }

    /// Drops the first product with `id` and returns what remains.
    /// A miss leaves the document untouched.
    pub async fn remove(&self, id: i64) -> Result<(bool, Vec<Product>), StoreError> {
        self.modify(|products| {
            let removed = match products.iter().position(|p| p.id == id) {
                Some(index) => {
                    products.remove(index);
                    true
                }
                None => false,
            };
            Ok(((removed, products.clone()), removed))
        })
        .await
    }
}

fn unused_id(taken: &HashSet<i64>) -> i64 {
    let mut rng = rand::thread_rng();
    loop {
        let id = rng.gen_range(0..MAX_PRODUCT_ID);
        if !taken.contains(&id) {
            return id;
        }
        debug!(id, "Drew an id already in use, retrying");
    }
}

async fn read_document(path: &Path) -> Result<Vec<Product>, StoreError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// Written beside the target then renamed over it.
async fn write_document(path: &Path, products: &[Product]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(products).map_err(StoreError::Serialize)?;
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    tokio::fs::write(&tmp, body)
        .await
        .map_err(|source| StoreError::Write { path: tmp.clone(), source })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Write { path: path.to_path_buf(), source })
}
