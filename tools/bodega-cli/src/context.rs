//! Shared command context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bodega_cart::CartStore;
use bodega_storage::FileStore;

use crate::output::{Output, TermBadge, TermNotifier};

/// Shared handles every command receives.
pub struct Context {
    pub output: Output,
    store_dir: PathBuf,
}

impl Context {
    /// Resolve the store directory: `--store`, then `$BODEGA_STORE`, then
    /// the platform user data dir.
    pub fn new(store: Option<PathBuf>, output: Output) -> Result<Self> {
        let store_dir = store
            .or_else(|| std::env::var_os("BODEGA_STORE").map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|d| d.join("bodega")))
            .context("could not determine a store directory; pass --store")?;
        Ok(Self { output, store_dir })
    }

    /// Open the persisted cart with terminal collaborators attached.
    pub fn cart_store(&self) -> Result<CartStore<FileStore>> {
        self.output
            .debug(&format!("using cart store at {}", self.store_dir.display()));
        let storage = FileStore::open(&self.store_dir)
            .with_context(|| format!("opening cart store at {}", self.store_dir.display()))?;
        Ok(CartStore::new(storage)
            .with_notifier(TermNotifier::new(self.output.clone()))
            .with_count_sink(TermBadge::new(self.output.clone())))
    }
}
