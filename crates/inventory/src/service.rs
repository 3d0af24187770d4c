//! The inventory service: ordered unique-by-id collection + backing file.

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use stockroom_core::DomainResult;
use stockroom_products::Product;

use crate::store;

/// In-memory product collection synchronized with one flat text file.
///
/// Insertion order is preserved and ids are unique; every lookup is a linear
/// scan (collections are assumed small). Single-threaded by design: no
/// locking, no interior mutability. Embedding this in a concurrent host
/// requires an external mutex around the whole service so that each
/// mutation plus its file rewrite stays atomic.
pub struct Inventory {
    products: Vec<Product>,
    path: PathBuf,
}

impl Inventory {
    /// Open an inventory backed by `path` and load whatever records the file
    /// currently holds.
    ///
    /// IO failure is reported, not fatal: the service still starts, possibly
    /// with an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut inventory = Self {
            products: Vec::new(),
            path: path.into(),
        };
        inventory.reload();
        inventory
    }

    /// Open an inventory at the default location
    /// (`records/inventory.txt` next to the executable).
    pub fn open_default() -> Self {
        Self::open(store::default_data_file())
    }

    /// The resolved backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clear the in-memory collection and re-read the backing file.
    ///
    /// The file (and its parent directory) is created when absent, never
    /// truncated when present. Blank lines are ignored; lines that fail to
    /// parse or validate are dropped, so a corrupt file degrades to fewer
    /// records instead of a startup failure.
    pub fn reload(&mut self) {
        self.products.clear();

        if let Err(err) = store::ensure_exists(&self.path) {
            warn!(path = %self.path.display(), %err, "could not create backing file");
            return;
        }

        let lines = match store::read_lines(&self.path) {
            Ok(lines) => lines,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read backing file");
                return;
            }
        };

        let mut dropped = 0usize;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match Product::from_line(&line) {
                Ok(product) => self.products.push(product),
                Err(err) => {
                    dropped += 1;
                    debug!(%err, "skipping malformed record line");
                }
            }
        }

        if dropped > 0 {
            warn!(dropped, path = %self.path.display(), "dropped malformed record lines");
        }
        debug!(count = self.products.len(), "inventory loaded");
    }

    /// Rewrite the whole backing file from the in-memory collection.
    ///
    /// IO failure is logged and swallowed; callers never see it. A failure
    /// mid-write can leave the file truncated (no atomic rename).
    fn save(&self) {
        let result = store::ensure_exists(&self.path).and_then(|()| {
            store::write_lines(&self.path, self.products.iter().map(Product::to_line))
        });
        if let Err(err) = result {
            error!(path = %self.path.display(), %err, "failed to persist inventory");
        }
    }

    fn position_of(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| p.id().value() == id)
    }

    /// Append a product unless its id is already present.
    ///
    /// Returns `false` without mutating anything on a duplicate id; this
    /// check is the system's only admission control.
    pub fn add(&mut self, product: Product) -> bool {
        if self.position_of(product.id().value()).is_some() {
            return false;
        }
        self.products.push(product);
        self.save();
        true
    }

    /// Construct and validate a product from raw fields, then [`add`] it.
    ///
    /// This is the entry point presentation adapters call with raw user
    /// input; a field that violates its constraint surfaces as a
    /// `Validation` error for the adapter to display.
    ///
    /// [`add`]: Inventory::add
    pub fn add_product(&mut self, id: i64, name: &str, quantity: i64, price: f64) -> DomainResult<bool> {
        let product = Product::new(id, name, quantity, price)?;
        Ok(self.add(product))
    }

    /// Remove the record with `id`. Returns `false` (no mutation) when the
    /// id is absent.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.products.remove(index);
                self.save();
                true
            }
            None => false,
        }
    }

    /// Apply the provided fields to the record with `id`.
    ///
    /// Fields left as `None` are unchanged. An invalid value fails the whole
    /// update and leaves the record exactly as it was; `Ok(false)` means the
    /// id is absent.
    pub fn update(
        &mut self,
        id: i64,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> DomainResult<bool> {
        let Some(index) = self.position_of(id) else {
            return Ok(false);
        };

        // Stage the changes on a copy so a late validation failure cannot
        // leave a half-updated record behind.
        let mut updated = self.products[index].clone();
        if let Some(quantity) = quantity {
            updated.set_quantity(quantity)?;
        }
        if let Some(price) = price {
            updated.set_price(price)?;
        }

        self.products[index] = updated;
        self.save();
        Ok(true)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.position_of(id).map(|index| &self.products[index])
    }

    /// Substring search against product names.
    ///
    /// Matching is case-insensitive; this is the one search policy for every
    /// adapter.
    pub fn search_by_name(&self, text: &str) -> Vec<Product> {
        let needle = text.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Immutable view of the collection, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
