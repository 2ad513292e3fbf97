use crate::built_in;
use crate::contract::{Calculator, Category};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// What `register` does when the id is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last registration wins; the replacement is logged
    #[default]
    Replace,
    /// First registration stays; the newcomer is refused
    Reject,
}

/// Lookup table from calculator id to calculator.
///
/// Built once at start-up and then only read, so it can be shared behind an
/// `Arc` without locking. Listing follows first-registration order; a
/// replaced calculator keeps its predecessor's position.
pub struct Catalog {
    calculators: Vec<Box<dyn Calculator>>,
    index: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            calculators: Vec::new(),
            index: HashMap::new(),
            policy,
        }
    }

    /// Catalog holding every built-in calculator.
    pub fn builtin() -> Self {
        Self::builtin_with_policy(DuplicatePolicy::default())
    }

    pub fn builtin_with_policy(policy: DuplicatePolicy) -> Self {
        let mut catalog = Self::with_policy(policy);
        for calculator in built_in::all() {
            if let Err(e) = catalog.register(calculator) {
                warn!(error = %e, "Skipping built-in calculator");
            }
        }
        debug!(count = catalog.len(), "Built-in catalog ready");
        catalog
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Insert `calculator` under its id.
    ///
    /// With [`DuplicatePolicy::Replace`] an existing entry is overwritten and
    /// this never fails except for an empty id.
    pub fn register(&mut self, calculator: Box<dyn Calculator>) -> Result<(), CatalogError> {
        let id = calculator.id().to_string();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }

        match self.index.get(&id) {
            Some(&slot) => match self.policy {
                DuplicatePolicy::Replace => {
                    warn!(
                        id = %id,
                        previous = self.calculators[slot].name(),
                        replacement = calculator.name(),
                        "Replacing registered calculator"
                    );
                    self.calculators[slot] = calculator;
                    Ok(())
                }
                DuplicatePolicy::Reject => {
                    warn!(id = %id, "Refusing duplicate calculator registration");
                    Err(CatalogError::DuplicateId { id })
                }
            },
            None => {
                debug!(id = %id, "Registered calculator");
                self.index.insert(id, self.calculators.len());
                self.calculators.push(calculator);
                Ok(())
            }
        }
    }

    /// The calculator registered under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&dyn Calculator> {
        self.index.get(id).map(|&slot| self.calculators[slot].as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every calculator, in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn Calculator> {
        self.calculators.iter().map(|c| c.as_ref())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.list().map(|c| c.id())
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn Calculator> {
        self.list().filter(move |c| c.category() == category)
    }

    /// Case-insensitive match on id, name, description and tags.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a dyn Calculator> + use<'a> {
        let needle = term.trim().to_lowercase();
        self.list().filter(move |c| {
            needle.is_empty()
                || c.id().to_lowercase().contains(&needle)
                || c.name().to_lowercase().contains(&needle)
                || c.description().to_lowercase().contains(&needle)
                || c.tags().iter().any(|t| t.to_lowercase().contains(&needle))
        })
    }

    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for calculator in self.list() {
            *counts.entry(calculator.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("policy", &self.policy)
            .field("ids", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
