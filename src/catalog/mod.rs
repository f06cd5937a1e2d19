//! Immutable catalog of celestial bodies.
//!
//! The catalog is built once (from the built-in table or a TOML file) and
//! shared read-only by the renderer, orbit kinematics, and the camera's
//! focus tracking.

mod body;
mod solar_system;

use std::path::Path;

pub use body::{BodyId, CelestialBody};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// On-disk shape of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    bodies: Vec<CelestialBody>,
}

/// Ordered set of bodies with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    bodies: Vec<CelestialBody>,
    index: FxHashMap<BodyId, usize>,
}

impl BodyCatalog {
    /// Build a catalog from descriptors, rejecting duplicate ids and
    /// negative sizes or distances.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::CatalogParse`] if the descriptors are
    /// inconsistent.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, OrreryError> {
        let mut index = FxHashMap::default();
        for (i, body) in bodies.iter().enumerate() {
            if body.radius < 0.0 || body.distance < 0.0 {
                return Err(OrreryError::CatalogParse(format!(
                    "{} has a negative radius or distance",
                    body.id
                )));
            }
            if index.insert(body.id, i).is_some() {
                return Err(OrreryError::CatalogParse(format!(
                    "duplicate body id {}",
                    body.id
                )));
            }
        }
        Ok(Self { bodies, index })
    }

    /// The built-in Sun plus eight planets.
    #[must_use]
    pub fn solar_system() -> Self {
        let bodies = solar_system::bodies();
        let index = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (body.id, i))
            .collect();
        Self { bodies, index }
    }

    /// Parse a catalog from TOML text (`[[bodies]]` tables).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::CatalogParse`] on malformed TOML or an
    /// inconsistent body list.
    pub fn from_toml(text: &str) -> Result<Self, OrreryError> {
        let file: CatalogFile = toml::from_str(text)
            .map_err(|e| OrreryError::CatalogParse(e.to_string()))?;
        Self::new(file.bodies)
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read, or
    /// [`OrreryError::CatalogParse`] if it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        log::info!(
            "Loaded {} bodies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize the catalog back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::CatalogParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, OrreryError> {
        let file = CatalogFile {
            bodies: self.bodies.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| OrreryError::CatalogParse(e.to_string()))
    }

    /// Look up a body. Ids absent from this catalog resolve to `None`.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    /// Bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The body after `current` in catalog order, wrapping around.
    ///
    /// `None` (or an id not in the catalog) starts from the first body.
    #[must_use]
    pub fn next_after(&self, current: Option<BodyId>) -> Option<BodyId> {
        if self.bodies.is_empty() {
            return None;
        }
        let next = match current.and_then(|id| self.index.get(&id)) {
            Some(&i) => (i + 1) % self.bodies.len(),
            None => 0,
        };
        self.bodies.get(next).map(|body| body.id)
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::solar_system()
    }
}
