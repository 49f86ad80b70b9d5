//! Material property table used by the confinement model.

use enginuity_core::DomainError;
use enginuity_core::DomainResult;
use enginuity_core::error::ensure_positive;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name every unknown lookup resolves to.
pub const DEFAULT_MATERIAL: &str = "lithium";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    /// Specific heat capacity (J/(kg·K)).
    pub heat_capacity: f64,
    /// Magnetic permeability (H/m).
    pub permeability: f64,
    /// Density (kg/m³).
    pub density: f64,
    /// Cross-section area (m²).
    pub area: f64,
}

impl MaterialProperties {
    pub const LITHIUM: MaterialProperties = MaterialProperties {
        heat_capacity: 3_600.0,
        permeability: 1.26e-6,
        density: 530.0,
        area: 1.2,
    };

    pub const TUNGSTEN: MaterialProperties = MaterialProperties {
        heat_capacity: 134.0,
        permeability: 1.1e-6,
        density: 19_250.0,
        area: 0.9,
    };

    pub fn validate(&self) -> DomainResult<()> {
        ensure_positive("heat_capacity", self.heat_capacity)?;
        ensure_positive("permeability", self.permeability)?;
        ensure_positive("density", self.density)?;
        ensure_positive("area", self.area)?;
        Ok(())
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMaterial {
    pub name: String,
    pub properties: MaterialProperties,
}

/// Name-indexed materials; always contains the lithium fallback.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    entries: Vec<NamedMaterial>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MaterialCatalog {
    /// Lithium and tungsten.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                NamedMaterial {
                    name: "lithium".to_string(),
                    properties: MaterialProperties::LITHIUM,
                },
                NamedMaterial {
                    name: "tungsten".to_string(),
                    properties: MaterialProperties::TUNGSTEN,
                },
            ],
        }
    }

    /// Builtin table extended (or overridden by name) with `extra`.
    ///
    /// Names are stored trimmed so they match what [`MaterialCatalog::get`]
    /// looks up; a blank name is rejected.
    pub fn with_materials<I>(extra: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = NamedMaterial>,
    {
        let mut catalog = Self::builtin();
        for material in extra {
            material.properties.validate()?;
            catalog.insert(material)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, material: NamedMaterial) -> DomainResult<()> {
        let name = material.name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid("name", f64::NAN, "must not be blank"));
        }
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.properties = material.properties,
            None => self.entries.push(NamedMaterial {
                name: name.to_string(),
                properties: material.properties,
            }),
        }
        Ok(())
    }

    /// Exact (case-insensitive) lookup.
    pub fn get(&self, name: &str) -> Option<&MaterialProperties> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
            .map(|entry| &entry.properties)
    }

    /// Lookup that falls back to lithium for unknown names.
    pub fn lookup(&self, name: &str) -> MaterialProperties {
        if let Some(props) = self.get(name) {
            return *props;
        }
        warn!(
            material = name,
            "unknown material, using {DEFAULT_MATERIAL}"
        );
        self.get(DEFAULT_MATERIAL)
            .copied()
            .unwrap_or(MaterialProperties::LITHIUM)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedMaterial> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
