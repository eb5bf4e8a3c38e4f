//! A cache of the named geometries and materials of one loaded asset.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Error;

/// An opaque handle to one geometry of the loaded asset.
///
/// The component never looks inside a geometry; it only needs a stable
/// name to bind scene nodes to. Whatever the host's loader produces
/// (vertex buffers, GPU handles) lives on the host side, keyed by the
/// same name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    name: String,
}

impl Geometry {
    /// Creates a handle for the geometry registered under `name`.
    pub fn new(name: impl Into<String>) -> Geometry {
        Geometry { name: name.into() }
    }

    /// The name the geometry is registered under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An opaque handle to one material of the loaded asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    name: String,
}

impl Material {
    /// Creates a handle for the material registered under `name`.
    pub fn new(name: impl Into<String>) -> Material {
        Material { name: name.into() }
    }

    /// The name the material is registered under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The named geometry and material caches of one loaded asset.
///
/// The host fills this after its loader finishes; scene assembly then
/// resolves names against it. It is only a cache: entries can be
/// added or replaced at any time, existing nodes keep the handles they
/// resolved.
#[derive(Clone, Debug, Default)]
pub struct AssetLibrary {
    geometries: HashMap<String, Rc<Geometry>>,
    materials: HashMap<String, Rc<Material>>,
}

impl AssetLibrary {
    /// Creates an empty library.
    pub fn new() -> AssetLibrary {
        AssetLibrary::default()
    }

    /// Registers a geometry under its own name, replacing any previous
    /// entry.
    pub fn add_geometry(&mut self, geometry: Geometry) -> Rc<Geometry> {
        let geometry = Rc::new(geometry);
        let _ = self
            .geometries
            .insert(geometry.name().to_string(), geometry.clone());
        geometry
    }

    /// Registers a material under its own name, replacing any previous
    /// entry.
    pub fn add_material(&mut self, material: Material) -> Rc<Material> {
        let material = Rc::new(material);
        let _ = self
            .materials
            .insert(material.name().to_string(), material.clone());
        material
    }

    /// Gets a geometry by name. Returns `None` if it is not registered.
    pub fn get_geometry(&self, name: &str) -> Option<Rc<Geometry>> {
        self.geometries.get(name).cloned()
    }

    /// Gets a material by name. Returns `None` if it is not registered.
    pub fn get_material(&self, name: &str) -> Option<Rc<Material>> {
        self.materials.get(name).cloned()
    }

    /// Removes a geometry from the library.
    pub fn remove_geometry(&mut self, name: &str) {
        let _ = self.geometries.remove(name);
    }

    /// Removes a material from the library.
    pub fn remove_material(&mut self, name: &str) {
        let _ = self.materials.remove(name);
    }

    /// Gets a geometry by name, as an error if it is missing.
    ///
    /// Scene assembly uses this so a renamed or incomplete asset
    /// reports the offending name instead of panicking.
    pub fn require_geometry(&self, name: &str) -> Result<Rc<Geometry>, Error> {
        self.get_geometry(name)
            .ok_or_else(|| Error::MissingGeometry(name.to_string()))
    }

    /// Gets a material by name, as an error if it is missing.
    pub fn require_material(&self, name: &str) -> Result<Rc<Material>, Error> {
        self.get_material(name)
            .ok_or_else(|| Error::MissingMaterial(name.to_string()))
    }

    /// The number of registered geometries.
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    /// The number of registered materials.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let mut library = AssetLibrary::new();
        let _ = library.add_geometry(Geometry::new("Plane"));
        let _ = library.add_material(Material::new("Material.004"));

        assert!(library.get_geometry("Plane").is_some());
        assert!(library.get_geometry("Plame").is_none());
        assert!(library.require_material("Material.004").is_ok());
        assert_eq!(
            library.require_geometry("Sphere"),
            Err(Error::MissingGeometry("Sphere".to_string()))
        );
    }

    #[test]
    fn add_replaces_and_remove_forgets() {
        let mut library = AssetLibrary::new();
        let first = library.add_geometry(Geometry::new("Plane"));
        let second = library.add_geometry(Geometry::new("Plane"));
        assert_eq!(library.geometry_count(), 1);
        // Handles already resolved keep working.
        assert_eq!(first.name(), second.name());

        library.remove_geometry("Plane");
        assert!(library.get_geometry("Plane").is_none());
    }
}
