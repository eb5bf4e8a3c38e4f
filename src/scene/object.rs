use std::rc::Rc;

use crate::resource::{Geometry, Material};

/// A renderable binding carried by a scene node: one geometry, one
/// material, and the per-mesh shadow flags.
///
/// The component does not render; an `Object` is the record the host
/// renderer reads when it walks the hierarchy.
#[derive(Clone, Debug)]
pub struct Object {
    geometry: Rc<Geometry>,
    material: Rc<Material>,
    cast_shadow: bool,
    receive_shadow: bool,
}

impl Object {
    /// Creates an object binding `geometry` to `material`.
    ///
    /// Shadows are on by default, both ways.
    pub fn new(geometry: Rc<Geometry>, material: Rc<Material>) -> Object {
        Object {
            geometry,
            material,
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    /// The bound geometry.
    #[inline]
    pub fn geometry(&self) -> &Rc<Geometry> {
        &self.geometry
    }

    /// The bound material.
    #[inline]
    pub fn material(&self) -> &Rc<Material> {
        &self.material
    }

    /// Rebinds the material.
    #[inline]
    pub fn set_material(&mut self, material: Rc<Material>) {
        self.material = material;
    }

    /// Whether this object casts shadows.
    #[inline]
    pub fn casts_shadow(&self) -> bool {
        self.cast_shadow
    }

    /// Whether this object receives shadows.
    #[inline]
    pub fn receives_shadow(&self) -> bool {
        self.receive_shadow
    }

    /// Enables or disables shadow casting.
    #[inline]
    pub fn set_cast_shadow(&mut self, cast: bool) {
        self.cast_shadow = cast;
    }

    /// Enables or disables shadow receiving.
    #[inline]
    pub fn set_receive_shadow(&mut self, receive: bool) {
        self.receive_shadow = receive;
    }
}
