//! Crate error type.

use thiserror::Error;

/// Errors produced while binding the model hierarchy to loaded assets.
///
/// The component never decodes assets itself; the only thing that can
/// go wrong on its side is a name it needs being absent from the
/// library the host handed over.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A geometry name the model needs is absent from the asset library.
    #[error("geometry `{0}` is not in the asset library")]
    MissingGeometry(String),

    /// A material name the model needs is absent from the asset library.
    #[error("material `{0}` is not in the asset library")]
    MissingMaterial(String),
}
