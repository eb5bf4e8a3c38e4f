//! Named handles to externally loaded assets.

pub use self::library::{AssetLibrary, Geometry, Material};

mod library;
