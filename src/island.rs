//! The island model: a fixed hierarchy bound to one specific asset.
//!
//! Everything here is bespoke to the showcased island scene: node
//! names, transforms and material assignments mirror the authored
//! asset and have no meaning outside it.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, PI};

use glamx::{Pose3, Quat, Vec3};

use crate::error::Error;
use crate::resource::{AssetLibrary, Geometry, Material};
use crate::scene::{Object, SceneNode};

/// Every geometry name the island binds, as the asset exports them.
pub const GEOMETRY_NAMES: [&str; 31] = [
    "Plane",
    "Plane001",
    "Plane002",
    "Plane003",
    "Sphere",
    "Sphere001",
    "Vert001",
    "Vert001_1",
    "Vert002",
    "Circle",
    "Circle001",
    "Circle002",
    "Circle003",
    "Circle004",
    "Circle005",
    "Circle006",
    "Circle007",
    "Circle008",
    "Circle009",
    "Circle010",
    "Circle011",
    "Circle012",
    "Circle013",
    "Circle014",
    "Plane004",
    "Plane005",
    "Plane006",
    "Circle015",
    "Circle016",
    "Circle017",
    "Circle018",
];

/// Every material name the island binds.
///
/// `Vert002` is listed because the asset bakes that mesh's material
/// into the mesh itself; loaders register such materials under the
/// mesh name.
pub const MATERIAL_NAMES: [&str; 12] = [
    "Material.001",
    "Material.002",
    "Material.003",
    "Material.004",
    "Material.005",
    "Material.006",
    "Material.007",
    "Material.008",
    "Material.009",
    "Material.010",
    "Material.011",
    "Vert002",
];

/// The ring of circles around `Vert002`: name and XYZ Euler rotation.
/// They share the position `(0, 2.291, 0)` and `Material.007`.
const SPOKES: [(&str, [f32; 3]); 13] = [
    ("Circle001", [0.0, 0.0, 0.0]),
    ("Circle002", [0.0, 0.0, 0.0]),
    ("Circle003", [0.0, -FRAC_PI_6, 0.0]),
    ("Circle004", [0.0, -FRAC_PI_3, 0.0]),
    ("Circle005", [0.0, -FRAC_PI_2, 0.0]),
    ("Circle006", [PI, -FRAC_PI_3, PI]),
    ("Circle007", [PI, -FRAC_PI_6, PI]),
    ("Circle008", [PI, 0.0, PI]),
    ("Circle009", [-PI, FRAC_PI_6, -PI]),
    ("Circle010", [-PI, FRAC_PI_3, -PI]),
    ("Circle011", [0.0, FRAC_PI_2, 0.0]),
    ("Circle012", [0.0, FRAC_PI_3, 0.0]),
    ("Circle013", [0.0, FRAC_PI_6, 0.0]),
];

/// The asset authors rotations as XYZ Euler triplets.
fn euler_xyz(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_axis_angle(Vec3::X, x)
        * Quat::from_axis_angle(Vec3::Y, y)
        * Quat::from_axis_angle(Vec3::Z, z)
}

fn add_mesh(
    parent: &mut SceneNode,
    library: &AssetLibrary,
    name: &str,
    material: &str,
) -> Result<SceneNode, Error> {
    let geometry = library.require_geometry(name)?;
    let material = library.require_material(material)?;
    let node = parent
        .add_object(Vec3::ONE, Pose3::IDENTITY, Object::new(geometry, material))
        .set_name(name);
    Ok(node)
}

/// The island model: the assembled node hierarchy plus the one yaw
/// value the orientation controller drives.
///
/// The hierarchy is retained: the host renderer walks
/// [`root`](Island::root) every frame, and the only thing that moves
/// at runtime is the root's rotation around the vertical axis.
pub struct Island {
    root: SceneNode,
    yaw: f32,
}

impl Island {
    /// Assembles the island hierarchy, resolving every geometry and
    /// material name against `library`.
    ///
    /// Fails with the offending name if the asset is incomplete.
    pub fn build(library: &AssetLibrary) -> Result<Island, Error> {
        let mut root = SceneNode::empty().set_name("Island");
        let mut scene = root.add_group().set_name("Scene");

        let mut plane = add_mesh(&mut scene, library, "Plane", "Material.004")?
            .set_position(Vec3::new(-0.594, 0.292, 1.363))
            .set_rotation(euler_xyz(0.0, -0.807, 0.0))
            .set_local_scale(0.977, 0.977, 0.977);
        let _ = add_mesh(&mut plane, library, "Plane001", "Material.004")?
            .set_position(Vec3::new(0.993, 0.319, -0.066))
            .set_rotation(euler_xyz(0.0, 0.42, 0.0));
        let _ = add_mesh(&mut plane, library, "Plane002", "Material.005")?
            .set_position(Vec3::new(0.559, 0.038, 0.0));
        // Mirrored copy of Plane001 on the other side.
        let _ = add_mesh(&mut plane, library, "Plane003", "Material.004")?
            .set_position(Vec3::new(-0.992, 0.319, -0.066))
            .set_rotation(euler_xyz(-PI, 1.215, 0.0))
            .set_local_scale(-1.0, -1.0, -1.0);

        let mut sphere = add_mesh(&mut scene, library, "Sphere", "Material.001")?
            .set_rotation(euler_xyz(0.0, -0.428, 0.0))
            .set_local_scale(0.926, 0.926, 0.926);
        let _ = add_mesh(&mut sphere, library, "Sphere001", "Material.002")?;

        let mut vert = sphere
            .add_group()
            .set_name("Vert")
            .set_position(Vec3::new(-0.014, -0.001, 0.008))
            .set_rotation(euler_xyz(0.0, 0.504, -0.375));
        let _ = add_mesh(&mut vert, library, "Vert001", "Material.009")?;
        let _ = add_mesh(&mut vert, library, "Vert001_1", "Material.010")?;

        let mut vert002 = add_mesh(&mut sphere, library, "Vert002", "Vert002")?
            .set_position(Vec3::new(0.055, -0.155, 0.029))
            .set_rotation(euler_xyz(0.562, -0.828, 0.51))
            .set_local_scale(1.13, 1.13, 1.13);
        let _ = add_mesh(&mut vert002, library, "Circle", "Material.008")?
            .set_position(Vec3::new(0.0, 2.291, 0.0));
        for (name, euler) in SPOKES.iter() {
            let _ = add_mesh(&mut vert002, library, name, "Material.007")?
                .set_position(Vec3::new(0.0, 2.291, 0.0))
                .set_rotation(euler_xyz(euler[0], euler[1], euler[2]));
        }

        let _ = add_mesh(&mut scene, library, "Circle014", "Material.003")?;

        let mut plane004 = add_mesh(&mut scene, library, "Plane004", "Material.006")?
            .set_position(Vec3::new(1.734, -0.01, -0.243))
            .set_rotation(euler_xyz(-PI, 0.424, -PI))
            .set_local_scale(0.834, 0.834, 0.834);
        let _ = add_mesh(&mut plane004, library, "Plane005", "Material.007")?
            .set_position(Vec3::new(0.0, 0.192, 0.005));

        let _ = add_mesh(&mut scene, library, "Plane006", "Material.011")?;

        let _ = add_mesh(&mut scene, library, "Circle015", "Material.006")?
            .set_position(Vec3::new(2.301, 0.0, 0.349))
            .set_local_scale(0.803, 0.803, 0.803);
        let _ = add_mesh(&mut scene, library, "Circle016", "Material.006")?
            .set_position(Vec3::new(1.274, 0.0, -1.225))
            .set_local_scale(0.427, 0.427, 0.427);
        let _ = add_mesh(&mut scene, library, "Circle017", "Material.006")?
            .set_position(Vec3::new(1.599, 0.0, 1.844))
            .set_local_scale(0.336, 0.336, 0.336);
        let _ = add_mesh(&mut scene, library, "Circle018", "Material.006")?
            .set_position(Vec3::new(-1.467, 0.0, -0.84))
            .set_local_scale(0.336, 0.336, 0.336);

        let _ = scene
            .add_group()
            .set_name("Empty004")
            .set_rotation(euler_xyz(0.0, -0.945, 0.0));

        let mut count = 0;
        root.apply_to_scene_nodes(&mut |_| count += 1);
        log::debug!("island hierarchy bound: {} nodes", count);

        Ok(Island { root, yaw: 0.0 })
    }

    /// The root node the host renderer walks and the yaw is applied
    /// to. Nodes are shared handles, so this can be stored on the host
    /// side once.
    pub fn root(&self) -> SceneNode {
        self.root.clone()
    }

    /// Finds a node of the hierarchy by name.
    pub fn node(&self, name: &str) -> Option<SceneNode> {
        self.root.find(name)
    }

    /// The current rotation around the vertical axis, in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotates the whole island to `angle` radians around the vertical
    /// axis.
    pub fn set_yaw(&mut self, angle: f32) {
        self.yaw = angle;
        let _ = self
            .root
            .set_rotation(Quat::from_axis_angle(Vec3::Y, angle));
    }
}

/// A library holding a placeholder entry for every name the island
/// needs.
///
/// Stands in for a real loader in tests, demos and host code that
/// wires things up before assets arrive.
pub fn placeholder_library() -> AssetLibrary {
    let mut library = AssetLibrary::new();

    for name in GEOMETRY_NAMES.iter() {
        let _ = library.add_geometry(Geometry::new(*name));
    }
    for name in MATERIAL_NAMES.iter() {
        let _ = library.add_material(Material::new(*name));
    }

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_binds_every_geometry() {
        let island = Island::build(&placeholder_library()).unwrap();

        for name in GEOMETRY_NAMES.iter() {
            let node = island.node(name).unwrap_or_else(|| panic!("missing {}", name));
            assert!(node.data().has_object(), "{} should carry an object", name);
        }
    }

    #[test]
    fn hierarchy_shape_matches_the_asset() {
        let island = Island::build(&placeholder_library()).unwrap();

        // 31 meshes + Island, Scene, Vert and Empty004 groups.
        let mut count = 0;
        island.root().apply_to_scene_nodes(&mut |_| count += 1);
        assert_eq!(count, 35);

        // Spot-check nesting: the spoke ring hangs off Vert002, which
        // hangs off Sphere.
        let sphere = island.node("Sphere").unwrap();
        assert!(sphere.find("Circle013").is_some());
        assert!(island.node("Plane").unwrap().find("Plane003").is_some());

        // Groups carry no object.
        assert!(!island.node("Empty004").unwrap().data().has_object());
        assert!(!island.node("Vert").unwrap().data().has_object());
    }

    #[test]
    fn transforms_match_the_asset() {
        let island = Island::build(&placeholder_library()).unwrap();

        let plane = island.node("Plane").unwrap();
        assert_eq!(plane.position(), Vec3::new(-0.594, 0.292, 1.363));
        assert_eq!(plane.local_scale(), Vec3::new(0.977, 0.977, 0.977));

        // The mirrored wing keeps its negative scale.
        let mirrored = island.node("Plane003").unwrap();
        assert_eq!(mirrored.local_scale(), Vec3::new(-1.0, -1.0, -1.0));

        let spoke = island.node("Circle005").unwrap();
        assert_eq!(spoke.position(), Vec3::new(0.0, 2.291, 0.0));
    }

    #[test]
    fn every_mesh_casts_and_receives_shadows() {
        let island = Island::build(&placeholder_library()).unwrap();

        island.root().apply_to_scene_nodes(&mut |node| {
            if let Some(object) = node.data().object() {
                assert!(object.casts_shadow());
                assert!(object.receives_shadow());
            }
        });
    }

    #[test]
    fn baked_material_binds_under_the_mesh_name() {
        let island = Island::build(&placeholder_library()).unwrap();
        let vert002 = island.node("Vert002").unwrap();
        assert_eq!(vert002.data().object().unwrap().material().name(), "Vert002");
    }

    #[test]
    fn missing_names_are_reported() {
        let mut library = placeholder_library();
        library.remove_geometry("Sphere001");
        assert_eq!(
            Island::build(&library).err(),
            Some(Error::MissingGeometry("Sphere001".to_string()))
        );

        let mut library = placeholder_library();
        library.remove_material("Material.007");
        assert_eq!(
            Island::build(&library).err(),
            Some(Error::MissingMaterial("Material.007".to_string()))
        );
    }

    #[test]
    fn yaw_drives_the_root_rotation() {
        let mut island = Island::build(&placeholder_library()).unwrap();

        island.set_yaw(1.25);
        assert_eq!(island.yaw(), 1.25);

        let expected = Quat::from_axis_angle(Vec3::Y, 1.25);
        let actual = island.root().rotation();
        assert!((actual.x - expected.x).abs() < 1.0e-6);
        assert!((actual.y - expected.y).abs() < 1.0e-6);
        assert!((actual.z - expected.z).abs() < 1.0e-6);
        assert!((actual.w - expected.w).abs() < 1.0e-6);
    }
}
