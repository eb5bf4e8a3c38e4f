use glamx::{Pose3, Quat, Vec3};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::scene::Object;

/// The data contained by a `SceneNode`.
pub struct SceneNodeData {
    name: Option<String>,
    local_scale: Vec3,
    local_transform: Pose3,
    world_scale: Vec3,
    world_transform: Pose3,
    visible: bool,
    up_to_date: bool,
    children: Vec<SceneNode>,
    object: Option<Object>,
    parent: Option<Weak<RefCell<SceneNodeData>>>,
}

/// A node of the scene graph.
///
/// This may represent a group of other nodes, and/or carry an
/// [`Object`] binding a geometry and material for the host renderer.
/// Nodes are cheap clonable handles to shared data, so a node obtained
/// during assembly keeps pointing at the same place in the hierarchy.
#[derive(Clone)]
pub struct SceneNode {
    data: Rc<RefCell<SceneNodeData>>,
}

impl SceneNodeData {
    fn set_parent(&mut self, parent: Weak<RefCell<SceneNodeData>>) {
        self.parent = Some(parent);
    }

    fn remove_from_parent(&mut self, to_remove: &SceneNode) {
        let _ = self.parent.as_ref().map(|p| {
            if let Some(bp) = p.upgrade() {
                bp.borrow_mut().remove(to_remove);
            }
        });
    }

    fn remove(&mut self, o: &SceneNode) {
        if let Some(i) = self
            .children
            .iter()
            .rposition(|e| std::ptr::eq(&*o.data, &*e.data))
        {
            let _ = self.children.swap_remove(i);
        }
    }

    /// Whether this node carries an `Object`.
    #[inline]
    pub fn has_object(&self) -> bool {
        self.object.is_some()
    }

    /// Whether this node has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The node's name, if it has one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A reference to the object possibly carried by this node.
    #[inline]
    pub fn object(&self) -> Option<&Object> {
        self.object.as_ref()
    }

    /// A mutable reference to the object possibly carried by this node.
    #[inline]
    pub fn object_mut(&mut self) -> Option<&mut Object> {
        self.object.as_mut()
    }

    fn do_propagate_transforms(&mut self, transform: Pose3, scale: Vec3) {
        if !self.up_to_date {
            self.up_to_date = true;
            self.world_transform = transform * self.local_transform;
            self.world_scale = scale * self.local_scale;
        }

        for c in self.children.iter_mut() {
            let mut bc = c.data_mut();
            bc.do_propagate_transforms(self.world_transform, self.world_scale);
        }
    }

    fn invalidate(&mut self) {
        self.up_to_date = false;

        for c in self.children.iter_mut() {
            let mut dm = c.data_mut();

            if dm.up_to_date {
                dm.invalidate()
            }
        }
    }

    fn update(&mut self) {
        if !self.up_to_date {
            if let Some(ref mut p) = self.parent {
                if let Some(dp) = p.upgrade() {
                    let mut dp = dp.borrow_mut();
                    dp.update();
                    self.world_transform = dp.world_transform * self.local_transform;
                    self.world_scale = dp.world_scale * self.local_scale;
                    self.up_to_date = true;
                    return;
                }
            }

            // no parent
            self.world_transform = self.local_transform;
            self.world_scale = self.local_scale;
            self.up_to_date = true;
        }
    }
}

impl Default for SceneNode {
    fn default() -> SceneNode {
        SceneNode::empty()
    }
}

impl SceneNode {
    /// Creates a new unrooted scene node.
    pub fn new(local_scale: Vec3, local_transform: Pose3, object: Option<Object>) -> SceneNode {
        let data = SceneNodeData {
            name: None,
            local_scale,
            local_transform,
            world_transform: local_transform,
            world_scale: local_scale,
            visible: true,
            up_to_date: false,
            children: Vec::new(),
            object,
            parent: None,
        };

        SceneNode {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Creates a new empty scene node with identity transformations.
    pub fn empty() -> SceneNode {
        SceneNode::new(Vec3::ONE, Pose3::IDENTITY, None)
    }

    /// Returns an immutable reference to this node's internal data.
    pub fn data(&self) -> Ref<'_, SceneNodeData> {
        self.data.borrow()
    }

    /// Returns a mutable reference to this node's internal data.
    pub fn data_mut(&mut self) -> RefMut<'_, SceneNodeData> {
        self.data.borrow_mut()
    }

    /// Names this node.
    pub fn set_name(&mut self, name: impl Into<String>) -> Self {
        self.data_mut().name = Some(name.into());
        self.clone()
    }

    /// The node's name, if it has one.
    pub fn name(&self) -> Option<String> {
        self.data().name.clone()
    }

    /// Searches this node and its descendants for a node named `name`.
    pub fn find(&self, name: &str) -> Option<SceneNode> {
        if self.data().name() == Some(name) {
            return Some(self.clone());
        }

        for c in self.data().children.iter() {
            if let Some(found) = c.find(name) {
                return Some(found);
            }
        }

        None
    }

    /// Removes this node from its parent in the scene graph.
    pub fn detach(&mut self) {
        let self_self = self.clone();
        self.data_mut().remove_from_parent(&self_self);
        self.data_mut().parent = None
    }

    /// Adds an empty group node as a child of this node.
    ///
    /// A group carries no object; it exists to transform its children
    /// together.
    pub fn add_group(&mut self) -> SceneNode {
        let node = SceneNode::empty();

        self.add_child(node.clone());

        node
    }

    /// Adds an existing node as a child of this node.
    ///
    /// # Panics
    /// Panics if the node already has a parent.
    pub fn add_child(&mut self, node: SceneNode) {
        assert!(
            node.data().is_root(),
            "The added node must not have a parent yet."
        );

        let mut node = node;
        let self_weak_ptr = Rc::downgrade(&self.data);
        node.data_mut().set_parent(self_weak_ptr);
        // The node's cached world transform was computed as a root.
        node.data_mut().invalidate();
        self.data_mut().children.push(node)
    }

    /// Adds a new node carrying `object` as a child of this node.
    pub fn add_object(
        &mut self,
        local_scale: Vec3,
        local_transform: Pose3,
        object: Object,
    ) -> SceneNode {
        let node = SceneNode::new(local_scale, local_transform, Some(object));

        self.add_child(node.clone());

        node
    }

    /// Applies a closure to this node and all of its descendants.
    #[inline]
    pub fn apply_to_scene_nodes_mut<F: FnMut(&mut SceneNode)>(&mut self, f: &mut F) {
        f(self);

        for c in self.data_mut().children.iter_mut() {
            c.apply_to_scene_nodes_mut(f)
        }
    }

    /// Applies a closure to this node and all of its descendants.
    #[inline]
    pub fn apply_to_scene_nodes<F: FnMut(&SceneNode)>(&self, f: &mut F) {
        f(self);

        for c in self.data().children.iter() {
            c.apply_to_scene_nodes(f)
        }
    }

    /// Whether this node is drawn by the host renderer.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.data().visible
    }

    /// Shows or hides this node and everything below it.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) -> Self {
        self.data_mut().visible = visible;
        self.clone()
    }

    /// Sets the scale of this node relative to its parent.
    #[inline]
    pub fn set_local_scale(&mut self, sx: f32, sy: f32, sz: f32) -> Self {
        let mut d = self.data_mut();
        d.local_scale = Vec3::new(sx, sy, sz);
        d.invalidate();
        drop(d);
        self.clone()
    }

    /// The scale of this node relative to its parent.
    #[inline]
    pub fn local_scale(&self) -> Vec3 {
        self.data().local_scale
    }

    /// Sets the full local transformation of this node.
    #[inline]
    pub fn set_pose(&mut self, t: Pose3) -> Self {
        let mut d = self.data_mut();
        d.local_transform = t;
        d.invalidate();
        drop(d);
        self.clone()
    }

    /// The local transformation of this node.
    #[inline]
    pub fn local_transformation(&self) -> Pose3 {
        self.data().local_transform
    }

    /// Sets the translation of this node relative to its parent.
    #[inline]
    pub fn set_position(&mut self, t: Vec3) -> Self {
        let mut d = self.data_mut();
        d.local_transform.translation = t;
        d.invalidate();
        drop(d);
        self.clone()
    }

    /// The translation of this node relative to its parent.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.data().local_transform.translation
    }

    /// Sets the orientation of this node relative to its parent.
    #[inline]
    pub fn set_rotation(&mut self, r: Quat) -> Self {
        let mut d = self.data_mut();
        d.local_transform.rotation = r;
        d.invalidate();
        drop(d);
        self.clone()
    }

    /// The orientation of this node relative to its parent.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.data().local_transform.rotation
    }

    /// Appends a rotation to this node's orientation.
    #[inline]
    pub fn rotate(&mut self, r: Quat) -> Self {
        let mut d = self.data_mut();
        d.local_transform.rotation = r * d.local_transform.rotation;
        d.invalidate();
        drop(d);
        self.clone()
    }

    /// The world-space pose of this node, recomputed on demand from
    /// its ancestors.
    pub fn world_pose(&self) -> Pose3 {
        self.data.borrow_mut().update();
        self.data().world_transform
    }

    /// The world-space scale of this node.
    pub fn world_scale(&self) -> Vec3 {
        self.data.borrow_mut().update();
        self.data().world_scale
    }

    /// Refreshes the world transform of every node below this one.
    ///
    /// Hosts call this once per frame before walking the hierarchy for
    /// rendering.
    pub fn propagate_transforms(&mut self) {
        self.data_mut()
            .do_propagate_transforms(Pose3::IDENTITY, Vec3::ONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Geometry, Material};
    use crate::scene::Object;
    use std::rc::Rc;

    fn leaf_object() -> Object {
        Object::new(
            Rc::new(Geometry::new("g")),
            Rc::new(Material::new("m")),
        )
    }

    #[test]
    fn world_pose_composes_ancestors() {
        let mut root = SceneNode::empty();
        let mut group = root.add_group();
        let _ = group.set_position(Vec3::new(1.0, 0.0, 0.0));

        let mut leaf = group.add_object(Vec3::ONE, Pose3::IDENTITY, leaf_object());
        let _ = leaf.set_position(Vec3::new(0.0, 2.0, 0.0));

        let world = leaf.world_pose();
        assert_eq!(world.translation, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn setters_invalidate_cached_world_transforms() {
        let mut root = SceneNode::empty();
        let mut child = root.add_group();

        assert_eq!(child.world_pose().translation, Vec3::ZERO);

        let _ = root.set_position(Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(child.world_pose().translation, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn world_scale_multiplies_down_the_tree() {
        let mut root = SceneNode::empty();
        let _ = root.set_local_scale(2.0, 2.0, 2.0);
        let mut child = root.add_group();
        let _ = child.set_local_scale(0.5, 1.0, -1.0);

        assert_eq!(child.world_scale(), Vec3::new(1.0, 2.0, -2.0));
    }

    #[test]
    fn find_walks_the_hierarchy() {
        let mut root = SceneNode::empty().set_name("root");
        let mut a = root.add_group().set_name("a");
        let _ = a.add_group().set_name("deep");

        assert!(root.find("deep").is_some());
        assert!(root.find("missing").is_none());
        assert_eq!(root.find("root").unwrap().name().as_deref(), Some("root"));
    }

    #[test]
    fn detach_removes_from_parent() {
        let mut root = SceneNode::empty();
        let mut child = root.add_group().set_name("child");
        assert!(root.find("child").is_some());

        child.detach();
        assert!(root.find("child").is_none());
        assert!(child.data().is_root());
    }

    #[test]
    #[should_panic]
    fn reparenting_without_detach_panics() {
        let mut root = SceneNode::empty();
        let child = root.add_group();

        let mut other = SceneNode::empty();
        other.add_child(child);
    }
}
