//! Object identity and parentage.
//!
//! Every widget owns an [`ObjectBase`], which registers it in the process-wide
//! [`ObjectRegistry`] and hands out a stable [`ObjectId`]. The registry tracks
//! the type name, an optional debug name, and the parent/child relationships
//! that containers establish when they adopt a widget.
//!
//! Widgets themselves are owned by ordinary Rust values (usually a `Box<dyn
//! Widget>` inside a container). The registry only mirrors the tree so that
//! ids can be resolved and parentage queried without borrowing the owner.
//!
//! # Example
//!
//! ```
//! use modebutton_core::{global_registry, ObjectBase};
//!
//! struct Segment;
//!
//! let container = ObjectBase::new::<Segment>();
//! let child = ObjectBase::new::<Segment>();
//!
//! child.set_parent(Some(container.id())).unwrap();
//! assert_eq!(child.parent(), Some(container.id()));
//! assert_eq!(global_registry().children(container.id()).unwrap(), vec![child.id()]);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::error::{ObjectError, ObjectResult};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s stay valid until the owning [`ObjectBase`] is dropped.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Trait implemented by everything that owns an [`ObjectBase`].
pub trait Object {
    /// The object's unique id.
    fn object_id(&self) -> ObjectId;
}

/// Registry bookkeeping for one object.
#[derive(Debug)]
struct ObjectData {
    name: String,
    type_name: &'static str,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

impl ObjectData {
    fn new(type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_name,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Thread-safe registry of all live objects.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: RwLock<SlotMap<ObjectId, ObjectData>>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new object of type `T`.
    pub fn register<T: 'static>(&self) -> ObjectId {
        let id = self
            .objects
            .write()
            .insert(ObjectData::new(std::any::type_name::<T>()));
        tracing::trace!(target: targets::OBJECT, ?id, type_name = std::any::type_name::<T>(), "registered object");
        id
    }

    /// Remove an object, detaching it from its parent and orphaning its children.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        let mut objects = self.objects.write();
        let data = objects.remove(id).ok_or(ObjectError::InvalidObjectId)?;

        if let Some(parent) = data.parent
            && let Some(parent_data) = objects.get_mut(parent)
        {
            parent_data.children.retain(|&c| c != id);
        }
        for child in data.children {
            if let Some(child_data) = objects.get_mut(child) {
                child_data.parent = None;
            }
        }
        tracing::trace!(target: targets::OBJECT, ?id, "destroyed object");
        Ok(())
    }

    /// Check whether an id refers to a live object.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.read().contains_key(id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Whether the registry holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// The Rust type name the object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// The object's debug name (empty if never set).
    pub fn name(&self, id: ObjectId) -> ObjectResult<String> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.name.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the object's debug name.
    pub fn set_name(&self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        let mut objects = self.objects.write();
        let data = objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.name = name.into();
        Ok(())
    }

    /// The object's parent, if any.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// The object's children in adoption order.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.objects
            .read()
            .get(id)
            .map(|d| d.children.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Reparent an object. `None` detaches it.
    ///
    /// Fails with [`ObjectError::CircularParentage`] if `parent` is the object
    /// itself or one of its descendants.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        let mut objects = self.objects.write();
        if !objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(new_parent) = parent {
            if !objects.contains_key(new_parent) {
                return Err(ObjectError::InvalidObjectId);
            }
            let mut cursor = Some(new_parent);
            while let Some(ancestor) = cursor {
                if ancestor == id {
                    return Err(ObjectError::CircularParentage);
                }
                cursor = objects.get(ancestor).and_then(|d| d.parent);
            }
        }

        let old_parent = objects.get(id).and_then(|d| d.parent);
        if old_parent == parent {
            return Ok(());
        }

        if let Some(old) = old_parent
            && let Some(old_data) = objects.get_mut(old)
        {
            old_data.children.retain(|&c| c != id);
        }
        if let Some(new_parent) = parent
            && let Some(parent_data) = objects.get_mut(new_parent)
        {
            parent_data.children.push(id);
        }
        if let Some(data) = objects.get_mut(id) {
            data.parent = parent;
        }

        tracing::trace!(target: targets::OBJECT, ?id, ?parent, "reparented object");
        Ok(())
    }
}

/// Get the process-wide object registry, creating it on first use.
pub fn global_registry() -> &'static ObjectRegistry {
    static GLOBAL_REGISTRY: OnceLock<ObjectRegistry> = OnceLock::new();
    GLOBAL_REGISTRY.get_or_init(ObjectRegistry::new)
}

/// Owns one entry in the global registry for the lifetime of a widget.
///
/// Dropping the base destroys the entry and detaches it from the tree.
#[derive(Debug)]
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Register a new object of type `T`.
    pub fn new<T: 'static>() -> Self {
        Self {
            id: global_registry().register::<T>(),
        }
    }

    /// The object's id.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's debug name.
    pub fn name(&self) -> String {
        global_registry().name(self.id).unwrap_or_default()
    }

    /// Set the object's debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        // The id is valid for as long as `self` exists.
        let _ = global_registry().set_name(self.id, name);
    }

    /// The parent object, if any.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry().parent(self.id).ok().flatten()
    }

    /// Reparent this object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry().set_parent(self.id, parent)
    }

    /// Child ids in adoption order.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry().children(self.id).unwrap_or_default()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        let _ = global_registry().destroy(self.id);
    }
}

static_assertions::assert_impl_all!(ObjectBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    #[test]
    fn test_register_and_type_name() {
        let registry = ObjectRegistry::new();
        let id = registry.register::<Dummy>();
        assert!(registry.contains(id));
        assert!(registry.type_name(id).unwrap().ends_with("Dummy"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reparent_moves_child() {
        let registry = ObjectRegistry::new();
        let a = registry.register::<Dummy>();
        let b = registry.register::<Dummy>();
        let child = registry.register::<Dummy>();

        registry.set_parent(child, Some(a)).unwrap();
        assert_eq!(registry.children(a).unwrap(), vec![child]);

        registry.set_parent(child, Some(b)).unwrap();
        assert!(registry.children(a).unwrap().is_empty());
        assert_eq!(registry.children(b).unwrap(), vec![child]);
        assert_eq!(registry.parent(child).unwrap(), Some(b));

        registry.set_parent(child, None).unwrap();
        assert!(registry.children(b).unwrap().is_empty());
        assert_eq!(registry.parent(child).unwrap(), None);
    }

    #[test]
    fn test_circular_parentage_rejected() {
        let registry = ObjectRegistry::new();
        let a = registry.register::<Dummy>();
        let b = registry.register::<Dummy>();
        registry.set_parent(b, Some(a)).unwrap();

        assert_eq!(registry.set_parent(a, Some(b)), Err(ObjectError::CircularParentage));
        assert_eq!(registry.set_parent(a, Some(a)), Err(ObjectError::CircularParentage));
    }

    #[test]
    fn test_destroy_orphans_children() {
        let registry = ObjectRegistry::new();
        let parent = registry.register::<Dummy>();
        let child = registry.register::<Dummy>();
        registry.set_parent(child, Some(parent)).unwrap();

        registry.destroy(parent).unwrap();
        assert!(!registry.contains(parent));
        assert_eq!(registry.parent(child).unwrap(), None);
        assert_eq!(registry.destroy(parent), Err(ObjectError::InvalidObjectId));
    }

    #[test]
    fn test_object_base_drop_unregisters() {
        let base = ObjectBase::new::<Dummy>();
        let id = base.id();
        base.set_name("segment");
        assert_eq!(base.name(), "segment");
        assert!(global_registry().contains(id));

        drop(base);
        assert!(!global_registry().contains(id));
    }
}
