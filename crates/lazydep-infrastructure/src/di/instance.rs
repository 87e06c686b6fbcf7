//! Instances and their resolution slots
//!
//! Every instance keeps one slot per dependency name. A slot is filled either
//! by a constructor override or by the first accessor call; after that the
//! accessor returns the stored value without consulting the table or the
//! resolver again. A failed resolution leaves the slot empty.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use lazydep_domain::value_objects::downcast_value;
use lazydep_domain::{Error, Result, Value, Visibility};
use tracing::trace;

use super::catalog::{Catalog, ClassId};
use crate::registry;

/// Where an accessor call originates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    /// From the instance itself; every visibility is allowed
    Receiver,
    /// From code running on an instance of the given class; allows public
    /// accessors, and protected ones when that class inherits from the
    /// accessor's declaring class
    Peer(ClassId),
    /// From unrelated code; only public accessors
    External,
}

/// Object constructed from a catalog class
pub struct Instance {
    catalog: Catalog,
    class: ClassId,
    slots: DashMap<String, Value>,
}

impl Instance {
    pub(crate) fn new(catalog: Catalog, class: ClassId) -> Self {
        Self {
            catalog,
            class,
            slots: DashMap::new(),
        }
    }

    /// Concrete class of this instance
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Catalog the class belongs to
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Call the accessor for `name` from the instance itself
    pub fn dependency(&self, name: &str) -> Result<Value> {
        self.call(name, CallSite::Receiver)
    }

    /// Call the accessor for `name` and downcast the value to `T`
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        downcast_value(name, self.dependency(name)?)
    }

    /// Call the accessor for `name` from `site`
    ///
    /// Fails with `UnknownDependency` when no declaration on the class or
    /// its ancestors attached an accessor for `name`, and with `AccessDenied`
    /// when the accessor visibility forbids `site`.
    pub fn call(&self, name: &str, site: CallSite) -> Result<Value> {
        let class_name = || self.catalog.class_name(self.class);
        let Some(accessor) = self.catalog.accessor(self.class, name)? else {
            return Err(Error::unknown_dependency(class_name()?, name));
        };

        let allowed = match (accessor.visibility, site) {
            (_, CallSite::Receiver) | (Visibility::Public, _) => true,
            (Visibility::Protected, CallSite::Peer(caller)) => {
                self.catalog.is_kind_of(caller, accessor.owner)?
            }
            _ => false,
        };
        if !allowed {
            return Err(Error::AccessDenied {
                class: class_name()?,
                name: name.to_string(),
                visibility: accessor.visibility,
            });
        }

        self.fetch(name)
    }

    /// Whether the slot for `name` holds a value
    pub fn is_resolved(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Value held by the slot for `name`, without resolving
    pub fn resolved(&self, name: &str) -> Option<Value> {
        self.slots.get(name).map(|slot| slot.value().clone())
    }

    /// Replace the slot for `name` with `value`
    pub fn overwrite<K: Into<String>>(&self, name: K, value: Value) {
        self.slots.insert(name.into(), value);
    }

    fn fetch(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.resolved(name) {
            trace!(dependency = name, "Dependency slot hit");
            return Ok(value);
        }

        trace!(dependency = name, "Dependency slot empty, resolving");
        let descriptor = self.catalog.descriptor(self.class, name)?;
        let value = registry::resolve(&descriptor)?;
        self.slots.insert(name.to_string(), value.clone());
        Ok(value)
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut resolved: Vec<String> = self.slots.iter().map(|slot| slot.key().clone()).collect();
        resolved.sort();
        f.debug_struct("Instance")
            .field("class", &self.class)
            .field("resolved", &resolved)
            .finish()
    }
}
