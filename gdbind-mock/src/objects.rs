/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object table: lifetimes, instance IDs, reference counts and the scene tree.
//!
//! Object pointers handed to the extension are synthetic addresses, never dereferenced. All state lives in a
//! thread-local table, so every thread sees its own engine.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::classdb::ClassInfo;
use crate::value::Value;
use crate::xml::XmlReader;

/// Instance IDs of reference-counted objects have the highest bit set.
pub(crate) const REF_COUNTED_ID_BIT: u64 = 1 << 63;

/// Spacing of synthetic object addresses, so they look like aligned allocations.
const ADDRESS_STRIDE: usize = 16;

thread_local! {
    static OBJECTS: RefCell<ObjectTable> = RefCell::new(ObjectTable::default());
}

#[derive(Default)]
struct ObjectTable {
    objects: HashMap<usize, ObjectData>,
    addresses_by_id: HashMap<u64, usize>,
    singletons: HashMap<&'static str, usize>,
    queued_for_deletion: Vec<usize>,
    last_serial: u64,
    frames_drawn: i64,
}

pub(crate) struct ObjectData {
    pub class: &'static ClassInfo,
    pub instance_id: u64,
    refcount: i64,
    refcount_init: bool,

    /// Plain properties. Only holds values that do not reference objects.
    pub props: HashMap<&'static str, Value>,
    pub node: Option<NodeState>,
    pub xml: Option<Box<XmlReader>>,
    pub varyings: Vec<Varying>,
}

impl ObjectData {
    pub fn xml(&mut self) -> &mut XmlReader {
        self.xml.get_or_insert_with(Box::default)
    }
}

/// Position of a node in the scene tree.
#[derive(Default)]
pub(crate) struct NodeState {
    pub name: String,
    /// Address of the parent, 0 for none.
    pub parent: usize,
    /// In insertion order; see [`ordered_children`].
    pub children: Vec<ChildEntry>,
}

#[derive(Copy, Clone)]
pub(crate) struct ChildEntry {
    pub addr: usize,
    /// Ordinal of `Node.InternalMode`.
    pub internal: i64,
}

pub(crate) struct Varying {
    pub name: String,
    pub mode: i64,
    pub type_: i64,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// References held by values

/// Reference to an object, held by a [`Value`].
///
/// For reference-counted objects, every `ObjectRef` owns one reference: cloning increments the count, dropping
/// decrements it and destroys the object when it was the last one.
pub(crate) struct ObjectRef {
    addr: usize,
    counted: bool,
}

impl ObjectRef {
    /// Takes a new reference to a live object. `None` if the object is dead.
    pub fn acquire(addr: usize) -> Option<Self> {
        let counted = class_of(addr)?.is_ref_counted();
        if counted {
            init_ref(addr);
        }

        Some(Self { addr, counted })
    }

    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Gives up this reference without releasing it; whoever receives the address now owns it.
    pub fn into_raw(self) -> usize {
        let addr = self.addr;
        std::mem::forget(self);
        addr
    }
}

impl Clone for ObjectRef {
    fn clone(&self) -> Self {
        if self.counted {
            reference(self.addr);
        }

        Self {
            addr: self.addr,
            counted: self.counted,
        }
    }
}

impl Drop for ObjectRef {
    fn drop(&mut self) {
        if self.counted && unreference(self.addr) {
            destroy(self.addr);
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lifecycle

/// Instantiates `class`. Reference-counted objects start with one reference that the first `init_ref` takes over.
pub(crate) fn create(class: &'static ClassInfo) -> usize {
    let ref_counted = class.is_ref_counted();
    let is_node = class.inherits("Node");

    OBJECTS.with_borrow_mut(|table| {
        table.last_serial += 1;
        let serial = table.last_serial;

        let addr = serial as usize * ADDRESS_STRIDE;
        let instance_id = if ref_counted { serial | REF_COUNTED_ID_BIT } else { serial };

        let data = ObjectData {
            class,
            instance_id,
            refcount: 1,
            refcount_init: true,
            props: HashMap::new(),
            node: is_node.then(NodeState::default),
            xml: None,
            varyings: Vec::new(),
        };

        table.objects.insert(addr, data);
        table.addresses_by_id.insert(instance_id, addr);
        addr
    })
}

/// Frees an object. Nodes take their children with them.
pub(crate) fn destroy(addr: usize) {
    let removed = OBJECTS.with_borrow_mut(|table| {
        let data = table.objects.remove(&addr)?;
        table.addresses_by_id.remove(&data.instance_id);
        table.singletons.retain(|_, singleton| *singleton != addr);
        Some(data)
    });

    let Some(data) = removed else {
        return;
    };

    if let Some(node) = &data.node {
        if node.parent != 0 {
            with_object(node.parent, |parent| {
                if let Some(parent_node) = &mut parent.node {
                    parent_node.children.retain(|child| child.addr != addr);
                }
            });
        }

        for child in &node.children {
            destroy(child.addr);
        }
    }
}

/// Returns the singleton instance of `class`, creating it on first use.
pub(crate) fn singleton(class: &'static ClassInfo) -> usize {
    let existing = OBJECTS.with_borrow(|table| table.singletons.get(class.name).copied());
    if let Some(addr) = existing {
        return addr;
    }

    let addr = create(class);
    OBJECTS.with_borrow_mut(|table| table.singletons.insert(class.name, addr));
    addr
}

pub(crate) fn queue_free(addr: usize) {
    OBJECTS.with_borrow_mut(|table| {
        if !table.queued_for_deletion.contains(&addr) {
            table.queued_for_deletion.push(addr);
        }
    });
}

/// Ends a frame: frees queued objects and advances the frame counter. Returns the number of freed objects.
pub(crate) fn end_frame() -> usize {
    let queued = OBJECTS.with_borrow_mut(|table| {
        table.frames_drawn += 1;
        std::mem::take(&mut table.queued_for_deletion)
    });

    let mut freed = 0;
    for addr in queued {
        if is_alive(addr) {
            destroy(addr);
            freed += 1;
        }
    }
    freed
}

pub(crate) fn frames_drawn() -> i64 {
    OBJECTS.with_borrow(|table| table.frames_drawn)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Reference counting

/// Increments the count. Fails once the count dropped to zero.
pub(crate) fn reference(addr: usize) -> bool {
    with_object(addr, |obj| {
        if obj.refcount == 0 {
            return false;
        }
        obj.refcount += 1;
        true
    })
    .unwrap_or(false)
}

/// Decrements the count. Returns `true` if it reached zero; destroying the object is up to the caller.
pub(crate) fn unreference(addr: usize) -> bool {
    with_object(addr, |obj| {
        if obj.refcount == 0 {
            return false;
        }
        obj.refcount -= 1;
        obj.refcount == 0
    })
    .unwrap_or(false)
}

/// Like [`reference`], but the first call on a fresh object takes over its initial reference instead.
pub(crate) fn init_ref(addr: usize) -> bool {
    if !reference(addr) {
        return false;
    }

    let first = with_object(addr, |obj| std::mem::replace(&mut obj.refcount_init, false)).unwrap_or(false);
    if first {
        unreference(addr);
    }
    true
}

pub(crate) fn reference_count(addr: usize) -> i64 {
    with_object(addr, |obj| obj.refcount).unwrap_or(0)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Queries

/// Runs `f` on a live object. The table stays borrowed meanwhile: `f` must not drop values that reference objects.
pub(crate) fn with_object<R>(addr: usize, f: impl FnOnce(&mut ObjectData) -> R) -> Option<R> {
    OBJECTS.with_borrow_mut(|table| table.objects.get_mut(&addr).map(f))
}

pub(crate) fn is_alive(addr: usize) -> bool {
    OBJECTS.with_borrow(|table| table.objects.contains_key(&addr))
}

pub(crate) fn class_of(addr: usize) -> Option<&'static ClassInfo> {
    OBJECTS.with_borrow(|table| table.objects.get(&addr).map(|obj| obj.class))
}

pub(crate) fn class_name(addr: usize) -> &'static str {
    class_of(addr).map_or("", |class| class.name)
}

pub(crate) fn inherits(addr: usize, base: &str) -> bool {
    class_of(addr).is_some_and(|class| class.inherits(base))
}

/// Instance ID of a live object, or 0.
pub(crate) fn instance_id(addr: usize) -> u64 {
    OBJECTS.with_borrow(|table| table.objects.get(&addr).map_or(0, |obj| obj.instance_id))
}

/// Address of the live object with this ID, or 0.
pub(crate) fn address_of(instance_id: u64) -> usize {
    OBJECTS.with_borrow(|table| table.addresses_by_id.get(&instance_id).copied().unwrap_or(0))
}

pub(crate) fn live_count() -> usize {
    OBJECTS.with_borrow(|table| table.objects.len())
}

/// Addresses of all live instances of `class` or derived classes.
pub(crate) fn instances_of(class: &str) -> Vec<usize> {
    OBJECTS.with_borrow(|table| {
        table
            .objects
            .iter()
            .filter(|(_, obj)| obj.class.inherits(class))
            .map(|(addr, _)| *addr)
            .collect()
    })
}

/// Text of an object inside `str()`, e.g. `<Node#42>`.
pub(crate) fn describe(addr: usize) -> String {
    OBJECTS.with_borrow(|table| match table.objects.get(&addr) {
        Some(obj) => format!("<{}#{}>", obj.class.name, obj.instance_id as i64),
        None => "<Freed Object>".to_string(),
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Properties

pub(crate) fn prop(addr: usize, key: &'static str) -> Option<Value> {
    with_object(addr, |obj| obj.props.get(key).cloned()).flatten()
}

pub(crate) fn set_prop(addr: usize, key: &'static str, value: Value) {
    let previous = with_object(addr, |obj| obj.props.insert(key, value)).flatten();
    drop(previous);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scene tree

pub(crate) fn parent_of(addr: usize) -> usize {
    with_object(addr, |obj| obj.node.as_ref().map_or(0, |node| node.parent)).unwrap_or(0)
}

pub(crate) fn node_name(addr: usize) -> String {
    with_object(addr, |obj| obj.node.as_ref().map(|node| node.name.clone()))
        .flatten()
        .unwrap_or_default()
}

/// Children sorted the way the engine orders them: internal front, regular, internal back.
pub(crate) fn ordered_children(addr: usize, include_internal: bool) -> Vec<usize> {
    let mut children = with_object(addr, |obj| obj.node.as_ref().map(|node| node.children.clone()))
        .flatten()
        .unwrap_or_default();

    if !include_internal {
        children.retain(|child| child.internal == 0);
    }

    children.sort_by_key(|child| match child.internal {
        1 => 0,
        0 => 1,
        _ => 2,
    });
    children.into_iter().map(|child| child.addr).collect()
}

/// Whether `ancestor` is `addr` itself or one of its parents.
pub(crate) fn is_ancestor_or_self(ancestor: usize, addr: usize) -> bool {
    let mut current = addr;
    while current != 0 {
        if current == ancestor {
            return true;
        }
        current = parent_of(current);
    }
    false
}

pub(crate) fn next_serial() -> u64 {
    OBJECTS.with_borrow_mut(|table| {
        table.last_serial += 1;
        table.last_serial
    })
}

/// Whether all properties are plain values.
#[cfg(test)]
fn holds_no_object_values() -> bool {
    OBJECTS.with_borrow(|table| {
        table
            .objects
            .values()
            .all(|obj| obj.props.values().all(|value| !matches!(value, Value::Object(_))))
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
