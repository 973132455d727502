//! Arena-backed lexical scopes.
//!
//! Scopes live in one `Vec`; the active scope is always the last record and
//! every record points at its parent by index. Entering a block appends,
//! leaving truncates. The checker uses `Scopes<Type>`, the evaluator
//! `Scopes<Value>`.
//!
//! A `ScopeId` pairs an index with a serial number so an id captured while
//! a scope was live can be recognised as stale once that slot is reused.

use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to one scope record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId {
    index: u32,
    serial: u32,
}

impl ScopeId {
    /// Position of the scope in the arena (the root is 0).
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// `assign` found no binding for the name in any enclosing scope.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Unbound;

impl fmt::Display for Unbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("name is not bound in any enclosing scope")
    }
}

impl std::error::Error for Unbound {}

#[derive(Clone, Debug)]
struct ScopeRecord<T> {
    name: String,
    parent: Option<u32>,
    serial: u32,
    bindings: FxHashMap<String, T>,
}

/// A stack of named scopes with parent links.
#[derive(Clone, Debug)]
pub struct Scopes<T> {
    records: Vec<ScopeRecord<T>>,
    next_serial: u32,
}

impl<T> Scopes<T> {
    /// Create a scope arena holding only a root scope called `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        Scopes {
            records: vec![ScopeRecord {
                name: root_name.into(),
                parent: None,
                serial: 0,
                bindings: FxHashMap::default(),
            }],
            next_serial: 1,
        }
    }

    /// Id of the root scope.
    #[inline]
    pub fn root(&self) -> ScopeId {
        ScopeId {
            index: 0,
            serial: 0,
        }
    }

    /// Id of the active scope.
    #[inline]
    pub fn current(&self) -> ScopeId {
        let index = self.records.len() - 1;
        ScopeId {
            index: index as u32,
            serial: self.records[index].serial,
        }
    }

    /// Number of records in the arena, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `id` still refers to the scope it was taken from.
    pub fn is_live(&self, id: ScopeId) -> bool {
        self.records
            .get(id.index())
            .is_some_and(|record| record.serial == id.serial)
    }

    /// Enter a child of the active scope.
    pub fn push(&mut self, name: impl Into<String>) -> ScopeId {
        let parent = self.current().index;
        self.push_record(name.into(), parent)
    }

    /// Enter a child of `parent`, which need not be the active scope.
    ///
    /// A stale `parent` falls back to the root.
    pub fn push_with_parent(&mut self, name: impl Into<String>, parent: ScopeId) -> ScopeId {
        let parent = if self.is_live(parent) {
            parent
        } else {
            self.root()
        };
        self.push_record(name.into(), parent.index)
    }

    fn push_record(&mut self, name: String, parent: u32) -> ScopeId {
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        self.records.push(ScopeRecord {
            name,
            parent: Some(parent),
            serial,
            bindings: FxHashMap::default(),
        });
        self.current()
    }

    /// Leave the active scope, discarding its bindings.
    ///
    /// Returns `false` (and does nothing) at the root.
    pub fn pop(&mut self) -> bool {
        if self.records.len() > 1 {
            self.records.pop();
            true
        } else {
            false
        }
    }

    /// Pop every scope above `len` records. Used to unwind after a failure.
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len.max(1));
    }

    /// Bind `name` in the active scope, returning that scope's previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let index = self.records.len() - 1;
        self.records[index].bindings.insert(name.into(), value)
    }

    /// Look `name` up from the active scope outward.
    pub fn get(&self, name: &str) -> Option<&T> {
        let index = self.owner_index(name)?;
        self.records[index].bindings.get(name)
    }

    /// Overwrite `name` in the nearest scope that binds it, returning the old value.
    pub fn assign(&mut self, name: &str, value: T) -> Result<T, Unbound> {
        let index = self.owner_index(name).ok_or(Unbound)?;
        let slot = self.records[index].bindings.get_mut(name).ok_or(Unbound)?;
        Ok(std::mem::replace(slot, value))
    }

    fn owner_index(&self, name: &str) -> Option<usize> {
        self.chain().find(|&index| self.records[index].bindings.contains_key(name))
    }

    /// Indices from the active scope to the root.
    fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        let mut next = Some(self.records.len() - 1);
        std::iter::from_fn(move || {
            let index = next?;
            next = self.records[index].parent.map(|parent| parent as usize);
            Some(index)
        })
    }

    /// Names of the scopes on the active chain, root first.
    pub fn path(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .chain()
            .map(|index| self.records[index].name.as_str())
            .collect();
        names.reverse();
        names
    }

    /// Active chain joined with `::`, for trace output.
    pub fn path_string(&self) -> String {
        self.path().join("::")
    }
}

#[cfg(test)]
mod tests;
