//! Assignments of truth values to variables.

use crate::Rewind;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::hash::Hash;
use hashbrown::HashMap;

/// Map from variables to truth values that can be efficiently restored to earlier states.
///
/// Variables are kept in the order in which they were assigned.
#[derive(Clone, Debug)]
pub struct Assignment<V> {
    map: HashMap<V, bool>,
    /// assigned variables, oldest first
    dom: Vec<V>,
}

/// Number of assigned variables, used to undo later assignments.
#[derive(Copy, Clone, Debug)]
pub struct Ptr {
    dom_len: usize,
}

impl<V> Default for Assignment<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            dom: Vec::new(),
        }
    }
}

impl<V: Display + Eq + Hash> Display for Assignment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "{".fmt(f)?;
        let mut iter = self.iter();
        if let Some((v, b)) = iter.next() {
            write!(f, "{} ↦ {}", v, b)?;
            for (v, b) in iter {
                write!(f, ", {} ↦ {}", v, b)?;
            }
        }
        "}".fmt(f)
    }
}

impl<V> Assignment<V> {
    pub fn len(&self) -> usize {
        self.dom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dom.is_empty()
    }
}

impl<V: Eq + Hash> Assignment<V> {
    /// Obtain the value of a variable.
    pub fn get(&self, v: &V) -> Option<bool> {
        self.map.get(v).copied()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.map.contains_key(v)
    }

    /// Assigned variables and their values, in order of assignment.
    pub fn iter(&self) -> impl Iterator<Item = (&V, bool)> {
        self.dom.iter().map(move |v| (v, self.map[v]))
    }

    /// Omit the most recent assignments to keep only the given number of assignments.
    pub fn set_dom_len(&mut self, new_len: usize) {
        for v in self.dom.drain(new_len..) {
            self.map.remove(&v);
        }
        debug_assert_eq!(self.dom.len(), new_len)
    }
}

impl<V: Clone + Eq + Hash> Assignment<V> {
    /// Assign a value to a variable.
    ///
    /// Panic if the variable is already assigned.
    pub fn insert(&mut self, v: V, b: bool) {
        assert!(self.map.insert(v.clone(), b).is_none());
        self.dom.push(v)
    }
}

impl<V: Clone + Eq + Hash> Assignment<&V> {
    /// Clone the variables of the assignment.
    pub fn cloned(&self) -> Assignment<V> {
        self.iter().map(|(v, b)| ((*v).clone(), b)).collect()
    }
}

impl<V: Clone + Eq + Hash> core::iter::FromIterator<(V, bool)> for Assignment<V> {
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        let mut assignment = Self::default();
        for (v, b) in iter {
            assignment.insert(v, b)
        }
        assignment
    }
}

impl<V: Eq + Hash> PartialEq for Assignment<V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<V: Eq + Hash> Eq for Assignment<V> {}

impl<V> From<&Assignment<V>> for Ptr {
    fn from(assignment: &Assignment<V>) -> Self {
        Self {
            dom_len: assignment.dom.len(),
        }
    }
}

impl<V: Eq + Hash> Rewind<&Ptr> for Assignment<V> {
    fn rewind(&mut self, ptr: &Ptr) {
        assert!(self.dom.len() >= ptr.dom_len);
        self.set_dom_len(ptr.dom_len)
    }
}

#[cfg(feature = "serde")]
impl<V: Eq + Hash + serde::Serialize> serde::Serialize for Assignment<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[test]
fn rewind() {
    let mut a = Assignment::default();
    a.insert("p", true);
    let ptr = Ptr::from(&a);
    a.insert("q", false);
    a.insert("r", true);
    assert_eq!(a.get(&"q"), Some(false));

    a.rewind(&ptr);
    assert_eq!(a.len(), 1);
    assert_eq!(a.get(&"q"), None);
    assert!(a.contains(&"p"));

    a.insert("q", true);
    assert_eq!(alloc::format!("{}", a), "{p ↦ true, q ↦ true}");
}

#[test]
fn cloned() {
    let (p, q) = (alloc::string::String::from("p"), alloc::string::String::from("q"));
    let a: Assignment<_> = [(&q, false), (&p, true)].into_iter().collect();
    let a = a.cloned();
    assert_eq!(a.iter().map(|(v, _)| v.as_str()).collect::<Vec<_>>(), ["q", "p"]);
}
