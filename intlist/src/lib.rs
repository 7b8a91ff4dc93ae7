#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly linked list of integers that only grows at the end.
//!
//! Nodes live in an arena owned by the list and link to each other by
//! index, so dropping the list releases every node exactly once.

use std::collections::TryReserveError;
use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

type Link = Option<usize>;

#[derive(Clone, Copy)]
struct Node {
    value: i32,
    next: Link,
}

#[derive(Debug)]
pub enum Error {
    /// Storage for a new node could not be allocated.
    Alloc(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc(_) => write!(f, "failed to allocate a list node"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Alloc(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::Alloc(e)
    }
}

pub struct List {
    head: Link,
    nodes: Vec<Node>,
}

impl List {
    pub fn new() -> List {
        List {
            head: None,
            nodes: Vec::new(),
        }
    }

    /// Appends `value` after the current last node.
    ///
    /// The last node is found by walking from the head every time, so this
    /// is O(n) in the length of the list. If the node cannot be allocated
    /// the list is left untouched.
    pub fn insert(&mut self, value: i32) -> Result<(), Error> {
        if let Err(e) = self.nodes.try_reserve(1) {
            debug!("insert of {value} failed: {e}");
            return Err(e.into());
        }

        let n = self.nodes.len();
        self.nodes.push(Node { value, next: None });

        match self.last_link() {
            Some(last) => self.nodes[last].next = Some(n),
            None => self.head = Some(n),
        }
        trace!("inserted {value} at position {n}");
        Ok(())
    }

    fn last_link(&self) -> Link {
        let mut current = self.head?;
        while let Some(next) = self.nodes[current].next {
            current = next;
        }
        Some(current)
    }

    /// Values in insertion order, starting from the head on every call.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
        }
    }

    /// Writes every value to `out`, one per line.
    pub fn print_all_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        trace!("printing {} values", self.len());
        for value in self {
            writeln!(out, "{value}")?;
        }
        out.flush()
    }

    pub fn print_all(&self) -> io::Result<()> {
        self.print_all_to(io::stdout().lock())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    nodes: &'a [Node],
    current: Link,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.nodes[self.current?];
        self.current = node.next;
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPPER_BOUNDS: i32 = 1000;

    fn printed(list: &List) -> String {
        let mut out = Vec::new();
        list.print_all_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn list_of(values: &[i32]) -> List {
        let mut list = List::new();
        for &v in values {
            list.insert(v).unwrap();
        }
        list
    }

    #[test]
    fn empty_list_prints_nothing() {
        let list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(printed(&list), "");
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn prints_in_insertion_order() {
        let list = list_of(&[3, 7, 1]);
        assert_eq!(printed(&list), "3\n7\n1\n");
        assert!(list.print_all().is_ok());
    }

    #[test]
    fn single_negative_value() {
        let list = list_of(&[-5]);
        assert!(!list.is_empty());
        assert_eq!(printed(&list), "-5\n");
    }

    #[test]
    fn printing_is_repeatable() {
        let list = list_of(&[4, 4, -2, i32::MAX, i32::MIN]);
        let first = printed(&list);
        assert_eq!(first, printed(&list));
        assert_eq!(list.iter().collect::<Vec<_>>(), list.iter().collect::<Vec<_>>());
    }

    #[test]
    fn length_tracks_inserts() {
        let mut list = List::default();
        for k in 0..UPPER_BOUNDS {
            assert_eq!(list.len(), k as usize);
            list.insert(k * 3 - 7).unwrap();
        }
        assert_eq!(list.len(), UPPER_BOUNDS as usize);
        let expected: Vec<i32> = (0..UPPER_BOUNDS).map(|k| k * 3 - 7).collect();
        assert_eq!(list.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn insert_keeps_earlier_values() {
        let mut list = list_of(&[1, 2]);
        let before: Vec<i32> = list.iter().collect();
        list.insert(9).unwrap();
        let after: Vec<i32> = list.iter().collect();
        assert_eq!(&after[..2], &before[..]);
        assert_eq!(after[2], 9);
    }

    #[test]
    fn debug_shows_values() {
        let list = list_of(&[3, 7, 1]);
        assert_eq!(format!("{list:?}"), "[3, 7, 1]");
    }

    #[test]
    fn alloc_error_reports_source() {
        let e = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let e = Error::from(e);
        assert_eq!(e.to_string(), "failed to allocate a list node");
        assert!(std::error::Error::source(&e).is_some());
    }
}
