//! Comparator-driven doubly linked list.
//!
//! Nodes own their successor through a strong link and point back to their predecessor through a
//! weak link, so the chain never forms a reference cycle.

use serde::Serialize;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

type Link<T> = Rc<RefCell<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Option<Weak<RefCell<Node<T>>>>,
    next: Option<Link<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Link<T> {
        Rc::new(RefCell::new(Self {
            value,
            prev: None,
            next: None,
        }))
    }
}

pub struct DoublyLinkedList<T> {
    head: Option<Link<T>>,
    tail: Option<Link<T>>,
    len: usize,
    compare: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> Default for DoublyLinkedList<T>
where
    T: Ord + 'static,
{
    fn default() -> Self {
        Self::new(T::cmp)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list. `compare` decides equality for [`remove`](Self::remove) and
    /// [`contains`](Self::contains).
    pub fn new<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            head: None,
            tail: None,
            len: 0,
            compare: Box::new(compare),
        }
    }

    /// Appends `value` and returns the new length.
    pub fn add(&mut self, value: T) -> usize {
        let node = Node::new(value);
        match self.tail.take() {
            Some(tail) => {
                node.borrow_mut().prev = Some(Rc::downgrade(&tail));
                tail.borrow_mut().next = Some(node.clone());
            }
            None => self.head = Some(node.clone()),
        }
        self.tail = Some(node);
        self.len += 1;
        self.len
    }

    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value);
        match self.head.take() {
            Some(head) => {
                head.borrow_mut().prev = Some(Rc::downgrade(&node));
                node.borrow_mut().next = Some(head);
            }
            None => self.tail = Some(node.clone()),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head.clone()?;
        self.unlink(head)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail.clone()?;
        self.unlink(tail)
    }

    /// Removes the first value the comparator considers equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = self.find(value)?;
        self.unlink(node)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.tail = None;
        let mut cur = self.head.take();
        // Unlink one node at a time; dropping the head alone would recurse down the chain.
        while let Some(node) = cur {
            cur = node.borrow_mut().next.take();
        }
        self.len = 0;
    }

    /// Overwrites the value at `index`. Returns `false` when out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.node_at(index) {
            Some(node) => {
                node.borrow_mut().value = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.node_at(index).map(|node| node.borrow().value.clone())
    }

    pub fn iter(&self) -> Iter<'_, T>
    where
        T: Clone,
    {
        Iter {
            front: self.head.clone(),
            back: self.tail.clone(),
            remaining: self.len,
            _list: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().collect()
    }

    fn find(&self, value: &T) -> Option<Link<T>> {
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            if (self.compare)(&node.borrow().value, value) == Ordering::Equal {
                return Some(node);
            }
            cur = node.borrow().next.clone();
        }
        None
    }

    fn node_at(&self, index: usize) -> Option<Link<T>> {
        if index >= self.len {
            return None;
        }
        let mut cur = self.head.clone();
        for _ in 0..index {
            cur = cur?.borrow().next.clone();
        }
        cur
    }

    fn unlink(&mut self, node: Link<T>) -> Option<T> {
        let (prev, next) = {
            let mut n = node.borrow_mut();
            (n.prev.take().and_then(|w| w.upgrade()), n.next.take())
        };

        match &prev {
            Some(prev) => prev.borrow_mut().next = next.clone(),
            None => self.head = next.clone(),
        }
        match &next {
            Some(next) => next.borrow_mut().prev = prev.as_ref().map(Rc::downgrade),
            None => self.tail = prev.clone(),
        }
        self.len -= 1;

        drop(prev);
        drop(next);
        match Rc::try_unwrap(node) {
            Ok(cell) => Some(cell.into_inner().value),
            Err(_) => {
                debug_assert!(false, "unlinked list node is still shared");
                None
            }
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> fmt::Debug for DoublyLinkedList<T>
where
    T: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for DoublyLinkedList<T>
where
    T: Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.len);
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            let json = serde_json::to_string(&node.borrow().value).map_err(|_| fmt::Error)?;
            parts.push(json);
            cur = node.borrow().next.clone();
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Front-to-back iterator over cloned values. Also iterates back-to-front via `rev()`.
pub struct Iter<'a, T> {
    front: Option<Link<T>>,
    back: Option<Link<T>>,
    remaining: usize,
    // Holding nodes while the list unlinks them would leave them shared.
    _list: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<T> Iterator for Iter<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.take()?;
        let n = node.borrow();
        self.front = n.next.clone();
        self.remaining -= 1;
        Some(n.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T>
where
    T: Clone,
{
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.take()?;
        let n = node.borrow();
        self.back = n.prev.as_ref().and_then(Weak::upgrade);
        self.remaining -= 1;
        Some(n.value.clone())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> where T: Clone {}
