//! Positional mutation: insert into and remove from the middle of the
//! live range.
//!
//! Both operations shift with overlapping bitwise copies, which cannot
//! fail, so the only fallible step anywhere here is the up-front
//! allocation of the reallocating insert branch. A caller never observes
//! a half-shifted array.

use std::ptr;

use crate::alloc::RawArray;
use crate::error::Result;

use super::DynArray;

impl<T> DynArray<T> {
    /// Insert `val` at `index`, shifting everything at or after it one
    /// slot toward the end. Returns a reference to the inserted element.
    /// `index == len` appends.
    ///
    /// The value is fully materialized before any slot is touched, so an
    /// argument derived from an existing element, e.g.
    /// `arr.insert(0, arr[2].clone())`, is read before shifting starts.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, val: T) -> Result<&mut T> {
        assert!(
            index <= self.len,
            "insert index {} out of bound {}",
            index,
            self.len
        );
        if self.len == self.capacity() {
            return self.insert_realloc(index, val);
        }
        // SAFETY: len < capacity, so there is a free slot at the end.
        // The overlapping copy shifts [index, len) up by one, then the
        // gap is overwritten with the new value.
        unsafe {
            let p = self.buf.ptr_at_mut(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, val);
            self.len += 1;
            Ok(&mut *p)
        }
    }

    /// Reallocating branch of insert: the new element is written at its
    /// final offset in the new block first, then prefix and suffix are
    /// relocated on either side of it. Allocation failure propagates
    /// with the array untouched.
    fn insert_realloc(&mut self, index: usize, val: T) -> Result<&mut T> {
        let new_cap = self.next_capacity()?;
        let mut new_buf = RawArray::with_capacity(new_cap)?;
        // SAFETY: the new block holds at least len + 1 slots and the
        // blocks are disjoint. Old slots are abandoned, not dropped:
        // their values moved with the bits.
        unsafe {
            ptr::write(new_buf.ptr_at_mut(index), val);
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), index);
            ptr::copy_nonoverlapping(
                self.buf.ptr_at(index),
                new_buf.ptr_at_mut(index + 1),
                self.len - index,
            );
        }
        self.buf = new_buf;
        self.len += 1;
        // SAFETY: slot `index` is live in the adopted block.
        unsafe { Ok(&mut *self.buf.ptr_at_mut(index)) }
    }

    /// Remove and return the element at `index`, shifting everything
    /// after it one slot toward the front. Never reallocates, capacity
    /// is unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {} out of bound {}",
            index,
            self.len
        );
        // SAFETY: slot `index` is live. After the read the overlapping
        // copy closes the gap, and the stale last slot leaves the live
        // range with the len decrement.
        unsafe {
            let p = self.buf.ptr_at_mut(index);
            let val = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            val
        }
    }
}
