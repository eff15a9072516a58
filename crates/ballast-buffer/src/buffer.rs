//! The growable, allocator-backed contiguous container.

use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::ptr::{self, NonNull};
use core::slice;

use ballast_alloc::RawAllocator;
use ballast_core::{fatal, Opt, Res};

use crate::error::BufferError;

/// Fixed multiplier applied to capacity when the buffer must grow.
const GROWTH_FACTOR: usize = 2;

/// A growable contiguous block of `T`s backed by a borrowed
/// [`RawAllocator`].
///
/// The buffer has two macro-states: *empty* (`capacity() == 0`, no
/// allocation has been made, the data pointer dangles) and *allocated*
/// (`capacity() > 0`). The first successful [`push`](Buffer::push),
/// [`insert`](Buffer::insert), or pre-sized construction moves it to
/// allocated; only dropping (or moving, which is destructive in Rust)
/// leaves that state.
///
/// Every capacity-changing operation returns a [`Res`], and on `Err` the
/// buffer is left exactly as it was — no partial mutation, so the caller
/// can retry or abandon the operation safely. Possibly-absent queries
/// return an [`Opt`]. The only aborting path is `Index`/`IndexMut`, which
/// must produce a live reference and therefore has no sentinel to return.
///
/// Not thread-safe: concurrent mutation of one buffer requires external
/// synchronization. Independent buffers may share one allocator if the
/// allocator's primitives are thread-safe (the system allocator's are).
pub struct Buffer<'alloc, T> {
    alloc: &'alloc dyn RawAllocator,
    /// Dangling while `cap == 0`.
    data: NonNull<T>,
    len: usize,
    cap: usize,
    _owns: PhantomData<T>,
}

impl<'alloc, T> Buffer<'alloc, T> {
    /// Creates an empty buffer. No allocation occurs.
    pub fn new(alloc: &'alloc dyn RawAllocator) -> Self {
        Self {
            alloc,
            data: NonNull::dangling(),
            len: 0,
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Creates a buffer with room for `capacity` elements, making a single
    /// allocation up front (none if `capacity` is 0).
    pub fn with_capacity(
        alloc: &'alloc dyn RawAllocator,
        capacity: usize,
    ) -> Res<Self, BufferError> {
        let mut buf = Self::new(alloc);
        if capacity > 0 {
            if let Res::Err(e) = buf.grow_to(capacity) {
                return Res::Err(e);
            }
        }
        Res::Ok(buf)
    }

    /// Creates a buffer holding a copy of `items`, sized exactly to fit.
    pub fn from_slice(alloc: &'alloc dyn RawAllocator, items: &[T]) -> Res<Self, BufferError>
    where
        T: Clone,
    {
        let mut buf = match Self::with_capacity(alloc, items.len()) {
            Res::Ok(buf) => buf,
            Res::Err(e) => return Res::Err(e),
        };
        for item in items {
            // Room was reserved above, but growth failure is still
            // propagated rather than assumed away.
            if let Res::Err(e) = buf.push(item.clone()) {
                return Res::Err(e);
            }
        }
        Res::Ok(buf)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the backing block.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The allocator this buffer draws from.
    pub fn allocator(&self) -> &'alloc dyn RawAllocator {
        self.alloc
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; for `len == 0`
        // a dangling pointer is a valid empty-slice base.
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Appends `value` at the end, growing the backing block if needed
    /// (first growth produces capacity 1, after that capacity doubles).
    ///
    /// On allocation or resize failure the buffer is unchanged and the
    /// value is dropped.
    pub fn push(&mut self, value: T) -> Res<(), BufferError> {
        if let Res::Err(e) = self.reserve_one() {
            return Res::Err(e);
        }
        // SAFETY: `reserve_one` established `len < cap`; slot `len` is
        // unoccupied.
        unsafe { ptr::write(self.data.as_ptr().add(self.len), value) };
        self.len += 1;
        Res::Ok(())
    }

    /// Removes and returns the last element, or `None` if the buffer is
    /// empty. Capacity is unchanged.
    pub fn pop(&mut self) -> Opt<T> {
        if self.len == 0 {
            return Opt::None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held a live element; the length is already
        // decremented, so it cannot be dropped a second time.
        Opt::Some(unsafe { ptr::read(self.data.as_ptr().add(self.len)) })
    }

    /// Inserts `value` at `index`, shifting everything at and after it one
    /// slot to the right (O(n)). `index == len` appends.
    ///
    /// Fails with [`BufferError::IndexOutOfBounds`] if `index > len`; on
    /// any failure the buffer is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Res<(), BufferError> {
        if index > self.len {
            return Res::Err(BufferError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return self.push(value);
        }
        if let Res::Err(e) = self.reserve_one() {
            return Res::Err(e);
        }
        // SAFETY: `index < len < cap`; the shifted range stays within the
        // backing block, and slot `index` is rewritten before anything
        // reads it.
        unsafe {
            let base = self.data.as_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            ptr::write(base.add(index), value);
        }
        self.len += 1;
        Res::Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one slot to the left (O(n), relative order preserved).
    ///
    /// Returns `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Opt<T> {
        if index >= self.len {
            return Opt::None;
        }
        if index == self.len - 1 {
            return self.pop();
        }
        // SAFETY: `index < len - 1`; the value is moved out before its slot
        // is overwritten by the shift, and `len` is decremented so the
        // trailing duplicate slot is never observed.
        unsafe {
            let base = self.data.as_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            Opt::Some(value)
        }
    }

    /// Removes and returns the element at `index`, filling the hole with
    /// the last element (O(1), relative order not preserved).
    ///
    /// Returns `None` if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> Opt<T> {
        if index >= self.len {
            return Opt::None;
        }
        // SAFETY: `index < len`; the target is moved out first, then the
        // last element (if distinct) is relocated into the hole, and `len`
        // is decremented so neither slot is double-dropped.
        unsafe {
            let base = self.data.as_ptr();
            let value = ptr::read(base.add(index));
            self.len -= 1;
            if index != self.len {
                let last = ptr::read(base.add(self.len));
                ptr::write(base.add(index), last);
            }
            Opt::Some(value)
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    pub fn get(&self, index: usize) -> Opt<&T> {
        if index < self.len {
            Opt::Some(&self.as_slice()[index])
        } else {
            Opt::None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Opt<&mut T> {
        if index < self.len {
            Opt::Some(&mut self.as_mut_slice()[index])
        } else {
            Opt::None
        }
    }

    /// Drops every live element. Length becomes 0; capacity is unchanged.
    pub fn clear(&mut self) {
        let live = self.len;
        // Length goes to zero first so a panicking element destructor
        // cannot lead to a double drop.
        self.len = 0;
        // SAFETY: the first `live` slots were initialized and are dropped
        // exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), live));
        }
    }

    /// Resizes the backing block down to exactly `len` slots.
    ///
    /// A no-op when the buffer is already tight or holds no elements (the
    /// backing block is only ever released by dropping the buffer). On
    /// resize failure the buffer is unchanged and still valid.
    pub fn shrink_to_fit(&mut self) -> Res<(), BufferError> {
        if self.cap <= self.len || self.len == 0 {
            return Res::Ok(());
        }
        let old_layout = match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            Err(_) => return Res::Err(BufferError::CapacityOverflow),
        };
        if old_layout.size() == 0 {
            self.cap = self.len;
            return Res::Ok(());
        }
        let new_layout = match Layout::array::<T>(self.len) {
            Ok(layout) => layout,
            Err(_) => return Res::Err(BufferError::CapacityOverflow),
        };
        // SAFETY: the block is live, came from `self.alloc` with
        // `old_layout`, and `new_layout.size()` is non-zero since `len > 0`
        // and the element size is non-zero here.
        let resized = unsafe {
            self.alloc
                .resize(self.data.cast(), old_layout, new_layout.size())
        };
        match resized {
            Opt::Some(ptr) => {
                self.data = ptr.cast();
                self.cap = self.len;
                Res::Ok(())
            }
            Opt::None => Res::Err(BufferError::ResizeFailed {
                requested: new_layout.size(),
            }),
        }
    }

    /// Returns `true` if some live element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().iter().any(|v| v == value)
    }

    /// Duplicates the buffer: an independent allocation sized to `len`
    /// plus an element-wise clone.
    ///
    /// This replaces a `Clone` impl, which could not report allocation
    /// failure.
    pub fn try_clone(&self) -> Res<Buffer<'alloc, T>, BufferError>
    where
        T: Clone,
    {
        Self::from_slice(self.alloc, self.as_slice())
    }

    /// Ensures room for one more element, growing capacity geometrically
    /// (0 → 1, then ×2).
    fn reserve_one(&mut self) -> Res<(), BufferError> {
        if self.len < self.cap {
            return Res::Ok(());
        }
        let new_cap = if self.cap == 0 {
            1
        } else {
            match self.cap.checked_mul(GROWTH_FACTOR) {
                Some(cap) => cap,
                None => return Res::Err(BufferError::CapacityOverflow),
            }
        };
        self.grow_to(new_cap)
    }

    /// Grows the backing block to exactly `new_cap` slots, leaving the
    /// buffer untouched on failure.
    fn grow_to(&mut self, new_cap: usize) -> Res<(), BufferError> {
        debug_assert!(new_cap > self.cap);
        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(layout) => layout,
            Err(_) => return Res::Err(BufferError::CapacityOverflow),
        };
        // Zero-sized elements need no backing memory; only the bookkeeping
        // moves.
        if new_layout.size() == 0 {
            self.cap = new_cap;
            return Res::Ok(());
        }
        let grown = if self.cap == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = match Layout::array::<T>(self.cap) {
                Ok(layout) => layout,
                Err(_) => return Res::Err(BufferError::CapacityOverflow),
            };
            // SAFETY: the block is live and came from `self.alloc` with
            // `old_layout`; the new size is non-zero.
            unsafe {
                self.alloc
                    .resize(self.data.cast(), old_layout, new_layout.size())
            }
        };
        match grown {
            Opt::Some(ptr) => {
                self.data = ptr.cast();
                self.cap = new_cap;
                Res::Ok(())
            }
            Opt::None if self.cap == 0 => Res::Err(BufferError::AllocationFailed {
                requested: new_layout.size(),
            }),
            Opt::None => Res::Err(BufferError::ResizeFailed {
                requested: new_layout.size(),
            }),
        }
    }
}

impl<T> Drop for Buffer<'_, T> {
    fn drop(&mut self) {
        self.clear();
        if self.cap == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() != 0 {
                // SAFETY: the block is live and came from `self.alloc`
                // with this layout; nothing uses it after this point.
                unsafe { self.alloc.deallocate(self.data.cast(), layout) };
            }
        }
    }
}

impl<T> Index<usize> for Buffer<'_, T> {
    type Output = T;

    /// # Aborts
    ///
    /// Terminates the process via the fatal sink if `index >= len` — this
    /// path must yield a live reference and has no sentinel to return. Use
    /// [`get`](Buffer::get) for a recoverable lookup.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        if index >= self.len {
            fatal(&format!(
                "index {index} out of bounds for buffer of length {}",
                self.len
            ));
        }
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Buffer<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index >= self.len {
            fatal(&format!(
                "index {index} out of bounds for buffer of length {}",
                self.len
            ));
        }
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Buffer<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'b, T> IntoIterator for &'b Buffer<'_, T> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'b, T> IntoIterator for &'b mut Buffer<'_, T> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use ballast_alloc::SYSTEM;
    use ballast_test_utils::{CountingAllocator, FailingAllocator, QuotaAllocator};

    /// Counts drops through a shared cell, for verifying destruction
    /// ordering without a leak checker.
    struct Dropper<'a>(&'a Cell<usize>);

    impl Clone for Dropper<'_> {
        fn clone(&self) -> Self {
            Dropper(self.0)
        }
    }

    impl Drop for Dropper<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_buffer_makes_no_allocation() {
        // A failing allocator proves construction never touches it.
        let buf: Buffer<'_, i32> = Buffer::new(&FailingAllocator);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn with_capacity_zero_makes_no_allocation() {
        let buf: Buffer<'_, i32> = Buffer::with_capacity(&FailingAllocator, 0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn push_grows_geometrically_from_presized() {
        let mut buf = Buffer::with_capacity(&SYSTEM, 2).unwrap();

        buf.push(1).unwrap();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), 2);

        buf.push(2).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 2);

        // Third push doubles 2 -> 4.
        buf.push(3).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 4);

        // Fourth push fits.
        buf.push(4).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn first_growth_produces_capacity_one() {
        let mut buf = Buffer::new(&SYSTEM);
        buf.push('a').unwrap();
        assert_eq!(buf.capacity(), 1);
        buf.push('b').unwrap();
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn stack_law() {
        let mut buf = Buffer::new(&SYSTEM);
        buf.push(1).unwrap();
        buf.push(2).unwrap();

        assert_eq!(buf.pop(), Opt::Some(2));
        assert_eq!(buf.pop(), Opt::Some(1));
        assert_eq!(buf.pop(), Opt::None);
        // Popping leaves capacity alone.
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn insert_preserves_order() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        buf.insert(1, 4).unwrap();
        assert_eq!(buf.as_slice(), &[1, 4, 2, 3]);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2]).unwrap();
        buf.insert(2, 3).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_past_len_is_rejected() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        let err = buf.insert(5, 9).unwrap_err();
        assert_eq!(err, BufferError::IndexOutOfBounds { index: 5, len: 3 });
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_shifts_non_copy_elements() {
        let mut buf =
            Buffer::from_slice(&SYSTEM, &[String::from("a"), String::from("c")]).unwrap();
        buf.insert(1, String::from("b")).unwrap();
        assert_eq!(buf.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn remove_preserves_order() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert_eq!(buf.remove(0), Opt::Some(1));
        assert_eq!(buf.as_slice(), &[2, 3]);
    }

    #[test]
    fn remove_out_of_bounds_returns_none() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert_eq!(buf.remove(3), Opt::None);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn swap_remove_moves_the_last_element_into_the_hole() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert_eq!(buf.swap_remove(0), Opt::Some(1));
        assert_eq!(buf.as_slice(), &[3, 2]);
    }

    #[test]
    fn swap_remove_of_the_last_element() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert_eq!(buf.swap_remove(2), Opt::Some(3));
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(buf.swap_remove(5), Opt::None);
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[10, 20]).unwrap();
        assert_eq!(buf.get(1), Opt::Some(&20));
        assert_eq!(buf.get(2), Opt::None);

        *buf.get_mut(0).unwrap() = 11;
        assert_eq!(buf.as_slice(), &[11, 20]);
    }

    #[test]
    fn index_yields_live_references() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert_eq!(buf[0], 1);
        assert_eq!(buf[2], 3);
        buf[1] = 9;
        assert_eq!(buf.as_slice(), &[1, 9, 3]);
    }

    #[test]
    fn clear_drops_every_element_and_keeps_capacity() {
        let drops = Cell::new(0);
        let mut buf = Buffer::with_capacity(&SYSTEM, 2).unwrap();
        buf.push(Dropper(&drops)).unwrap();
        buf.push(Dropper(&drops)).unwrap();

        buf.clear();
        assert_eq!(drops.get(), 2);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn drop_releases_elements_then_the_block() {
        let drops = Cell::new(0);
        let alloc = CountingAllocator::new();
        {
            let mut buf = Buffer::new(&alloc);
            for _ in 0..5 {
                buf.push(Dropper(&drops)).unwrap();
            }
        }
        assert_eq!(drops.get(), 5);
        assert!(alloc.is_balanced());
        assert_eq!(alloc.deallocations(), 1);
    }

    #[test]
    fn shrink_to_fit_scenario() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(buf.capacity(), 5);

        buf.pop().unwrap();
        buf.pop().unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 5);

        buf.shrink_to_fit().unwrap();
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn shrink_to_fit_is_a_noop_when_tight_or_empty() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2]).unwrap();
        buf.shrink_to_fit().unwrap();
        assert_eq!(buf.capacity(), 2);

        buf.clear();
        buf.shrink_to_fit().unwrap();
        // The block is only released on drop, never by shrinking.
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn contains_scans_by_equality() {
        let buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        assert!(buf.contains(&2));
        assert!(!buf.contains(&4));
    }

    #[test]
    fn failed_push_leaves_the_buffer_untouched() {
        let mut buf = Buffer::new(&FailingAllocator);
        let err = buf.push(1).unwrap_err();
        assert_eq!(
            err,
            BufferError::AllocationFailed {
                requested: core::mem::size_of::<i32>()
            }
        );
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn failed_growth_preserves_existing_contents() {
        // One allocation allowed: with_capacity(2) consumes it, the growth
        // resize on the third push must fail.
        let alloc = QuotaAllocator::new(1);
        let mut buf = Buffer::with_capacity(&alloc, 2).unwrap();
        buf.push(1).unwrap();
        buf.push(2).unwrap();

        let err = buf.push(3).unwrap_err();
        assert!(matches!(err, BufferError::ResizeFailed { .. }));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn failed_insert_preserves_existing_contents() {
        let alloc = QuotaAllocator::new(1);
        let mut buf = Buffer::with_capacity(&alloc, 2).unwrap();
        buf.push(1).unwrap();
        buf.push(2).unwrap();

        let err = buf.insert(0, 9).unwrap_err();
        assert!(matches!(err, BufferError::ResizeFailed { .. }));
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn failed_shrink_preserves_the_buffer() {
        let alloc = QuotaAllocator::new(1);
        let mut buf = Buffer::with_capacity(&alloc, 4).unwrap();
        buf.push(1).unwrap();

        let err = buf.shrink_to_fit().unwrap_err();
        assert!(matches!(err, BufferError::ResizeFailed { .. }));
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[1]);
    }

    #[test]
    fn try_clone_is_independent() {
        let alloc = CountingAllocator::new();
        let mut buf = Buffer::from_slice(&alloc, &[1, 2, 3]).unwrap();
        let copy = buf.try_clone().unwrap();
        assert_eq!(alloc.allocations(), 2);

        buf.push(4).unwrap();
        assert_eq!(copy.as_slice(), &[1, 2, 3]);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn zero_sized_elements_never_touch_the_allocator() {
        let mut buf = Buffer::new(&FailingAllocator);
        for _ in 0..10 {
            buf.push(()).unwrap();
        }
        assert_eq!(buf.len(), 10);
        assert!(buf.capacity() >= 10);

        for _ in 0..10 {
            assert_eq!(buf.pop(), Opt::Some(()));
        }
        assert_eq!(buf.pop(), Opt::None);
    }

    #[test]
    fn iteration_covers_the_live_elements() {
        let mut buf = Buffer::from_slice(&SYSTEM, &[1, 2, 3]).unwrap();
        let sum: i32 = (&buf).into_iter().sum();
        assert_eq!(sum, 6);

        for v in &mut buf {
            *v *= 10;
        }
        assert_eq!(buf.as_slice(), &[10, 20, 30]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn behaves_like_vec(
                ops in proptest::collection::vec(
                    (0u8..5, any::<usize>(), any::<i32>()),
                    1..100,
                ),
            ) {
                let alloc = CountingAllocator::new();
                let mut buf = Buffer::new(&alloc);
                let mut model: Vec<i32> = Vec::new();

                for (op, raw_idx, val) in ops {
                    match op {
                        0 => {
                            buf.push(val).unwrap();
                            model.push(val);
                        }
                        1 => {
                            prop_assert_eq!(buf.pop().into_option(), model.pop());
                        }
                        2 => {
                            let idx = raw_idx % (model.len() + 1);
                            buf.insert(idx, val).unwrap();
                            model.insert(idx, val);
                        }
                        3 if model.is_empty() => {
                            prop_assert!(buf.remove(0).is_none());
                        }
                        3 => {
                            let idx = raw_idx % model.len();
                            prop_assert_eq!(buf.remove(idx).unwrap(), model.remove(idx));
                        }
                        _ if model.is_empty() => {
                            prop_assert!(buf.swap_remove(0).is_none());
                        }
                        _ => {
                            let idx = raw_idx % model.len();
                            prop_assert_eq!(
                                buf.swap_remove(idx).unwrap(),
                                model.swap_remove(idx)
                            );
                        }
                    }

                    // Reachable-state invariants.
                    prop_assert!(buf.len() <= buf.capacity());
                    prop_assert_eq!(
                        buf.capacity() == 0,
                        alloc.allocations() == 0
                    );
                    prop_assert_eq!(buf.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn push_only_capacity_is_zero_or_a_power_of_two(
                count in 0usize..200,
            ) {
                let mut buf = Buffer::new(&SYSTEM);
                for i in 0..count {
                    buf.push(i).unwrap();
                }
                let cap = buf.capacity();
                prop_assert!(cap == 0 || cap.is_power_of_two());
                prop_assert!(cap >= count);
            }
        }
    }
}
