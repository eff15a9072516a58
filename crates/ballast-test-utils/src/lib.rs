//! Instrumented allocators for ballast development.
//!
//! These implement [`RawAllocator`] in ways production code never would:
//! always failing, failing after a quota, or counting every primitive call.
//! Tests use them to drive the failure paths of the buffer and to assert
//! allocate/deallocate balance.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use core::alloc::Layout;
use core::ptr::NonNull;
use std::cell::Cell;

use ballast_alloc::{RawAllocator, SystemAllocator};
use ballast_core::Opt;

/// An allocator with no memory: every `allocate` and `resize` fails.
///
/// Useful for proving an operation makes no allocation at all, or for the
/// exhaustion-on-first-touch scenario.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingAllocator;

impl RawAllocator for FailingAllocator {
    fn allocate(&self, _layout: Layout) -> Opt<NonNull<u8>> {
        Opt::None
    }

    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        unreachable!("FailingAllocator never hands out a block");
    }

    unsafe fn resize(
        &self,
        _ptr: NonNull<u8>,
        _old_layout: Layout,
        _new_size: usize,
    ) -> Opt<NonNull<u8>> {
        Opt::None
    }
}

/// Delegates to the system allocator until `quota` allocates/resizes have
/// succeeded, then fails every further one.
///
/// Deallocation always delegates, so blocks handed out before exhaustion
/// can still be released.
#[derive(Debug)]
pub struct QuotaAllocator {
    remaining: Cell<usize>,
    inner: SystemAllocator,
}

impl QuotaAllocator {
    pub fn new(quota: usize) -> Self {
        Self {
            remaining: Cell::new(quota),
            inner: SystemAllocator,
        }
    }

    /// Successful allocations/resizes still permitted.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    fn spend(&self) -> bool {
        let left = self.remaining.get();
        if left == 0 {
            return false;
        }
        self.remaining.set(left - 1);
        true
    }
}

impl RawAllocator for QuotaAllocator {
    fn allocate(&self, layout: Layout) -> Opt<NonNull<u8>> {
        if !self.spend() {
            return Opt::None;
        }
        self.inner.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded contract — the block came from `self.inner`.
        unsafe { self.inner.deallocate(ptr, layout) }
    }

    unsafe fn resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Opt<NonNull<u8>> {
        if !self.spend() {
            return Opt::None;
        }
        // SAFETY: forwarded contract — the block came from `self.inner`.
        unsafe { self.inner.resize(ptr, old_layout, new_size) }
    }
}

/// Delegates to the system allocator and counts every primitive call, so
/// tests can assert that buffers release exactly what they acquired.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    resizes: Cell<usize>,
    inner: SystemAllocator,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `allocate` calls.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// Number of `deallocate` calls.
    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }

    /// Number of successful `resize` calls.
    pub fn resizes(&self) -> usize {
        self.resizes.get()
    }

    /// `true` when every allocated block has been released. A resize moves
    /// an existing block, so it does not change the balance.
    pub fn is_balanced(&self) -> bool {
        self.allocations.get() == self.deallocations.get()
    }
}

impl RawAllocator for CountingAllocator {
    fn allocate(&self, layout: Layout) -> Opt<NonNull<u8>> {
        let ptr = self.inner.allocate(layout);
        if ptr.is_some() {
            self.allocations.set(self.allocations.get() + 1);
        }
        ptr
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocations.set(self.deallocations.get() + 1);
        // SAFETY: forwarded contract — the block came from `self.inner`.
        unsafe { self.inner.deallocate(ptr, layout) }
    }

    unsafe fn resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Opt<NonNull<u8>> {
        // SAFETY: forwarded contract — the block came from `self.inner`.
        let resized = unsafe { self.inner.resize(ptr, old_layout, new_size) };
        if resized.is_some() {
            self.resizes.set(self.resizes.get() + 1);
        }
        resized
    }
}
