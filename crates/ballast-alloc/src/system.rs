//! The default heap-backed allocator.

use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc;

use ballast_core::Opt;

use crate::raw::RawAllocator;

/// A [`RawAllocator`] backed by the host's general-purpose heap
/// (`std::alloc`).
///
/// Zero-sized and stateless; the primitives are thread-safe, so a single
/// instance (or [`SYSTEM`]) may back containers on different threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

/// A shared instance of the default allocator, for callers that do not
/// thread their own through.
pub static SYSTEM: SystemAllocator = SystemAllocator;

impl RawAllocator for SystemAllocator {
    fn allocate(&self, layout: Layout) -> Opt<NonNull<u8>> {
        debug_assert!(layout.size() != 0, "zero-size allocation request");
        // SAFETY: the trait contract forbids zero-size layouts.
        let ptr = unsafe { alloc::alloc(layout) };
        Opt::from(NonNull::new(ptr))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: per the trait contract, `ptr` is live and was allocated
        // by this allocator with `layout`.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }

    unsafe fn resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Opt<NonNull<u8>> {
        debug_assert!(new_size != 0, "zero-size resize request");
        // SAFETY: per the trait contract, `ptr` is live with `old_layout`
        // and `new_size` is non-zero. `realloc` preserves the prefix and
        // leaves the block untouched on failure, which is exactly the
        // sentinel contract this trait demands.
        let raw = unsafe { alloc::realloc(ptr.as_ptr(), old_layout, new_size) };
        Opt::from(NonNull::new(raw))
    }
}
