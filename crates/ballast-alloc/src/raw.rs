//! The raw allocation capability.

use core::alloc::Layout;
use core::ptr::NonNull;

use ballast_core::Opt;

/// A set of raw allocation primitives.
///
/// Methods take `&self` so one allocator instance may back many containers
/// at once; an implementation that is also `Sync` may be shared across
/// threads (each container itself remains single-threaded). Implementations
/// must not panic or unwind — every failure is signaled as
/// [`Opt::None`].
///
/// The allocator owns no containers and containers do not own the
/// allocator: they borrow it, so the allocator must outlive every container
/// built on it. The borrow checker enforces this.
pub trait RawAllocator {
    /// Allocates a block of at least `layout.size()` bytes with the
    /// requested alignment. The contents are uninitialized.
    ///
    /// Returns `Opt::None` if no memory is available; the allocation is
    /// never partially valid. Callers must not request a zero-size layout.
    fn allocate(&self, layout: Layout) -> Opt<NonNull<u8>>;

    /// Releases a block previously produced by this same allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a live block obtained from `self` with `layout`.
    /// Releasing the same block twice, or a block from a different
    /// allocator, is undefined behavior.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows or shrinks a block to `new_size` bytes, in place or by
    /// relocation, preserving the first `min(old, new)` bytes.
    ///
    /// On success the returned pointer (possibly different from `ptr`)
    /// denotes the resized block and `ptr` must no longer be used. On
    /// `Opt::None` the original block is untouched, still owned by the
    /// caller, and must still eventually be released.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a live block obtained from `self` with
    /// `old_layout`, and `new_size` must be non-zero.
    unsafe fn resize(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Opt<NonNull<u8>>;
}
