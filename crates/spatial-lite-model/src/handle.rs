// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intrusive reference counting and the shared ownership handle
//!
//! Spatial objects carry their own owner count and expose it through
//! [`RefCounted`]. A [`SharedHandle`] pairs every retain with exactly one
//! release, so callers never balance the count by hand.
//!
//! # Example
//!
//! ```
//! use spatial_lite_model::{Counted, SharedHandle};
//!
//! let first = SharedHandle::new(Counted::new(42_u32));
//! let second = first.clone();
//! assert_eq!(first.reference_count(), 2);
//! assert_eq!(**second, 42);
//!
//! drop(first);
//! assert_eq!(second.reference_count(), 1);
//! ```

use crate::{ModelError, Result};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::sync::atomic::{self, AtomicUsize};

/// Capability of an object whose lifetime is governed by an owner count
///
/// # Safety
///
/// Implementors must uphold the following, which [`SharedHandle`] relies on
/// to hand out references:
///
/// - the object stays alive while its count is above zero;
/// - `release` destroys the object exactly when the count goes from 1 to 0,
///   reclaiming it the way it was allocated ([`SharedHandle::new`] allocates
///   with `Box`);
/// - if `Self: Sync`, `retain` and `release` are safe to call concurrently.
pub unsafe trait RefCounted {
    /// Increment the owner count
    fn retain(&self);

    /// Decrement the owner count, destroying the object when it reaches zero
    ///
    /// # Safety
    ///
    /// `this` must point to a live object on which the caller holds one unit
    /// of ownership. The caller gives that unit up and must not touch `this`
    /// afterwards.
    unsafe fn release(this: NonNull<Self>);

    /// Current number of owners
    fn reference_count(&self) -> usize;
}

/// Non-atomic owner count for embedding in single-threaded objects
#[derive(Default)]
pub struct ReferenceCount {
    count: Cell<usize>,
}

impl ReferenceCount {
    /// Create a count with no owners
    pub const fn new() -> Self {
        Self {
            count: Cell::new(0),
        }
    }

    /// Current number of owners
    #[inline]
    pub fn get(&self) -> usize {
        self.count.get()
    }

    /// Add an owner and return the new count
    ///
    /// Panics instead of wrapping when the count would overflow.
    #[inline]
    pub fn increment(&self) -> usize {
        let next = self
            .count
            .get()
            .checked_add(1)
            .unwrap_or_else(|| panic!("reference count overflow"));
        self.count.set(next);
        next
    }

    /// Remove an owner and return the new count
    ///
    /// Panics when called with no owners left; that is an over-release.
    #[inline]
    pub fn decrement(&self) -> usize {
        let current = self.count.get();
        assert!(current > 0, "reference count released below zero");
        self.count.set(current - 1);
        current - 1
    }
}

impl fmt::Debug for ReferenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReferenceCount").field(&self.get()).finish()
    }
}

/// Thread-safe owner count for objects shared across threads
#[derive(Default)]
pub struct AtomicReferenceCount {
    count: AtomicUsize,
}

impl AtomicReferenceCount {
    /// Create a count with no owners
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Current number of owners
    #[inline]
    pub fn get(&self) -> usize {
        self.count.load(atomic::Ordering::Acquire)
    }

    /// Add an owner and return the new count
    ///
    /// Panics once the count passes `isize::MAX`, leaving headroom for racing
    /// increments so the counter never wraps.
    #[inline]
    pub fn increment(&self) -> usize {
        let previous = self.count.fetch_add(1, atomic::Ordering::Relaxed);
        if previous > isize::MAX as usize {
            self.count.fetch_sub(1, atomic::Ordering::Relaxed);
            panic!("reference count overflow");
        }
        previous + 1
    }

    /// Remove an owner and return the new count
    ///
    /// A return value of zero means the caller released the last owner and
    /// observes every write made by previous owners.
    #[inline]
    pub fn decrement(&self) -> usize {
        let previous = self.count.fetch_sub(1, atomic::Ordering::Release);
        assert!(previous > 0, "reference count released below zero");
        if previous == 1 {
            atomic::fence(atomic::Ordering::Acquire);
        }
        previous - 1
    }
}

impl fmt::Debug for AtomicReferenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicReferenceCount")
            .field(&self.get())
            .finish()
    }
}

/// Adapter giving any value an embedded owner count
///
/// Use it for types that do not carry a count of their own:
/// `SharedHandle::new(Counted::new(value))`.
pub struct Counted<T> {
    count: ReferenceCount,
    value: T,
}

impl<T> Counted<T> {
    /// Wrap a value with a fresh count of zero
    pub fn new(value: T) -> Self {
        Self {
            count: ReferenceCount::new(),
            value,
        }
    }

    /// Unwrap the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Counted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Counted<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Counted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counted")
            .field("count", &self.count.get())
            .field("value", &self.value)
            .finish()
    }
}

// SAFETY: `Counted` is only ever handed to handles through `Box` and is freed
// with `Box::from_raw` on the last release. The count is a `Cell`, which keeps
// `Counted<T>` from being `Sync`.
unsafe impl<T> RefCounted for Counted<T> {
    fn retain(&self) {
        self.count.increment();
    }

    unsafe fn release(this: NonNull<Self>) {
        if this.as_ref().count.decrement() == 0 {
            drop(Box::from_raw(this.as_ptr()));
        }
    }

    fn reference_count(&self) -> usize {
        self.count.get()
    }
}

/// Shared ownership handle over a [`RefCounted`] object
///
/// A handle refers to zero or one object. Creating or cloning a non-empty
/// handle retains the target once; dropping or reassigning it releases that
/// target once. Comparisons order handles by the address of their target,
/// never by its contents, with empty handles first.
pub struct SharedHandle<T: RefCounted> {
    ptr: Option<NonNull<T>>,
    _owns: PhantomData<T>,
}

impl<T: RefCounted> SharedHandle<T> {
    /// Create a handle that refers to nothing
    pub const fn null() -> Self {
        Self {
            ptr: None,
            _owns: PhantomData,
        }
    }

    /// Move `value` to the heap and take the first ownership unit on it
    ///
    /// `value` should arrive with a count of zero; after this call it is one.
    pub fn new(value: T) -> Self {
        let ptr = NonNull::from(Box::leak(Box::new(value)));
        // SAFETY: the allocation is fresh, live and matches what `release`
        // reclaims.
        unsafe { Self::from_raw(Some(ptr)) }
    }

    /// Create a handle from a raw reference, retaining it if non-null
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a live object whose allocation matches
    /// what its `release` implementation reclaims.
    pub unsafe fn from_raw(ptr: Option<NonNull<T>>) -> Self {
        let handle = Self {
            ptr,
            _owns: PhantomData,
        };
        handle.retain_target();
        handle
    }

    /// Point this handle at a raw reference
    ///
    /// Assigning the current target is a no-op. Otherwise the old target is
    /// released first and the new one retained after.
    ///
    /// # Safety
    ///
    /// Same contract as [`SharedHandle::from_raw`]. The new target must stay
    /// alive across the release of the old one.
    pub unsafe fn assign_raw(&mut self, ptr: Option<NonNull<T>>) -> &mut Self {
        if self.ptr != ptr {
            self.release_target();
            self.ptr = ptr;
            self.retain_target();
        }
        self
    }

    /// Point this handle at the target of `other`
    pub fn assign(&mut self, other: &SharedHandle<T>) -> &mut Self {
        // SAFETY: `other` holds a unit on its target, so the target outlives
        // the release of our old one.
        unsafe { self.assign_raw(other.ptr) }
    }

    /// Drop the current target, leaving the handle empty
    pub fn reset(&mut self) {
        self.release_target();
    }

    /// Raw reference to the target without touching ownership
    #[inline]
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Give up the handle without releasing, returning the raw reference
    ///
    /// The caller inherits one ownership unit and must eventually pass it to
    /// [`RefCounted::release`] or back to [`SharedHandle::from_raw`] followed
    /// by a manual release.
    pub fn into_raw(self) -> Option<NonNull<T>> {
        ManuallyDrop::new(self).ptr
    }

    /// Check if the handle refers to nothing
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Borrow the target, if any
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: we hold a unit on the target, keeping it alive for as long
        // as `self` is borrowed.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Borrow the target or report an empty handle
    pub fn try_get(&self) -> Result<&T> {
        self.get().ok_or(ModelError::EmptyHandle)
    }

    /// Mutably borrow the target when this handle is its only owner
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let mut ptr = self.ptr?;
        // SAFETY: a count of one means no other handle can observe the
        // target while `self` is mutably borrowed.
        unsafe {
            if ptr.as_ref().reference_count() == 1 {
                Some(ptr.as_mut())
            } else {
                None
            }
        }
    }

    /// Number of owners of the target, zero for an empty handle
    pub fn reference_count(&self) -> usize {
        self.get().map_or(0, RefCounted::reference_count)
    }

    /// Check if two handles refer to the same object
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        a.ptr == b.ptr
    }

    #[inline]
    fn address(&self) -> Option<*const ()> {
        self.ptr.map(|ptr| ptr.as_ptr().cast_const().cast::<()>())
    }

    fn retain_target(&self) {
        if let Some(target) = self.get() {
            target.retain();
        }
    }

    fn release_target(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: the unit taken in `retain_target` is handed back here
            // exactly once; `ptr` has been cleared from `self`.
            unsafe { T::release(ptr) }
        }
    }
}

impl<T: RefCounted> Drop for SharedHandle<T> {
    fn drop(&mut self) {
        self.release_target();
    }
}

impl<T: RefCounted> Clone for SharedHandle<T> {
    fn clone(&self) -> Self {
        // SAFETY: our own unit keeps the target alive while it is retained.
        unsafe { Self::from_raw(self.ptr) }
    }
}

impl<T: RefCounted> Default for SharedHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: RefCounted> Deref for SharedHandle<T> {
    type Target = T;

    /// Panics on an empty handle; use [`SharedHandle::get`] to check first.
    fn deref(&self) -> &T {
        match self.get() {
            Some(target) => target,
            None => panic!("dereferenced an empty SharedHandle"),
        }
    }
}

impl<T: RefCounted> From<T> for SharedHandle<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: RefCounted> PartialEq for SharedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T: RefCounted> Eq for SharedHandle<T> {}

impl<T: RefCounted> PartialOrd for SharedHandle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RefCounted> Ord for SharedHandle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl<T: RefCounted> Hash for SharedHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: RefCounted> fmt::Debug for SharedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address() {
            Some(address) => f
                .debug_struct("SharedHandle")
                .field("target", &address)
                .field("reference_count", &self.reference_count())
                .finish(),
            None => f.write_str("SharedHandle(null)"),
        }
    }
}

// SAFETY: a `Sync` target promises thread-safe retain/release (see
// `RefCounted`), so moving or sharing handles across threads is sound as long
// as the target itself may be sent and shared.
unsafe impl<T: RefCounted + Send + Sync> Send for SharedHandle<T> {}
unsafe impl<T: RefCounted + Send + Sync> Sync for SharedHandle<T> {}
