//! # Slot Pool
//!
//! Generation-checked storage for objects that are created and destroyed
//! at arbitrary times, addressed by [`Handle`].

use crate::handle::Handle;

/// A single storage slot.
#[derive(Debug, Clone)]
struct Slot<T> {
    /// Generation of the value currently (or last) stored here.
    generation: u32,
    /// The stored value, `None` when the slot is free.
    value: Option<T>,
}

/// A slot pool with generation-checked handles.
///
/// Removing a value frees its slot for reuse and bumps the slot
/// generation, so handles to the removed value stop resolving instead of
/// aliasing whatever is stored next.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap in a mutex.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    /// The storage array.
    slots: Vec<Slot<T>>,
    /// Free list - indices of available slots.
    free_list: Vec<u32>,
    /// Number of live objects.
    len: usize,
}

impl<T> Pool<T> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` objects.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::with_capacity(capacity / 4),
            len: 0,
        }
    }

    /// Returns the number of live objects.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the pool holds no objects.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores a value and returns its handle.
    ///
    /// Recycles a free slot when one exists, otherwise grows the storage.
    ///
    /// # Panics
    ///
    /// Panics if the pool already holds `u32::MAX` slots.
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return Handle::new(index, slot.generation);
        }

        let index = u32::try_from(self.slots.len()).expect("pool index space exhausted");
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Handle::new(index, 0)
    }

    /// Removes a value, returning it if the handle was live.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.live_slot_mut(handle)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.free_list.push(handle.index());
        self.len -= 1;
        Some(value)
    }

    /// Returns true if the handle refers to a live value.
    #[inline]
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Gets a reference to a live value.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Gets a mutable reference to a live value.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.live_slot_mut(handle)?.value.as_mut()
    }

    /// Removes every value. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            #[allow(clippy::cast_possible_truncation)]
            self.free_list.push(index as u32);
        }
        self.len = 0;
    }

    /// Iterates over all live values.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            #[allow(clippy::cast_possible_truncation)]
            let handle = Handle::new(index as u32, slot.generation);
            slot.value.as_ref().map(|v| (handle, v))
        })
    }

    /// Iterates mutably over all live values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            #[allow(clippy::cast_possible_truncation)]
            let handle = Handle::new(index as u32, slot.generation);
            slot.value.as_mut().map(|v| (handle, v))
        })
    }

    /// Returns the slot behind a handle if its generation matches.
    fn live_slot_mut(&mut self, handle: Handle) -> Option<&mut Slot<T>> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        (slot.generation == handle.generation()).then_some(slot)
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
