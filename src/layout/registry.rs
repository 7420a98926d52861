use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::layout::geometry::PinnedRegion;

type Measure = Box<dyn Fn() -> Option<PinnedRegion>>;

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("pinned region `{0}` is already owned by a live binding")]
    KeyOccupied(String),
}

struct PinEntry {
    owner: u64,
    measure: Measure,
    region: Option<PinnedRegion>,
}

#[derive(Default)]
struct RegistryState {
    next_owner: u64,
    entries: HashMap<String, PinEntry>,
}

/// Keyed store of pinned scroll regions.
///
/// Each key has at most one writer: the controller holding the [`PinBinding`]
/// returned by [`PinRegistry::bind`]. Everyone else only reads through
/// [`PinRegistry::lookup`].
#[derive(Clone, Default)]
pub struct PinRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl PartialEq for PinRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `key`. The region is measured immediately and again on every
    /// [`refresh`](Self::refresh) until the binding is released.
    pub fn bind(
        &self,
        key: &str,
        measure: impl Fn() -> Option<PinnedRegion> + 'static,
    ) -> Result<PinBinding, RegistryError> {
        let mut state = self.state.borrow_mut();
        if state.entries.contains_key(key) {
            warn!("Rejected second binding for pinned region {}", key);
            return Err(RegistryError::KeyOccupied(key.to_string()));
        }

        state.next_owner += 1;
        let owner = state.next_owner;
        let region = measure();
        state.entries.insert(
            key.to_string(),
            PinEntry {
                owner,
                measure: Box::new(measure),
                region,
            },
        );
        debug!("Bound pinned region {} -> {:?}", key, region);

        Ok(PinBinding {
            key: key.to_string(),
            owner,
            registry: self.clone(),
        })
    }

    /// Last measured region for `key`, if a controller currently owns it.
    pub fn lookup(&self, key: &str) -> Option<PinnedRegion> {
        self.state
            .borrow()
            .entries
            .get(key)
            .and_then(|entry| entry.region)
    }

    #[cfg(test)]
    pub fn is_bound(&self, key: &str) -> bool {
        self.state.borrow().entries.contains_key(key)
    }

    /// Re-measures every bound region.
    pub fn refresh(&self) {
        let mut state = self.state.borrow_mut();
        for (key, entry) in state.entries.iter_mut() {
            entry.region = (entry.measure)();
            debug!("Refreshed pinned region {} -> {:?}", key, entry.region);
        }
    }

    fn release(&self, key: &str, owner: u64) {
        let mut state = self.state.borrow_mut();
        if state.entries.get(key).map(|entry| entry.owner) == Some(owner) {
            state.entries.remove(key);
            debug!("Released pinned region {}", key);
        }
    }
}

/// Ownership of one registry key. Dropping it unregisters the key.
pub struct PinBinding {
    key: String,
    owner: u64,
    registry: PinRegistry,
}

impl PinBinding {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last region measured for this binding's key.
    pub fn region(&self) -> Option<PinnedRegion> {
        self.registry.lookup(self.key())
    }

    /// Gives the key back; same as dropping the binding.
    pub fn release(self) {}
}

impl Drop for PinBinding {
    fn drop(&mut self) {
        self.registry.release(&self.key, self.owner);
    }
}

/// Region a controller should follow: the registered one while it owns the
/// key, otherwise its own measurement. A rejected binder never reads the
/// region of the controller that owns the key.
pub fn followed_region(
    binding: Option<&PinBinding>,
    measure: impl FnOnce() -> Option<PinnedRegion>,
) -> Option<PinnedRegion> {
    match binding {
        Some(binding) => binding.region(),
        None => measure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn lookup_follows_the_binding_lifecycle() {
        let registry = PinRegistry::new();
        assert_eq!(registry.lookup("strip"), None);

        let binding = registry
            .bind("strip", || Some(PinnedRegion::new(100.0, 900.0, 4)))
            .expect("free key");
        assert_eq!(binding.key(), "strip");
        assert_eq!(registry.lookup("strip"), Some(PinnedRegion::new(100.0, 900.0, 4)));

        binding.release();
        assert_eq!(registry.lookup("strip"), None);
        assert!(!registry.is_bound("strip"));
    }

    #[test]
    fn second_writer_is_rejected() {
        let registry = PinRegistry::new();
        let _owner = registry.bind("strip", || None).expect("free key");
        assert_eq!(
            registry.bind("strip", || None).err(),
            Some(RegistryError::KeyOccupied("strip".to_string()))
        );
    }

    #[test]
    fn rejected_binder_follows_its_own_measurement() {
        let registry = PinRegistry::new();
        let owner = registry
            .bind("strip", || Some(PinnedRegion::new(100.0, 900.0, 2)))
            .expect("free key");
        let rejected = registry
            .bind("strip", || Some(PinnedRegion::new(3000.0, 1200.0, 3)))
            .ok();
        assert!(rejected.is_none());

        let local = || Some(PinnedRegion::new(3000.0, 1200.0, 3));
        assert_eq!(
            followed_region(rejected.as_ref(), local),
            Some(PinnedRegion::new(3000.0, 1200.0, 3))
        );
        assert_eq!(
            followed_region(Some(&owner), local),
            Some(PinnedRegion::new(100.0, 900.0, 2))
        );
    }

    #[test]
    fn refresh_remeasures_bound_regions() {
        let registry = PinRegistry::new();
        let top = Rc::new(Cell::new(0.0));
        let measured = top.clone();
        let _binding = registry
            .bind("strip", move || Some(PinnedRegion::new(measured.get(), 500.0, 2)))
            .expect("free key");

        top.set(250.0);
        assert_eq!(registry.lookup("strip").map(|r| r.start), Some(0.0));
        registry.refresh();
        assert_eq!(registry.lookup("strip").map(|r| r.start), Some(250.0));
    }

    #[test]
    fn binding_region_follows_a_late_reflow() {
        let registry = PinRegistry::new();
        let top = Rc::new(Cell::new(1200.0));
        let measured = top.clone();
        let binding = registry
            .bind("strip", move || Some(PinnedRegion::new(measured.get(), 2560.0, 3)))
            .expect("free key");

        // Content above the strip grew after a font swap
        top.set(1340.0);
        registry.refresh();
        let region = followed_region(Some(&binding), || None).expect("bound region");
        assert_eq!(region.start, 1340.0);
        assert_eq!(region.progress_at(1340.0), 0.0);
    }

    #[test]
    fn rebinding_after_release_starts_clean() {
        let registry = PinRegistry::new();
        drop(registry.bind("strip", || Some(PinnedRegion::new(0.0, 10.0, 2))));
        let _again = registry
            .bind("strip", || Some(PinnedRegion::new(5.0, 10.0, 2)))
            .expect("key was released");
        assert_eq!(registry.lookup("strip").map(|r| r.start), Some(5.0));
    }
}
