//! Name to effect mapping, populated once at startup

use derive_more::{Display, Error};
use heapless::FnvIndexMap;
use log::error;

use crate::effect::{EffectId, EffectSlot};

/// Maximum number of registered effects
pub const MAX_EFFECTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    #[display("effect is already registered")]
    Duplicate,
    #[display("registry holds at most {} effects", MAX_EFFECTS)]
    Full,
}

/// Effect instances keyed by their command name
///
/// Keys are unique. Lookups of unknown names return `None`; deciding what
/// to do about them is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    effects: FnvIndexMap<&'static str, EffectSlot, MAX_EFFECTS>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in effect under its canonical name
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for id in EffectId::ALL {
            let result = registry.register(id.as_str(), id.to_slot());
            debug_assert!(result.is_ok(), "built-in effect {} rejected", id.as_str());
            if let Err(err) = result {
                error!("built-in effect {:?} not registered: {}", id.as_str(), err);
            }
        }
        registry
    }

    pub fn register(&mut self, name: &'static str, slot: EffectSlot) -> Result<(), RegistryError> {
        if self.effects.contains_key(name) {
            return Err(RegistryError::Duplicate);
        }
        self.effects
            .insert(name, slot)
            .map(|_| ())
            .map_err(|_| RegistryError::Full)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Find the registered key equal to `name`
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.effects.keys().find(|key| **key == name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&EffectSlot> {
        self.effects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut EffectSlot> {
        self.effects.get_mut(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
