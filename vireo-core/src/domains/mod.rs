//! Pure state machines, one per domain.
//!
//! Each domain is a plain state struct plus an `update` function that folds
//! one message into it and returns the side effects the owning service
//! should perform. Nothing in here touches a channel, a timer or an await
//! point, which is what keeps these transitions directly testable.

pub mod transport;
pub mod watchlist;

/// Effects requested by a domain transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainUpdate<E> {
    /// Effects for the owning service, in the order they should run.
    pub effects: Vec<E>,
}

impl<E> DomainUpdate<E> {
    /// Create an empty update (no effects)
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Create an update with a single effect
    pub fn effect(effect: impl Into<E>) -> Self {
        Self {
            effects: vec![effect.into()],
        }
    }

    /// Create an update with several effects
    pub fn with(effects: Vec<E>) -> Self {
        Self { effects }
    }

    /// Add an effect to this update
    pub fn add_effect(mut self, effect: impl Into<E>) -> Self {
        self.effects.push(effect.into());
        self
    }

    /// Check if this update requests any effects
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
