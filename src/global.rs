//! A once-only home for the process-wide configuration.
//!
//! ```ignore
//! static CONFIG: Global<ServerConfig> = Global::new();
//!
//! fn main() -> Result<(), BindfigError> {
//!     CONFIG.initialize(Bindfig::builder().path("realmd.conf"))?;
//!     serve(CONFIG.get().expect("initialized above"));
//!     Ok(())
//! }
//! ```
//!
//! The slot is filled at most once. There is no reload: a second
//! [`initialize`](Global::initialize) fails with
//! [`BindfigError::AlreadyInitialized`] and leaves the first value in place.

use std::sync::OnceLock;

use crate::bind::Configuration;
use crate::builder::BindfigBuilder;
use crate::error::BindfigError;

pub struct Global<C> {
    slot: OnceLock<C>,
}

impl<C> Global<C> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// The configuration, if it has been initialized.
    pub fn get(&self) -> Option<&C> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Store an already-loaded configuration.
    pub fn set(&self, config: C) -> Result<&C, BindfigError> {
        self.slot
            .set(config)
            .map_err(|_| BindfigError::AlreadyInitialized)?;
        self.slot.get().ok_or(BindfigError::AlreadyInitialized)
    }
}

impl<C: Configuration + Default> Global<C> {
    /// Load through `builder` and store the result.
    ///
    /// Nothing is read when the slot is already filled.
    pub fn initialize(&self, builder: BindfigBuilder<C>) -> Result<&C, BindfigError> {
        if self.is_initialized() {
            return Err(BindfigError::AlreadyInitialized);
        }
        self.set(builder.load()?)
    }
}

impl<C> Default for Global<C> {
    fn default() -> Self {
        Self::new()
    }
}
