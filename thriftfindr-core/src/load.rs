//! Page load state and the guard that drops responses after teardown.
use std::cell::Cell;
use std::rc::Rc;

use crate::error::CatalogError;

/// What a data-backed section of a page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn from_result(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                log::error!("Storefront load failed: {err}");
                Self::Failed(err.user_message())
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Marks whether the page that started a fetch is still mounted.
///
/// Clones share one flag; ending any clone ends them all.
#[derive(Debug, Clone)]
pub struct PageLifetime {
    active: Rc<Cell<bool>>,
}

impl Default for PageLifetime {
    fn default() -> Self {
        Self::begin()
    }
}

impl PageLifetime {
    #[must_use]
    pub fn begin() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn end(&self) {
        self.active.set(false);
    }

    /// Hand `value` to `apply` only while the page is alive.
    ///
    /// Returns whether the value was delivered.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_active() {
            apply(value);
            true
        } else {
            log::debug!("Discarding response for a page that is no longer mounted");
            false
        }
    }
}
