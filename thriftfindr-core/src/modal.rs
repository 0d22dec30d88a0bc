//! Exclusive modal ownership and the body scroll lock tied to it.
use crate::constants::{
    DETAIL_CATEGORY_FALLBACK, DETAIL_PRIMARY_TAG_FALLBACK, DETAIL_SECONDARY_TAG_FALLBACK,
    ESCAPE_KEY,
};
use crate::records::ItemRecord;

/// The single modal a page may show. Only item detail carries a payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    ItemDetail(ItemRecord),
    NewItem,
    StoreRegistration,
}

impl ModalState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn selected_item(&self) -> Option<&ItemRecord> {
        match self {
            Self::ItemDetail(item) => Some(item),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    OpenItemDetail(ItemRecord),
    OpenNewItem,
    OpenStoreRegistration,
    Close,
    /// A key pressed while the page is focused; only Escape has an effect.
    Key(String),
}

/// Something that can stop and restore page scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds a [`ScrollLock`] locked until dropped.
#[derive(Debug)]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// Page-level owner of the open modal.
///
/// Opening any modal replaces the one already open and takes the scroll
/// lock; every close path releases it.
#[derive(Debug)]
pub struct ModalController<L: ScrollLock + Clone> {
    state: ModalState,
    lock: L,
    guard: Option<ScrollLockGuard<L>>,
}

impl<L: ScrollLock + Clone> ModalController<L> {
    pub const fn new(lock: L) -> Self {
        Self {
            state: ModalState::Closed,
            lock,
            guard: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open_item_detail(&mut self, item: ItemRecord) {
        self.open(ModalState::ItemDetail(item));
    }

    pub fn open_new_item(&mut self) {
        self.open(ModalState::NewItem);
    }

    pub fn open_store_registration(&mut self) {
        self.open(ModalState::StoreRegistration);
    }

    fn open(&mut self, next: ModalState) {
        if self.guard.is_none() {
            self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        }
        self.state = next;
    }

    /// Close whatever is open and restore scrolling.
    ///
    /// Returns `true` when a modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.is_open();
        self.state = ModalState::Closed;
        if self.guard.take().is_none() {
            self.lock.unlock();
        }
        was_open
    }

    /// Escape closes the open modal; other keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.state.is_open() {
            self.close()
        } else {
            false
        }
    }

    /// Apply an action, returning whether the state changed.
    pub fn apply(&mut self, action: ModalAction) -> bool {
        let before = self.state.clone();
        match action {
            ModalAction::OpenItemDetail(item) => self.open_item_detail(item),
            ModalAction::OpenNewItem => self.open_new_item(),
            ModalAction::OpenStoreRegistration => self.open_store_registration(),
            ModalAction::Close => {
                self.close();
            }
            ModalAction::Key(key) => {
                self.handle_key(&key);
            }
        }
        before != self.state
    }
}

/// Labels shown in the item detail dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetailView {
    pub top_tags: [String; 2],
    pub category_label: String,
    pub description: String,
    pub price: String,
}

impl ItemDetailView {
    #[must_use]
    pub fn from_item(item: &ItemRecord) -> Self {
        let tag_or = |index: usize, fallback: &str| {
            item.tags
                .get(index)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            top_tags: [
                tag_or(0, DETAIL_PRIMARY_TAG_FALLBACK),
                tag_or(1, DETAIL_SECONDARY_TAG_FALLBACK),
            ],
            category_label: tag_or(2, DETAIL_CATEGORY_FALLBACK),
            description: item.description_or_default().to_string(),
            price: item.display_price(),
        }
    }
}
