//! Component base
//!
//! The capability set every widget builds on: construction from a
//! configuration and a mountable render target (the `item`). Widgets embed a
//! [`ComponentBase`] and implement [`Component`] to expose it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod item;

pub use item::{ClassList, Item, RenderTarget};

/// Shared handle to a render target.
///
/// The host owns the target and draws it; components only mutate it.
pub type ItemHandle<T> = Arc<Mutex<T>>;

/// Lock a shared target, recovering the guard if a render strategy panicked.
pub fn lock<T>(item: &Mutex<T>) -> MutexGuard<'_, T> {
    item.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared by every component: its render target and class list.
#[derive(Debug)]
pub struct ComponentBase<T> {
    item: ItemHandle<T>,
    class_list: ClassList,
}

impl<T: RenderTarget> ComponentBase<T> {
    /// Mount a fresh target and apply `class_list` to it.
    pub fn new(item: T, class_list: ClassList) -> Self {
        Self::with_handle(Arc::new(Mutex::new(item)), class_list)
    }

    /// Attach to a target the host already shares.
    pub fn with_handle(item: ItemHandle<T>, class_list: ClassList) -> Self {
        {
            let mut target = lock(&item);
            for class in class_list.iter() {
                target.add_class(class);
            }
        }
        Self { item, class_list }
    }

    pub fn item(&self) -> &ItemHandle<T> {
        &self.item
    }

    pub fn class_list(&self) -> &ClassList {
        &self.class_list
    }
}

/// A UI component with a mounted render target.
pub trait Component {
    type Target: RenderTarget;

    fn base(&self) -> &ComponentBase<Self::Target>;

    /// Shared handle to the render target, for the host to draw.
    fn item(&self) -> ItemHandle<Self::Target> {
        Arc::clone(self.base().item())
    }

    fn class_list(&self) -> &ClassList {
        self.base().class_list()
    }
}
