use std::sync::{Arc, Mutex};

use crate::domain::{Element, ResultsRegion};

// In-memory results container. Cloning shares the same contents, so a
// renderer can read what the handler wrote.
#[derive(Clone, Default)]
pub struct MemoryRegion {
    elements: Arc<Mutex<Vec<Element>>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> Vec<Element> {
        match self.elements.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.elements()
            .into_iter()
            .map(|element| element.text)
            .collect()
    }

    fn with_elements(&self, f: impl FnOnce(&mut Vec<Element>)) {
        match self.elements.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl ResultsRegion for MemoryRegion {
    fn clear(&self) {
        self.with_elements(|elements| elements.clear());
    }

    fn append(&self, element: Element) {
        self.with_elements(|elements| elements.push(element));
    }
}
