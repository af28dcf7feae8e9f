use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Field, FieldId, FieldStatus};

// Observable state of an in-memory field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: Option<String>,
    pub status: FieldStatus,
    pub custom_validity: String,
}

// Field adapter for headless hosts. Clones share the same state, so a host can
// keep one handle while the form owns another.
#[derive(Clone, Debug)]
pub struct InMemoryField {
    id: FieldId,
    state: Arc<Mutex<FieldState>>,
}

impl InMemoryField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            state: Arc::new(Mutex::new(FieldState::default())),
        }
    }

    pub fn with_value(id: FieldId, value: impl Into<String>) -> Self {
        let field = Self::new(id);
        field.set_value(value);
        field
    }

    // Simulates the user typing; validity is left untouched until the next blur.
    pub fn set_value(&self, value: impl Into<String>) {
        self.lock().value = Some(value.into());
    }

    pub fn clear_value(&self) {
        self.lock().value = None;
    }

    pub fn snapshot(&self) -> FieldState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, FieldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Field for InMemoryField {
    fn id(&self) -> FieldId {
        self.id
    }

    fn value(&self) -> Option<String> {
        self.lock().value.clone()
    }

    fn set_status(&self, status: FieldStatus) {
        self.lock().status = status;
    }

    fn set_custom_validity(&self, message: &str) {
        self.lock().custom_validity = message.to_string();
    }
}
