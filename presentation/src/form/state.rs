//! Field values shared by the prompt loop and the display

use contact_domain::RawContactFields;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the form's current field values
#[derive(Clone, Default)]
pub struct FormState {
    fields: Arc<Mutex<RawContactFields>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: RawContactFields) -> Self {
        Self {
            fields: Arc::new(Mutex::new(fields)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RawContactFields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> RawContactFields {
        self.lock().clone()
    }

    pub fn set(&self, fields: RawContactFields) {
        *self.lock() = fields;
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_fields() {
        let state = FormState::new();
        let other = state.clone();

        state.set(RawContactFields::new("Ann", "ann@x.com", "hi"));
        assert_eq!(other.snapshot().name, "Ann");

        other.clear();
        assert!(state.snapshot().is_empty());
    }
}
