use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{DatePickerOptions, Field, FieldId, SelectPickerOptions, WidgetHost};

// Widget host for environments without a widget library.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopWidgetHost;

impl WidgetHost for NoopWidgetHost {
    fn init_date_picker(&self, field: &dyn Field, options: &DatePickerOptions) {
        tracing::debug!(field = %field.id(), format = options.format, "date picker skipped.");
    }

    fn init_select_picker(&self, field: &dyn Field, _options: &SelectPickerOptions) {
        tracing::debug!(field = %field.id(), "select picker skipped.");
    }
}

// Widget host that remembers what it was asked to initialize.
#[derive(Clone, Debug, Default)]
pub struct RecordingWidgetHost {
    date_pickers: Arc<Mutex<Vec<(FieldId, DatePickerOptions)>>>,
    select_pickers: Arc<Mutex<Vec<FieldId>>>,
}

impl RecordingWidgetHost {
    pub fn date_pickers(&self) -> Vec<(FieldId, DatePickerOptions)> {
        self.date_pickers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn select_pickers(&self) -> Vec<FieldId> {
        self.select_pickers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl WidgetHost for RecordingWidgetHost {
    fn init_date_picker(&self, field: &dyn Field, options: &DatePickerOptions) {
        self.date_pickers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((field.id(), options.clone()));
    }

    fn init_select_picker(&self, field: &dyn Field, _options: &SelectPickerOptions) {
        self.select_pickers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(field.id());
    }
}
