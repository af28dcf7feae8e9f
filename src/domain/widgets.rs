use crate::domain::field::Field;

// Options for the date-picker attached to the expiration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerOptions {
    pub format: &'static str,
    // 0 = Sunday, 1 = Monday.
    pub week_start: u8,
    // Earliest selectable date, relative to today.
    pub start_date: &'static str,
    pub autoclose: bool,
    // Preset value; a fixed date, not "today".
    pub preset_date: &'static str,
}

impl DatePickerOptions {
    pub fn expire() -> Self {
        Self {
            format: "dd.mm.yyyy",
            week_start: 1,
            start_date: "+1d",
            autoclose: true,
            preset_date: "01.01.2020",
        }
    }
}

// Options for the searchable select on the access-level field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectPickerOptions {
    pub live_search: bool,
}

impl SelectPickerOptions {
    pub fn access() -> Self {
        Self { live_search: true }
    }
}

// Port for the host's widget library. Widgets themselves are out of our hands.
pub trait WidgetHost: Send + Sync {
    fn init_date_picker(&self, field: &dyn Field, options: &DatePickerOptions);
    fn init_select_picker(&self, field: &dyn Field, options: &SelectPickerOptions);
}
