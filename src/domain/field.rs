use std::fmt;

// Tracked form inputs. `Access` is only decorated with a widget, never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Card,
    Expire,
    Access,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Card => "card",
            FieldId::Expire => "expire",
            FieldId::Access => "access",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Visual validity of a field. Success and Error are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

// The host side of a single input (a DOM element, a TUI widget, ...).
// Validators and the presenter only talk to fields through this port.
pub trait Field: Send + Sync {
    fn id(&self) -> FieldId;

    // Current textual value; `None` when the host has no value at all.
    fn value(&self) -> Option<String>;

    fn set_status(&self, status: FieldStatus);

    // Message surfaced by the host's native validation UI. Empty clears it.
    fn set_custom_validity(&self, message: &str);
}
