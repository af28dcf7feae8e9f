// Form lifecycle: one explicit setup, then blur and key events from the host.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::{AbortHandle, JoinHandle};

use crate::domain::{
    DatePickerOptions, Field, FieldId, RequestClient, SelectPickerOptions, WidgetHost, is_not_empty,
    should_suppress_key,
};
use crate::use_cases::check_card::{CardCheckOutcome, CheckCardUseCase};
use crate::use_cases::presenter::set_validation;

pub const NAME_EMPTY_MESSAGE: &str = "fill in the user's name";
pub const EXPIRE_EMPTY_MESSAGE: &str = "fill in the expiration date";

/// Field handles supplied by the host. Missing fields are simply not tracked.
#[derive(Clone, Default)]
pub struct FormFields {
    pub name: Option<Arc<dyn Field>>,
    pub card: Option<Arc<dyn Field>>,
    pub expire: Option<Arc<dyn Field>>,
    pub access: Option<Arc<dyn Field>>,
}

impl FormFields {
    pub fn get(&self, id: FieldId) -> Option<&Arc<dyn Field>> {
        match id {
            FieldId::Name => self.name.as_ref(),
            FieldId::Card => self.card.as_ref(),
            FieldId::Expire => self.expire.as_ref(),
            FieldId::Access => self.access.as_ref(),
        }
    }
}

/// A set-up form. Card checks run as tokio tasks; starting a new one aborts the
/// previous one, so only the latest blur ever presents a result.
pub struct CardForm<R> {
    fields: FormFields,
    card_check: Arc<CheckCardUseCase<R>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl<R> CardForm<R>
where
    R: RequestClient + 'static,
{
    /// Initializes the external widgets and returns the form ready for events.
    pub fn setup(fields: FormFields, client: R, widgets: &dyn WidgetHost) -> Self {
        if let Some(expire) = &fields.expire {
            widgets.init_date_picker(expire.as_ref(), &DatePickerOptions::expire());
        }
        if let Some(access) = &fields.access {
            widgets.init_select_picker(access.as_ref(), &SelectPickerOptions::access());
        }
        tracing::debug!(
            name = fields.name.is_some(),
            card = fields.card.is_some(),
            expire = fields.expire.is_some(),
            access = fields.access.is_some(),
            "form set up."
        );

        Self {
            fields,
            card_check: Arc::new(CheckCardUseCase { client }),
            in_flight: Mutex::new(None),
        }
    }

    /// Handles a field losing focus.
    ///
    /// Name and expiration are validated synchronously and yield `None`. The card
    /// check is spawned and its handle returned. Must be called from within a tokio
    /// runtime.
    pub fn on_blur(&self, id: FieldId) -> Option<JoinHandle<CardCheckOutcome>> {
        let field = self.fields.get(id)?;
        match id {
            FieldId::Name => {
                set_validation(field.as_ref(), is_not_empty(field.as_ref()), NAME_EMPTY_MESSAGE);
                None
            }
            FieldId::Expire => {
                set_validation(field.as_ref(), is_not_empty(field.as_ref()), EXPIRE_EMPTY_MESSAGE);
                None
            }
            FieldId::Card => Some(self.spawn_card_check(Arc::clone(field))),
            FieldId::Access => None,
        }
    }

    /// Returns true when the host must cancel the key event.
    pub fn on_key(&self, key_code: u32) -> bool {
        should_suppress_key(key_code)
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    fn spawn_card_check(&self, field: Arc<dyn Field>) -> JoinHandle<CardCheckOutcome> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!("aborting superseded card check.");
            }
            previous.abort();
        }

        let card_check = Arc::clone(&self.card_check);
        let handle = tokio::spawn(async move { card_check.execute(field.as_ref()).await });
        *in_flight = Some(handle.abort_handle());
        handle
    }
}
