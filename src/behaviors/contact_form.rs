//! Contact form: client-side validation and a simulated send.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend behind this form. Native submission is always
//! suppressed; a valid attempt only shows a thank-you note and clears the
//! form. Each attempt starts from a clean slate: every error slot and the
//! feedback line are emptied before validation runs.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::rc::Rc;

use crate::config::{FormMessages, PageConfig};
use crate::dom::{DomElement, EventKind, PageEvent, PageHost};
use crate::state::contact::{ContactSubmission, Field, FieldErrors, validate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; the form keeps its contents.
    Rejected(FieldErrors),
    /// Every field passed; the form was reset.
    Accepted,
}

pub struct ContactForm<E: DomElement> {
    form: E,
    error_slots: Vec<(Field, E)>,
    feedback: Option<E>,
    messages: FormMessages,
    min_message_chars: usize,
}

impl<E: DomElement> ContactForm<E> {
    /// Wire the form's submit event. Error slots and feedback are optional.
    pub fn mount<H>(host: &H, config: &PageConfig) -> Option<Rc<Self>>
    where
        H: PageHost<Element = E>,
    {
        let form = host.query(&config.selectors.contact_form)?;

        let error_slots = Field::ALL
            .iter()
            .filter_map(|field| {
                let selector = format!("{}[data-for=\"{}\"]", config.selectors.field_error, field.as_str());
                form.query(&selector).map(|slot| (*field, slot))
            })
            .collect();
        let feedback = form.query(&config.selectors.form_feedback);

        let this = Rc::new(Self {
            form: form.clone(),
            error_slots,
            feedback,
            messages: config.messages.clone(),
            min_message_chars: config.message_min_chars,
        });

        let handler = Rc::clone(&this);
        host.listen(
            &form,
            EventKind::Submit,
            Box::new(move |event: &PageEvent<E>| {
                handler.submit(event);
            }),
        );

        Some(this)
    }

    /// Handle a submit event. The native submission never goes through.
    pub fn submit(&self, event: &PageEvent<E>) -> SubmitOutcome {
        event.prevent_default();
        self.process()
    }

    /// Clear previous messages, validate, and report.
    pub fn process(&self) -> SubmitOutcome {
        self.clear_messages();

        let submission = self.read_submission();
        match validate(&submission, &self.messages, self.min_message_chars) {
            Ok(()) => {
                self.show_feedback(&self.messages.submitted);
                self.form.reset_form();
                log::info!("contact form accepted (demo, nothing sent)");
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                for (field, message) in errors.iter() {
                    if let Some(slot) = self.error_slot(field) {
                        slot.set_text(message);
                    }
                }
                self.show_feedback(&self.messages.form_has_errors);
                log::debug!("contact form rejected with {} field errors", errors.len());
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    fn read_submission(&self) -> ContactSubmission {
        let value = |field: Field| self.form.field_value(field.as_str()).unwrap_or_default();
        ContactSubmission::new(&value(Field::Name), &value(Field::Email), &value(Field::Message))
    }

    fn clear_messages(&self) {
        for (_, slot) in &self.error_slots {
            slot.set_text("");
        }
        self.show_feedback("");
    }

    fn show_feedback(&self, text: &str) {
        if let Some(feedback) = &self.feedback {
            feedback.set_text(text);
        }
    }

    fn error_slot(&self, field: Field) -> Option<&E> {
        self.error_slots.iter().find(|(f, _)| *f == field).map(|(_, slot)| slot)
    }
}
