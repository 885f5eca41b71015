//! Contact form validation and submission flow.
//!
//! # Responsibility
//! - Map a draft to field-level errors (`validate`).
//! - Run the submit state machine: idle -> submitting -> idle with banner.
//! - Hand validated drafts to a transport, bounded by a timeout.
//!
//! # Invariants
//! - Every validation pass checks all fields; no short-circuit.
//! - Editing a field re-evaluates only that field's error.
//! - While submitting, further submit attempts are rejected unchanged.
//! - A failed send keeps the draft; a successful send resets it.
//! - A submission always settles, including when its future is dropped.

use crate::config::EngineConfig;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Default minimum message length in characters.
pub const DEFAULT_MESSAGE_MIN_CHARS: usize = 10;

/// Contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Stable field id used by form inputs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort { min: usize },
}

impl FieldError {
    /// User-facing message for `field`.
    pub fn message(self, field: FormField) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::InvalidFormat => "Please enter a valid email address".to_string(),
            Self::TooShort { min } => {
                format!("{} must be at least {min} characters long", field.label())
            }
        }
    }
}

/// Editable contact draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }
}

/// Field-level errors of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: BTreeMap<FormField, FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    fn put(&mut self, field: FormField, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.entries.insert(field, error);
            }
            None => {
                self.entries.remove(&field);
            }
        }
    }
}

/// Validates every field of `draft` with the default message length.
pub fn validate(draft: &FormDraft) -> FormErrors {
    validate_with(draft, DEFAULT_MESSAGE_MIN_CHARS)
}

/// Validates every field of `draft`.
pub fn validate_with(draft: &FormDraft, message_min_chars: usize) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in FormField::ALL {
        errors.put(
            field,
            field_error(field, draft.get(field), message_min_chars),
        );
    }
    errors
}

fn field_error(field: FormField, value: &str, message_min_chars: usize) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    match field {
        // Raw value: surrounding whitespace is not a valid address.
        FormField::Email if !EMAIL_RE.is_match(value) => Some(FieldError::InvalidFormat),
        FormField::Message if trimmed.chars().count() < message_min_chars => {
            Some(FieldError::TooShort {
                min: message_min_chars,
            })
        }
        _ => None,
    }
}

/// Contact transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Failed(String),
    TimedOut(Duration),
    /// The submission was abandoned before the transport answered.
    Cancelled,
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(message) => write!(f, "message could not be sent: {message}"),
            Self::TimedOut(after) => {
                write!(f, "message send timed out after {} ms", after.as_millis())
            }
            Self::Cancelled => write!(f, "message send was cancelled"),
        }
    }
}

impl Error for TransportError {}

/// External delivery of validated drafts (mail API, backend endpoint).
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, draft: &FormDraft) -> Result<(), TransportError>;
}

/// Stand-in transport: waits, logs, succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.simulated_send_delay())
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, draft: &FormDraft) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        // Metadata only; draft contents stay out of logs.
        info!(
            "event=contact_send module=contact status=ok transport=simulated subject_chars={} message_chars={}",
            draft.subject.chars().count(),
            draft.message.chars().count()
        );
        Ok(())
    }
}

/// Submit lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

/// Result banner shown after a submit attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBanner {
    Success,
    Failure(String),
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySubmitting,
    Invalid(FormErrors),
}

impl Display for SubmitRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadySubmitting => write!(f, "a submission is already in progress"),
            Self::Invalid(errors) => write!(f, "form has {} invalid field(s)", errors.len()),
        }
    }
}

impl Error for SubmitRejected {}

/// `finish_submit` called outside a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStateError {
    NotSubmitting,
}

impl Display for SubmitStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSubmitting => write!(f, "no submission is in progress"),
        }
    }
}

impl Error for SubmitStateError {}

/// Contact form instance owning its draft.
#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: FormDraft,
    errors: FormErrors,
    status: SubmitStatus,
    banner: Option<SubmitBanner>,
    message_min_chars: usize,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_MIN_CHARS)
    }
}

impl ContactForm {
    pub fn new(message_min_chars: usize) -> Self {
        Self {
            draft: FormDraft::default(),
            errors: FormErrors::default(),
            status: SubmitStatus::Idle,
            banner: None,
            message_min_chars,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.message_min_chars)
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn banner(&self) -> Option<&SubmitBanner> {
        self.banner.as_ref()
    }

    /// Submit button enabled state.
    pub fn can_submit(&self) -> bool {
        self.status == SubmitStatus::Idle
    }

    /// Replaces one field value.
    ///
    /// A field that currently shows an error is re-checked immediately, so a
    /// fix clears exactly that field's error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.errors.get(field).is_some() {
            let error = field_error(field, self.draft.get(field), self.message_min_chars);
            self.errors.put(field, error);
        }
    }

    /// Starts a submission.
    ///
    /// Returns a snapshot of the validated draft for the transport.
    ///
    /// # Errors
    /// - `AlreadySubmitting` while a previous attempt is unresolved; no state changes.
    /// - `Invalid` when validation fails; the full error set is stored.
    pub fn begin_submit(&mut self) -> Result<FormDraft, SubmitRejected> {
        if self.status == SubmitStatus::Submitting {
            warn!("event=contact_submit module=contact status=rejected reason=in_flight");
            return Err(SubmitRejected::AlreadySubmitting);
        }

        self.errors = validate_with(&self.draft, self.message_min_chars);
        if !self.errors.is_empty() {
            info!(
                "event=contact_submit module=contact status=invalid fields={}",
                self.errors.len()
            );
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.status = SubmitStatus::Submitting;
        self.banner = None;
        Ok(self.draft.clone())
    }

    /// Resolves the in-flight submission.
    pub fn finish_submit(
        &mut self,
        result: Result<(), TransportError>,
    ) -> Result<&SubmitBanner, SubmitStateError> {
        if self.status != SubmitStatus::Submitting {
            return Err(SubmitStateError::NotSubmitting);
        }
        Ok(self.settle(result))
    }

    /// Resolves the in-flight submission as cancelled; the draft is kept.
    pub fn abandon_submit(&mut self) -> Result<&SubmitBanner, SubmitStateError> {
        self.finish_submit(Err(TransportError::Cancelled))
    }

    /// Runs a full submission against `transport`, bounded by `timeout`.
    pub async fn submit<T: ContactTransport>(
        &mut self,
        transport: &T,
        timeout: Duration,
    ) -> Result<SubmitBanner, SubmitRejected> {
        let draft = self.begin_submit()?;
        let in_flight = InFlight {
            form: self,
            settled: false,
        };
        let result = match tokio::time::timeout(timeout, transport.send(&draft)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::TimedOut(timeout)),
        };
        Ok(in_flight.settle(result))
    }

    fn settle(&mut self, result: Result<(), TransportError>) -> &SubmitBanner {
        self.status = SubmitStatus::Idle;
        let banner = match result {
            Ok(()) => {
                info!("event=contact_submit module=contact status=ok");
                self.draft = FormDraft::default();
                self.errors = FormErrors::default();
                SubmitBanner::Success
            }
            Err(err) => {
                warn!(
                    "event=contact_submit module=contact status=error error={}",
                    err
                );
                SubmitBanner::Failure(err.to_string())
            }
        };
        self.banner.insert(banner)
    }
}

/// Settles a running `submit` as cancelled if its future is dropped mid-send.
struct InFlight<'f> {
    form: &'f mut ContactForm,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, result: Result<(), TransportError>) -> SubmitBanner {
        self.settled = true;
        let banner = self.form.settle(result).clone();
        banner
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.form.settle(Err(TransportError::Cancelled));
        }
    }
}
