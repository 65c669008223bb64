//! Contact form state
//!
//! The form never reaches a server. A valid submission waits out a simulated
//! latency, is handed to a `SubmissionSink` (logged, then discarded), clears
//! the fields and shows a success state that falls back to idle on its own.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Simulated send latency
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// How long the success state stays visible
pub const SUCCESS_RESET: Duration = Duration::from_millis(5000);

/// Minimum message length, counted on the trimmed message
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Pattern shared with the page runtime
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// A form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }
}

/// Field values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Field-level error messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// `(field, message)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|msg| (f, msg)))
    }
}

/// Syntactic email check: something before '@', and a dot inside the domain
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate every field. An empty result means the form may be submitted.
pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.set(Field::Name, NAME_REQUIRED);
    }

    if form.email.trim().is_empty() {
        errors.set(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.set(Field::Email, EMAIL_INVALID);
    }

    if form.subject.trim().is_empty() {
        errors.set(Field::Subject, SUBJECT_REQUIRED);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.set(Field::Message, MESSAGE_REQUIRED);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.set(Field::Message, MESSAGE_TOO_SHORT);
    }

    errors
}

/// Receives accepted submissions. Nothing is sent anywhere.
pub trait SubmissionSink {
    fn submitted(&mut self, form: &ContactForm);
}

impl<F: FnMut(&ContactForm)> SubmissionSink for F {
    fn submitted(&mut self, form: &ContactForm) {
        self(form)
    }
}

/// Submit button state. Times are offsets on the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting {
        since: Duration,
    },
    Success {
        since: Duration,
    },
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the state
    Rejected(FormErrors),
    /// Simulated send started
    Started,
    /// A send is already in flight
    Ignored,
}

/// Form values, errors and submit status owned by the contact section
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    form: ContactForm,
    errors: FormErrors,
    status: SubmitStatus,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Typing into a field clears that field's error
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit(&mut self, now: Duration) -> SubmitOutcome {
        if matches!(self.status, SubmitStatus::Submitting { .. }) {
            return SubmitOutcome::Ignored;
        }

        let errors = validate(&self.form);
        self.errors = errors.clone();
        if !errors.is_empty() {
            return SubmitOutcome::Rejected(errors);
        }

        self.status = SubmitStatus::Submitting { since: now };
        SubmitOutcome::Started
    }

    /// Advance timers. Returns true when the status changed.
    pub fn tick(&mut self, now: Duration, sink: &mut impl SubmissionSink) -> bool {
        match self.status {
            SubmitStatus::Submitting { since } if now.saturating_sub(since) >= SUBMIT_LATENCY => {
                sink.submitted(&self.form);
                self.form = ContactForm::default();
                self.status = SubmitStatus::Success { since: now };
                true
            }
            SubmitStatus::Success { since } if now.saturating_sub(since) >= SUCCESS_RESET => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Submitting { .. } => "Sending...",
            SubmitStatus::Success { .. } => "Message Sent!",
        }
    }
}

/// Validation rules and messages embedded in the page for the runtime script
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRules {
    pub email_pattern: &'static str,
    pub min_message_chars: usize,
    pub submit_latency_ms: u64,
    pub success_reset_ms: u64,
    pub messages: RuleMessages,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleMessages {
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub subject_required: &'static str,
    pub message_required: &'static str,
    pub message_too_short: &'static str,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            email_pattern: EMAIL_PATTERN,
            min_message_chars: MIN_MESSAGE_CHARS,
            submit_latency_ms: SUBMIT_LATENCY.as_millis() as u64,
            success_reset_ms: SUCCESS_RESET.as_millis() as u64,
            messages: RuleMessages {
                name_required: NAME_REQUIRED,
                email_required: EMAIL_REQUIRED,
                email_invalid: EMAIL_INVALID,
                subject_required: SUBJECT_REQUIRED,
                message_required: MESSAGE_REQUIRED,
                message_too_short: MESSAGE_TOO_SHORT,
            },
        }
    }
}
