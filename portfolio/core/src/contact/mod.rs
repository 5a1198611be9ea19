//! Contact Form Delivery
//!
//! The contact page collects a name, an email address and a message. On
//! submit the message is validated and handed to a transactional email
//! service twice, concurrently:
//!
//! ```text
//! ContactForm ─validate─▶ ContactMessage ─┬─▶ notification → site owner
//!                                         └─▶ auto-reply   → sender
//! ```
//!
//! Either request failing fails the submission. There is no retry; the
//! outcome is shown to the user as a notice.

mod emailjs;

pub use emailjs::{EmailJsSender, EMAILJS_SEND_PATH};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Default EmailJS API origin
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Contact delivery errors
#[derive(Debug, Error)]
pub enum ContactError {
    /// A required field is empty (or whitespace only)
    #[error("{0} is required")]
    MissingField(ContactField),

    /// The email address is not plausibly deliverable
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// Service id, template or public key missing
    #[error("contact delivery is not configured")]
    NotConfigured,

    /// Transport-level failure
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("email service rejected the request ({status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}

/// Form fields, in focus order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactField {
    /// Sender's name
    #[default]
    Name,
    /// Sender's address
    Email,
    /// Free-form message
    Message,
}

impl ContactField {
    /// Focus order
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Label shown next to the input
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    fn step(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,
    /// Sender's address
    pub email: String,
    /// Message body
    pub message: String,
    focus: ContactField,
}

impl ContactForm {
    /// Empty form, name field focused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused field
    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    /// Focus a specific field
    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    /// Move focus forward, wrapping
    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(1);
    }

    /// Move focus back, wrapping
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(-1);
    }

    /// Text of `field`
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Type a character into the focused field
    ///
    /// Newlines are only accepted by the message field.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && self.focus != ContactField::Message {
            return;
        }
        self.focused_mut().push(c);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Empty every field and focus the first one
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the form and produce a trimmed message
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        for (field, value) in [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Message, message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// `local@domain.tld`, no whitespace, no empty labels
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// A validated submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Sender's name
    pub name: String,
    /// Sender's address
    pub email: String,
    /// Message body
    pub message: String,
}

/// Variables substituted into an email template
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    /// Recipient name
    pub to_name: String,
    /// Recipient address (auto-reply only; the owner address lives in the template)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
    /// Sender name
    pub from_name: String,
    /// Sender address
    pub from_email: String,
    /// Reply-To header
    pub reply_to: String,
    /// Message body
    pub message: String,
    /// Submission time, RFC 3339
    pub sent_at: String,
}

/// Sends one templated email
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Render `template_id` with `params` and send it
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), ContactError>;
}

/// Contact delivery settings (`[contact]` in the config file)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// Email API origin
    pub endpoint: String,
    /// EmailJS service id
    pub service_id: Option<String>,
    /// Template for the notification to the site owner
    pub template_id: Option<String>,
    /// Template for the auto-reply to the sender
    pub auto_reply_template_id: Option<String>,
    /// EmailJS public key (`user_id`)
    pub public_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: None,
            template_id: None,
            auto_reply_template_id: None,
            public_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ContactConfig {
    /// Whether every id needed for delivery is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        [
            &self.service_id,
            &self.template_id,
            &self.auto_reply_template_id,
            &self.public_key,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

#[derive(Clone)]
struct Delivery {
    sender: Arc<dyn EmailSender>,
    notify_template: String,
    auto_reply_template: String,
}

/// Validates submissions and sends the notification/auto-reply pair
#[derive(Clone)]
pub struct ContactService {
    owner_name: String,
    delivery: Option<Delivery>,
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("owner_name", &self.owner_name)
            .field("configured", &self.delivery.is_some())
            .finish()
    }
}

impl ContactService {
    /// A service with no delivery; every valid submission yields `NotConfigured`
    #[must_use]
    pub fn unconfigured(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            delivery: None,
        }
    }

    /// A service delivering through `sender`
    #[must_use]
    pub fn with_sender(
        owner_name: impl Into<String>,
        sender: Arc<dyn EmailSender>,
        notify_template: impl Into<String>,
        auto_reply_template: impl Into<String>,
    ) -> Self {
        Self {
            owner_name: owner_name.into(),
            delivery: Some(Delivery {
                sender,
                notify_template: notify_template.into(),
                auto_reply_template: auto_reply_template.into(),
            }),
        }
    }

    /// Build from configuration, using EmailJS when fully configured
    pub fn from_config(config: &ContactConfig, owner_name: &str) -> Result<Self, ContactError> {
        if !config.is_configured() {
            tracing::info!("Contact delivery not configured");
            return Ok(Self::unconfigured(owner_name));
        }
        let (Some(service_id), Some(template), Some(auto_reply), Some(public_key)) = (
            config.service_id.as_deref(),
            config.template_id.as_deref(),
            config.auto_reply_template_id.as_deref(),
            config.public_key.as_deref(),
        ) else {
            return Err(ContactError::NotConfigured);
        };

        let sender = EmailJsSender::new(&config.endpoint, service_id, public_key, config.timeout)?;
        Ok(Self::with_sender(
            owner_name,
            Arc::new(sender),
            template,
            auto_reply,
        ))
    }

    /// Whether submissions can actually be delivered
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.delivery.is_some()
    }

    /// Validate `form` and send both emails concurrently
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactMessage, ContactError> {
        let message = form.validate()?;
        let delivery = self.delivery.as_ref().ok_or(ContactError::NotConfigured)?;

        let sent_at = chrono::Utc::now().to_rfc3339();
        let notification = TemplateParams {
            to_name: self.owner_name.clone(),
            to_email: None,
            from_name: message.name.clone(),
            from_email: message.email.clone(),
            reply_to: message.email.clone(),
            message: message.message.clone(),
            sent_at: sent_at.clone(),
        };
        let auto_reply = TemplateParams {
            to_name: message.name.clone(),
            to_email: Some(message.email.clone()),
            from_name: self.owner_name.clone(),
            from_email: message.email.clone(),
            reply_to: message.email.clone(),
            message: message.message.clone(),
            sent_at,
        };

        futures::try_join!(
            delivery.sender.send(&delivery.notify_template, &notification),
            delivery.sender.send(&delivery.auto_reply_template, &auto_reply),
        )?;

        tracing::info!(from = %message.email, "Contact message delivered");
        Ok(message)
    }
}
