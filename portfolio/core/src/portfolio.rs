//! Portfolio - the headless application
//!
//! Owns one instance of every controller and routes [`SurfaceEvent`]s to
//! them. A surface holds a single `Portfolio`, forwards input, calls
//! [`Portfolio::update`] once per frame and renders what the read accessors
//! report. Nothing here is global.
//!
//! Contact delivery is the one async operation. The surface asks for a
//! [`ContactSubmission`], runs it wherever it likes (the terminal spawns it
//! on tokio) and hands the outcome back through [`Portfolio::contact_finished`].

use std::time::{Duration, Instant};

use crate::animation::CountUp;
use crate::config::{PortfolioConfig, Profile, Stat};
use crate::contact::{ContactError, ContactForm, ContactMessage, ContactService};
use crate::editor::{EditorShowcase, DEFAULT_ROTATE_INTERVAL, DEFAULT_SWITCH_DURATION};
use crate::events::SurfaceEvent;
use crate::gestures::GestureRouter;
use crate::navigation::PageNavigationController;
use crate::notices::{NoticeBoard, NoticeLevel};
use crate::pages::PageId;
use crate::preference::detect_prefers_dark;
use crate::projects::ProjectShowcase;
use crate::storage::SharedStorage;
use crate::theme::ThemeController;

/// Text of the notice posted after a successful submission
pub const SENT_NOTICE: &str = "Message sent! I'll get back to you soon.";

/// A validated contact submission ready to be sent
#[derive(Clone, Debug)]
pub struct ContactSubmission {
    service: ContactService,
    form: ContactForm,
}

impl ContactSubmission {
    /// Send both emails
    pub async fn send(self) -> Result<ContactMessage, ContactError> {
        self.service.submit(&self.form).await
    }
}

/// The headless portfolio application
pub struct Portfolio {
    profile: Profile,
    navigation: PageNavigationController,
    theme: ThemeController,
    gestures: GestureRouter,
    projects: ProjectShowcase,
    editor: EditorShowcase,
    notices: NoticeBoard,
    contact_form: ContactForm,
    contact: ContactService,
    sending: bool,
    stats_started: Instant,
}

impl Portfolio {
    /// Build every controller from configuration
    ///
    /// The "prefers dark" signal is taken from the config when forced there,
    /// otherwise from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the email client cannot be constructed.
    pub fn from_config(
        config: &PortfolioConfig,
        storage: SharedStorage,
        now: Instant,
    ) -> Result<Self, ContactError> {
        let contact = ContactService::from_config(&config.contact, &config.profile.name)?;
        let prefers_dark = config.prefers_dark.or_else(detect_prefers_dark);
        Ok(Self::new(config, storage, contact, prefers_dark, now))
    }

    /// Build every controller with an explicit contact service and preference
    #[must_use]
    pub fn new(
        config: &PortfolioConfig,
        storage: SharedStorage,
        contact: ContactService,
        prefers_dark: Option<bool>,
        now: Instant,
    ) -> Self {
        let theme = ThemeController::new(storage.clone(), prefers_dark, config.theme_transition);
        let navigation = PageNavigationController::new(storage, config.navigation);

        tracing::info!(
            page = %navigation.current_page(),
            dark = theme.is_dark(),
            contact = contact.is_configured(),
            "Portfolio started"
        );

        Self {
            profile: config.profile.clone(),
            navigation,
            theme,
            gestures: GestureRouter::new(config.gestures),
            projects: ProjectShowcase::new(config.projects.clone()),
            editor: EditorShowcase::new(now, DEFAULT_ROTATE_INTERVAL, DEFAULT_SWITCH_DURATION),
            notices: NoticeBoard::new(config.notice_ttl),
            contact_form: ContactForm::new(),
            contact,
            sending: false,
            stats_started: now,
        }
    }

    /// Route one surface event
    ///
    /// Returns `true` when the event changed visible state.
    pub fn handle_event(&mut self, event: SurfaceEvent, now: Instant) -> bool {
        let before = self.navigation.current_page();
        let changed = match event {
            SurfaceEvent::Wheel { delta_y } => {
                self.gestures.on_wheel(delta_y, &mut self.navigation, now)
            }
            SurfaceEvent::TouchStart { y } => {
                self.gestures.on_touch_start(y);
                false
            }
            SurfaceEvent::TouchMove { y } => {
                self.gestures.on_touch_move(y, &mut self.navigation, now)
            }
            SurfaceEvent::TouchEnd => {
                self.gestures.on_touch_end();
                false
            }
            SurfaceEvent::Navigate { direction } => self.navigation.navigate(direction, now),
            SurfaceEvent::NavigateTo { page } => self.navigation.navigate_to(page, now),
            SurfaceEvent::ToggleTheme => self.theme.toggle(now),
            SurfaceEvent::SelectCategory { filter } => self.projects.select(filter),
            SurfaceEvent::NextCategory => {
                self.projects.next_category();
                true
            }
            SurfaceEvent::PrevCategory => {
                self.projects.prev_category();
                true
            }
            SurfaceEvent::MoveProjectCursor { delta } => {
                let before = self.projects.cursor();
                self.projects.move_cursor(delta);
                before != self.projects.cursor()
            }
            SurfaceEvent::ShowEditorView { view } => self.editor.show(view, now),
            SurfaceEvent::ContactInput { ch } => {
                self.contact_form.insert_char(ch);
                true
            }
            SurfaceEvent::ContactBackspace => {
                self.contact_form.backspace();
                true
            }
            SurfaceEvent::ContactFocus { field } => {
                self.contact_form.set_focus(field);
                true
            }
            SurfaceEvent::ContactFocusNext => {
                self.contact_form.focus_next();
                true
            }
            SurfaceEvent::ContactFocusPrev => {
                self.contact_form.focus_prev();
                true
            }
            SurfaceEvent::DismissNotice { id } => self.notices.dismiss(id),
        };

        let after = self.navigation.current_page();
        if after != before && after == PageId::Hero {
            self.stats_started = now;
        }
        changed
    }

    /// Fire due timers and expire notices; call once per frame
    pub fn update(&mut self, now: Instant) {
        self.navigation.update(now);
        self.theme.update(now);
        self.editor.update(now);
        self.notices.prune(now);
    }

    /// Validate the form and hand out a submission to run
    ///
    /// Returns `None` (posting an error notice) when the form is invalid, the
    /// service is unconfigured, or a submission is already in flight.
    pub fn begin_contact_submit(&mut self, now: Instant) -> Option<ContactSubmission> {
        if self.sending {
            tracing::trace!("Submission already in flight");
            return None;
        }
        if let Err(e) = self.contact_form.validate() {
            self.notices.post(NoticeLevel::Error, e.to_string(), now);
            return None;
        }
        if !self.contact.is_configured() {
            self.notices
                .post(NoticeLevel::Error, ContactError::NotConfigured.to_string(), now);
            return None;
        }

        self.sending = true;
        self.notices.post(NoticeLevel::Info, "Sending...", now);
        Some(ContactSubmission {
            service: self.contact.clone(),
            form: self.contact_form.clone(),
        })
    }

    /// Report the outcome of a submission
    ///
    /// Success clears the form; failure keeps it so the user can retry.
    pub fn contact_finished(&mut self, result: Result<ContactMessage, ContactError>, now: Instant) {
        self.sending = false;
        match result {
            Ok(_) => {
                self.contact_form.clear();
                self.notices.post(NoticeLevel::Success, SENT_NOTICE, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                self.notices.post(
                    NoticeLevel::Error,
                    format!("Failed to send message: {e}"),
                    now,
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Page navigation
    #[must_use]
    pub fn navigation(&self) -> &PageNavigationController {
        &self.navigation
    }

    /// Theme
    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Project showcase
    #[must_use]
    pub fn projects(&self) -> &ProjectShowcase {
        &self.projects
    }

    /// Hero editor panel
    #[must_use]
    pub fn editor(&self) -> &EditorShowcase {
        &self.editor
    }

    /// Live notices
    #[must_use]
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Contact form contents
    #[must_use]
    pub fn contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    /// Whether a submission is in flight
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Personal details
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Hero stats with their current count-up values
    pub fn hero_stats(&self, now: Instant) -> impl Iterator<Item = (&Stat, u32)> + '_ {
        let started = self.stats_started;
        self.profile.stats.iter().map(move |stat| {
            let count = CountUp::new(stat.value, started, Duration::from_secs(stat.duration_secs));
            (stat, count.value(now))
        })
    }
}
