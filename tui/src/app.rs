//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, mouse, resize)
//! - The headless [`Portfolio`] for all state
//! - The compositor for drawing
//!
//! # Frame pipeline
//!
//! Every frame (and after every input event) the app:
//! 1. Fires due timers with `Portfolio::update(now)`
//! 2. Collects finished contact submissions
//! 3. Paints the layers: theme backgrounds, backdrop, pages, chrome, notices
//! 4. Composites them and copies the result into the terminal frame
//!
//! During a page change the outgoing and incoming pages are both painted,
//! each on its own layer, and slid vertically. During a theme change the
//! old and new backgrounds slide horizontally while text colors blend.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use portfolio_core::{ContactError, ContactMessage, Portfolio, SurfaceEvent};

use crate::backdrop::{FloatingSquares, SQUARE_COUNT};
use crate::compositor::{Compositor, LayerId};
use crate::input::{self, Action, HitMap};
use crate::theme::{FramePalette, Palette};
use crate::views::{self, Canvas, ViewContext};

/// Frame interval (~60 FPS while animating)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type ContactResult = Result<ContactMessage, ContactError>;

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Everything the portfolio knows
    portfolio: Portfolio,

    // === Contact Delivery ===
    /// Handed to spawned submissions
    contact_tx: mpsc::UnboundedSender<ContactResult>,
    /// Finished submissions, drained once per frame
    contact_rx: mpsc::UnboundedReceiver<ContactResult>,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Decorative squares
    backdrop: FloatingSquares,
    /// Clickable regions of the last frame
    hits: HitMap,

    // === Misc State ===
    /// When the app started (backdrop clock)
    started: Instant,
    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    background_out: LayerId,
    background_in: LayerId,
    backdrop: LayerId,
    page_out: LayerId,
    page_in: LayerId,
    chrome: LayerId,
    notices: LayerId,
}

impl App {
    /// Create a new App sized to the terminal
    pub fn new(portfolio: Portfolio) -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_size(portfolio, width, height))
    }

    /// Create a new App for a screen of the given size
    pub fn with_size(portfolio: Portfolio, width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let mut compositor = Compositor::new(area);

        // Back to front
        let layers = AppLayers {
            background_out: compositor.create_opaque_layer(area, 0),
            background_in: compositor.create_opaque_layer(area, 1),
            backdrop: compositor.create_layer(area, 5),
            page_out: compositor.create_layer(area, 10),
            page_in: compositor.create_layer(area, 11),
            chrome: compositor.create_layer(area, 20),
            notices: compositor.create_layer(area, 30),
        };

        let (contact_tx, contact_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            portfolio,
            contact_tx,
            contact_rx,
            compositor,
            layers,
            backdrop: FloatingSquares::new(SQUARE_COUNT, &mut rand::thread_rng()),
            hits: HitMap::new(),
            started: Instant::now(),
            size: (width, height),
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Render initial frame immediately so user sees UI
        self.render(terminal, Instant::now())?;

        while self.running {
            tokio::select! {
                biased;

                // Check for terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event, Instant::now()),
                        Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                        None => self.running = false,
                    }
                }

                // Frame tick
                _ = ticker.tick() => {}
            }

            let now = Instant::now();
            self.update(now);
            self.render(terminal, now)?;
        }

        tracing::info!("Portfolio closed");
        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_terminal_event(&mut self, event: Event, now: Instant) {
        let action = match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => input::map_key(
                key,
                self.portfolio.navigation().current_page(),
                self.portfolio.editor().selected_view(),
            ),
            Event::Mouse(mouse) => {
                // A press always begins a new gesture, even if the last
                // release happened outside the window and never arrived
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    self.portfolio.handle_event(SurfaceEvent::TouchEnd, now);
                }
                input::map_mouse(mouse, &self.hits)
            }
            Event::Resize(w, h) => {
                self.handle_resize(w, h);
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action, now);
        }
    }

    /// Perform an input action
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Surface(event) => {
                self.portfolio.handle_event(event, now);
            }
            Action::SubmitContact => self.submit_contact(now),
            Action::Quit => {
                tracing::debug!("Quit requested");
                self.running = false;
            }
        }
    }

    /// Start a submission in the background
    fn submit_contact(&mut self, now: Instant) {
        let Some(submission) = self.portfolio.begin_contact_submit(now) else {
            return;
        };
        let tx = self.contact_tx.clone();
        tokio::spawn(async move {
            let result = submission.send().await;
            if tx.send(result).is_err() {
                tracing::debug!("App closed before the submission finished");
            }
        });
    }

    /// Fire timers and collect finished submissions
    pub fn update(&mut self, now: Instant) {
        self.portfolio.update(now);
        while let Ok(result) = self.contact_rx.try_recv() {
            self.portfolio.contact_finished(result, now);
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "Resized");
        self.size = (width, height);
        self.compositor.resize(Rect::new(0, 0, width, height));

        let l = &self.layers;
        for id in [
            l.background_out,
            l.background_in,
            l.backdrop,
            l.page_out,
            l.page_in,
            l.chrome,
            l.notices,
        ] {
            self.compositor.resize_layer(id, width, height);
            self.compositor.move_layer(id, 0, 0);
        }
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        now: Instant,
    ) -> anyhow::Result<()> {
        let output = self.compose(now);

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    let idx = output.index_of(x, y);
                    if idx < output.content.len() {
                        buf[(x, y)] = output.content[idx].clone();
                    }
                }
            }
        })?;

        Ok(())
    }

    /// Paint every layer for `now` and composite them
    pub fn compose(&mut self, now: Instant) -> &Buffer {
        let (width, height) = self.size;
        let theme = self.portfolio.theme();
        let frame = FramePalette::resolve(theme.is_dark(), theme.transition(), now, width);

        // Theme backgrounds
        paint_background(&mut self.compositor, self.layers.background_in, &frame.incoming.0);
        self.compositor
            .move_layer(self.layers.background_in, frame.incoming.1, 0);
        match frame.outgoing {
            Some((palette, x)) => {
                paint_background(&mut self.compositor, self.layers.background_out, &palette);
                self.compositor.move_layer(self.layers.background_out, x, 0);
                self.compositor.set_visible(self.layers.background_out, true);
            }
            None => self.compositor.set_visible(self.layers.background_out, false),
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.backdrop) {
            let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
            self.backdrop.render(buf, &frame.content, elapsed);
        }

        // Pages
        self.hits.clear();
        let ctx = ViewContext {
            portfolio: &self.portfolio,
            palette: frame.content,
            now,
        };
        let sliding = ctx
            .portfolio
            .navigation()
            .transition()
            .filter(|t| !t.is_finished(now))
            .copied();

        match sliding {
            Some(t) => {
                let (out_y, in_y) = t.offsets(now, f32::from(height));
                if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page_out) {
                    views::render_page(t.from, &ctx, &mut Canvas::new(buf, None));
                }
                if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page_in) {
                    views::render_page(t.to, &ctx, &mut Canvas::new(buf, None));
                }
                self.compositor
                    .move_layer(self.layers.page_out, 0, out_y.round() as i32);
                self.compositor
                    .move_layer(self.layers.page_in, 0, in_y.round() as i32);
                self.compositor.set_visible(self.layers.page_out, true);
            }
            None => {
                let page = ctx.portfolio.navigation().current_page();
                if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page_in) {
                    views::render_page(page, &ctx, &mut Canvas::new(buf, Some(&mut self.hits)));
                }
                self.compositor.move_layer(self.layers.page_in, 0, 0);
                self.compositor.set_visible(self.layers.page_out, false);
            }
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.chrome) {
            views::render_chrome(&ctx, &mut Canvas::new(buf, Some(&mut self.hits)));
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.notices) {
            views::render_notices(&ctx, &mut Canvas::new(buf, Some(&mut self.hits)));
        }

        self.compositor.composite()
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The headless state
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Clickable regions of the last composed frame
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }
}

fn paint_background(compositor: &mut Compositor, id: LayerId, palette: &Palette) {
    if let Some(buf) = compositor.layer_buffer_mut(id) {
        buf.reset();
        let area = buf.area;
        buf.set_style(area, Style::default().bg(palette.bg).fg(palette.text));
    }
}
