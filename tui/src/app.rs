//! Main Application
//!
//! The App struct owns every piece of state and runs the TUI lifecycle:
//! - Event loop (keyboard, mouse, resize) and the frame tick
//! - The shared [`AppContext`] plus the conversation it drives
//! - Three compositor layers: the active view, the navigation bar, and the
//!   celebration overlay
//!
//! Input becomes a [`Target`]; targets that concern the router become
//! [`UiAction`]s and go through [`App::dispatch`], which also carries out the
//! router's side effects.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;

use shine_core::{
    AppContext, Conversation, DashboardData, ProgressData, RouterEffect, ShineConfig, UiAction,
    ViewState, SUGGESTIONS,
};

use crate::avatar::{AnimationEngine, PersonalityPicker};
use crate::compositor::{Compositor, LayerId};
use crate::theme::Theme;
use crate::views::celebration::CelebrationView;
use crate::views::conversation::ConversationView;
use crate::views::dashboard::DashboardView;
use crate::views::nav::{NavBar, NAV_HEIGHT};
use crate::views::progress::ProgressView;
use crate::views::{RenderCtx, Target};

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Quick goodbye messages
const QUICK_GOODBYES: &[&str] = &[
    "Keep shining!",
    "See you soon!",
    "You've got this!",
    "Breathe. Speak. Shine.",
    "Until next time!",
    "Proud of you today!",
    "Take care!",
    "Go make someone smile!",
    "Every word counts!",
    "Your voice matters!",
];

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Goodbye message to show on exit
    goodbye_message: Option<String>,
    /// Router state shared by every view
    context: AppContext,
    /// Chat log, draft and pending replies
    conversation: Conversation,
    dashboard_data: DashboardData,
    progress_data: ProgressData,

    // === UI Components ===
    theme: Theme,
    picker: PersonalityPicker,
    compositor: Compositor,
    layers: AppLayers,
    dashboard: DashboardView,
    chat: ConversationView,
    progress: ProgressView,
    nav: NavBar,
    celebration: CelebrationView,

    // === Animation Clocks ===
    /// Never restarted; breathing, pulses and shimmer
    ambient: AnimationEngine,
    /// Restarted on navigation
    entrance: AnimationEngine,
    /// Restarted each time the overlay opens
    celebration_clock: AnimationEngine,

    // === Timing ===
    frame_interval: Duration,
    last_frame: Instant,
}

/// Layer IDs for UI regions
struct AppLayers {
    view: LayerId,
    nav: LayerId,
    overlay: LayerId,
}

/// Screen regions for the three layers
fn layer_bounds(area: Rect) -> (Rect, Rect, Rect) {
    let nav_height = NAV_HEIGHT.min(area.height);
    let view = Rect::new(0, 0, area.width, area.height - nav_height);
    let nav = Rect::new(0, area.height - nav_height, area.width, nav_height);
    (view, nav, area)
}

impl App {
    /// Create an App sized to the current terminal
    pub fn new(config: &ShineConfig) -> anyhow::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_size(config, width, height))
    }

    /// Create an App for a fixed screen size
    pub fn with_size(config: &ShineConfig, width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let mut compositor = Compositor::new(area);

        let (view_bounds, nav_bounds, overlay_bounds) = layer_bounds(area);
        let layers = AppLayers {
            view: compositor.create_layer(view_bounds, 0),
            nav: compositor.create_layer(nav_bounds, 10),
            overlay: compositor.create_layer(overlay_bounds, 100),
        };
        compositor.set_visible(layers.overlay, false);

        tracing::debug!(
            width,
            height,
            personality = ?config.personality,
            source = %config.source(),
            "app initialised"
        );

        Self {
            running: true,
            goodbye_message: None,
            context: AppContext::new(config.personality),
            conversation: Conversation::with_opening(config.personality, config.reply_delay),
            dashboard_data: DashboardData::sample(config.user_name.clone()),
            progress_data: ProgressData::sample(),
            theme: Theme::new(config.theme),
            picker: PersonalityPicker::new(config.personality),
            compositor,
            layers,
            dashboard: DashboardView::new(),
            chat: ConversationView::new(),
            progress: ProgressView::new(),
            nav: NavBar::new(),
            celebration: CelebrationView::new(),
            ambient: AnimationEngine::new(),
            entrance: AnimationEngine::new(),
            celebration_clock: AnimationEngine::new(),
            frame_interval: config.frame_interval(),
            last_frame: Instant::now(),
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            let now = Instant::now();
            let delta = now - self.last_frame;
            self.last_frame = now;
            self.tick(delta);

            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_interval {
                tokio::time::sleep(self.frame_interval - elapsed).await;
            }
        }

        Ok(())
    }

    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
    }

    /// Advance animation clocks and collect replies that have arrived
    pub fn tick(&mut self, delta: Duration) {
        self.ambient.update(delta);
        self.entrance.update(delta);
        self.celebration_clock.update(delta);

        let appended = self.conversation.poll_replies();
        if appended > 0 {
            tracing::debug!(appended, "replies delivered");
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Char('c') && ctrl {
            return self.dispatch(UiAction::Quit);
        }

        // The overlay is modal; Esc closes it rather than quitting
        if self.context.celebration_visible() {
            if let Some(target) = self.celebration.handle_key(key) {
                self.activate(target);
            }
            return;
        }

        let target = match key.code {
            KeyCode::Esc => Some(Target::Action(UiAction::Quit)),
            KeyCode::F(n @ 1..=3) => Some(Target::Action(UiAction::Navigate(
                ViewState::ALL[usize::from(n - 1)],
            ))),
            KeyCode::Tab => Some(Target::Action(UiAction::Navigate(
                self.context.view().next(),
            ))),
            _ => match self.context.view() {
                ViewState::Dashboard => self.dashboard.handle_key(key, &mut self.picker),
                ViewState::Conversation => self.chat.handle_key(key, &mut self.conversation),
                ViewState::Progress => self.progress.handle_key(key),
            },
        };

        if let Some(target) = target {
            self.activate(target);
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.target_at(mouse.column, mouse.row) {
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollUp => self.scroll(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.scroll(WHEEL_ROWS),
            _ => {}
        }
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        self.compositor.resize(area);

        let (view, nav, overlay) = layer_bounds(area);
        self.compositor.place_layer(self.layers.view, view);
        self.compositor.place_layer(self.layers.nav, nav);
        self.compositor.place_layer(self.layers.overlay, overlay);
    }

    fn scroll(&mut self, rows: i32) {
        if self.context.celebration_visible() {
            return;
        }
        match self.context.view() {
            ViewState::Dashboard => self.dashboard.scroll(rows),
            // Wheel up reveals older messages
            ViewState::Conversation => self.chat.scroll_back(-rows),
            ViewState::Progress => self.progress.scroll(rows),
        }
    }

    /// Whatever is clickable at a screen position
    fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        let layer = self.compositor.layer_at(x, y)?;
        let (lx, ly) = self.compositor.to_local(layer, x, y)?;

        if layer == self.layers.overlay {
            self.celebration.target_at(lx, ly)
        } else if layer == self.layers.nav {
            self.nav.target_at(lx, ly)
        } else {
            let bounds = self.compositor.layer_bounds(layer)?;
            let local = Rect::new(0, 0, bounds.width, bounds.height);
            match self.context.view() {
                ViewState::Dashboard => self.dashboard.target_at(local, lx, ly),
                ViewState::Conversation => self.chat.target_at(lx, ly),
                ViewState::Progress => self.progress.target_at(local, lx, ly),
            }
        }
    }

    /// Carry out a click or key target
    pub fn activate(&mut self, target: Target) {
        match target {
            Target::Action(action) => self.dispatch(action),
            Target::Suggestion(index) => {
                if let Some(text) = SUGGESTIONS.get(index) {
                    self.conversation.select_suggestion(text);
                }
            }
            Target::ToggleMic => self.conversation.toggle_listening(),
            Target::Send => {
                if self.conversation.submit_draft().is_some() {
                    self.chat.follow();
                }
            }
            Target::Personality(variant) => {
                let mut chosen = None;
                self.picker.choose(variant, |v| chosen = Some(v));
                if let Some(v) = chosen {
                    self.dispatch(UiAction::SelectPersonality(v));
                }
            }
        }
    }

    /// Apply an action to the router and carry out its effects
    pub fn dispatch(&mut self, action: UiAction) {
        let previous_view = self.context.view();

        match self.context.apply(action) {
            Some(RouterEffect::PersonalityChanged(personality)) => {
                self.conversation.set_personality(personality);
                self.picker.sync(personality);
            }
            Some(RouterEffect::Quit) => {
                self.conversation.teardown();
                self.generate_goodbye();
                self.running = false;
            }
            None => {}
        }

        if self.context.view() != previous_view {
            self.entrance.restart();
            self.dashboard.reset_scroll();
            self.progress.reset_scroll();
        }

        let visible = self.context.celebration_visible();
        self.compositor.set_visible(self.layers.overlay, visible);
        if self.celebration.sync(self.context.celebration()) {
            self.celebration_clock.restart();
        }
    }

    /// Draw every layer and flush the composite to the terminal
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.render_layers();
        terminal.draw(|frame| {
            self.compositor.render_into(frame.buffer_mut());
        })?;
        Ok(())
    }

    fn render_layers(&mut self) {
        let rctx = RenderCtx {
            theme: self.theme,
            ambient: &self.ambient,
            entrance: &self.entrance,
        };

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.view) {
            buf.reset();
            match self.context.view() {
                ViewState::Dashboard => self.dashboard.render(
                    buf,
                    &self.dashboard_data,
                    &self.context,
                    &self.picker,
                    &rctx,
                ),
                ViewState::Conversation => self.chat.render(
                    buf,
                    &self.conversation,
                    &self.dashboard_data.user_name,
                    &rctx,
                ),
                ViewState::Progress => self.progress.render(buf, &self.progress_data, &rctx),
            }
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            self.nav.render(buf, self.context.view(), &self.theme);
        }

        let visible = self.context.celebration_visible();
        self.compositor.set_visible(self.layers.overlay, visible);
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.overlay) {
            self.celebration.render(
                buf,
                self.context.celebration(),
                &self.theme,
                &self.celebration_clock,
            );
        }
    }

    fn generate_goodbye(&mut self) {
        let idx = rand::random::<usize>() % QUICK_GOODBYES.len();
        self.goodbye_message = Some(QUICK_GOODBYES[idx].to_string());
    }

    /// Get the goodbye message for display after TUI closes
    pub fn goodbye(&self) -> Option<&str> {
        self.goodbye_message.as_deref()
    }

    /// Whether the event loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Router state
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The chat
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Selection state of the dashboard picker
    pub fn picker(&self) -> &PersonalityPicker {
        &self.picker
    }
}
