// src/app.rs (danmaku-ui)
use std::path::PathBuf;

use danmaku_core::commands::{PlaybackState, PlayerCommand};
use danmaku_core::config::OverlayConfig;
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::modules::{overlay_module::OverlayModule, transport::TransportModule, PlayerModule};
use crate::theme::configure_style;

/// Persisted between launches via eframe storage.
#[derive(Serialize, Deserialize, Default)]
struct AppStorage {
    #[serde(default)]
    config:        OverlayConfig,
    #[serde(default)]
    comments_path: Option<PathBuf>,
    #[serde(default)]
    episode:       Option<u32>,
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct DanmakuApp {
    state:        PlaybackState,
    context:      AppContext,
    overlay:      OverlayModule,
    transport:    TransportModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<PlayerCommand>,
    /// Sub-millisecond remainder of the playback clock.
    clock_frac:   f64,
}

impl DanmakuApp {
    /// `config_override` (from `--config`) wins over stored settings;
    /// `comments` (first positional argument) wins over the last opened file.
    pub fn new(
        cc:              &eframe::CreationContext<'_>,
        config_override: Option<OverlayConfig>,
        comments:        Option<PathBuf>,
    ) -> Self {
        configure_style(&cc.egui_ctx);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let stored = cc.storage
            .and_then(|s| eframe::get_value::<AppStorage>(s, eframe::APP_KEY))
            .unwrap_or_default();

        let config = config_override.unwrap_or(stored.config);
        let mut context = AppContext::new(config);
        context.episode = stored.episode.unwrap_or(1).max(1);

        if let Some(path) = comments.or(stored.comments_path) {
            context.request_comments(path);
        }

        Self {
            state: PlaybackState::default(),
            context,
            overlay:      OverlayModule,
            transport:    TransportModule,
            pending_cmds: Vec::new(),
            clock_frac:   0.0,
        }
    }

    fn process_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            // ── Playback ─────────────────────────────────────────────────────
            PlayerCommand::Play => {
                self.state.play();
            }
            PlayerCommand::Pause => {
                self.state.is_playing = false;
            }
            PlayerCommand::Seek(t) => {
                self.state.seek(t);
                self.clock_frac = 0.0;
            }

            // ── Danmaku ──────────────────────────────────────────────────────
            PlayerCommand::ToggleDanmaku => {
                self.context.overlay.toggle_visible();
                crate::danmaku_log!("[overlay] visible = {}", self.context.overlay.is_visible());
            }
            PlayerCommand::ClearDanmaku => {
                self.context.clear_comments(&mut self.state);
                self.clock_frac = 0.0;
            }
            PlayerCommand::OpenComments(path) => {
                self.context.request_comments(path);
            }
            PlayerCommand::SetEpisode(ep) => {
                self.context.episode = ep.max(1);
                if let Some(path) = self.context.comments_path.clone() {
                    self.context.request_comments(path);
                }
            }
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (space, d) = ctx.input(|i| {
            (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::D))
        });
        if space {
            self.pending_cmds.push(if self.state.is_playing { PlayerCommand::Pause } else { PlayerCommand::Play });
        }
        if d {
            self.pending_cmds.push(PlayerCommand::ToggleDanmaku);
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                self.pending_cmds.push(PlayerCommand::OpenComments(path));
            }
        }
    }

    fn advance_clock(&mut self, ctx: &egui::Context) {
        if !self.state.is_playing {
            self.clock_frac = 0.0;
            return;
        }
        let dt_ms = ctx.input(|i| i.stable_dt as f64) * 1000.0 + self.clock_frac;
        let whole = dt_ms.floor();
        self.clock_frac = dt_ms - whole;
        self.state.tick(whole as i64);
        ctx.request_repaint();
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for DanmakuApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &AppStorage {
            config:        self.context.overlay.config().clone(),
            comments_path: self.context.comments_path.clone(),
            episode:       Some(self.context.episode),
        });
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.context.ingest_source_results(&mut self.state);

        egui::TopBottomPanel::bottom("transport_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.transport.ui(ui, &self.state, &mut self.context, &mut self.pending_cmds);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.overlay.ui(ui, &self.state, &mut self.context, &mut self.pending_cmds);
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<PlayerCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        self.advance_clock(ctx);

        // Keep polling while a load is in flight so its result lands promptly.
        if self.context.pending_request.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
