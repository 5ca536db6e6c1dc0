// crates/danmaku-ui/src/modules/transport.rs
//
// Transport bar: play/pause, scrub slider, time readout, danmaku controls.
//
// Scrubbing emits Seek on every slider change. Dragging backwards produces a
// stream of small backward seeks; the allocator absorbs the ones inside its
// jitter tolerance and resets cheaply on the rest.

use danmaku_core::commands::{PlaybackState, PlayerCommand};
use danmaku_core::helpers::time::format_millis;
use egui::{RichText, Ui};
use rfd::FileDialog;

use super::PlayerModule;
use crate::context::AppContext;
use crate::theme::{DARK_BG_2, DARK_TEXT_DIM};

/// Scrub range when nothing is loaded yet.
const DEFAULT_RANGE_MILLIS: i64 = 60_000;

#[derive(Default)]
pub struct TransportModule;

impl PlayerModule for TransportModule {
    fn name(&self) -> &str { "Transport" }

    fn ui(&mut self, ui: &mut Ui, state: &PlaybackState, ctx: &mut AppContext, cmd: &mut Vec<PlayerCommand>) {
        egui::Frame::new()
            .fill(DARK_BG_2)
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let label = if state.is_playing { "⏸" } else { "▶" };
                    if ui.button(label).on_hover_text("Play / Pause (Space)").clicked() {
                        cmd.push(if state.is_playing { PlayerCommand::Pause } else { PlayerCommand::Play });
                    }

                    ui.label(
                        RichText::new(format!(
                            "{} / {}",
                            format_millis(state.position_millis),
                            format_millis(state.length_millis),
                        ))
                        .monospace(),
                    );

                    let range_end = if state.length_millis > 0 { state.length_millis } else { DEFAULT_RANGE_MILLIS };
                    let mut pos = state.position_millis;
                    let slider_w = (ui.available_width() - 360.0).max(120.0);
                    ui.spacing_mut().slider_width = slider_w;
                    let resp = ui.add(egui::Slider::new(&mut pos, 0..=range_end).show_value(false));
                    if resp.changed() {
                        cmd.push(PlayerCommand::Seek(pos));
                    }

                    ui.separator();

                    let mut visible = ctx.overlay.is_visible();
                    if ui.checkbox(&mut visible, "Danmaku").on_hover_text("Toggle overlay (D)").changed() {
                        cmd.push(PlayerCommand::ToggleDanmaku);
                    }

                    let mut episode = ctx.episode;
                    let ep = ui.add(egui::DragValue::new(&mut episode).range(1..=9999).prefix("Ep "));
                    if ep.changed() && episode != ctx.episode {
                        cmd.push(PlayerCommand::SetEpisode(episode));
                    }

                    if ui.button("Open…").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Comments", &["json"])
                            .pick_file()
                        {
                            cmd.push(PlayerCommand::OpenComments(path));
                        }
                    }
                    if ui.button("Clear").clicked() {
                        cmd.push(PlayerCommand::ClearDanmaku);
                    }
                });

                let status = ctx.status.clone().unwrap_or_else(|| {
                    format!("{} comments loaded", ctx.overlay.comment_count())
                });
                ui.label(RichText::new(status).size(11.0).color(DARK_TEXT_DIM));
            });
    }
}
