//! Native viewer using egui
//!
//! A toolbox of preset buttons on the left, the animated curve in the
//! center. Drawing reveals a few segments per frame; Stop Draw halts
//! playback in place, Clear Canvas wipes it.

use eframe::egui;
use tracing::{info, warn};

use crate::config::Config;
use crate::player::Player;
use crate::presets::{self, Preset};
use crate::walk;

/// Run the native viewer
pub fn run_viewer(config: Config) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_title("Fractal Walker"),
        ..Default::default()
    };

    eframe::run_native(
        "Fractal Walker",
        options,
        Box::new(|cc| Ok(Box::new(WalkerApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

struct WalkerApp {
    config: Config,
    presets: Vec<Preset>,
    player: Option<Player>,
    status: String,
}

impl WalkerApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            config,
            presets: presets::all(),
            player: None,
            status: String::new(),
        }
    }

    fn start_preset(&mut self, preset: &Preset) {
        if let Err(e) = self.config.check_generations(preset.generations) {
            warn!("{} rejected: {}", preset.id, e);
            self.status = e.to_string();
            return;
        }

        let start = preset.start_position(self.config.width, self.config.height);
        match walk::generate_segments(
            &preset.grammar,
            preset.generations,
            preset.length_ratio,
            start,
        ) {
            Ok(segments) => {
                info!("{}: {} segments queued", preset.id, segments.len());
                self.status = format!("{}: {} segments", preset.name, segments.len());
                self.player = Some(Player::new(segments));
            }
            Err(e) => {
                warn!("walk failed for {}: {}", preset.id, e);
                self.status = e.to_string();
            }
        }
    }

    fn stop_draw(&self) {
        if let Some(player) = &self.player {
            player.cancel_token().cancel();
            info!("playback stopped at {:?}", player.progress());
        }
    }

    fn clear_canvas(&mut self) {
        self.stop_draw();
        self.player = None;
        self.status.clear();
    }
}

impl eframe::App for WalkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Toolbox panel
        let mut to_start: Option<Preset> = None;
        egui::SidePanel::left("toolbox").min_width(220.0).show(ctx, |ui| {
            ui.heading("Fractals");
            ui.separator();

            for preset in &self.presets {
                if ui.button(format!("Draw {}", preset.name)).clicked() {
                    to_start = Some(preset.clone());
                }
            }

            ui.separator();
            if ui.button("Stop Draw").clicked() {
                self.stop_draw();
            }
            if ui.button("Clear Canvas").clicked() {
                self.clear_canvas();
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
        if let Some(preset) = to_start {
            self.start_preset(&preset);
        }

        // Advance playback; keep repainting only while segments remain
        let playing = match &mut self.player {
            Some(player) => player.tick(self.config.segments_per_frame),
            None => false,
        };
        if playing {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(player) = &self.player {
                let (revealed, total) = player.progress();
                if player.finished() {
                    ui.label(format!("{} segments", total));
                } else {
                    ui.label(format!("{} / {} segments", revealed, total));
                }
            } else {
                ui.label("Pick a fractal from the toolbox");
            }

            let plot = egui_plot::Plot::new("curve_plot")
                .data_aspect(1.0)
                .show_axes(false)
                .show_grid(false);

            plot.show(ui, |plot_ui| {
                let Some(player) = &self.player else { return };

                // Merge contiguous segments into polylines; a break only
                // happens where a pop teleported the turtle
                let mut points: Vec<[f64; 2]> = Vec::new();
                for segment in player.shown() {
                    // Screen y grows down, plot y grows up
                    let from = [segment.from.x, -segment.from.y];
                    let to = [segment.to.x, -segment.to.y];

                    if points.last() != Some(&from) {
                        flush_polyline(plot_ui, &mut points, self.config.line_width);
                        points.push(from);
                    }
                    points.push(to);
                }
                flush_polyline(plot_ui, &mut points, self.config.line_width);
            });
        });
    }
}

fn flush_polyline(plot_ui: &mut egui_plot::PlotUi, points: &mut Vec<[f64; 2]>, width: f32) {
    if points.len() < 2 {
        points.clear();
        return;
    }
    let line = egui_plot::Line::new(egui_plot::PlotPoints::from(std::mem::take(points)))
        .color(egui::Color32::WHITE)
        .width(width);
    plot_ui.line(line);
}
