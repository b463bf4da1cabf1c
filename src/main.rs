//! Gallery Studio - Random Image Revealer
//! Built with egui for native Wayland support

mod config;
mod gallery;

use config::StudioConfig;
use eframe::egui::{self, Color32, RichText, Stroke};
use gallery::{ClientConfig, GalleryClient, GalleryPanel, GalleryPanelEvent};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Gallery Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Gallery Studio",
        options,
        Box::new(|cc| {
            // Image widgets load their URL sources through these loaders
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(60, 60, 60);
            style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(80, 80, 90);
            style.visuals.widgets.active.bg_fill = Color32::from_rgb(0, 120, 212);
            style.visuals.widgets.hovered.bg_stroke =
                Stroke::new(1.0, Color32::from_rgb(0, 120, 212));
            cc.egui_ctx.set_style(style);

            Ok(Box::new(GalleryStudio::new()))
        }),
    )
}

struct GalleryStudio {
    panel: GalleryPanel,
    status_message: Option<String>,
    font_scale: f32,
}

impl GalleryStudio {
    /// Runs once per process, before the first frame.
    fn new() -> Self {
        let ext_config = StudioConfig::load().unwrap_or_default();

        let mut client_config = ClientConfig::default();
        if let Some(index_url) = ext_config.index_url {
            client_config.index_url = index_url;
        }
        let font_scale = ext_config.font_scale.unwrap_or(1.0).clamp(0.8, 1.5);

        let client = GalleryClient::new(client_config);
        log::info!("Gallery index at {}", client.index_url());

        Self {
            panel: GalleryPanel::new(client),
            status_message: None,
            font_scale,
        }
    }

    fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        log::info!("{}", msg);
    }

    fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.panel.client.index_url())
                    .size(10.0)
                    .color(Color32::GRAY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.panel.in_flight() > 0 {
                    ui.label(
                        RichText::new(format!("⏳ {} in flight", self.panel.in_flight()))
                            .size(10.0),
                    );
                }
                ui.label(
                    RichText::new(format!("{} revealed", self.panel.reveal_count()))
                        .size(10.0)
                        .color(Color32::GRAY),
                );
                if let Some(ref msg) = self.status_message {
                    ui.label(RichText::new(msg).size(10.0));
                }
            });
        });
    }
}

impl eframe::App for GalleryStudio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Surface panel events in the status bar
        for event in self.panel.take_events() {
            match event {
                GalleryPanelEvent::StatusMessage(msg) => self.set_status(&msg),
            }
        }

        let native_ppp = ctx.native_pixels_per_point().unwrap_or(1.0);
        ctx.set_pixels_per_point(native_ppp * self.font_scale);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(12.0, 4.0)))
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.show(ui);
        });
    }
}
