//! UI for the gallery panel: one trigger button, one target image.

use std::sync::mpsc;

use eframe::egui::{self, Color32, RichText, Rounding, Vec2};

use super::client::GalleryClient;
use super::models::{RevealResult, TargetState};
use super::reveal::{reveal_from, RevealSequencer};

/// Events the gallery panel can emit to the main app
#[derive(Debug, Clone)]
pub enum GalleryPanelEvent {
    /// Status message to show in the main app
    StatusMessage(String),
}

/// Resolution of one background reveal.
#[derive(Debug)]
struct RevealUpdate {
    generation: u64,
    outcome: RevealResult,
}

/// State for the gallery panel
pub struct GalleryPanel {
    /// Index client (public for status/tab access)
    pub client: GalleryClient,
    /// Target image state, mutated only on the UI thread
    target: TargetState,
    /// Orders overlapping reveals; latest trigger wins
    sequencer: RevealSequencer,
    /// Reveals still in flight
    in_flight: usize,
    /// Reveals that resolved with an image
    reveal_count: u64,
    /// When the target last changed
    last_revealed_at: Option<chrono::DateTime<chrono::Local>>,
    /// Events to send to main app
    pending_events: Vec<GalleryPanelEvent>,
    /// Channel for receiving reveal resolutions
    updates_tx: mpsc::Sender<RevealUpdate>,
    updates_rx: mpsc::Receiver<RevealUpdate>,
}

impl GalleryPanel {
    pub fn new(client: GalleryClient) -> Self {
        let (updates_tx, updates_rx) = mpsc::channel();
        Self {
            client,
            target: TargetState::default(),
            sequencer: RevealSequencer::new(),
            in_flight: 0,
            reveal_count: 0,
            last_revealed_at: None,
            pending_events: Vec::new(),
            updates_tx,
            updates_rx,
        }
    }

    /// Get and clear pending events
    pub fn take_events(&mut self) -> Vec<GalleryPanelEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Current target state
    pub fn target(&self) -> &TargetState {
        &self.target
    }

    /// Reveals still waiting on the network
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Reveals that resolved with an image
    pub fn reveal_count(&self) -> u64 {
        self.reveal_count
    }

    /// Start one reveal in the background.
    ///
    /// Every trigger issues its own fetch; earlier fetches keep running but
    /// their resolutions will be stale by the time they arrive.
    pub fn trigger_reveal(&mut self) {
        let generation = self.sequencer.begin();
        self.in_flight += 1;

        let client = self.client.clone();
        let tx = self.updates_tx.clone();
        std::thread::spawn(move || {
            let outcome = reveal_from(&client, &mut rand::thread_rng());
            let _ = tx.send(RevealUpdate {
                generation,
                outcome,
            });
        });

        log::debug!(
            "reveal {} started against {}",
            generation,
            self.client.index_url()
        );
    }

    /// Apply finished reveals
    fn poll_reveals(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);

            if !self.sequencer.is_current(update.generation) {
                log::debug!("dropping stale reveal {}", update.generation);
                continue;
            }

            match &update.outcome {
                Ok(url) => {
                    self.reveal_count += 1;
                    self.last_revealed_at = Some(chrono::Local::now());
                    self.pending_events
                        .push(GalleryPanelEvent::StatusMessage(format!("Revealed {}", url)));
                }
                Err(e) => {
                    log::warn!("reveal {} failed: {}", update.generation, e);
                    self.pending_events
                        .push(GalleryPanelEvent::StatusMessage(format!("✗ {}", e)));
                }
            }
            self.target.apply(&update.outcome);
        }
    }

    /// Main UI rendering
    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.poll_reveals();

        // Keep repainting while a reveal is in flight so its resolution is
        // picked up without waiting for user input.
        if self.in_flight > 0 {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(100));
        }

        ui.spacing_mut().item_spacing = Vec2::new(8.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);

            let trigger = ui.add(
                egui::Button::new(RichText::new("🎲 Reveal one").size(16.0))
                    .min_size(Vec2::new(160.0, 36.0))
                    .rounding(Rounding::same(6.0)),
            );
            if trigger.clicked() {
                self.trigger_reveal();
            }

            if self.in_flight > 0 {
                ui.add_space(4.0);
                ui.label(RichText::new("⏳ fetching…").size(10.0).color(Color32::GRAY));
            }

            ui.add_space(16.0);

            match &self.target.source {
                Some(source) if self.target.visible => {
                    ui.add(
                        egui::Image::from_uri(source.clone())
                            .max_width(ui.available_width() - 32.0)
                            .rounding(Rounding::same(8.0)),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(source).size(10.0).color(Color32::GRAY));
                    if let Some(at) = self.last_revealed_at {
                        ui.label(
                            RichText::new(format!("revealed at {}", at.format("%H:%M:%S")))
                                .size(9.0)
                                .color(Color32::DARK_GRAY),
                        );
                    }
                }
                _ => {
                    ui.label(
                        RichText::new("Nothing revealed yet - click the button")
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::ClientConfig;
    use super::*;

    fn panel() -> GalleryPanel {
        GalleryPanel::new(GalleryClient::new(ClientConfig::default()))
    }

    #[test]
    fn test_panel_starts_hidden() {
        let panel = panel();
        assert!(!panel.target().visible);
        assert_eq!(panel.target().source, None);
        assert_eq!(panel.in_flight(), 0);
    }

    #[test]
    fn test_events_are_drained() {
        let mut panel = panel();
        panel
            .pending_events
            .push(GalleryPanelEvent::StatusMessage("hi".to_string()));
        assert_eq!(panel.take_events().len(), 1);
        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        let mut panel = panel();

        // Two triggers recorded by hand; resolutions injected through the
        // same channel the worker threads use.
        let first = panel.sequencer.begin();
        let second = panel.sequencer.begin();
        panel.in_flight = 2;

        panel
            .updates_tx
            .send(RevealUpdate {
                generation: second,
                outcome: Ok("second.png".to_string()),
            })
            .unwrap();
        panel
            .updates_tx
            .send(RevealUpdate {
                generation: first,
                outcome: Ok("first.png".to_string()),
            })
            .unwrap();

        panel.poll_reveals();

        assert_eq!(panel.target().source.as_deref(), Some("second.png"));
        assert!(panel.target().visible);
        assert_eq!(panel.in_flight(), 0);
        assert_eq!(panel.reveal_count(), 1);
    }
}
