use std::time::Duration;

use client_core::{render, Checklist, Indicator, StateController, StatusLine, Tone, View};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::{apply_event, submit_check},
};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x00, 0x66, 0xcc);
const BUSY: egui::Color32 = egui::Color32::from_rgb(0xcc, 0xcc, 0xcc);

pub struct AccessCheckerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: StateController,
    email: String,
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Success => egui::Color32::from_rgb(0x00, 0x80, 0x00),
        Tone::Failure => egui::Color32::RED,
        Tone::Caution => egui::Color32::from_rgb(0xff, 0xa5, 0x00),
    }
}

fn indicator_row(ui: &mut egui::Ui, indicator: &Indicator) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 6.0, tone_color(indicator.tone()));
        ui.label(indicator.label);
    });
}

fn status_label(ui: &mut egui::Ui, line: &StatusLine) {
    ui.colored_label(tone_color(line.tone), line.text.as_str());
}

fn show_checklist(ui: &mut egui::Ui, checklist: &Checklist) {
    ui.heading("Access Checklist");
    ui.add_space(6.0);
    for indicator in checklist.indicators() {
        indicator_row(ui, indicator);
    }
    ui.add_space(6.0);
    status_label(ui, &checklist.groups);
    if let Some(valid_until) = &checklist.valid_until {
        ui.small(valid_until.as_str());
    }

    ui.add_space(12.0);
    ui.heading("Tool Profile Checker");
    ui.add_space(6.0);
    status_label(ui, &checklist.profile);
    if let Some(arn) = &checklist.profile_arn {
        ui.small(format!("Profile ARN: {arn}"));
    }
}

impl AccessCheckerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: StateController::new(),
            email: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.controller, event);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, view: &View) {
        ui.label("Environment:");
        ui.add_enabled_ui(false, |ui| {
            egui::ComboBox::from_id_salt("environment")
                .selected_text(view.environment.as_str())
                .width(ui.available_width())
                .show_ui(ui, |_ui| {});
        });
        ui.add_space(8.0);

        ui.label("Email:");
        let email_resp = ui.add(
            egui::TextEdit::singleline(&mut self.email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        let enter_pressed =
            email_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);

        let fill = if view.submit.busy { BUSY } else { ACCENT };
        let button = egui::Button::new(
            egui::RichText::new(view.submit.label).color(egui::Color32::WHITE),
        )
        .fill(fill);
        let clicked = ui.horizontal(|ui| {
            let clicked = ui.add_enabled(view.submit.enabled, button).clicked();
            if view.submit.busy {
                ui.spinner();
            }
            clicked
        });

        if view.submit.enabled && (clicked.inner || enter_pressed) {
            submit_check(&mut self.controller, &self.cmd_tx, &self.email);
        }

        if let Some(error) = &view.error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::RED, error.as_str());
        }
    }
}

impl eframe::App for AccessCheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let view = render(self.controller.state());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("On Call Access Checker");
            ui.add_space(12.0);
            self.show_form(ui, &view);

            if let Some(checklist) = &view.checklist {
                ui.add_space(16.0);
                ui.separator();
                show_checklist(ui, checklist);
            }
        });

        if self.controller.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_checklist_colors() {
        assert_eq!(tone_color(Tone::Failure), egui::Color32::RED);
        assert_ne!(tone_color(Tone::Success), tone_color(Tone::Caution));
        assert_ne!(tone_color(Tone::Success), tone_color(Tone::Failure));
    }
}
