//! egui renderer for the chat window.

use std::time::Instant;

use eframe::egui::{self, Align, Align2, Frame, Key, Layout, Margin, RichText, ScrollArea, Ui};

use crate::chat::Sender;
use crate::egui_app::controller::{ChatController, TYPING_INDICATOR};

pub mod style;

/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(480.0, 360.0);
/// Initial window size.
pub const DEFAULT_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(600.0, 400.0);

const ENTRY_ROWS: usize = 4;

/// Renders the chat UI from the controller state.
pub struct EguiApp {
    controller: ChatController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::NONE.fill(palette.bg_window).inner_margin(Margin::same(6)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_chat(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::NONE.inner_margin(Margin::symmetric(48, 12)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Emotion Classifier").size(24.0));
                });
                ui.add_space(10.0);
                let controls_height = ENTRY_ROWS as f32 * 20.0 + 70.0;
                let log_height = (ui.available_height() - controls_height).max(80.0);
                self.render_log(ui, log_height);
                ui.add_space(8.0);
                self.render_entry(ui);
                ui.add_space(6.0);
                self.render_actions(ui);
            });
    }

    fn render_log(&mut self, ui: &mut Ui, height: f32) {
        let palette = style::palette();
        Frame::NONE
            .fill(palette.bg_field)
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_height(height);
                ui.set_max_height(height);
                ScrollArea::vertical()
                    .id_salt("chat_log_scroll")
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for message in self.controller.ui.log.messages() {
                            let color = match message.sender {
                                Sender::User => palette.user_text,
                                Sender::Bot => palette.bot_text,
                            };
                            ui.add(
                                egui::Label::new(
                                    RichText::new(message.display_line()).size(14.0).color(color),
                                )
                                .wrap(),
                            );
                            ui.add_space(10.0);
                        }
                        if self.controller.ui.bot_typing {
                            ui.label(
                                RichText::new(format!("{}: {TYPING_INDICATOR}", Sender::Bot.prefix()))
                                    .italics()
                                    .color(palette.text_muted),
                            );
                        }
                    });
            });
    }

    fn render_entry(&mut self, ui: &mut Ui) {
        let response = ui.add(
            egui::TextEdit::multiline(&mut self.controller.ui.entry)
                .desired_rows(ENTRY_ROWS)
                .desired_width(f32::INFINITY)
                .hint_text("How are you feeling?")
                .font(egui::TextStyle::Body),
        );
        let send_shortcut = response.has_focus()
            && ui.input(|i| i.key_pressed(Key::Enter) && i.modifiers.command);
        if send_shortcut {
            self.submit();
        }
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            let clear = egui::Button::new(RichText::new("Clear Chat").color(egui::Color32::WHITE))
                .fill(palette.accent_danger);
            if ui.add(clear).clicked() {
                self.controller.clear_chat();
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let exit = egui::Button::new(RichText::new("Exit").color(egui::Color32::WHITE))
                    .fill(palette.accent_danger);
                if ui.add(exit).clicked() {
                    tracing::info!("Exit requested");
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
                let send = egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE))
                    .fill(palette.accent_send);
                if ui.add(send).clicked() {
                    self.submit();
                }
            });
        });
    }

    fn submit(&mut self) {
        if let Err(err) = self.controller.submit() {
            tracing::debug!("Submission rejected: {err}");
        }
    }

    fn render_warning(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.controller.ui.warning.clone() else {
            return;
        };
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.controller.dismiss_warning();
            return;
        }
        let palette = style::palette();
        let mut open = true;
        egui::Window::new(warning.title.as_str())
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(RichText::new(&warning.message).color(palette.warning));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.controller.dismiss_warning();
                }
            });
        if !open {
            self.controller.dismiss_warning();
        }
    }

    fn deliver_pending_reply(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.controller.poll_pending_reply(now);
        if let Some(due) = self.controller.next_reply_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.deliver_pending_reply(ctx);
        self.render_status(ctx);
        self.render_chat(ctx);
        self.render_warning(ctx);
    }
}
