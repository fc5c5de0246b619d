use eframe::{App as EguiApp, CreationContext, Frame};
use eframe::egui::{Align2, Button, CentralPanel, Color32, Context, Sense, TopBottomPanel, Ui, Window};
use eframe::egui;
use tracing::trace;
use crate::app::channel_input::*;
use crate::app::swatch::swatch;
use crate::config::MixerConfig;
use crate::constants::*;
use crate::state::*;
use crate::types::Channel;

pub struct App {
    state: MixerState,
    pending_focus: Option<Option<Channel>>,
}

impl App {
    pub fn new(cc: &CreationContext<'_>, config: MixerConfig) -> Self {
        let mut state = MixerState::new(config);

        let ctx = cc.egui_ctx.clone();
        state.subscribe(Box::new(move |_: &MixerSnapshot| ctx.request_repaint()));
        state.subscribe(Box::new(|snapshot: &MixerSnapshot| {
            trace!(color = %snapshot.color.to_hex(), focus = ?snapshot.focus, "mixer changed");
        }));

        Self {
            state,
            pending_focus: None,
        }
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let snapshot = self.state.snapshot();
        let mut events = Vec::new();

        if snapshot.accessory_visible {
            TopBottomPanel::bottom("keyboard_accessory")
                .show(ctx, |ui| keyboard_accessory(ui, &snapshot, &mut events));
        }

        let focused = CentralPanel::default()
            .frame(egui::Frame::default()
                .fill(Color32::from_gray(GUI_BACKGROUND_GRAY))
                .inner_margin(GUI_PADDING))
            .show(ctx, |ui| self.central_panel_content(ui, &snapshot, &mut events))
            .inner;

        if let Some(alert) = &snapshot.alert {
            Window::new(alert.title())
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(alert.message());
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            events.push(InputEvent::AlertDismissed);
                        }
                    });
                });
        }

        for event in events {
            self.state.handle(event);
        }

        if self.state.alert().is_none() && self.state.focus() != focused {
            self.pending_focus = Some(self.state.focus());
            ctx.request_repaint();
        }
    }
}

impl App {
    /// Returns the channel whose text field holds egui focus after drawing.
    fn central_panel_content(
        &mut self,
        ui: &mut Ui,
        snapshot: &MixerSnapshot,
        events: &mut Vec<InputEvent>,
    ) -> Option<Channel> {
        // Registered before the widgets so they win hit testing.
        let background = ui.interact(ui.max_rect(), ui.id().with("background"), Sense::click());
        if background.clicked() {
            events.push(InputEvent::TapOutside);
        }

        let request = self.pending_focus.take();
        let step = self.state.config().slider_step;
        let mut focused = None;
        let mut gained = false;
        let mut lost = false;

        ui.spacing_mut().item_spacing.y = GUI_ROW_SPACING;
        swatch(ui, snapshot.color);

        ui.add_enabled_ui(snapshot.alert.is_none(), |ui| {
            ui.spacing_mut().item_spacing.y = ui.spacing().interact_size.y * 0.5;
            for channel in Channel::ALL {
                let i = channel.index();
                let mut data = ChannelInputData {
                    value: snapshot.values[i],
                    text: snapshot.texts[i].clone(),
                    step,
                    focus_request: request.map(|target| target == Some(channel)),
                };

                let before = events.len();
                if channel_input(ui, channel, &mut data, events) {
                    focused = Some(channel);
                }
                for event in &events[before..] {
                    match event {
                        InputEvent::FocusChanged(_) => gained = true,
                        InputEvent::TextSubmitted { .. } => lost = true,
                        _ => {}
                    }
                }
            }
        });

        if lost && !gained && focused.is_none() {
            events.push(InputEvent::FocusChanged(None));
        }

        focused
    }
}

fn keyboard_accessory(ui: &mut Ui, snapshot: &MixerSnapshot, events: &mut Vec<InputEvent>) {
    ui.horizontal(|ui| {
        if ui.add_enabled(snapshot.can_move_previous, Button::new("▲")).clicked() {
            events.push(InputEvent::Accessory(AccessoryButton::Previous));
        }
        if ui.add_enabled(snapshot.can_move_next, Button::new("▼")).clicked() {
            events.push(InputEvent::Accessory(AccessoryButton::Next));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Done").clicked() {
                events.push(InputEvent::Accessory(AccessoryButton::Done));
            }
        });
    });
}
