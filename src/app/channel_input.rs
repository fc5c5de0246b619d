use eframe::egui::{Align, Color32, Label, RichText, Slider, TextEdit, Ui};
use crate::constants::*;
use crate::parse_input::format_channel;
use crate::state::InputEvent;
use crate::types::{Channel, ChannelValue};

pub struct ChannelInputData {
    pub value: ChannelValue,
    pub text: String,
    pub step: f64,
    /// `Some(true)` grabs keyboard focus this frame, `Some(false)` releases it.
    pub focus_request: Option<bool>,
}

pub fn accent(channel: Channel) -> Color32 {
    match channel {
        Channel::Red => Color32::RED,
        Channel::Green => Color32::GREEN,
        Channel::Blue => Color32::BLUE,
    }
}

/// One label/slider/text field row. Returns whether the text field ends the
/// frame holding focus.
pub fn channel_input(
    ui: &mut Ui,
    channel: Channel,
    data: &mut ChannelInputData,
    events: &mut Vec<InputEvent>,
) -> bool {
    ui.horizontal(|ui| {
        ui.add_sized(
            [GUI_VALUE_LABEL_WIDTH, ui.spacing().interact_size.y],
            Label::new(RichText::new(format_channel(data.value)).strong().color(Color32::WHITE)),
        );

        let mut value = data.value.get();
        let slider = ui.scope(|ui| {
            ui.visuals_mut().selection.bg_fill = accent(channel);
            ui.spacing_mut().slider_width = ui.available_width() - GUI_TEXT_INPUT_WIDTH - GUI_PADDING;
            ui.add(Slider::new(&mut value, CHANNEL_MIN..=CHANNEL_MAX)
                .step_by(data.step)
                .trailing_fill(true)
                .show_value(false))
        }).inner.on_hover_text(channel.label());
        if slider.changed() {
            events.push(InputEvent::SliderChanged { channel, value });
        }

        let text = ui.add(TextEdit::singleline(&mut data.text)
            .desired_width(GUI_TEXT_INPUT_WIDTH)
            .horizontal_align(Align::Center));
        if text.changed() {
            events.push(InputEvent::TextEdited { channel, text: data.text.clone() });
        }
        if text.gained_focus() {
            events.push(InputEvent::FocusChanged(Some(channel)));
        }
        if text.lost_focus() {
            events.push(InputEvent::TextSubmitted { channel, text: data.text.clone() });
        }

        match data.focus_request {
            Some(true) if !text.has_focus() => text.request_focus(),
            Some(false) if text.has_focus() => text.surrender_focus(),
            _ => {}
        }

        text.has_focus()
    }).inner
}
