use eframe::egui::{vec2, Color32, Rounding, Sense, Stroke, Ui};
use crate::composer::NormalizedColor;
use crate::constants::*;

pub fn swatch(ui: &mut Ui, color: NormalizedColor) {
    let size = vec2(ui.available_width(), GUI_SWATCH_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let rounding = Rounding::same(GUI_SWATCH_CORNER_RADIUS);

    let painter = ui.painter();
    painter.rect_filled(rect, rounding, color.to_color32());
    painter.rect_stroke(rect, rounding, Stroke::new(GUI_SWATCH_STROKE_WIDTH, Color32::WHITE));

    ui.vertical_centered(|ui| {
        ui.label(color.to_hex());
    });
}
