// Reusable UI components
// Chat bubbles, typing indicator and the send button

use chrono::{DateTime, Local, Utc};
use eframe::egui;

use crate::state::{Message, Sender};

/// Maximum bubble width as a fraction of the available width
const BUBBLE_WIDTH_RATIO: f32 = 0.7;

/// Format a message time as local `HH:MM`
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Label shown in the header for the number of exchanged messages
pub fn message_count_label(count: usize) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{} messages", count)
    }
}

/// Render one chat bubble, aligned by sender
/// User messages sit on the right in the accent color, bot messages on the left
pub fn message_bubble(ui: &mut egui::Ui, message: &Message) {
    let layout = if message.is_user() {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    ui.with_layout(layout, |ui| {
        ui.add_space(8.0);
        avatar(ui, message.sender);
        ui.add_space(6.0);

        let (fill, text_color) = match message.sender {
            Sender::User => (
                ui.visuals().selection.bg_fill,
                ui.visuals().strong_text_color(),
            ),
            Sender::Bot => (
                ui.visuals().faint_bg_color,
                ui.visuals().text_color(),
            ),
        };

        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&message.text).color(text_color).size(14.0));
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format_time(&message.timestamp))
                            .weak()
                            .size(11.0),
                    );
                });
            });
    });
}

/// Render the "bot is typing" bubble shown while a reply is outstanding
pub fn typing_indicator(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
        ui.add_space(8.0);
        avatar(ui, Sender::Bot);
        ui.add_space(6.0);
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Thinking...").weak().italics());
                });
            });
    });
}

/// Render the send button
pub fn send_button(ui: &mut egui::Ui, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new("➤ Send").strong()),
    )
    .on_hover_text("Send message")
}

/// Small round marker identifying the sender
fn avatar(ui: &mut egui::Ui, sender: Sender) {
    let (glyph, color) = match sender {
        Sender::User => ("🙂", egui::Color32::from_rgb(120, 120, 120)),
        Sender::Bot => ("🤖", egui::Color32::from_rgb(60, 120, 220)),
    };
    ui.label(egui::RichText::new(glyph).color(color).size(18.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time_is_hours_and_minutes() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 7, 30).unwrap();
        let formatted = format_time(&ts);
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
        assert!(formatted[..2].parse::<u32>().unwrap() < 24);
        assert!(formatted[3..].parse::<u32>().unwrap() < 60);
    }

    #[test]
    fn test_message_count_label() {
        assert_eq!(message_count_label(0), "0 messages");
        assert_eq!(message_count_label(1), "1 message");
        assert_eq!(message_count_label(4), "4 messages");
    }
}
