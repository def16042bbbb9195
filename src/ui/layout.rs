// Main application layout
// Handles window layout, menu bar, message list and input row

use eframe::egui;

use crate::state::ChatSession;
use crate::ui::components::*;

/// Render the main application layout
/// Returns true when the user asked to send the current input this frame
pub fn render_app_layout(ctx: &egui::Context, session: &mut ChatSession) -> bool {
    // Menu bar at the top
    render_menu_bar(ctx);

    // Header, input and footer are fixed; the message list takes the rest
    render_header(ctx, session);
    let send_requested = render_input_area(ctx, session);

    egui::CentralPanel::default().show(ctx, |ui| {
        render_messages(ui, session);
    });

    send_requested
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

/// Render the title bar with the message counter
fn render_header(ctx: &egui::Context, session: &ChatSession) {
    egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new("AI Assistant").strong().size(22.0));
                ui.label(
                    egui::RichText::new("Powered by advanced AI technology")
                        .weak()
                        .size(12.0),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(message_count_label(session.exchanged_count()))
                        .weak()
                        .size(12.0),
                );
            });
        });
        ui.add_space(8.0);
    });
}

/// Render the scrollable message list
fn render_messages(ui: &mut egui::Ui, session: &mut ChatSession) {
    let scroll_to_latest = session.take_scroll_request();

    egui::ScrollArea::vertical()
        .id_source("message_list_scroll")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for message in session.messages() {
                message_bubble(ui, message);
                ui.add_space(8.0);
            }

            if session.is_awaiting_reply() {
                typing_indicator(ui);
                ui.add_space(8.0);
            }

            // Keep the newest message in view after every append
            if scroll_to_latest {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

/// Render the input row and footer note
fn render_input_area(ctx: &egui::Context, session: &mut ChatSession) -> bool {
    let mut send_requested = false;

    egui::TopBottomPanel::bottom("input_area").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let awaiting = session.is_awaiting_reply();

            let input = egui::TextEdit::singleline(&mut session.pending_input)
                .hint_text("Type your message...")
                .desired_width(ui.available_width() - 90.0);
            let response = ui.add_enabled(!awaiting, input);

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = send_button(ui, session.can_submit()).clicked();

            if (enter_pressed || clicked) && session.can_submit() {
                send_requested = true;
                response.request_focus();
            }
        });
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(
                    "AI responses may be inaccurate. Please verify important information.",
                )
                .weak()
                .size(11.0),
            );
        });
        ui.add_space(6.0);
    });

    send_requested
}
