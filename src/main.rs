// Chat Assistant GUI - Main Entry Point
// Native Rust chat window talking to the chat assistant backend

mod client;
mod config;
mod state;
mod ui;

use std::sync::Arc;

use client::{ExchangeRunner, HttpChatEndpoint};
use config::Config;
use eframe::egui;
use state::ChatSession;
use ui::render_app_layout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let endpoint = Arc::new(HttpChatEndpoint::new(config.endpoint_url));
    tracing::info!("Chat endpoint: {}", endpoint.url());
    let runner = ExchangeRunner::new(endpoint)?;

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Assistant")
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "AI Assistant",
        options,
        Box::new(|_cc| Box::new(ChatAssistantApp::new(runner))),
    )?;
    Ok(())
}

/// Main application struct
/// Owns the chat session and the runner that performs its exchanges
struct ChatAssistantApp {
    /// The one chat session shown in the window
    session: ChatSession,
    /// Background executor for endpoint calls
    runner: ExchangeRunner,
}

impl ChatAssistantApp {
    /// Create a new application instance with a fresh session
    fn new(runner: ExchangeRunner) -> Self {
        Self {
            session: ChatSession::new(),
            runner,
        }
    }

    /// Apply every exchange that finished since the last frame
    fn process_outcomes(&mut self) {
        while let Some(outcome) = self.runner.try_next() {
            self.session.resolve(outcome);
        }
    }

    /// Submit the typed input and, if accepted, start the exchange in the background
    fn send_pending<F>(&mut self, notify: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        match self.session.submit_pending() {
            Some(message) => {
                self.runner.dispatch(message, notify);
                true
            }
            None => false,
        }
    }
}

impl eframe::App for ChatAssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_outcomes();

        // Render the main application layout
        if render_app_layout(ctx, &mut self.session) {
            let ctx = ctx.clone();
            self.send_pending(move || ctx.request_repaint());
        }
    }
}
