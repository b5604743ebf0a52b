//! App state definition and basic state management

use crate::collection::{LinkEditor, MediaLink};
use crate::system::get_config;
use crate::wallet::{ProviderFactory, WalletSession};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Connect,
    Gallery,
    Exiting,
}

pub struct App {
    pub session: WalletSession,
    pub editor: LinkEditor,
    pub current_screen: CurrentScreen,

    /// Whether keystrokes go to the link input field
    pub input_mode: bool,

    // UI state
    pub selected_index: usize,
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub async fn new() -> App {
        let config = get_config();
        let provider = ProviderFactory::detect(&config.wallet);

        let mut app = App {
            session: WalletSession::new(provider),
            editor: LinkEditor::new(),
            current_screen: CurrentScreen::Connect,
            input_mode: false,
            selected_index: 0,
            status_message: String::new(),
            error_message: String::new(),
        };

        // Startup probe: runs exactly once. An absent provider surfaces as
        // a warning; a declined passive connect stays silent.
        if let Err(err) = app.session.probe_existing_connection().await {
            app.set_error(err.format_simple());
        }
        app.sync_connection();

        app
    }

    /// Request an interactive wallet connection
    ///
    /// Repeatable; silently does nothing when no provider is injected.
    pub async fn request_connection(&mut self) {
        self.session.request_connection().await;
        self.sync_connection();
    }

    /// React to a completed `Disconnected -> Connected` transition
    ///
    /// Seeds the gallery and switches screens. The transition is consumed,
    /// so a redundant connect cannot reset the collection.
    pub fn sync_connection(&mut self) {
        if self.session.take_connected_transition() {
            self.editor.seed_starters();
            self.current_screen = CurrentScreen::Gallery;
            if let Some(address) = self.session.address() {
                self.set_status(format!("Connected with {}", address.short()));
            }
        }
    }

    /// Submit the pending link input
    pub fn submit_link(&mut self) {
        if let Some(link) = self.editor.submit() {
            self.selected_index = self.editor.collection().len() - 1;
            self.set_status(format!("Added: {}", link.url));
        }
        // Empty input is a no-op; the collection and input stay untouched
        // and no error is shown.
    }

    pub fn get_selected_link(&self) -> Option<&MediaLink> {
        self.editor.collection().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.editor.collection().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.editor.collection().len();
        self.selected_index = len.saturating_sub(1);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }
}
