use std::path::PathBuf;
use std::time::Instant;

use image::{GrayImage, RgbaImage};
use qrdesk_business::capture::DragState;
use qrdesk_business::{HistoryStore, config};

use crate::utils::file_picker::{FilePickerHandler, SystemFilePickerHandler};

/// Pages reachable from the top tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Generate,
    Decode,
    History,
}

/// User intents that cross a page boundary or touch the OS.
///
/// Pages push these onto the command bus during the draw pass; the app
/// object drains and applies them once the frame's panels are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Kick off the screen-capture flow: hide the window, grab, overlay.
    StartCapture,
    /// Open the image file dialog and decode the picked file.
    PickDecodeImage,
    /// Put text on the system clipboard.
    CopyText(String),
    /// Open a URL in the default browser.
    OpenUrl(String),
    /// Save the currently rendered QR code as a PNG file.
    SaveQrPng,
}

pub type CommandSender = flume::Sender<AppCommand>;
pub type CommandReceiver = flume::Receiver<AppCommand>;

/// QR code produced by the generate page, kept for display and saving.
pub struct RenderedQr {
    pub image: GrayImage,
    pub texture: egui::TextureHandle,
}

/// Generate page fields.
#[derive(Default)]
pub struct GenerateState {
    pub input: String,
    pub rendered: Option<RenderedQr>,
}

/// Decode page fields.
#[derive(Default)]
pub struct DecodeState {
    /// Preview of whatever image was last handed to the decoder.
    pub preview: Option<egui::TextureHandle>,
    /// Payload of the last successful decode.
    pub result: Option<String>,
}

/// Progress of the screen-capture flow.
pub enum CapturePhase {
    /// The main window was just hidden; the grab waits out this deadline so
    /// the compositor has actually removed the window from the screen.
    Settling { until: Instant },
    /// Screenshot is frozen and the fullscreen overlay is up.
    Selecting(OverlaySession),
}

/// Everything the capture overlay needs while it is open.
pub struct OverlaySession {
    /// Frozen primary-monitor screenshot, physical pixels.
    pub screenshot: RgbaImage,
    /// The same pixels uploaded as the overlay backdrop.
    pub texture: egui::TextureHandle,
    /// Monitor scale factor mapping logical points onto screenshot pixels.
    pub scale: f32,
    pub drag: DragState,
}

/// The main application state.
///
/// Note: We manually implement Default because the command channel ends
/// don't implement Default.
pub struct AppState {
    /// Persistent generate/decode history.
    pub store: HistoryStore,
    /// Page selected in the top tab bar.
    pub page: Page,
    pub generate: GenerateState,
    pub decode: DecodeState,
    /// Present while a screen capture is in flight.
    pub capture: Option<CapturePhase>,
    /// One-line feedback shown in the bottom status bar.
    pub status: String,
    /// File dialogs go through this seam so tests can stub them out.
    pub file_picker: Box<dyn FilePickerHandler>,
    command_tx: CommandSender,
    command_rx: CommandReceiver,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HistoryStore::open(config::history_file_path()))
    }
}

impl AppState {
    pub fn new(store: HistoryStore) -> Self {
        let (command_tx, command_rx) = flume::unbounded();

        Self {
            store,
            page: Page::default(),
            generate: GenerateState::default(),
            decode: DecodeState::default(),
            capture: None,
            status: String::new(),
            file_picker: Box::new(SystemFilePickerHandler),
            command_tx,
            command_rx,
        }
    }

    /// State wired to a throwaway history file.
    pub fn test(history_path: PathBuf) -> Self {
        Self::new(HistoryStore::open(history_path))
    }

    /// Queues a command for dispatch after the frame's draw pass.
    pub fn send(&self, command: AppCommand) {
        self.command_tx.send(command).ok();
    }

    /// Takes the next queued command, if any.
    pub fn next_command(&self) -> Option<AppCommand> {
        self.command_rx.try_recv().ok()
    }
}
