// src/config/state.rs
use std::path::PathBuf;

/// Which main tab is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Games,
    Launcher,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Games, Tab::Launcher];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Games => "Games",
            Tab::Launcher => "Launcher",
        }
    }
}

/// The one modal dialog that may be open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    Error { title: String, message: String },
    ConfirmDelete { path: PathBuf },
    Rename { path: PathBuf, input: String, error: Option<String> },
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,

    /// Index into the scanned game list; both tabs share it.
    pub selected: Option<usize>,

    /// Where the upload pickers open next time.
    pub last_browse_dir: String,

    pub modal: Option<Modal>,

    /// None until the first poll completes.
    pub modder_running: Option<bool>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: Tab::Games,
            selected: None,
            last_browse_dir: s!(),
            modal: None,
            modder_running: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gui: GuiState,
}
