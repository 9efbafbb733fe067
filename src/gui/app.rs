// src/gui/app.rs
use std::{error::Error, time::Instant};

use eframe::egui;

use crate::{
    config::{
        consts::{APP_TITLE, MODDER_EXE, STATUS_POLL_INTERVAL},
        state::{AppState, Modal},
    },
    library::{self, GameEntry},
    paths::LauncherPaths,
    process,
};

use super::{components, dialogs};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let paths = LauncherPaths::resolve()?;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(paths, AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Launcher dir + games dir, resolved once at startup.
    pub paths: LauncherPaths,

    /// Discovered games; rebuilt from scratch by every scan.
    pub games: Vec<GameEntry>,

    /// Last action outcome, shown in the footer.
    pub status: String,

    /// When the modder status was last polled.
    last_poll: Option<Instant>,
}

impl App {
    pub fn new(paths: LauncherPaths, state: AppState) -> Self {
        logf!("Init: base={} games={}", paths.base_dir.display(), paths.games_dir.display());

        // Initial scan; failure here only logs — the UI comes up with
        // an empty list and the user can rescan.
        let (games, status) = match library::scan(&paths) {
            Ok(g) => {
                let msg = format!("Scanned {} game(s)", g.len());
                (g, msg)
            }
            Err(e) => {
                loge!("Scan: initial scan failed: {}", e);
                (Vec::new(), format!("Scan error: {e}"))
            }
        };

        Self {
            state,
            paths,
            games,
            status,
            last_poll: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn selected_game(&self) -> Option<&GameEntry> {
        self.state.gui.selected.and_then(|ix| self.games.get(ix))
    }

    /// Open the modal error dialog and mirror the message to log + status.
    pub fn error<T: Into<String>, M: Into<String>>(&mut self, title: T, message: M) {
        let title = title.into();
        let message = message.into();
        loge!("{}: {}", title, message);
        self.status = join!(&*title, ": ", &*message);
        self.state.gui.modal = Some(Modal::Error { title, message });
    }

    /// Re-check the modder process on the poll cadence. eframe only calls
    /// update() on events, so also schedule a repaint for the next tick.
    fn poll_modder_status(&mut self, ctx: &egui::Context) {
        let due = self
            .last_poll
            .map(|t| t.elapsed() >= STATUS_POLL_INTERVAL)
            .unwrap_or(true);

        if due {
            let running = process::is_running(MODDER_EXE);
            if self.state.gui.modder_running != Some(running) {
                logd!("Poll: {} running={}", MODDER_EXE, running);
            }
            self.state.gui.modder_running = Some(running);
            self.last_poll = Some(Instant::now());
        }

        ctx.request_repaint_after(STATUS_POLL_INTERVAL);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_modder_status(ctx);

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            components::game_table::draw(ui, self);
        });

        // Modals last so they sit on top of everything.
        dialogs::draw(ctx, self);
    }
}
