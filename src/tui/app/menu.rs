use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    FoulAward,
    EnforceRules,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::FoulAward, MenuItem::EnforceRules];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::FoulAward => {
                format!("Foul Points Awarded To: {}", app.cfg.foul_award_policy.title())
            }
            MenuItem::EnforceRules => {
                let state = if app.cfg.enforce_rules { "On" } else { "Off" };
                format!("Enforce Snooker Rules: {state}")
            }
        }
    }

    // Both settings are two-valued, so increment and decrement are the same toggle.
    fn toggle(self, app: &mut AppState) {
        match self {
            MenuItem::FoulAward => {
                app.cfg.foul_award_policy = app.cfg.foul_award_policy.toggled();
            }
            MenuItem::EnforceRules => {
                app.cfg.enforce_rules = !app.cfg.enforce_rules;
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    /// Number of selectable rows on the setup screen: settings, then players.
    pub fn menu_len(&self) -> usize {
        MENU_ITEMS.len() + self.engine().players().len()
    }

    /// The player row under the cursor, as a seat index.
    pub fn selected_seat(&self) -> Option<usize> {
        self.menu_index
            .checked_sub(MENU_ITEMS.len())
            .filter(|&seat| seat < self.engine().players().len())
    }

    pub fn toggle_menu(&mut self) {
        self.close_overlays();
        match self.scene {
            Scene::Setup => {
                if self.engine().game_started() {
                    self.scene = Scene::Table;
                }
            }
            Scene::Table => {
                // Settings stay locked while a frame is being played.
                if !self.engine().game_started() {
                    self.open_menu();
                }
            }
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg = self.engine().config();
        self.scene = Scene::Setup;
    }

    /// Applies the edited settings and starts a frame.
    pub fn apply_menu(&mut self) -> bool {
        if self.engine().game_started() {
            self.scene = Scene::Table;
            return true;
        }
        let cfg = self.cfg;
        self.engine_mut().set_config(cfg);
        if let Some(path) = self.prefs_path().map(|p| p.to_path_buf()) {
            if let Err(err) = cfg.save(&path) {
                tracing::warn!(%err, "could not save preferences");
                self.set_action_error(err.to_string());
            }
        }
        match self.engine_mut().start() {
            Ok(()) => {
                self.scene = Scene::Table;
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn remove_selected_player(&mut self) -> bool {
        if self.engine().game_started() {
            return false;
        }
        let Some(seat) = self.selected_seat() else {
            return false;
        };
        let id = self.engine().players()[seat].id();
        if self.engine_mut().remove_player(id).is_err() {
            return false;
        }
        let len = self.menu_len();
        if self.menu_index >= len {
            self.menu_index = len.saturating_sub(1);
        }
        true
    }

    pub fn menu_next(&mut self) {
        let len = self.menu_len();
        self.menu_index = (self.menu_index + 1) % len;
    }
    pub fn menu_prev(&mut self) {
        let len = self.menu_len();
        self.menu_index = (self.menu_index + len - 1) % len;
    }
    pub fn menu_inc(&mut self) {
        if let Some(item) = MENU_ITEMS.get(self.menu_index).copied() {
            item.toggle(self);
        }
    }
    pub fn menu_dec(&mut self) {
        self.menu_inc();
    }
}
