//! Navigation and activation methods
//!
//! Applies the intents the interaction core emits: selection toggles,
//! working-directory changes, and external opens.

use std::process::{Command, Stdio};

use crate::logic::grid::{primary_activation, secondary_activation, Activation};
use crate::logic::navigation::{move_cursor, parent_prefix, Direction};
use crate::services::api::{ApiRequest, Priority};
use crate::{log_debug, App};

impl App {
    /// Queue a listing fetch for a prefix and mark the model loading.
    pub(crate) fn request_listing(&mut self, prefix: String) {
        self.model.listing.loading = true;
        self.model.listing.error = None;
        let _ = self.api_tx.send(ApiRequest::ListChildren {
            prefix,
            priority: Priority::High,
        });
    }

    /// Apply one activation intent from the interaction core.
    ///
    /// Exactly one reaction per intent: toggle, directory change, or open.
    pub(crate) fn apply_activation(&mut self, activation: Activation) {
        match activation {
            Activation::Toggle(key) => {
                self.model.navigation.selection.toggle(&key);
            }
            Activation::Descend(prefix) => {
                self.change_directory(prefix);
            }
            Activation::Open(url) => {
                self.open_resource(&url);
            }
        }
    }

    /// Primary-activate the entry at a grid index.
    pub(crate) fn activate_index_primary(&mut self, index: usize) {
        let Some(entry) = self.model.entry_at(index).cloned() else {
            return;
        };
        let activation = primary_activation(&entry, &self.model.navigation.selection, &self.mount);
        self.apply_activation(activation);
    }

    /// Secondary-activate the entry at a grid index (always a toggle).
    pub(crate) fn activate_index_secondary(&mut self, index: usize) {
        let Some(entry) = self.model.entry_at(index).cloned() else {
            return;
        };
        let activation = secondary_activation(&entry);
        self.apply_activation(activation);
    }

    /// Primary-activate the cursor entry.
    pub(crate) fn activate_cursor_primary(&mut self) {
        if let Some(index) = self.model.navigation.cursor {
            self.activate_index_primary(index);
        }
    }

    /// Secondary-activate the cursor entry.
    pub(crate) fn activate_cursor_secondary(&mut self) {
        if let Some(index) = self.model.navigation.cursor {
            self.activate_index_secondary(index);
        }
    }

    /// Move the grid cursor one step.
    pub(crate) fn move_cursor(&mut self, direction: Direction) {
        self.model.navigation.cursor = move_cursor(
            self.model.navigation.cursor,
            self.model.listing.len(),
            self.model.ui.grid_columns,
            direction,
        );
    }

    pub(crate) fn change_directory(&mut self, prefix: String) {
        log_debug(&format!("Changing directory to {:?}", prefix));
        self.model.navigation.enter(prefix.clone());
        self.request_listing(prefix);
    }

    /// Go up one prefix level; no-op at the root.
    pub(crate) fn ascend(&mut self) {
        if self.model.navigation.at_root() {
            return;
        }
        let parent = parent_prefix(&self.model.navigation.cwd);
        self.change_directory(parent);
    }

    /// Re-fetch the current listing.
    pub(crate) fn refresh(&mut self) {
        self.request_listing(self.model.navigation.cwd.clone());
    }

    /// Cycle to the next theme preset.
    pub(crate) fn cycle_theme(&mut self) {
        self.model.ui.theme_index =
            (self.model.ui.theme_index + 1) % crate::ui::theme::THEME_COUNT;
        let name = crate::ui::theme::Theme::preset(self.model.ui.theme_index).name;
        self.model.ui.show_toast(format!("Theme: {}", name));
    }

    /// Launch the resolved resource URL in the external opener.
    ///
    /// The opener runs as a detached child process, so whatever it loads is
    /// isolated from this process; once the spawn has been issued the
    /// contract here is complete, and any later fetch failure belongs to
    /// the opener.
    pub(crate) fn open_resource(&mut self, url: &str) {
        let absolute = format!("{}{}", self.client.base_url(), url);

        let Some(open_command) = self.open_command.clone() else {
            // No opener configured: surface the URL so the user can open it
            self.model.ui.show_toast(format!("Resource: {}", absolute));
            return;
        };

        log_debug(&format!("Opening {} with {}", absolute, open_command));

        match Command::new(&open_command)
            .arg(&absolute)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => {
                self.model.ui.show_toast("Opening in external viewer".to_string());
            }
            Err(e) => {
                self.model
                    .ui
                    .show_toast(format!("Error: failed to run {}: {}", open_command, e));
            }
        }
    }
}
