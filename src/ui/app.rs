use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::drug::SearchResult;
use crate::lookup::LookupError;
use crate::storage::PreferenceError;
use crate::ui::events::AppEvent;
use crate::ui::landing::LandingController;
use crate::ui::search::SearchController;

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppMode {
    Landing,
    Search,
}

/// Which part of the search view receives keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Query,
    History,
    Favorites,
    Alerts,
    /// Typing a target price for the current brand.
    AlertPrice,
}

pub struct App {
    mode: AppMode,
    focus: Focus,
    should_quit: bool,
    controller: SearchController,
    landing: LandingController,
    landing_delay: Duration,
    events: Sender<AppEvent>,
    /// Cursor within the focused history/favorites list.
    selection: usize,
    alert_input: String,
    /// One-line feedback for favorite and alert intents.
    notice: Option<String>,
}

impl App {
    pub fn new(
        controller: SearchController,
        landing_delay: Duration,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            mode: AppMode::Landing,
            focus: Focus::Query,
            should_quit: false,
            controller,
            landing: LandingController::new(),
            landing_delay,
            events,
            selection: 0,
            alert_input: String::new(),
            notice: None,
        }
    }

    /// Arm the landing splash. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        let tx = self.events.clone();
        self.landing.activate(self.landing_delay, move || {
            let _ = tx.send(AppEvent::LandingElapsed);
        });
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn alert_input(&self) -> &str {
        &self.alert_input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn on_landing_elapsed(&mut self) {
        if self.mode == AppMode::Landing {
            self.enter_search();
        }
    }

    /// Leave the splash early.
    pub fn skip_landing(&mut self) {
        if self.mode == AppMode::Landing {
            self.enter_search();
        }
    }

    fn enter_search(&mut self) {
        self.landing.deactivate();
        self.mode = AppMode::Search;
        self.focus = Focus::Query;
        tracing::info!("switched to search view");
    }

    pub fn on_lookup_finished(&mut self, outcome: Result<SearchResult, LookupError>) {
        self.controller.complete_lookup(outcome);
    }

    pub fn type_char(&mut self, c: char) {
        match self.focus {
            Focus::AlertPrice => {
                if c.is_ascii_digit() || c == '.' || c == '$' {
                    self.alert_input.push(c);
                }
            }
            Focus::Query => {
                let mut text = self.controller.query().to_string();
                text.push(c);
                self.controller.edit_query(text);
            }
            Focus::History | Focus::Favorites | Focus::Alerts => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::AlertPrice => {
                self.alert_input.pop();
            }
            Focus::Query => {
                let mut text = self.controller.query().to_string();
                text.pop();
                self.controller.edit_query(text);
            }
            Focus::History | Focus::Favorites | Focus::Alerts => {}
        }
    }

    /// Search for whatever is in the query field.
    pub fn submit(&mut self) {
        let raw = self.controller.query().to_string();
        self.start_lookup(&raw);
    }

    /// Returns `false` when the controller declined the submit.
    fn start_lookup(&mut self, raw: &str) -> bool {
        let Some(query) = self.controller.begin_submit(raw) else {
            return false;
        };
        self.notice = None;
        let lookup = self.controller.lookup_client();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let outcome = lookup.lookup(&query).await;
            let _ = tx.send(AppEvent::LookupFinished(outcome));
        });
        true
    }

    /// Query → History → Favorites → Alerts → Query.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Query => Focus::History,
            Focus::History => Focus::Favorites,
            Focus::Favorites => Focus::Alerts,
            Focus::Alerts | Focus::AlertPrice => Focus::Query,
        };
        self.alert_input.clear();
        self.selection = 0;
    }

    pub fn focus_query(&mut self) {
        self.focus = Focus::Query;
        self.alert_input.clear();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.focused_list_len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.rem_euclid(len as isize) as usize;
    }

    fn focused_list_len(&self) -> usize {
        match self.focus {
            Focus::History => self.controller.history().len(),
            Focus::Favorites => self.controller.favorites().len(),
            Focus::Alerts => self.controller.alerts().len(),
            Focus::Query | Focus::AlertPrice => 0,
        }
    }

    /// Name under the cursor of the focused list.
    fn selected_name(&self) -> Option<String> {
        match self.focus {
            Focus::History => self
                .controller
                .history()
                .get(self.selection)
                .map(|drug| drug.name.clone()),
            Focus::Favorites => self
                .controller
                .favorites()
                .get(self.selection)
                .map(|drug| drug.name.clone()),
            Focus::Alerts => self.controller.alerts().keys().nth(self.selection).cloned(),
            Focus::Query | Focus::AlertPrice => None,
        }
    }

    /// Re-run the search for the selected list entry.
    ///
    /// Focus returns to the query only when a lookup actually starts.
    pub fn activate_selection(&mut self) {
        let Some(name) = self.selected_name() else {
            return;
        };
        if self.start_lookup(&name) {
            self.focus = Focus::Query;
        }
    }

    /// Add the current brand to favorites, or remove it if already pinned.
    pub fn toggle_favorite(&mut self) {
        let Some(name) = self.controller.brand().map(|brand| brand.name.clone()) else {
            self.notice = Some(PreferenceError::NoActiveDrug.to_string());
            return;
        };

        let result = if self.controller.preferences().is_favorite(&name) {
            self.controller
                .remove_favorite(&name)
                .map(|_| format!("Removed {} from favorites", name))
        } else {
            self.controller
                .add_favorite()
                .map(|_| format!("Added {} to favorites", name))
        };
        self.report(result);
    }

    /// Delete the selected favorite or alert.
    pub fn remove_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            return;
        };
        let result = match self.focus {
            Focus::Favorites => self
                .controller
                .remove_favorite(&name)
                .map(|_| format!("Removed {} from favorites", name)),
            Focus::Alerts => self
                .controller
                .remove_alert(&name)
                .map(|_| format!("Removed alert for {}", name)),
            Focus::Query | Focus::History | Focus::AlertPrice => return,
        };
        self.report(result);
        self.move_selection(0);
    }

    pub fn begin_alert_entry(&mut self) {
        let Some(brand) = self.controller.brand() else {
            self.notice = Some(PreferenceError::NoActiveDrug.to_string());
            return;
        };
        self.alert_input = self
            .controller
            .preferences()
            .alert_for(&brand.name)
            .map(|price| format!("{:.2}", price))
            .unwrap_or_default();
        self.focus = Focus::AlertPrice;
    }

    /// Set the typed alert. Invalid input keeps the prompt open.
    pub fn commit_alert(&mut self) {
        let input = self.alert_input.clone();
        match self.controller.set_alert(&input) {
            Ok(price) => {
                let name = self
                    .controller
                    .brand()
                    .map(|brand| brand.name.clone())
                    .unwrap_or_default();
                self.notice = Some(format!("Alert set for {} at ${:.2}", name, price));
                self.focus_query();
            }
            Err(PreferenceError::Storage(err)) => {
                tracing::warn!(error = %err, "alert kept in memory but not persisted");
                self.notice = Some(err.to_string());
                self.focus_query();
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn remove_alert(&mut self) {
        let Some(name) = self.controller.brand().map(|brand| brand.name.clone()) else {
            self.notice = Some(PreferenceError::NoActiveDrug.to_string());
            return;
        };
        let result = self.controller.remove_alert(&name).map(|removed| {
            if removed {
                format!("Removed alert for {}", name)
            } else {
                format!("No alert set for {}", name)
            }
        });
        self.report(result);
    }

    fn report(&mut self, result: Result<String, PreferenceError>) {
        self.notice = Some(match result {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(error = %err, "preference update failed");
                err.to_string()
            }
        });
    }
}
