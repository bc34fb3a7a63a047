// ===== benchdash/src/state.rs =====
//
// Selection state for the dashboard. Transitions are reducer-style:
// `apply` is a total function over (state, event), and the selection is
// a strict prefix chain — changing the program clears the SKU, changing
// the SKU clears the build.

use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashEvent {
    SelectProgram(String),
    SelectSku(String),
    SelectBuild(String),
    ToggleProgram(String),
    ToggleGame(String),
}

/// The four mutually exclusive view states, derived from how much of the
/// program → SKU → build chain is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    PickProgram,
    ProgramTrends,
    PickBuild,
    Results,
}

#[derive(Debug, Default, Clone)]
pub struct DashState {
    pub program: Option<String>,
    pub sku: Option<String>,
    pub build: Option<String>,
    pub expanded_programs: HashSet<String>,
    pub expanded_games: HashSet<String>,
}

impl DashState {
    /// Apply one event. No validation: the UI only ever passes catalog
    /// values, and out-of-catalog strings are an external-caller concern.
    pub fn apply(&mut self, event: DashEvent) {
        debug!(?event, "state transition");
        match event {
            DashEvent::SelectProgram(name) => {
                self.sku = None;
                self.build = None;
                // Selecting always leaves the program expanded.
                self.expanded_programs.insert(name.clone());
                self.program = Some(name);
            }
            DashEvent::SelectSku(name) => {
                self.build = None;
                self.expanded_games.clear();
                self.sku = Some(name);
            }
            DashEvent::SelectBuild(label) => {
                self.build = Some(label);
            }
            DashEvent::ToggleProgram(name) => toggle(&mut self.expanded_programs, name),
            DashEvent::ToggleGame(name) => toggle(&mut self.expanded_games, name),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        match (&self.program, &self.sku, &self.build) {
            (None, _, _) => ViewMode::PickProgram,
            (Some(_), None, _) => ViewMode::ProgramTrends,
            (Some(_), Some(_), None) => ViewMode::PickBuild,
            (Some(_), Some(_), Some(_)) => ViewMode::Results,
        }
    }

    /// Benchmark results are keyed on (sku, build); `None` while either
    /// half of the pair is missing.
    pub fn results_key(&self) -> Option<(String, String)> {
        match (&self.sku, &self.build) {
            (Some(s), Some(b)) => Some((s.clone(), b.clone())),
            _ => None,
        }
    }
}

fn toggle(set: &mut HashSet<String>, key: String) {
    if !set.remove(&key) {
        set.insert(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_involutive() {
        let mut state = DashState::default();
        let before = state.expanded_games.clone();
        state.apply(DashEvent::ToggleGame("Control".into()));
        assert!(state.expanded_games.contains("Control"));
        state.apply(DashEvent::ToggleGame("Control".into()));
        assert_eq!(state.expanded_games, before);
    }

    #[test]
    fn view_mode_follows_selection_chain() {
        let mut state = DashState::default();
        assert_eq!(state.view_mode(), ViewMode::PickProgram);
        state.apply(DashEvent::SelectProgram("Nova Lake".into()));
        assert_eq!(state.view_mode(), ViewMode::ProgramTrends);
        state.apply(DashEvent::SelectSku("Nova Lake S".into()));
        assert_eq!(state.view_mode(), ViewMode::PickBuild);
        state.apply(DashEvent::SelectBuild("Build 2025.02 (Aug 4)".into()));
        assert_eq!(state.view_mode(), ViewMode::Results);
    }
}
