use benchdash::catalog;
use benchdash::state::{DashEvent, DashState, ViewMode};
use benchdash::synth::scores;
use benchdash::tui::App;
use std::time::Duration;

fn test_app() -> App {
    App::new(Some(42), Duration::from_millis(10))
}

#[test]
fn select_program_clears_downstream_and_expands() {
    for program in catalog::PROGRAMS {
        let mut state = DashState::default();
        state.apply(DashEvent::SelectProgram(program.name.to_string()));
        state.apply(DashEvent::SelectSku(program.skus[0].to_string()));
        state.apply(DashEvent::SelectBuild(catalog::BUILDS[0].to_string()));

        state.apply(DashEvent::SelectProgram(program.name.to_string()));
        assert_eq!(state.sku, None);
        assert_eq!(state.build, None);
        assert!(state.expanded_programs.contains(program.name));
    }
}

#[test]
fn select_sku_clears_build_and_game_expansions() {
    for program in catalog::PROGRAMS {
        for sku in program.skus {
            let mut state = DashState::default();
            state.apply(DashEvent::SelectProgram(program.name.to_string()));
            state.apply(DashEvent::SelectSku(sku.to_string()));
            state.apply(DashEvent::SelectBuild(catalog::BUILDS[1].to_string()));
            state.apply(DashEvent::ToggleGame("Control".to_string()));

            state.apply(DashEvent::SelectSku(sku.to_string()));
            assert_eq!(state.build, None);
            assert!(state.expanded_games.is_empty());
        }
    }
}

#[test]
fn select_program_preserves_other_expansions() {
    let mut state = DashState::default();
    state.apply(DashEvent::ToggleProgram("Nova Lake".to_string()));
    state.apply(DashEvent::SelectProgram("Arrow Lake".to_string()));
    assert!(state.expanded_programs.contains("Nova Lake"));
    assert!(state.expanded_programs.contains("Arrow Lake"));
}

#[test]
fn double_toggle_restores_expansion_set() {
    let mut state = DashState::default();
    state.apply(DashEvent::ToggleGame("Starfield".to_string()));
    let snapshot = state.expanded_games.clone();

    state.apply(DashEvent::ToggleGame("Hitman 3".to_string()));
    state.apply(DashEvent::ToggleGame("Hitman 3".to_string()));
    assert_eq!(state.expanded_games, snapshot);
}

#[test]
fn arrow_lake_scenario_produces_full_table_and_cards() {
    let mut app = test_app();
    app.dispatch(DashEvent::SelectProgram("Arrow Lake".to_string()));
    assert_eq!(app.state.view_mode(), ViewMode::ProgramTrends);
    assert!(app.results.is_empty());

    app.dispatch(DashEvent::SelectSku("Arrow Lake S".to_string()));
    assert_eq!(app.state.view_mode(), ViewMode::PickBuild);
    assert!(app.results.is_empty());

    app.dispatch(DashEvent::SelectBuild("Build 2025.03 (Aug 18)".to_string()));
    assert_eq!(app.state.view_mode(), ViewMode::Results);
    assert_eq!(app.results.len(), 34);

    // The four summary cards.
    let avg = scores::average_fps(&app.results);
    assert!((60..160).contains(&avg));
    assert_eq!(app.results.len().to_string(), "34");
    assert_eq!(catalog::RESOLUTION, "1080p");
    assert_eq!(catalog::SETTINGS, "High");
}

#[test]
fn expanding_a_row_does_not_reroll_the_table() {
    let mut app = test_app();
    app.dispatch(DashEvent::SelectProgram("Nova Lake".to_string()));
    app.dispatch(DashEvent::SelectSku("Nova Lake H".to_string()));
    app.dispatch(DashEvent::SelectBuild(catalog::BUILDS[2].to_string()));
    let before = app.results.clone();

    app.dispatch(DashEvent::ToggleGame("Valorant".to_string()));
    assert_eq!(app.results, before);
    app.dispatch(DashEvent::ToggleGame("Valorant".to_string()));
    assert_eq!(app.results, before);
}

#[test]
fn changing_build_rerolls_the_table() {
    let mut app = test_app();
    app.dispatch(DashEvent::SelectProgram("Nova Lake".to_string()));
    app.dispatch(DashEvent::SelectSku("Nova Lake S".to_string()));
    app.dispatch(DashEvent::SelectBuild(catalog::BUILDS[0].to_string()));
    let before = app.results.clone();

    app.dispatch(DashEvent::SelectBuild(catalog::BUILDS[1].to_string()));
    assert_eq!(app.results.len(), 34);
    assert_ne!(app.results, before);
}

#[test]
fn results_clear_when_selection_chain_breaks() {
    let mut app = test_app();
    app.dispatch(DashEvent::SelectProgram("Panther Lake".to_string()));
    app.dispatch(DashEvent::SelectSku("Panther Lake P".to_string()));
    app.dispatch(DashEvent::SelectBuild(catalog::BUILDS[0].to_string()));
    assert_eq!(app.results.len(), 34);

    app.dispatch(DashEvent::SelectProgram("Battrel Lake".to_string()));
    assert!(app.results.is_empty());
    assert_eq!(app.state.results_key(), None);
}

#[test]
fn sidebar_rows_follow_expansion_and_selection() {
    let mut app = test_app();
    // Collapsed: one row per program, no build section.
    assert_eq!(app.sidebar_rows().len(), catalog::PROGRAMS.len());

    app.dispatch(DashEvent::SelectProgram("Arrow Lake".to_string()));
    let with_skus = app.sidebar_rows().len();
    assert_eq!(with_skus, catalog::PROGRAMS.len() + 3);

    app.dispatch(DashEvent::SelectSku("Arrow Lake H".to_string()));
    // Build header plus the six build labels.
    assert_eq!(
        app.sidebar_rows().len(),
        with_skus + 1 + catalog::BUILDS.len()
    );
}
