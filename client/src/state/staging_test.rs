use super::*;
use crate::content::staging::MODULES;

#[test]
fn starts_on_first_module() {
    let state = StagingState::default();
    assert_eq!(state.active, ModuleId::Hull);
    assert_eq!(state.active_module().label, "Hull Extraction");
}

#[test]
fn select_shows_exactly_the_configured_pair() {
    let mut state = StagingState::default();
    for configured in &MODULES {
        state.select(configured.id);
        let shown = state.active_module();
        assert_eq!(shown.image_before, configured.image_before);
        assert_eq!(shown.image_after, configured.image_after);
        assert_eq!(shown.before_label, configured.before_label);
        assert_eq!(shown.after_label, configured.after_label);
    }
}

#[test]
fn select_reports_change_only_when_different() {
    let mut state = StagingState::default();
    assert!(!state.select(ModuleId::Hull));
    assert!(state.select(ModuleId::Twilight));
    assert!(!state.select(ModuleId::Twilight));
}

#[test]
fn is_active_matches_single_module() {
    let mut state = StagingState::default();
    state.select(ModuleId::Interior);
    let active: Vec<_> = ModuleId::ALL.into_iter().filter(|id| state.is_active(*id)).collect();
    assert_eq!(active, vec![ModuleId::Interior]);
}
