#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::countries::{self, CountryId};
    use crate::pointer::{Point, PointerEvents, Region};
    use crate::registration::{
        CountrySelector, RegistrationAction, RegistrationDraft, RegistrationManager,
        RegistrationStep, SelectorState,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn complete_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_full_name("Ana Silva");
        draft.set_date_of_birth(Some(now().date_naive() - Duration::days(365 * 20)));
        draft.select_country(CountryId::Portugal);
        draft.select_document_type("Passaporte");
        draft.set_document_number("N123456");
        draft.set_terms_accepted(true);
        draft
    }

    fn input_region() -> Region {
        Region::new(Point::new(0.0, 100.0), Point::new(300.0, 140.0))
    }

    fn dropdown_region() -> Region {
        Region::new(Point::new(0.0, 144.0), Point::new(300.0, 384.0))
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(complete_draft().is_form_valid(now()));
    }

    #[test]
    fn test_any_failing_predicate_blocks_submit() {
        let mut draft = complete_draft();
        draft.set_full_name("Ana");
        assert!(!draft.is_form_valid(now()));

        let mut draft = complete_draft();
        draft.set_date_of_birth(None);
        assert!(!draft.is_form_valid(now()));

        let mut draft = complete_draft();
        draft.set_date_of_birth(Some(now().date_naive() + Duration::days(1)));
        assert!(!draft.is_form_valid(now()));

        let mut draft = complete_draft();
        draft.set_document_number("not-a-passport");
        assert!(!draft.is_form_valid(now()));

        let mut draft = complete_draft();
        draft.set_terms_accepted(false);
        assert!(!draft.is_form_valid(now()));
    }

    #[test]
    fn test_switching_country_resets_document_state() {
        let mut draft = RegistrationDraft::new();
        draft.select_country(CountryId::Portugal);
        draft.select_document_type("Passaporte");
        draft.set_document_number("N123456");
        assert!(draft.document_number_valid);

        draft.select_country(CountryId::Brazil);
        assert_eq!(draft.selected_country, Some(CountryId::Brazil));
        assert!(draft.selected_document_type.is_none());
        assert!(!draft.document_number_valid);
        assert!(draft.document_number.is_empty());
        assert!(!draft.document_number_enabled());
    }

    #[test]
    fn test_reselecting_same_country_also_resets() {
        let mut draft = complete_draft();
        draft.select_country(CountryId::Portugal);
        assert!(draft.selected_document_type.is_none());
        assert!(!draft.is_form_valid(now()));
    }

    #[test]
    fn test_outside_press_closes_open_list() {
        let events = PointerEvents::new();
        let mut selector = CountrySelector::new();
        selector.mount(&events);

        selector.click_input();
        selector.set_input_region(input_region());
        selector.set_dropdown_region(Some(dropdown_region()));
        assert_eq!(selector.state(), SelectorState::Open);

        events.pointer_down(Point::new(150.0, 500.0));
        assert_eq!(selector.state(), SelectorState::Closed);
    }

    #[test]
    fn test_press_inside_list_keeps_it_open_and_item_commits() {
        let events = PointerEvents::new();
        let mut selector = CountrySelector::new();
        selector.mount(&events);
        let mut draft = RegistrationDraft::new();

        selector.click_input();
        selector.set_input_region(input_region());
        selector.set_dropdown_region(Some(dropdown_region()));

        events.pointer_down(Point::new(20.0, 200.0));
        assert!(selector.is_open());

        events.pointer_down(Point::new(20.0, 120.0));
        assert!(selector.is_open());

        let chosen = selector.select(CountryId::Mozambique);
        draft.select_country(chosen);
        assert!(!selector.is_open());
        assert_eq!(draft.selected_country, Some(CountryId::Mozambique));
    }

    #[test]
    fn test_unmounted_selector_ignores_presses() {
        let events = PointerEvents::new();
        let mut selector = CountrySelector::new();
        selector.mount(&events);
        selector.mount(&events);
        assert_eq!(events.listener_count(), 1);

        selector.unmount();
        assert_eq!(events.listener_count(), 0);
        assert!(!selector.is_mounted());

        selector.click_input();
        selector.set_input_region(input_region());
        selector.set_dropdown_region(Some(dropdown_region()));
        events.pointer_down(Point::new(150.0, 500.0));
        assert!(selector.is_open());
    }

    #[test]
    fn test_dropping_selector_removes_listener() {
        let events = PointerEvents::new();
        {
            let mut selector = CountrySelector::new();
            selector.mount(&events);
            assert_eq!(events.listener_count(), 1);
        }
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_selector_lists_whole_table() {
        let selector = CountrySelector::new();
        assert_eq!(selector.options().len(), countries::all().len());
    }

    #[test]
    fn test_manager_initialization() {
        let manager = RegistrationManager::new();
        assert_eq!(manager.current_step(), 1);
        assert_eq!(manager.step(), RegistrationStep::Welcome);
        assert!(!manager.can_go_back());
        assert!(!manager.is_form_valid());
        assert!(!manager.has_pending_actions());
    }

    #[test]
    fn test_manager_personal_data_flow() {
        let mut manager = RegistrationManager::new();
        manager.dispatch(RegistrationAction::NextStep);
        manager.dispatch(RegistrationAction::SetFullName("Ana Silva".to_string()));
        manager.dispatch(RegistrationAction::SetDateOfBirth(Some(
            now().date_naive() - Duration::days(365 * 30),
        )));
        manager.dispatch(RegistrationAction::SelectCountry(CountryId::Brazil));
        manager.dispatch(RegistrationAction::SelectDocumentType("Passaporte".to_string()));
        manager.dispatch(RegistrationAction::SetDocumentNumber("FZ123456".to_string()));
        manager.dispatch(RegistrationAction::SetTermsAccepted(true));
        assert!(manager.has_pending_actions());

        manager.update();
        assert!(!manager.has_pending_actions());
        assert_eq!(manager.step(), RegistrationStep::PersonalData);
        assert!(manager.can_go_back());
        assert!(manager.is_form_valid_at(now()));

        manager.dispatch(RegistrationAction::SelectCountry(CountryId::Spain));
        manager.update();
        assert!(!manager.is_form_valid_at(now()));
        assert!(manager.draft().selected_document_type.is_none());
    }

    #[test]
    fn test_manager_ignores_foreign_document_type() {
        let mut manager = RegistrationManager::new();
        manager.dispatch(RegistrationAction::SelectCountry(CountryId::Spain));
        manager.dispatch(RegistrationAction::SelectDocumentType("RG".to_string()));
        manager.update();
        assert!(manager.draft().selected_document_type.is_none());
    }

    #[test]
    fn test_manager_reset() {
        let mut manager = RegistrationManager::new();
        manager.dispatch(RegistrationAction::NextStep);
        manager.dispatch(RegistrationAction::SetFullName("Ana Silva".to_string()));
        manager.dispatch(RegistrationAction::Reset);
        manager.dispatch(RegistrationAction::NextStep);
        manager.update();

        assert_eq!(manager.current_step(), 1);
        assert!(manager.draft().full_name.is_empty());
        assert!(!manager.has_pending_actions());
    }

    #[test]
    fn test_navigation_performs_no_validation() {
        let mut manager = RegistrationManager::new();
        manager.dispatch(RegistrationAction::NextStep);
        manager.dispatch(RegistrationAction::NextStep);
        manager.update();
        assert_eq!(manager.step(), RegistrationStep::Confirmation);

        manager.dispatch(RegistrationAction::PrevStep);
        manager.dispatch(RegistrationAction::PrevStep);
        manager.dispatch(RegistrationAction::PrevStep);
        manager.update();
        assert_eq!(manager.current_step(), 1);
    }
}
