/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Mechanism::User_steps::{
        DRAFT_STORAGE_KEY, ElementaryStep, MechanismState, ReactionType, STEPS_STORAGE_KEY,
    };
    use std::collections::HashMap;

    #[test]
    fn test_default_draft() {
        let draft = ElementaryStep::default_draft();
        assert_eq!(draft.id, "");
        assert_eq!(draft.reactants, "A + B");
        assert_eq!(draft.products, "C + D");
        assert_eq!(draft.reaction_type, ReactionType::Forward);
        assert_eq!(draft.forward_rate, "c_f");
        assert_eq!(draft.reverse_rate, "c_r");
    }

    #[test]
    fn test_add_step_assigns_sequential_ids() {
        let mut state = MechanismState::new();
        let id1 = state.add_step().unwrap();
        let id2 = state.add_step().unwrap();
        assert_eq!(id1, "step-1");
        assert_eq!(id2, "step-2");
        assert_eq!(state.steps.len(), 2);
        assert_eq!(state.steps[0].id, "step-1");
        // the form keeps its contents after accepting a step
        assert_eq!(state.draft, ElementaryStep::default_draft());
    }

    #[test]
    fn test_add_step_rejects_blank_fields() {
        let mut state = MechanismState::new();
        state.draft.products = "   ".to_string();
        let result = state.add_step();
        assert!(result.is_err());
        assert!(state.steps.is_empty());

        state.draft.products = "C".to_string();
        state.draft.forward_rate = "".to_string();
        assert!(state.add_step().is_err());
        assert!(state.steps.is_empty());

        state.draft.forward_rate = "c_f".to_string();
        assert!(state.add_step().is_ok());
        assert_eq!(state.steps.len(), 1);
    }

    #[test]
    fn test_delete_step() {
        let mut state = MechanismState::new();
        let id1 = state.add_step().unwrap();
        let id2 = state.add_step().unwrap();
        state.delete_step(&id1);
        assert_eq!(state.steps.len(), 1);
        assert_eq!(state.steps[0].id, id2);
        // unknown id is a no-op
        state.delete_step("step-999");
        assert_eq!(state.steps.len(), 1);
    }

    #[test]
    fn test_ids_continue_after_gaps() {
        let mut state = MechanismState::new();
        let mut step3 = ElementaryStep::new("A", "B", ReactionType::Forward, "c_f", "");
        step3.id = "step-3".to_string();
        let mut step7 = ElementaryStep::new("B", "C", ReactionType::Forward, "c_f", "");
        step7.id = "step-7".to_string();
        state.steps = vec![step3, step7];
        let id = state.add_step().unwrap();
        assert_eq!(id, "step-8");
    }

    #[test]
    fn test_storage_round_trip() {
        let mut state = MechanismState::new();
        state.draft =
            ElementaryStep::new("2A + B", "C", ReactionType::Equilibrium, "c_f", "c_r");
        state.add_step().unwrap();
        state.draft.reactants = "X".to_string();

        let entries = state.export_storage().unwrap();
        assert!(entries.contains_key(STEPS_STORAGE_KEY));
        assert!(entries.contains_key(DRAFT_STORAGE_KEY));

        let restored = MechanismState::restore_storage(&entries);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_restore_tolerates_garbage() {
        let mut entries = HashMap::new();
        entries.insert(STEPS_STORAGE_KEY.to_string(), "not a json".to_string());
        entries.insert(DRAFT_STORAGE_KEY.to_string(), "{broken".to_string());
        let restored = MechanismState::restore_storage(&entries);
        assert!(restored.steps.is_empty());
        assert_eq!(restored.draft, ElementaryStep::default_draft());
    }

    #[test]
    fn test_restore_tolerates_missing_keys() {
        let restored = MechanismState::restore_storage(&HashMap::new());
        assert_eq!(restored, MechanismState::new());
    }

    #[test]
    fn test_step_json_matches_front_end_shape() {
        let mut step =
            ElementaryStep::new("A + B", "C", ReactionType::Equilibrium, "c_f", "c_r");
        step.id = "step-1".to_string();
        let json = serde_json::to_string(&step).unwrap();
        println!("step json: {}", json);
        assert!(json.contains(r#""type":"equilibrium""#));
        assert!(json.contains(r#""forwardRate":"c_f""#));
        assert!(json.contains(r#""reverseRate":"c_r""#));

        let from_front_end = r#"{"id":"step-5","reactants":"2 NO + O2","products":"2 NO2",
            "type":"reverse","forwardRate":"k_1","reverseRate":"k_{-1}"}"#;
        let parsed: ElementaryStep = serde_json::from_str(from_front_end).unwrap();
        assert_eq!(parsed.id, "step-5");
        assert_eq!(parsed.reaction_type, ReactionType::Reverse);
        assert_eq!(parsed.reverse_rate, "k_{-1}");
    }

    #[test]
    fn test_unknown_reaction_type_rejected() {
        let result = serde_json::from_str::<ReactionType>(r#""sideways""#);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Unknown reaction type"));
        assert_eq!(
            serde_json::from_str::<ReactionType>(r#""forward""#).unwrap(),
            ReactionType::Forward
        );
    }

    #[test]
    fn test_arrow_symbols_and_cycle() {
        assert_eq!(ReactionType::Forward.arrow_symbol(), "→");
        assert_eq!(ReactionType::Equilibrium.arrow_symbol(), "⇌");
        assert_eq!(ReactionType::Reverse.arrow_symbol(), "←");
        assert_eq!(ReactionType::Forward.next(), ReactionType::Equilibrium);
        assert_eq!(ReactionType::Equilibrium.next(), ReactionType::Reverse);
        assert_eq!(ReactionType::Reverse.next(), ReactionType::Forward);
        assert_eq!(ReactionType::Equilibrium.as_str(), "equilibrium");
    }

    #[test]
    fn test_pretty_print_mechanism() {
        let mut state = MechanismState::new();
        state.add_step().unwrap();
        state.draft.reaction_type = ReactionType::Equilibrium;
        state.add_step().unwrap();
        // should not panic
        state.pretty_print_mechanism();
    }
}
