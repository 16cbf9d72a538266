pub fn symbolic_examples(task: usize) {
    //

    match task {
        0 => {
            // SPECIES PARSING
            use crate::Mechanism::species_parser::parse_species_list;
            let side = parse_species_list("2A + B");
            println!("parsed side: {:?}", side);
            assert_eq!(side.len(), 2);
            assert_eq!(side[0].coeff, 2);

            // duplicates stay separate, empty terms are dropped
            println!("{:?}", parse_species_list("A + A"));
            println!("{:?}", parse_species_list("3 H2O + + CO2 +"));
            println!("{:?}", parse_species_list(""));
        }
        1 => {
            // EQUATION MARKUP
            use crate::Mechanism::User_steps::{Direction, ElementaryStep, ReactionType};
            use crate::Symbolic::equation_formatter::{
                format_rate_constant, format_reaction_equation,
            };
            let mut step =
                ElementaryStep::new("2A + B", "C", ReactionType::Forward, "c_f", "c_r");
            println!("forward:     {}", format_reaction_equation(&step));
            step.reaction_type = ReactionType::Equilibrium;
            println!("equilibrium: {}", format_reaction_equation(&step));
            step.reaction_type = ReactionType::Reverse;
            println!("reverse:     {}", format_reaction_equation(&step));

            // empty labels fall back to k_f / k_r
            let bare = ElementaryStep::new("A", "B", ReactionType::Equilibrium, "", "");
            println!("fallbacks:   {}", format_reaction_equation(&bare));

            println!("{}", format_rate_constant(Direction::Forward, "0.35"));
            println!("{}", format_rate_constant(Direction::Reverse, "c_r"));
        }
        2 => {
            // SECOND-QUANTIZED PREVIEW
            use crate::Mechanism::User_steps::{ElementaryStep, ReactionType};
            use crate::Symbolic::second_quantized::{
                RenderContext, SecondQuantizedForm, format_second_quantized,
            };
            let step = ElementaryStep::new("2A + B", "C", ReactionType::Forward, "c_f", "");
            let form = format_second_quantized(&step, RenderContext::Preview, None);
            if let SecondQuantizedForm::Single(expr) = form {
                println!("latex: {}", expr.latex);
                println!("factor table:");
                for f in &expr.factors {
                    println!(
                        "  {}: {} dagger={} exponent={}",
                        f.key, f.species, f.is_creation, f.exponent
                    );
                }
            }
        }
        3 => {
            // EQUILIBRIUM PAIR IN THE VISUALIZATION
            use crate::Mechanism::User_steps::{ElementaryStep, ReactionType};
            use crate::Symbolic::second_quantized::{
                RenderContext, SecondQuantizedForm, format_second_quantized,
            };
            let step =
                ElementaryStep::new("A + B", "2C", ReactionType::Equilibrium, "c_f", "c_r");
            // third step of the mechanism, indices are zero-based
            let form = format_second_quantized(&step, RenderContext::Visualization, Some(2));
            if let SecondQuantizedForm::Equilibrium { forward, backward } = form {
                println!("forward:  {}", forward.latex);
                println!("backward: {}", backward.latex);
            }
        }
        4 => {
            // HOVER TOOLTIP MATRICES
            use crate::Utils::matrix_ops::{
                annihilation_matrix, creation_matrix, ladder_matrix_latex, mat_mul,
                matrix_to_latex,
            };
            println!("a^dagger:   {}", matrix_to_latex(&creation_matrix()));
            println!("a:          {}", matrix_to_latex(&annihilation_matrix()));
            println!("(a^dagger)^2: {}", ladder_matrix_latex(true, 2));
            // a^dagger a is the number operator on the truncated basis
            let number_op = mat_mul(&creation_matrix(), &annihilation_matrix());
            println!("a^dagger a: {}", matrix_to_latex(&number_op));
        }
        5 => {
            // MECHANISM STATE AND STORAGE ROUND-TRIP
            use crate::Mechanism::User_steps::{ElementaryStep, MechanismState, ReactionType};
            let mut state = MechanismState::new();
            state.add_step().unwrap();
            state.draft =
                ElementaryStep::new("2 NO + O2", "2 NO2", ReactionType::Equilibrium, "k_1", "k_{-1}");
            let id = state.add_step().unwrap();
            println!("added {}", id);
            state.pretty_print_mechanism();

            let entries = state.export_storage().unwrap();
            for (key, json) in &entries {
                println!("{}: {}", key, json);
            }
            let restored = MechanismState::restore_storage(&entries);
            assert_eq!(restored, state);
            state.delete_step(&id);
            println!("after delete: {} steps", state.steps.len());
        }

        _ => {
            println!("Wrong task number");
        }
    }
}
