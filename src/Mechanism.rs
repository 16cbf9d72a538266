/// User-facing data model of a reaction mechanism: the raw elementary step
/// record as authored in the entry form (free-text species sides, free-text
/// rate labels, direction), and the explicit application state holding the
/// accepted steps plus the in-progress draft. The state converts to and
/// from JSON strings under the same storage keys the browser front end
/// uses, so mechanisms move between the two without conversion.
///
/// # Examples
/// ```
/// use KiTeX::Mechanism::User_steps::{ElementaryStep, MechanismState, ReactionType};
/// let mut state = MechanismState::new();
/// state.draft = ElementaryStep::new("2A + B", "C", ReactionType::Equilibrium, "c_f", "c_r");
/// let id = state.add_step().unwrap();
/// assert_eq!(id, "step-1");
/// state.pretty_print_mechanism();
/// ```
#[allow(non_snake_case)]
pub mod User_steps;
/// tests
#[allow(non_snake_case)]
pub mod User_steps_tests;
/// eng
/// The module takes one side of a reaction given as free text, e.g. "2A + B",
/// and produces the ordered list of species with their stoichiometric
/// coefficients. A term may start with an integer coefficient, the remainder
/// is the species name taken verbatim; no chemical validation is performed
/// and malformed terms are dropped rather than reported.
/// ----------------------------------------------------------------
/// ru
/// Модуль берет на вход одну сторону реакции, заданную в виде свободного текста,
/// например "2A + B", и выдает упорядоченный список веществ с их
/// стехиометрическими коэффициентами. Терм может начинаться с целого
/// коэффициента, остаток считается именем вещества и берется как есть;
/// химическая валидация не производится, некорректные термы отбрасываются
///
/// # Examples
/// ```
/// use KiTeX::Mechanism::species_parser::parse_species_list;
/// let side = parse_species_list("2A + B");
/// assert_eq!(side[0].coeff, 2);
/// assert_eq!(side[1].name, "B");
/// ```
pub mod species_parser;
