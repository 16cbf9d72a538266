/// Renders a raw step as a single-line mhchem equation with the
/// direction-appropriate arrow and rate annotations above/below it,
/// plus the "k_{f} = ..." labels shown next to the rate inputs.
/// Species sides go into the `\ce{...}` block verbatim.
///
/// # Examples
/// ```
/// use KiTeX::Mechanism::User_steps::{ElementaryStep, ReactionType};
/// use KiTeX::Symbolic::equation_formatter::format_reaction_equation;
/// let step = ElementaryStep::new("2A + B", "C", ReactionType::Equilibrium, "c_f", "c_r");
/// assert_eq!(format_reaction_equation(&step), r"\ce{2A + B <=>[$c_f$][$c_r$] C}");
/// ```
pub mod equation_formatter;
/// The central algorithm: translates a parsed step into the operator
/// expression of its transition rate, with creation/annihilation factors
/// per species, combinatorial normalization and a context-dependent
/// `\mathbb{W}` prefix. Equilibrium steps yield a forward/backward pair.
/// Every rendered factor is addressable by key for the hover tooltips.
///
/// # Examples
/// ```
/// use KiTeX::Mechanism::User_steps::{ElementaryStep, ReactionType};
/// use KiTeX::Symbolic::second_quantized::{RenderContext, SecondQuantizedForm, format_second_quantized};
/// let step = ElementaryStep::new("2A + B", "C", ReactionType::Forward, "c_f", "");
/// let form = format_second_quantized(&step, RenderContext::Preview, None);
/// if let SecondQuantizedForm::Single(expr) = form {
///     assert!(expr.latex.contains(r"\tfrac{c_f}{2}"));
///     assert_eq!(expr.factors.len(), 7);
/// }
/// ```
pub mod second_quantized;
