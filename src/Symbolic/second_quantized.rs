//! # Second-quantized formatter
//!
//! ## Purpose
//! Translates a raw elementary step into the operator expression of its
//! transition rate: a `\mathbb{W}` prefix, the rate label over the
//! combinatorial normalization, and a bracket of gain minus loss terms
//! built from creation/annihilation factors per species. Equilibrium
//! steps yield a forward/backward pair, everything else a single
//! expression.
//!
//! ## Key Features
//! - **Typed factor table**: every rendered factor carries a `factor=<key>`
//!   marker in the markup and a matching entry in
//!   [`OperatorExpression::factors`], so the hover tooltip looks the
//!   dagger flag and exponent up by key instead of scraping them back out
//!   of the rendered HTML
//! - **Closed prefix set**: the four subscript configurations of
//!   `\mathbb{W}` are an enum, not string conditionals
//! - **Combinatorial normalization**: product of coeff! over reactant
//!   coefficients above 1, rendered as a `\tfrac` only when it exceeds 1
//!
//! ## Usage Pattern
//! ```rust
//! use KiTeX::Mechanism::User_steps::{ElementaryStep, ReactionType};
//! use KiTeX::Symbolic::second_quantized::{RenderContext, SecondQuantizedForm, format_second_quantized};
//!
//! let step = ElementaryStep::new("2A + B", "C", ReactionType::Forward, "c_f", "");
//! let form = format_second_quantized(&step, RenderContext::Preview, None);
//! if let SecondQuantizedForm::Single(expr) = form {
//!     println!("{}", expr.latex);
//!     println!("{} factors", expr.factors.len());
//! }
//! ```

use crate::Mechanism::User_steps::{Direction, ElementaryStep, ReactionType};
use crate::Mechanism::species_parser::{ParsedStep, Species, parse_raw_step};
use crate::Utils::matrix_ops::{factorial, ladder_matrix_latex};

/// Where the expression is going to be shown. The live preview under the
/// entry form never numbers its step; the mechanism visualization does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Preview,
    Visualization,
}

/// The four subscript configurations of the transition-rate symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPrefix {
    /// `\mathbb{W} =\;`
    Plain,
    /// `\mathbb{W}_{f} =\;`
    Direction(Direction),
    /// `\mathbb{W}_{3} =\;`, index stored zero-based, shown one-based
    Step(usize),
    /// `\mathbb{W}_{3,f} =\;`
    StepAndDirection(usize, Direction),
}

impl OperatorPrefix {
    /// Picks the prefix for a context. Preview shows at most the direction
    /// tag and ignores any step index; visualization without an index
    /// degrades all the way to the plain symbol.
    pub fn select(
        context: RenderContext,
        direction: Option<Direction>,
        step_index: Option<usize>,
    ) -> Self {
        match context {
            RenderContext::Preview => match direction {
                Some(dir) => OperatorPrefix::Direction(dir),
                None => OperatorPrefix::Plain,
            },
            RenderContext::Visualization => match (step_index, direction) {
                (Some(i), Some(dir)) => OperatorPrefix::StepAndDirection(i, dir),
                (Some(i), None) => OperatorPrefix::Step(i),
                (None, _) => OperatorPrefix::Plain,
            },
        }
    }

    pub fn to_latex(&self) -> String {
        match self {
            OperatorPrefix::Plain => r"\mathbb{W} =\;".to_string(),
            OperatorPrefix::Direction(dir) => format!(r"\mathbb{{W}}_{{{}}} =\;", dir.tag()),
            OperatorPrefix::Step(i) => format!(r"\mathbb{{W}}_{{{}}} =\;", i + 1),
            OperatorPrefix::StepAndDirection(i, dir) => {
                format!(r"\mathbb{{W}}_{{{},{}}} =\;", i + 1, dir.tag())
            }
        }
    }
}

/// One creation or annihilation factor of a rendered expression,
/// addressed by the `factor=<key>` marker embedded in its markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorFactor {
    pub key: String,
    pub species: String,
    pub is_creation: bool,
    pub exponent: usize,
}

impl OperatorFactor {
    /// Matrix shown in the hover tooltip for this factor: the truncated
    /// ladder matrix raised to the factor's exponent.
    pub fn tooltip_matrix_latex(&self) -> String {
        ladder_matrix_latex(self.is_creation, self.exponent)
    }
}

/// A rendered operator expression plus the factor table for hover lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorExpression {
    pub latex: String,
    pub factors: Vec<OperatorFactor>,
}

impl OperatorExpression {
    /// Finds a factor by the key taken from a hovered `factor=<key>` marker.
    pub fn factor(&self, key: &str) -> Option<&OperatorFactor> {
        self.factors.iter().find(|f| f.key == key)
    }
}

/// Result of formatting one step: equilibrium splits into its two halves,
/// forward and reverse steps stay single.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondQuantizedForm {
    Single(OperatorExpression),
    Equilibrium {
        forward: OperatorExpression,
        backward: OperatorExpression,
    },
}

/// Renders ladder factors and records their metadata, one fresh "sq<n>"
/// key per factor in emission order.
struct FactorWriter {
    factors: Vec<OperatorFactor>,
}

impl FactorWriter {
    fn new() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    fn emit(&mut self, species: &Species, is_creation: bool) -> String {
        // exponent 0 would mean no factor at all; the parser never produces it
        if species.coeff == 0 {
            return String::new();
        }
        let key = format!("sq{}", self.factors.len());
        let dagger_mark = if is_creation { r"\dagger" } else { "" };
        let exponent_mark = if species.coeff > 1 {
            species.coeff.to_string()
        } else {
            String::new()
        };
        let markup = format!(
            r"\htmlClass{{clickable}}{{\htmlData{{factor={}}}{{x^{{{} {}}}_{{\tiny \ce{{{}}}}}}}}}",
            key, dagger_mark, exponent_mark, species.name
        );
        self.factors.push(OperatorFactor {
            key,
            species: species.name.clone(),
            is_creation,
            exponent: species.coeff,
        });
        markup
    }
}

/// creation factors of the products, then annihilation factors of the reactants
fn gain_group(writer: &mut FactorWriter, parsed: &ParsedStep) -> String {
    let created: Vec<String> = parsed
        .products
        .iter()
        .map(|s| writer.emit(s, true))
        .collect();
    let annihilated: Vec<String> = parsed
        .reactants
        .iter()
        .map(|s| writer.emit(s, false))
        .collect();
    format!("{} {}", created.join(" "), annihilated.join(" "))
}

/// per reactant, a creation factor glued to its annihilation factor
fn loss_group(writer: &mut FactorWriter, parsed: &ParsedStep) -> String {
    parsed
        .reactants
        .iter()
        .map(|s| {
            let up = writer.emit(s, true);
            let down = writer.emit(s, false);
            format!("{}{}", up, down)
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Saturating product of coeff! over reactant coefficients above 1;
/// 1 when none qualify.
fn combinatorial_weight(reactants: &[Species]) -> usize {
    reactants
        .iter()
        .filter(|s| s.coeff > 1)
        .map(|s| factorial(s.coeff))
        .fold(1, |acc, f| acc.saturating_mul(f))
}

/// Builds one operator expression from an already parsed step. The rate
/// label of `parsed` goes in as-is; divide-by-weight kicks in only when
/// the combinatorial weight exceeds 1.
pub fn build_operator_expression(parsed: &ParsedStep, prefix: OperatorPrefix) -> OperatorExpression {
    let mut writer = FactorWriter::new();
    let gain = gain_group(&mut writer, parsed);
    let loss = loss_group(&mut writer, parsed);
    let weight = combinatorial_weight(&parsed.reactants);
    let rate_term = if weight > 1 {
        format!(r"\tfrac{{{}}}{{{}}}", parsed.rate, weight)
    } else {
        parsed.rate.clone()
    };
    let latex = format!(
        r"{{{}}} {} \bigl[ {} - {} \bigr]",
        prefix.to_latex(),
        rate_term,
        gain,
        loss
    );
    OperatorExpression {
        latex,
        factors: writer.factors,
    }
}

/// Formats one raw step for the given context.
///
/// Equilibrium steps produce the named forward/backward pair: the backward
/// half swaps the species sides and uses the reverse rate, substituting
/// "k_r" when that label trims to nothing. A reverse step keeps its literal
/// sides, only the printed equation arrow flips.
pub fn format_second_quantized(
    step: &ElementaryStep,
    context: RenderContext,
    step_index: Option<usize>,
) -> SecondQuantizedForm {
    let parsed = parse_raw_step(step);
    match step.reaction_type {
        ReactionType::Equilibrium => {
            let forward_prefix = OperatorPrefix::select(context, Some(Direction::Forward), step_index);
            let forward = build_operator_expression(&parsed, forward_prefix);

            let trimmed = step.reverse_rate.trim();
            let backward_rate = if trimmed.is_empty() {
                "k_r".to_string()
            } else {
                trimmed.to_string()
            };
            let swapped = ParsedStep {
                reactants: parsed.products.clone(),
                products: parsed.reactants.clone(),
                rate: backward_rate,
            };
            let backward_prefix = OperatorPrefix::select(context, Some(Direction::Reverse), step_index);
            let backward = build_operator_expression(&swapped, backward_prefix);
            SecondQuantizedForm::Equilibrium { forward, backward }
        }
        ReactionType::Forward | ReactionType::Reverse => {
            let prefix = OperatorPrefix::select(context, None, step_index);
            SecondQuantizedForm::Single(build_operator_expression(&parsed, prefix))
        }
    }
}
