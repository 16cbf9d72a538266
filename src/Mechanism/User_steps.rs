//! # User steps module
//!
//! ## Purpose
//! User-facing data model of a reaction mechanism: the raw elementary step
//! record exactly as it comes out of the entry form, the reaction direction
//! enums, and the `MechanismState` value holding the list of accepted steps
//! plus the in-progress draft.
//!
//! ## Key Features
//! - **Raw step record**: species sides kept as free text, never validated
//!   chemically; rate labels kept verbatim with their own fallback rules
//!   applied later by the formatters
//! - **Explicit application state**: the shell owns one `MechanismState`
//!   value and passes it around, nothing in this crate holds globals
//! - **Storage round-trip**: state converts to/from JSON strings under the
//!   same two storage keys the browser front end uses, so saved mechanisms
//!   move between the two without conversion
//! - **Error Handling**: string-based error messages suitable for GUI display
//!
//! ## Usage Pattern
//! ```rust
//! use KiTeX::Mechanism::User_steps::MechanismState;
//!
//! let mut state = MechanismState::new();
//! state.draft.reactants = "2A + B".to_string();
//! state.draft.products = "C".to_string();
//! let id = state.add_step().unwrap();
//! state.pretty_print_mechanism();
//! state.delete_step(&id);
//! ```

use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// storage key of the accepted step list
pub const STEPS_STORAGE_KEY: &str = "elementary-steps";
/// storage key of the in-progress draft step
pub const DRAFT_STORAGE_KEY: &str = "current-elementary-step";

/// enum for directionality of an elementary step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Forward,
    Equilibrium,
    Reverse,
}

impl<'de> Deserialize<'de> for ReactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "forward" => Ok(ReactionType::Forward),
            "equilibrium" => Ok(ReactionType::Equilibrium),
            "reverse" => Ok(ReactionType::Reverse),
            _ => Err(serde::de::Error::custom(format!(
                "Unknown reaction type: {}",
                s
            ))),
        }
    }
}

impl ReactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Forward => "forward",
            ReactionType::Equilibrium => "equilibrium",
            ReactionType::Reverse => "reverse",
        }
    }

    /// plain-text arrow for buttons, logs and tables
    pub fn arrow_symbol(&self) -> &'static str {
        match self {
            ReactionType::Forward => "→",
            ReactionType::Equilibrium => "⇌",
            ReactionType::Reverse => "←",
        }
    }

    /// the entry form cycles the direction button through the variants in this order
    pub fn next(&self) -> ReactionType {
        match self {
            ReactionType::Forward => ReactionType::Equilibrium,
            ReactionType::Equilibrium => ReactionType::Reverse,
            ReactionType::Reverse => ReactionType::Forward,
        }
    }
}

/// One half of an equilibrium, used for rate-constant labels and
/// operator subscripts ("f"/"r").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::Forward => "f",
            Direction::Reverse => "r",
        }
    }
}

/// Raw elementary step exactly as authored: both species sides are free
/// text, rate labels are free text. `id` is assigned when the step is
/// accepted into the mechanism and stays empty on the draft.
///
/// JSON field names match the browser front end so saved mechanisms load
/// on either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementaryStep {
    pub id: String,
    pub reactants: String,
    pub products: String,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    #[serde(rename = "forwardRate")]
    pub forward_rate: String,
    #[serde(rename = "reverseRate")]
    pub reverse_rate: String,
}

impl ElementaryStep {
    pub fn new(
        reactants: &str,
        products: &str,
        reaction_type: ReactionType,
        forward_rate: &str,
        reverse_rate: &str,
    ) -> Self {
        Self {
            id: String::new(),
            reactants: reactants.to_string(),
            products: products.to_string(),
            reaction_type,
            forward_rate: forward_rate.to_string(),
            reverse_rate: reverse_rate.to_string(),
        }
    }

    /// seed record shown in a fresh entry form
    pub fn default_draft() -> Self {
        ElementaryStep::new("A + B", "C + D", ReactionType::Forward, "c_f", "c_r")
    }
}

/// Structure to store the user mechanism: accepted steps plus the draft
/// being edited. The shell owns one of these and passes it by value;
/// the formatting core never sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismState {
    pub steps: Vec<ElementaryStep>,
    pub draft: ElementaryStep,
}

impl Default for MechanismState {
    fn default() -> Self {
        Self::new()
    }
}

impl MechanismState {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            draft: ElementaryStep::default_draft(),
        }
    }

    /// Next free id of the form "step-<n>". Derived from the ids already
    /// present so it survives storage round-trips without a counter field.
    fn next_step_id(&self) -> String {
        let max_n = self
            .steps
            .iter()
            .filter_map(|s| s.id.strip_prefix("step-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("step-{}", max_n + 1)
    }

    /// Accepts the draft into the mechanism. The draft must have non-blank
    /// reactants, products and forward rate; it is left as-is afterwards so
    /// the form keeps its contents for the next entry.
    ///
    /// Returns the id assigned to the new step.
    pub fn add_step(&mut self) -> Result<String, String> {
        if self.draft.reactants.trim().is_empty()
            || self.draft.products.trim().is_empty()
            || self.draft.forward_rate.trim().is_empty()
        {
            return Err("Step needs reactants, products and a forward rate".to_string());
        }
        let id = self.next_step_id();
        let mut step = self.draft.clone();
        step.id = id.clone();
        self.steps.push(step);
        info!("added step {}", id);
        Ok(id)
    }

    /// Removes a step by id. Unknown ids are ignored.
    pub fn delete_step(&mut self, id: &str) {
        let before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        if self.steps.len() < before {
            info!("deleted step {}", id);
        }
    }

    /// Serializes the state into per-key JSON strings, one entry per
    /// storage key, ready to hand to whatever storage the shell has.
    pub fn export_storage(&self) -> Result<HashMap<String, String>, serde_json::Error> {
        let mut entries = HashMap::new();
        entries.insert(
            STEPS_STORAGE_KEY.to_string(),
            serde_json::to_string(&self.steps)?,
        );
        entries.insert(
            DRAFT_STORAGE_KEY.to_string(),
            serde_json::to_string(&self.draft)?,
        );
        Ok(entries)
    }

    /// Rebuilds the state from stored entries. Lenient: a missing or
    /// unreadable entry falls back to the default for that key, a stale
    /// or foreign payload must never lock the user out of the form.
    pub fn restore_storage(entries: &HashMap<String, String>) -> Self {
        let steps = match entries.get(STEPS_STORAGE_KEY) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                warn!("stored step list is unreadable, starting empty: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        let draft = match entries.get(DRAFT_STORAGE_KEY) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                warn!("stored draft is unreadable, using the default: {}", e);
                ElementaryStep::default_draft()
            }),
            None => ElementaryStep::default_draft(),
        };
        Self { steps, draft }
    }

    /// Prints the mechanism as a table to stdout.
    pub fn pretty_print_mechanism(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("step"),
            Cell::new("equation"),
            Cell::new("type"),
            Cell::new("k_f"),
            Cell::new("k_r"),
        ]));
        for (i, step) in self.steps.iter().enumerate() {
            let equation = format!(
                "{} {} {}",
                step.reactants,
                step.reaction_type.arrow_symbol(),
                step.products
            );
            table.add_row(Row::new(vec![
                Cell::new(&(i + 1).to_string()),
                Cell::new(&equation),
                Cell::new(step.reaction_type.as_str()),
                Cell::new(&step.forward_rate),
                Cell::new(&step.reverse_rate),
            ]));
        }
        table.printstd();
    }
}
