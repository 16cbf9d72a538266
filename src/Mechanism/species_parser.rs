use crate::Mechanism::User_steps::ElementaryStep;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One species term of a reaction side: verbatim name plus stoichiometric
/// coefficient. Coefficient 0 never occurs, unparsable terms are dropped
/// instead of zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub coeff: usize,
}

/// Elementary step after parsing: ordered species lists for both sides and
/// the trimmed forward rate label. The label is kept verbatim here, empty
/// included; fallback substitution is the business of the formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStep {
    pub reactants: Vec<Species>,
    pub products: Vec<Species>,
    pub rate: String,
}

/// Parses one side of a reaction, e.g. "2A + B" -> [A x2, B x1].
///
/// Terms are split on '+' and trimmed. A term may start with an ASCII
/// decimal coefficient run, the rest is the species name taken verbatim,
/// no chemical validation whatsoever. Unicode digits are not coefficients
/// and stay part of the name. A bare number like "2" has nothing after
/// the digits and therefore IS the name, with coefficient 1. A digit run
/// too long for usize parses to coefficient 1 and the remainder stays
/// the name. Terms whose name trims to empty (doubled or trailing '+')
/// are dropped. Never fails; the worst input yields an empty vector.
pub fn parse_species_list(side_text: &str) -> Vec<Species> {
    if side_text.trim().is_empty() {
        return Vec::new();
    }
    let re = Regex::new(r"^([0-9]+)(.+)$").unwrap();
    let mut species = Vec::new();
    for term in side_text.split('+') {
        let term = term.trim();
        let (coeff, name) = match re.captures(term) {
            Some(cap) => {
                let coeff = cap.get(1).unwrap().as_str().parse::<usize>().unwrap_or(1);
                let name = cap.get(2).unwrap().as_str().trim().to_string();
                (coeff, name)
            }
            None => (1, term.to_string()),
        };
        if name.is_empty() {
            debug!("dropped empty species term in '{}'", side_text);
            continue;
        }
        species.push(Species { name, coeff });
    }
    species
}

/// Parses both sides of a raw step. The rate is the trimmed forward rate
/// with no default: an empty label stays empty here, only the equilibrium
/// backward branch substitutes one.
pub fn parse_raw_step(step: &ElementaryStep) -> ParsedStep {
    ParsedStep {
        reactants: parse_species_list(&step.reactants),
        products: parse_species_list(&step.products),
        rate: step.forward_rate.trim().to_string(),
    }
}
