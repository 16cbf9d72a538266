use crate::Mechanism::User_steps::{Direction, ElementaryStep, ReactionType};

/// Renders a raw step as one mhchem equation, e.g.
/// `\ce{2A + B <=>[$c_f$][$c_r$] C}`. Both species sides go in verbatim;
/// mhchem parses the authored text itself.
///
/// A rate label that is the empty string falls back to "k_f"/"k_r"; any
/// other label is trimmed and used as-is, so a whitespace-only label
/// renders as an empty annotation rather than the fallback. The parsed
/// operator form applies a different rule, see
/// [`crate::Symbolic::second_quantized`].
pub fn format_reaction_equation(step: &ElementaryStep) -> String {
    let forward = if step.forward_rate.is_empty() {
        "k_f".to_string()
    } else {
        step.forward_rate.trim().to_string()
    };
    let reverse = if step.reverse_rate.is_empty() {
        "k_r".to_string()
    } else {
        step.reverse_rate.trim().to_string()
    };
    let arrow = match step.reaction_type {
        ReactionType::Forward => format!("->[${}$]", forward),
        ReactionType::Equilibrium => format!("<=>[${}$][${}$]", forward, reverse),
        ReactionType::Reverse => format!("<-[${}$]", reverse),
    };
    format!(r"\ce{{{} {} {}}}", step.reactants, arrow, step.products)
}

/// Label shown next to a rate input, e.g. `k_{f} = 0.35`.
pub fn format_rate_constant(direction: Direction, value: &str) -> String {
    format!("k_{{{}}} = {}", direction.tag(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(reaction_type: ReactionType, forward_rate: &str, reverse_rate: &str) -> ElementaryStep {
        ElementaryStep::new("A + B", "C", reaction_type, forward_rate, reverse_rate)
    }

    #[test]
    fn test_forward_arrow() {
        let eq = format_reaction_equation(&step(ReactionType::Forward, "c_f", "c_r"));
        assert_eq!(eq, r"\ce{A + B ->[$c_f$] C}");
    }

    #[test]
    fn test_equilibrium_arrow() {
        let eq = format_reaction_equation(&step(ReactionType::Equilibrium, "c_f", "c_r"));
        assert_eq!(eq, r"\ce{A + B <=>[$c_f$][$c_r$] C}");
    }

    #[test]
    fn test_reverse_arrow_uses_reverse_rate() {
        let eq = format_reaction_equation(&step(ReactionType::Reverse, "c_f", "c_r"));
        assert_eq!(eq, r"\ce{A + B <-[$c_r$] C}");
    }

    #[test]
    fn test_empty_rate_falls_back() {
        let eq = format_reaction_equation(&step(ReactionType::Equilibrium, "", ""));
        assert_eq!(eq, r"\ce{A + B <=>[$k_f$][$k_r$] C}");
    }

    #[test]
    fn test_whitespace_rate_is_not_substituted() {
        // whitespace-only is not empty, so no fallback, it just trims away
        let eq = format_reaction_equation(&step(ReactionType::Forward, "   ", "c_r"));
        assert_eq!(eq, r"\ce{A + B ->[$$] C}");
    }

    #[test]
    fn test_rates_trimmed() {
        let eq = format_reaction_equation(&step(ReactionType::Forward, "  c_1  ", ""));
        assert_eq!(eq, r"\ce{A + B ->[$c_1$] C}");
    }

    #[test]
    fn test_sides_kept_verbatim() {
        let step = ElementaryStep::new("  2A+B ", "C  ", ReactionType::Forward, "c_f", "");
        let eq = format_reaction_equation(&step);
        assert_eq!(eq, r"\ce{  2A+B  ->[$c_f$] C  }");
    }

    #[test]
    fn test_format_rate_constant() {
        assert_eq!(format_rate_constant(Direction::Forward, "0.35"), "k_{f} = 0.35");
        assert_eq!(format_rate_constant(Direction::Reverse, "c_r"), "k_{r} = c_r");
    }
}
