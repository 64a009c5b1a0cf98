//! Step references: pick one step by number or `change_uuid` prefix.

use crate::model::Step;

/// Resolve a step reference (step number or unambiguous prefix) to a step.
pub(super) fn resolve_step<'a>(steps: &'a [Step], reference: &str) -> Result<&'a Step, String> {
    if steps.is_empty() {
        return Err("no steps found in this log".to_string());
    }

    // Try step number first.
    if let Ok(n) = reference.parse::<usize>()
        && let Some(step) = steps.iter().find(|s| s.step_number == n)
    {
        return Ok(step);
    }

    // Try as a prefix match against change ids.
    let matches: Vec<&Step> = steps
        .iter()
        .filter(|s| s.change_uuid.starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!(
            "no step matching '{reference}' (steps are numbered 1 to {})",
            steps.len()
        )),
        1 => Ok(matches[0]),
        n => {
            let ids: Vec<String> = matches.iter().map(|s| short_id(&s.change_uuid)).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {n} steps: {}",
                ids.join(", ")
            ))
        }
    }
}

/// The first eight characters of a change id.
pub(super) fn short_id(change_uuid: &str) -> String {
    change_uuid.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::StepContent;

    fn step(n: usize, change_uuid: &str) -> Step {
        Step {
            step_number: n,
            change_uuid: change_uuid.to_string(),
            timestamp: String::new(),
            content: StepContent::default(),
        }
    }

    fn steps() -> Vec<Step> {
        vec![
            step(1, "a3b0fc12-0000"),
            step(2, "a3b9d001-0000"),
            step(3, "77ee0000-0000"),
        ]
    }

    #[test]
    fn resolves_by_number() {
        let steps = steps();
        assert_eq!(resolve_step(&steps, "2").unwrap().change_uuid, "a3b9d001-0000");
    }

    #[test]
    fn resolves_by_unique_prefix() {
        let steps = steps();
        assert_eq!(resolve_step(&steps, "77").unwrap().step_number, 3);
        assert_eq!(resolve_step(&steps, "a3b0").unwrap().step_number, 1);
    }

    #[test]
    fn ambiguous_prefix_lists_candidates() {
        let steps = steps();
        let err = resolve_step(&steps, "a3b").unwrap_err();
        assert!(err.contains("ambiguous"));
        assert!(err.contains("a3b0fc12"));
        assert!(err.contains("a3b9d001"));
    }

    #[test]
    fn out_of_range_number_falls_back_to_prefix() {
        let steps = vec![step(1, "42abc")];
        assert_eq!(resolve_step(&steps, "42").unwrap().step_number, 1);
        assert!(resolve_step(&steps, "9").is_err());
    }

    #[test]
    fn empty_log_has_nothing_to_resolve() {
        let err = resolve_step(&[], "1").unwrap_err();
        assert_eq!(err, "no steps found in this log");
    }
}
