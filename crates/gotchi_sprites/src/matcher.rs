use crate::alias::map_collateral_alias;
use crate::attributes::Attribute;
use crate::config::{Condition, ConditionSet, Config};

/// Check whether a subject's attributes satisfy every condition of a rule.
///
/// Conditions are ANDed across the set and keys are ANDed within a
/// condition; the first unsatisfied key fails the whole rule.
pub fn match_condition(attributes: &[Attribute], rule: &ConditionSet) -> bool {
    rule.keys_and_values
        .iter()
        .all(|condition| condition_holds(attributes, condition))
}

fn condition_holds(attributes: &[Attribute], condition: &Condition) -> bool {
    condition.keys.iter().all(|key| {
        if condition.values.is_empty() {
            // Presence check, value-agnostic
            attributes.iter().any(|attr| &attr.trait_type == key)
        } else {
            attributes
                .iter()
                .filter(|attr| &attr.trait_type == key)
                .map(|attr| map_collateral_alias(&attr.value))
                .any(|value| condition.values.iter().any(|v| v == value))
        }
    })
}

/// Select the first rule whose conditions the attributes satisfy.
///
/// Rules are evaluated in declaration order; there is no specificity
/// ranking. `None` is a subject-level failure, not a batch-fatal one.
pub fn find_matching_rule<'a>(
    attributes: &[Attribute],
    config: &'a Config,
) -> Option<&'a ConditionSet> {
    config
        .if_keys_and_values
        .iter()
        .find(|rule| match_condition(attributes, rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlotProperty;

    fn value_condition(key: &str, values: &[&str]) -> Condition {
        Condition {
            keys: vec![key.to_string()],
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn presence_condition(key: &str) -> Condition {
        Condition {
            keys: vec![key.to_string()],
            values: vec![],
        }
    }

    fn rule(conditions: Vec<Condition>) -> ConditionSet {
        ConditionSet {
            keys_and_values: conditions,
            properties: vec![],
        }
    }

    #[test]
    fn value_condition_matches_exact_value() {
        let attrs = vec![Attribute::new("Collateral", "aUSDT")];
        assert!(match_condition(
            &attrs,
            &rule(vec![value_condition("Collateral", &["aUSDT"])])
        ));
    }

    #[test]
    fn value_condition_matches_through_alias() {
        // amUSDT is the bridged spelling of aUSDT
        let attrs = vec![Attribute::new("Collateral", "amUSDT")];
        assert!(match_condition(
            &attrs,
            &rule(vec![value_condition("Collateral", &["aUSDT"])])
        ));
    }

    #[test]
    fn value_condition_fails_on_wrong_value() {
        let attrs = vec![Attribute::new("Collateral", "aDAI")];
        assert!(!match_condition(
            &attrs,
            &rule(vec![value_condition("Collateral", &["aUSDT"])])
        ));
    }

    #[test]
    fn presence_condition_ignores_value() {
        let attrs = vec![Attribute::new("Base Body", "Anything")];
        assert!(match_condition(
            &attrs,
            &rule(vec![presence_condition("Base Body")])
        ));
        assert!(!match_condition(
            &attrs,
            &rule(vec![presence_condition("Eye Shape")])
        ));
    }

    #[test]
    fn all_keys_in_condition_must_hold() {
        let attrs = vec![Attribute::new("Base Body", "Default")];
        let condition = Condition {
            keys: vec!["Base Body".to_string(), "Eye Shape".to_string()],
            values: vec![],
        };
        assert!(!match_condition(&attrs, &rule(vec![condition])));
    }

    #[test]
    fn empty_rule_matches_anything() {
        assert!(match_condition(&[], &rule(vec![])));
    }

    #[test]
    fn first_satisfied_rule_wins() {
        let attrs = vec![
            Attribute::new("Collateral", "aUSDT"),
            Attribute::new("Base Body", "Default"),
        ];

        // Both rules are satisfiable; the broader one is declared first
        // and must win regardless of specificity.
        let broad = ConditionSet {
            keys_and_values: vec![presence_condition("Base Body")],
            properties: vec![SlotProperty {
                key: "Base Body".to_string(),
                folder: "Broad".to_string(),
            }],
        };
        let specific = ConditionSet {
            keys_and_values: vec![
                presence_condition("Base Body"),
                value_condition("Collateral", &["aUSDT"]),
            ],
            properties: vec![SlotProperty {
                key: "Base Body".to_string(),
                folder: "Specific".to_string(),
            }],
        };

        let config = Config {
            if_keys_and_values: vec![broad.clone(), specific],
            ..Default::default()
        };

        let matched = find_matching_rule(&attrs, &config).unwrap();
        assert_eq!(matched, &broad);
    }

    #[test]
    fn no_satisfiable_rule_returns_none() {
        let attrs = vec![Attribute::new("Base Body", "Default")];
        let config = Config {
            if_keys_and_values: vec![rule(vec![presence_condition("Eye Shape")])],
            ..Default::default()
        };
        assert!(find_matching_rule(&attrs, &config).is_none());
    }
}
