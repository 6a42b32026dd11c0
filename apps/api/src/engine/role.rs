//! Role Classifier — maps a free-text job title to one of the fixed role
//! categories via ordered substring matching.
//!
//! The rule table is configuration data, not branching logic: each entry is a
//! set of trigger substrings plus the role they resolve to, evaluated in
//! order. Titles can match several rules ("Sales Account Manager" hits both
//! the sales and office triggers), so order fixes precedence.

use serde::{Deserialize, Serialize};

/// The role category a job title classifies into. Keys every pool lookup for
/// a request; computed once and immutable after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKey {
    Sales,
    Office,
    Security,
    Driver,
    Delivery,
    Mechanic,
    Electrician,
    Plumber,
    Housekeeping,
    Tech,
    Marketing,
    Generic,
}

/// Ordered classification rules: first rule with any substring hit wins.
const CLASSIFIER_RULES: &[(&[&str], RoleKey)] = &[
    // Tech / marketing
    (
        &["frontend", "backend", "full stack", "developer"],
        RoleKey::Tech,
    ),
    (&["seo", "digital marketing", "marketing"], RoleKey::Marketing),
    // Sales / support / office
    (
        &["sales", "telecaller", "call center", "customer support"],
        RoleKey::Sales,
    ),
    (
        &["data entry", "back office", "billing", "account", "receptionist"],
        RoleKey::Office,
    ),
    // Blue collar
    (&["security", "watchman", "bouncer"], RoleKey::Security),
    (&["delivery"], RoleKey::Delivery),
    (&["driver", "courier", "rider"], RoleKey::Driver),
    (&["mechanic"], RoleKey::Mechanic),
    (&["electrician"], RoleKey::Electrician),
    (&["plumber"], RoleKey::Plumber),
    (&["housekeeping", "cleaner"], RoleKey::Housekeeping),
];

/// Classifies a job title into a [`RoleKey`].
///
/// Total over all strings — no match is not an error, it is the `Generic`
/// fallback.
pub fn classify_role(job_title: &str) -> RoleKey {
    let title = job_title.trim().to_lowercase();

    CLASSIFIER_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| title.contains(t)))
        .map(|(_, role)| *role)
        .unwrap_or(RoleKey::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_generic() {
        assert_eq!(classify_role(""), RoleKey::Generic);
        assert_eq!(classify_role("   "), RoleKey::Generic);
    }

    #[test]
    fn test_unmatched_title_is_generic() {
        assert_eq!(classify_role("Astronaut"), RoleKey::Generic);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(classify_role("SECURITY GUARD"), RoleKey::Security);
        assert_eq!(classify_role("security guard"), RoleKey::Security);
    }

    #[test]
    fn test_each_role_has_a_matching_title() {
        let cases = [
            ("Field Sales Executive", RoleKey::Sales),
            ("Data Entry Operator", RoleKey::Office),
            ("Night Watchman", RoleKey::Security),
            ("Cab Driver", RoleKey::Driver),
            ("Delivery Boy", RoleKey::Delivery),
            ("Two Wheeler Mechanic", RoleKey::Mechanic),
            ("House Electrician", RoleKey::Electrician),
            ("Plumber", RoleKey::Plumber),
            ("Housekeeping Staff", RoleKey::Housekeeping),
            ("Full Stack Developer", RoleKey::Tech),
            ("Digital Marketing Intern", RoleKey::Marketing),
        ];
        for (title, expected) in cases {
            assert_eq!(classify_role(title), expected, "title: {title}");
        }
    }

    #[test]
    fn test_rule_order_fixes_precedence() {
        // "sales" (earlier rule) wins over "account" (later rule)
        assert_eq!(classify_role("Sales Account Manager"), RoleKey::Sales);
        // "developer" (first rule) wins over "marketing"
        assert_eq!(classify_role("Marketing Site Developer"), RoleKey::Tech);
        // "delivery" is checked before "driver"/"rider"
        assert_eq!(classify_role("Delivery Rider"), RoleKey::Delivery);
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        // "accountant" contains the "account" trigger
        assert_eq!(classify_role("Junior Accountant"), RoleKey::Office);
    }
}
