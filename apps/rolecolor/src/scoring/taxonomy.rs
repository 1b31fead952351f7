//! RoleColor taxonomy: the four team-role archetypes and their keyword lists.
//!
//! - Builders: innovation, vision, strategy
//! - Enablers: connection, execution, bridging gaps
//! - Thrivers: pressure, adaptation, speed
//! - Supportees: reliability, consistency, stability
//!
//! Fixed data. Scores are sensitive to every keyword here, so edits change results.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the four team-role archetypes. Declaration order is the taxonomy order,
/// which drives both JSON key order and dominant-role tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoleColor {
    Builders,
    Enablers,
    Thrivers,
    Supportees,
}

impl RoleColor {
    pub const ALL: [RoleColor; 4] = [
        RoleColor::Builders,
        RoleColor::Enablers,
        RoleColor::Thrivers,
        RoleColor::Supportees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleColor::Builders => "Builders",
            RoleColor::Enablers => "Enablers",
            RoleColor::Thrivers => "Thrivers",
            RoleColor::Supportees => "Supportees",
        }
    }

    /// Position in taxonomy order.
    pub fn index(&self) -> usize {
        match self {
            RoleColor::Builders => 0,
            RoleColor::Enablers => 1,
            RoleColor::Thrivers => 2,
            RoleColor::Supportees => 3,
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RoleColor::Builders => BUILDERS_KEYWORDS,
            RoleColor::Enablers => ENABLERS_KEYWORDS,
            RoleColor::Thrivers => THRIVERS_KEYWORDS,
            RoleColor::Supportees => SUPPORTEES_KEYWORDS,
        }
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}' (expected one of: Builders, Enablers, Thrivers, Supportees)",
            self.0
        )
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for RoleColor {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleColor::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

const BUILDERS_KEYWORDS: &[&str] = &[
    "innovation",
    "vision",
    "strategy",
    "architect",
    "design",
    "pioneer",
    "conceptualize",
    "roadmap",
    "disrupt",
    "growth",
    "scaling",
    "founder",
    "product-led",
    "transform",
    "ideation",
    "strategic",
    "future-proof",
    "breakthrough",
    "invent",
    "optimize",
    "leverage",
    "paradigm",
];

const ENABLERS_KEYWORDS: &[&str] = &[
    "connect",
    "execute",
    "bridge",
    "collaborate",
    "facilitate",
    "coordinate",
    "stakeholder",
    "cross-functional",
    "alignment",
    "partnership",
    "workflow",
    "delivery",
    "operationalize",
    "synergy",
    "communication",
    "liaison",
    "integration",
    "streamline",
    "agile",
    "scrum",
    "project management",
];

const THRIVERS_KEYWORDS: &[&str] = &[
    "pressure",
    "adapt",
    "fast-paced",
    "dynamic",
    "resilient",
    "agile",
    "pivot",
    "turnaround",
    "high-growth",
    "startup",
    "emergency",
    "deadline",
    "rapid",
    "iterative",
    "problem-solving",
    "grit",
    "tenacity",
    "flexible",
    "unstructured",
    "chaos",
    "scale-up",
    "high-stakes",
];

const SUPPORTEES_KEYWORDS: &[&str] = &[
    "reliability",
    "consistency",
    "stability",
    "maintenance",
    "quality assurance",
    "documentation",
    "standardization",
    "process",
    "compliance",
    "support",
    "infrastructure",
    "security",
    "governance",
    "accuracy",
    "detail-oriented",
    "best practices",
    "robust",
    "scalable",
    "monitoring",
    "operations",
];

/// The role names in taxonomy order.
pub fn role_colors() -> [RoleColor; 4] {
    RoleColor::ALL
}

/// Per-role view of the taxonomy, printed by `rolecolor --list-roles`.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: RoleColor,
    pub keyword_count: usize,
    pub keywords: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomySummary {
    pub roles: Vec<RoleSummary>,
    pub total_keywords: usize,
}

pub fn taxonomy_summary() -> TaxonomySummary {
    let roles: Vec<RoleSummary> = RoleColor::ALL
        .iter()
        .map(|role| RoleSummary {
            role: *role,
            keyword_count: role.keywords().len(),
            keywords: role.keywords().to_vec(),
        })
        .collect();
    let total_keywords = roles.iter().map(|r| r.keyword_count).sum();

    TaxonomySummary {
        roles,
        total_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order_is_fixed() {
        let names: Vec<&str> = role_colors().iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["Builders", "Enablers", "Thrivers", "Supportees"]);
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, role) in RoleColor::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_keyword_counts() {
        assert_eq!(RoleColor::Builders.keywords().len(), 22);
        assert_eq!(RoleColor::Enablers.keywords().len(), 21);
        assert_eq!(RoleColor::Thrivers.keywords().len(), 22);
        assert_eq!(RoleColor::Supportees.keywords().len(), 20);
        assert_eq!(taxonomy_summary().total_keywords, 85);
    }

    #[test]
    fn test_keywords_are_lowercase_and_nonempty() {
        for role in RoleColor::ALL {
            for kw in role.keywords() {
                assert!(!kw.is_empty());
                assert_eq!(*kw, kw.to_lowercase(), "keyword '{kw}' must be lowercase");
            }
        }
    }

    #[test]
    fn test_agile_is_shared_between_enablers_and_thrivers() {
        assert!(RoleColor::Enablers.keywords().contains(&"agile"));
        assert!(RoleColor::Thrivers.keywords().contains(&"agile"));
    }

    #[test]
    fn test_multi_word_keywords() {
        let multi: Vec<&str> = RoleColor::ALL
            .iter()
            .flat_map(|r| r.keywords().iter().copied())
            .filter(|kw| kw.contains(' '))
            .collect();
        assert_eq!(
            multi,
            vec!["project management", "quality assurance", "best practices"]
        );
    }

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("builders".parse::<RoleColor>().unwrap(), RoleColor::Builders);
        assert_eq!(" Supportees ".parse::<RoleColor>().unwrap(), RoleColor::Supportees);
        assert!("Architects".parse::<RoleColor>().is_err());
    }

    #[test]
    fn test_role_serializes_as_name() {
        let json = serde_json::to_string(&RoleColor::Thrivers).unwrap();
        assert_eq!(json, r#""Thrivers""#);
    }
}
