//! Role skill taxonomy and keyword matching against resume text.

/// Reference keywords when the target role matches no known family.
const GENERAL_KEYWORDS: &[&str] = &[
    "Node.js",
    "GraphQL",
    "Docker",
    "AWS",
    "Agile",
    "Team Leadership",
    "CI/CD",
    "Jest",
    "Redux",
];

const FRONTEND_KEYWORDS: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "HTML",
    "CSS",
    "Node.js",
    "GraphQL",
    "Docker",
    "AWS",
    "Agile",
    "Team Leadership",
    "CI/CD",
    "Jest",
    "Redux",
];

const BACKEND_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "Go",
    "SQL",
    "PostgreSQL",
    "REST",
    "Microservices",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "CI/CD",
    "Agile",
];

const FULLSTACK_KEYWORDS: &[&str] = &[
    "React",
    "TypeScript",
    "Node.js",
    "Express",
    "SQL",
    "REST",
    "GraphQL",
    "Docker",
    "AWS",
    "CI/CD",
    "Agile",
];

const DATA_KEYWORDS: &[&str] = &[
    "Python",
    "SQL",
    "Spark",
    "Airflow",
    "ETL",
    "Pandas",
    "Machine Learning",
    "Statistics",
    "Tableau",
    "AWS",
];

const DEVOPS_KEYWORDS: &[&str] = &[
    "Linux",
    "Kubernetes",
    "Docker",
    "Terraform",
    "Ansible",
    "AWS",
    "CI/CD",
    "Prometheus",
    "Monitoring",
];

/// Picks the keyword family for a target role by whole-term match on the title.
/// Full-stack is checked before front/back-end so "Full Stack Frontend" lands there.
pub fn role_keywords(target_role: &str) -> &'static [&'static str] {
    let has = |needles: &[&str]| needles.iter().any(|n| contains_term(target_role, n));

    if has(&["full stack", "full-stack", "fullstack"]) {
        FULLSTACK_KEYWORDS
    } else if has(&["frontend", "front-end", "front end", "ui", "react"]) {
        FRONTEND_KEYWORDS
    } else if has(&["backend", "back-end", "back end", "api"]) {
        BACKEND_KEYWORDS
    } else if has(&["data", "machine learning", "analyst", "ml"]) {
        DATA_KEYWORDS
    } else if has(&["devops", "sre", "site reliability", "platform", "infrastructure"]) {
        DEVOPS_KEYWORDS
    } else {
        GENERAL_KEYWORDS
    }
}

/// Case-insensitive whole-term match: "Go" matches "Go, Rust" but not "good".
pub fn contains_term(text: &str, term: &str) -> bool {
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(&needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// Keywords from `keywords` absent from the resume, in taxonomy order, no duplicates.
pub fn missing_keywords(resume_text: &str, keywords: &[&str]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for kw in keywords {
        if !contains_term(resume_text, kw) && !missing.iter().any(|m| m == kw) {
            missing.push(kw.to_string());
        }
    }
    missing
}

/// Fraction of `keywords` present in the resume, 0.0 – 1.0.
pub fn coverage(resume_text: &str, keywords: &[&str]) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matched = keywords
        .iter()
        .filter(|kw| contains_term(resume_text, kw))
        .count();
    matched as f32 / keywords.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_role_gets_frontend_family() {
        assert!(role_keywords("Frontend Developer").contains(&"React"));
        assert!(role_keywords("Senior Front-End Engineer").contains(&"CSS"));
    }

    #[test]
    fn test_full_stack_wins_over_frontend() {
        assert!(role_keywords("Full Stack Frontend Dev").contains(&"Express"));
    }

    #[test]
    fn test_unknown_role_gets_general_family() {
        assert_eq!(role_keywords("Chef"), GENERAL_KEYWORDS);
    }

    #[test]
    fn test_role_family_ignores_fragments_inside_words() {
        assert_eq!(role_keywords("Therapist"), GENERAL_KEYWORDS);
        assert_eq!(role_keywords("Rapid Response Coordinator"), GENERAL_KEYWORDS);
        assert_eq!(role_keywords("Capital Markets Analyst"), DATA_KEYWORDS);
        assert_eq!(role_keywords("API Engineer"), BACKEND_KEYWORDS);
        assert_eq!(role_keywords("Senior SRE"), DEVOPS_KEYWORDS);
    }

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("Languages: Go, Rust", "Go"));
        assert!(!contains_term("A good engineer", "Go"));
        assert!(contains_term("Shipped CI/CD pipelines", "ci/cd"));
        assert!(contains_term("node.js and express", "Node.js"));
    }

    #[test]
    fn test_missing_keywords_filters_present_terms() {
        let text = "Built React apps with TypeScript and Docker on AWS";
        let missing = missing_keywords(text, FRONTEND_KEYWORDS);
        assert!(!missing.contains(&"React".to_string()));
        assert!(!missing.contains(&"Docker".to_string()));
        assert!(missing.contains(&"GraphQL".to_string()));
    }

    #[test]
    fn test_missing_keywords_has_no_duplicates() {
        let missing = missing_keywords("", &["AWS", "AWS", "Docker"]);
        assert_eq!(missing, vec!["AWS".to_string(), "Docker".to_string()]);
    }

    #[test]
    fn test_coverage_bounds() {
        assert_eq!(coverage("", GENERAL_KEYWORDS), 0.0);
        assert_eq!(coverage("anything", &[]), 0.0);
        let all = GENERAL_KEYWORDS.join(" ");
        assert_eq!(coverage(&all, GENERAL_KEYWORDS), 1.0);
    }
}
