use std::fs;
use std::path::Path;
use doc_tests::{contains_all_keywords, documented_entry_points, extract_section, extract_urls, section_exists};

const SALE_ONLY: [&str; 3] = ["transfer_with_vesting", "transfer_with_lockup", "burn_sale_tokens"];
const SPOT_LIMITED: [&str; 3] = ["transfer", "transfer_from", "burn"];

fn security_md() -> String {
    fs::read_to_string("../SECURITY.md").expect("Failed to read SECURITY.md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_md_exists() {
        assert!(
            Path::new("../SECURITY.md").exists(),
            "SECURITY.md file must exist at repository root"
        );
    }

    #[test]
    fn test_required_sections_present() {
        let content = security_md();

        for section in [
            "Overview",
            "Privileged Entry Points",
            "One-Time Initialization",
            "Time-Locked Balances",
            "Known Limitations",
            "References",
        ] {
            assert!(
                section_exists(&content, section),
                "SECURITY.md must contain {section} section"
            );
        }
    }

    #[test]
    fn test_every_sale_only_entry_point_documented() {
        let content = security_md();
        let privileged = extract_section(&content, "Privileged Entry Points");
        let documented = documented_entry_points(&privileged);

        for name in SALE_ONLY {
            assert!(
                documented.iter().any(|d| d == name),
                "Privileged Entry Points must name `{name}`"
            );
        }
        assert!(
            !documented.iter().any(|d| d == "transfer"),
            "`transfer` is not sale-only and must not be listed as privileged"
        );
    }

    #[test]
    fn test_spot_limited_operations_documented() {
        let content = security_md();
        let locked = extract_section(&content, "Time-Locked Balances");
        let documented = documented_entry_points(&locked);

        for name in SPOT_LIMITED {
            assert!(
                documented.iter().any(|d| d == name),
                "Time-Locked Balances must name `{name}`"
            );
        }
        assert!(contains_all_keywords(&locked, &["spot", "vesting", "lockup", "ledger timestamp"]));
    }

    #[test]
    fn test_initialization_guidance() {
        let content = security_md();
        let init = extract_section(&content, "One-Time Initialization");

        assert!(documented_entry_points(&init).iter().any(|d| d == "init"));
        assert!(contains_all_keywords(&init, &["once", "front-run"]));
    }

    #[test]
    fn test_references_are_https() {
        let content = security_md();
        let references = extract_section(&content, "References");
        let urls = extract_urls(&references);

        assert!(!urls.is_empty(), "References must link at least one document");
        for url in urls {
            assert!(url.starts_with("https://"), "insecure reference link {url}");
        }
    }
}
