// Helpers for checking that SECURITY.md keeps up with the token contract's
// privileged surface.

use regex::Regex;

/// Extract a section (header line included) up to the next header of the
/// same or higher level.
pub fn extract_section(content: &str, section_name: &str) -> String {
    let mut section_content = String::new();
    let mut in_section = false;
    let mut section_level = 0;

    for line in content.lines() {
        if line.starts_with('#') {
            let current_level = line.chars().take_while(|&c| c == '#').count();
            let header_text = line.trim_start_matches('#').trim();

            if header_text == section_name {
                in_section = true;
                section_level = current_level;
                section_content.push_str(line);
                section_content.push('\n');
                continue;
            }

            if in_section && current_level <= section_level {
                break;
            }
        }

        if in_section {
            section_content.push_str(line);
            section_content.push('\n');
        }
    }

    section_content
}

pub fn section_exists(content: &str, section_name: &str) -> bool {
    content
        .lines()
        .filter(|line| line.starts_with('#'))
        .any(|line| line.trim_start_matches('#').trim() == section_name)
}

/// Case-insensitive check that every keyword appears somewhere in `content`.
pub fn contains_all_keywords(content: &str, keywords: &[&str]) -> bool {
    let lowercase_content = content.to_lowercase();
    keywords
        .iter()
        .all(|keyword| lowercase_content.contains(&keyword.to_lowercase()))
}

/// Entry point names written as inline code, e.g. `burn_sale_tokens`.
pub fn documented_entry_points(content: &str) -> Vec<String> {
    let pattern = Regex::new(r"`([a-z][a-z0-9_]*)`").unwrap();
    pattern
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect()
}

pub fn extract_urls(content: &str) -> Vec<String> {
    let url_pattern = Regex::new(r"https?://[^\s\)]+").unwrap();
    url_pattern
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_section() {
        let content = "# Title\n## Sale Account\nOnly `burn_sale_tokens`\n## Clock\nLedger time";
        let section = extract_section(content, "Sale Account");
        assert!(section.contains("burn_sale_tokens"));
        assert!(!section.contains("Ledger time"));
    }

    #[test]
    fn test_contains_all_keywords() {
        let content = "Spot balance excludes vesting and Lockup amounts";
        assert!(contains_all_keywords(content, &["vesting", "lockup"]));
        assert!(!contains_all_keywords(content, &["vesting", "allowance"]));
    }

    #[test]
    fn test_documented_entry_points() {
        let content = "Call `transfer_with_vesting` then `init`, not `Init` or plain init.";
        let names = documented_entry_points(content);
        assert_eq!(names, vec!["transfer_with_vesting".to_string(), "init".to_string()]);
    }

    #[test]
    fn test_extract_urls() {
        let content = "See https://developers.stellar.org/docs and (http://test.org) too";
        let urls = extract_urls(content);
        assert_eq!(urls.len(), 2);
        assert!(urls.contains(&"http://test.org".to_string()));
    }

    #[test]
    fn test_section_exists() {
        let content = "# Title\n## Section 1\nContent\n### Subsection\nMore content";
        assert!(section_exists(content, "Section 1"));
        assert!(section_exists(content, "Subsection"));
        assert!(!section_exists(content, "Missing Section"));
    }
}
