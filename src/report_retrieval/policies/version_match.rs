use crate::report_retrieval::domain::ProjectSearchResult;

/// Version matching policy used to pick a project out of a search response
///
/// Versions are compared as plain strings: `1.0` and `1.0.0` are different
/// versions. The server does not sort its results, and when several entries
/// carry the same version the first one in response order wins.
pub struct VersionMatch;

impl VersionMatch {
    /// Returns the first entry whose version equals `version` exactly
    ///
    /// Entries without a uuid are skipped; they cannot be used to fetch reports.
    pub fn first_exact<'a>(
        candidates: &'a [ProjectSearchResult],
        version: &str,
    ) -> Option<&'a ProjectSearchResult> {
        candidates.iter().find(|candidate| {
            candidate.version.as_deref() == Some(version) && !candidate.uuid.trim().is_empty()
        })
    }

    /// Distinct versions present in the response, in response order
    pub fn available_versions(candidates: &[ProjectSearchResult]) -> Vec<String> {
        let mut versions: Vec<String> = Vec::new();
        for version in candidates.iter().filter_map(|c| c.version.as_ref()) {
            if !versions.contains(version) {
                versions.push(version.clone());
            }
        }
        versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(uuid: &str, version: &str) -> ProjectSearchResult {
        ProjectSearchResult::new(uuid, Some(version))
    }

    #[test]
    fn test_first_exact_picks_matching_version() {
        let candidates = vec![entry("u1", "1.0"), entry("u2", "2.0")];
        let found = VersionMatch::first_exact(&candidates, "2.0").unwrap();
        assert_eq!(found.uuid, "u2");
    }

    #[test]
    fn test_first_exact_duplicate_versions_first_wins() {
        let candidates = vec![entry("u3", "2.0"), entry("u1", "1.0"), entry("u2", "2.0")];
        let found = VersionMatch::first_exact(&candidates, "2.0").unwrap();
        assert_eq!(found.uuid, "u3");
    }

    #[test]
    fn test_first_exact_is_string_equality() {
        let candidates = vec![entry("u1", "1.0.0"), entry("u2", "v1.0")];
        assert!(VersionMatch::first_exact(&candidates, "1.0").is_none());
    }

    #[test]
    fn test_first_exact_is_case_sensitive() {
        let candidates = vec![entry("u1", "1.0-RC1")];
        assert!(VersionMatch::first_exact(&candidates, "1.0-rc1").is_none());
    }

    #[test]
    fn test_first_exact_empty() {
        assert!(VersionMatch::first_exact(&[], "1.0").is_none());
    }

    #[test]
    fn test_first_exact_skips_null_version_and_empty_uuid() {
        let candidates = vec![
            ProjectSearchResult::new("u0", None),
            entry("", "1.0"),
            entry("u1", "1.0"),
        ];
        let found = VersionMatch::first_exact(&candidates, "1.0").unwrap();
        assert_eq!(found.uuid, "u1");
    }

    #[test]
    fn test_available_versions_in_order_without_duplicates() {
        let candidates = vec![
            entry("u1", "2.0"),
            entry("u2", "1.0"),
            ProjectSearchResult::new("u3", None),
            entry("u4", "2.0"),
        ];
        assert_eq!(
            VersionMatch::available_versions(&candidates),
            vec!["2.0".to_string(), "1.0".to_string()]
        );
    }
}
