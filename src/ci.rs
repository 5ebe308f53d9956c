use std::path::PathBuf;

pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const COMMIT_SHA_VAR: &str = "GITHUB_SHA";
pub const RUN_ID_VAR: &str = "GITHUB_RUN_ID";
pub const OUTPUT_SINK_VAR: &str = "GITHUB_OUTPUT";

/// Repository label used outside CI
pub const LOCAL_REPOSITORY: &str = "local";

/// Identifiers supplied by the CI runner, plus the step-output sink file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiContext {
    pub repository: String,
    pub commit_sha: String,
    pub run_id: String,

    /// File that `key=value` step outputs are appended to
    pub output_sink: Option<PathBuf>,
}

impl Default for CiContext {
    fn default() -> Self {
        Self {
            repository: LOCAL_REPOSITORY.to_string(),
            commit_sha: String::new(),
            run_id: String::new(),
            output_sink: None,
        }
    }
}

impl CiContext {
    /// Read the context from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from an arbitrary variable lookup.
    ///
    /// Unset identifiers fall back to their defaults; a set but empty
    /// identifier is kept as-is. An empty sink path counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            repository: lookup(REPOSITORY_VAR).unwrap_or(defaults.repository),
            commit_sha: lookup(COMMIT_SHA_VAR).unwrap_or(defaults.commit_sha),
            run_id: lookup(RUN_ID_VAR).unwrap_or(defaults.run_id),
            output_sink: lookup(OUTPUT_SINK_VAR)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let ci = CiContext::from_lookup(lookup_from(&[]));
        assert_eq!(ci, CiContext::default());
        assert_eq!(ci.repository, "local");
        assert!(ci.output_sink.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let ci = CiContext::from_lookup(lookup_from(&[
            ("GITHUB_REPOSITORY", "octo/assets"),
            ("GITHUB_SHA", "abc123"),
            ("GITHUB_RUN_ID", "42"),
            ("GITHUB_OUTPUT", "/tmp/gh_output"),
        ]));
        assert_eq!(ci.repository, "octo/assets");
        assert_eq!(ci.commit_sha, "abc123");
        assert_eq!(ci.run_id, "42");
        assert_eq!(ci.output_sink, Some(PathBuf::from("/tmp/gh_output")));
    }

    #[test]
    fn test_empty_values() {
        let ci = CiContext::from_lookup(lookup_from(&[
            ("GITHUB_REPOSITORY", ""),
            ("GITHUB_OUTPUT", ""),
        ]));
        assert_eq!(ci.repository, "");
        assert!(ci.output_sink.is_none());
    }
}
