//! YAML rendering and writing of the merged roster

use crate::domain::Member;
use crate::error::{Result, RosterError};
use std::path::Path;

/// Serialize members as a YAML sequence of mappings.
///
/// Each mapping carries `github` followed by its held flags set to `true`.
pub fn render_roster_yaml(members: &[Member]) -> Result<String> {
    serde_yaml::to_string(members).map_err(RosterError::Serialize)
}

/// Write rendered YAML to `path`, replacing any existing file.
pub fn write_roster(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|source| RosterError::Write { path: path.to_path_buf(), source })?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Flag;
    use similar_asserts::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_render_lists_only_true_flags() {
        let members = vec![
            Member::new("alice").with_flag(Flag::TscMember),
            Member::new("bob").with_flag(Flag::BoardChair).with_flag(Flag::BoardMember),
            Member::new("dave").with_flag(Flag::BoardMember),
        ];

        let yaml = render_roster_yaml(&members).expect("render");
        assert_eq!(
            yaml,
            "- github: alice\n  isTscMember: true\n\
             - github: bob\n  isBoardMember: true\n  isBoardChair: true\n\
             - github: dave\n  isBoardMember: true\n"
        );
        assert!(!yaml.contains("false"));
    }

    #[test]
    fn test_render_empty_roster() {
        assert_eq!(render_roster_yaml(&[]).expect("render"), "[]\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("TSC_BOARD_MEMBERS.yaml");
        std::fs::write(&path, "stale content that is longer than the new one\n").expect("seed");

        write_roster(&path, "[]\n").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("missing").join("out.yaml");
        let err = write_roster(&path, "[]\n").unwrap_err();
        assert!(err.is_write(), "unexpected error: {err}");
    }
}
