//! Builds the text to visualize from the files tracked in a repository.
//!
//! Every file contributes a banner line carrying its path, followed by its
//! contents. Entries that are not readable UTF-8 files contribute a
//! placeholder instead of aborting the run.

use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CorpusError;

/// Substituted for directories, binary files and unreadable entries
pub const PLACEHOLDER: &str = "[binary, unreadable or directory entry omitted]";

const BANNER_FILL: char = '=';
const ELLIPSIS: &str = "...";

/// Source of the file list for a corpus
pub trait FileLister {
    /// Paths relative to `root`, in the order they should appear
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, CorpusError>;
}

/// Lists files tracked by git
#[derive(Debug, Default, Clone, Copy)]
pub struct GitLister;

impl FileLister for GitLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, CorpusError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["ls-files", "-z"])
            .output()?;

        if !output.status.success() {
            return Err(CorpusError::ListingFailed {
                root: root.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let paths = output
            .stdout
            .split(|&b| b == 0)
            .filter(|entry| !entry.is_empty())
            .map(|entry| PathBuf::from(String::from_utf8_lossy(entry).into_owned()))
            .collect();
        Ok(paths)
    }
}

/// Concatenate banner and contents of every listed file under `root`
pub fn assemble(
    root: &Path,
    lister: &dyn FileLister,
    line_char_limit: usize,
) -> Result<String, CorpusError> {
    if !root.is_dir() {
        return Err(CorpusError::InvalidRoot(root.to_path_buf()));
    }

    let paths = lister.list(root)?;
    info!("Assembling corpus from {} files in {}", paths.len(), root.display());

    // Read in parallel; collect keeps the listing order
    let sections: Vec<String> = paths
        .par_iter()
        .map(|relative| {
            let mut section = banner(&relative.to_string_lossy(), line_char_limit);
            section.push('\n');
            section.push_str(&read_entry(&root.join(relative)));
            section.push('\n');
            section
        })
        .collect();

    Ok(sections.concat())
}

/// File text, or the placeholder when it cannot be used as text
fn read_entry(path: &Path) -> String {
    if path.is_dir() {
        debug!("Skipping directory entry {}", path.display());
        return PLACEHOLDER.to_string();
    }

    match std::fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                warn!("Skipping {}: not valid UTF-8", path.display());
                PLACEHOLDER.to_string()
            }
        },
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            PLACEHOLDER.to_string()
        }
    }
}

/// A line of exactly `width` characters with `name` centered between fill
/// characters. Names too long to fit keep their tail behind an ellipsis.
pub fn banner(name: &str, width: usize) -> String {
    // At least one fill character on each side
    let room = width.saturating_sub(2);
    let label_len = name.chars().count() + 2;

    let label = if label_len <= room {
        format!(" {} ", name)
    } else {
        let keep = room.saturating_sub(2 + ELLIPSIS.len());
        let skip = name.chars().count() - keep;
        let tail: String = name.chars().skip(skip).collect();
        format!(" {}{} ", ELLIPSIS, tail)
    };

    let used = label.chars().count();
    let left = width.saturating_sub(used) / 2;
    let right = width.saturating_sub(used + left);

    let mut line = String::with_capacity(width + label.len());
    line.extend(std::iter::repeat(BANNER_FILL).take(left));
    line.push_str(&label);
    line.extend(std::iter::repeat(BANNER_FILL).take(right));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed listing for tests, no git needed
    struct StaticLister(Vec<&'static str>);

    impl FileLister for StaticLister {
        fn list(&self, _root: &Path) -> Result<Vec<PathBuf>, CorpusError> {
            Ok(self.0.iter().map(PathBuf::from).collect())
        }
    }

    #[test]
    fn test_banner_is_exact_width() {
        let deep = "deep/".repeat(60);
        for width in [40, 41, 80, 150] {
            for name in ["a", "src/lib.rs", deep.as_str()] {
                let line = banner(name, width);
                assert_eq!(
                    line.chars().count(),
                    width,
                    "banner for {name:?} at width {width}: {line:?}"
                );
            }
        }
    }

    #[test]
    fn test_banner_centers_name() {
        let line = banner("ab", 40);
        // " ab " is 4 chars, 36 fill chars split evenly
        assert_eq!(line, format!("{} ab {}", "=".repeat(18), "=".repeat(18)));
    }

    #[test]
    fn test_banner_truncates_from_the_left() {
        let name = format!("{}/main.rs", "x".repeat(100));
        let line = banner(&name, 40);
        assert!(line.starts_with("= ..."), "got {line:?}");
        assert!(line.ends_with("main.rs ="), "got {line:?}");
        assert_eq!(line.chars().count(), 40);
    }

    #[test]
    fn test_non_ascii_banner_wraps_to_one_line() {
        let wrapper = crate::layout::LineWrapper::new(40, 8).unwrap();
        for name in ["文档/说明.md", "データ/ファイル.txt", "src/héllo.rs"] {
            let line = banner(name, 40);
            assert_eq!(wrapper.wrap(&line), vec![line.clone()], "banner for {name:?}");
        }
    }

    #[test]
    fn test_assemble_orders_and_substitutes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "bravo").unwrap();
        std::fs::write(dir.path().join("a.txt"), "alpha\n\nparagraph").unwrap();
        std::fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0x81]).unwrap();
        std::fs::create_dir(dir.path().join("vendored")).unwrap();

        let lister = StaticLister(vec!["b.txt", "blob.bin", "a.txt", "vendored", "gone.txt"]);
        let corpus = assemble(dir.path(), &lister, 40).unwrap();

        let expected = [
            banner("b.txt", 40),
            "bravo".to_string(),
            banner("blob.bin", 40),
            PLACEHOLDER.to_string(),
            banner("a.txt", 40),
            "alpha\n\nparagraph".to_string(),
            banner("vendored", 40),
            PLACEHOLDER.to_string(),
            banner("gone.txt", 40),
            PLACEHOLDER.to_string(),
        ]
        .join("\n")
            + "\n";
        assert_eq!(corpus, expected);
    }

    #[test]
    fn test_assemble_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        let result = assemble(&missing, &StaticLister(vec![]), 40);
        assert!(matches!(result, Err(CorpusError::InvalidRoot(_))));
    }

    #[test]
    fn test_assemble_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let result = assemble(&file, &StaticLister(vec![]), 40);
        assert!(matches!(result, Err(CorpusError::InvalidRoot(_))));
    }

    #[test]
    fn test_empty_listing_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = assemble(dir.path(), &StaticLister(vec![]), 40).unwrap();
        assert!(corpus.is_empty());
    }
}
