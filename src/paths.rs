use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves dataset names to destination files under a single output
/// directory. Owned by the caller; the pipeline never builds paths itself.
pub struct Paths {
    out_dir: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at `out_dir`, creating the directory if needed.
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("creating output directory {:?}", out_dir))?;
        Ok(Self { out_dir })
    }

    /// Destination for a normalized vaccination dataset, e.g. "Malta" →
    /// `<out_dir>/Malta.csv`.
    pub fn vax_out(&self, dataset: &str) -> PathBuf {
        self.out_dir.join(format!("{dataset}.csv"))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_dataset_to_csv_under_out_dir() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let paths = Paths::new(tmp.path().join("output"))?;
        assert!(paths.out_dir().is_dir());
        assert_eq!(
            paths.vax_out("Malta"),
            tmp.path().join("output").join("Malta.csv")
        );
        Ok(())
    }
}
