use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail with "refusing to overwrite source file" when `output` names `input`.
pub fn ensure_output_not_same(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite source file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        // Resolves symlinks and `..` for files already on disk.
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // A path that does not exist yet (usually the output) cannot be
    // canonicalized, so it is only joined onto the working directory and any
    // `..` segments stay unresolved. Such a path never names an existing
    // input, and a missing input fails on read right after this check.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}

#[cfg(test)]
mod tests {
    use super::ensure_output_not_same;

    #[test]
    fn same_existing_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wg0.conf");
        std::fs::write(&path, "[Interface]").expect("seed");

        let err = ensure_output_not_same(&path, &dir.path().join(".").join("wg0.conf"))
            .expect_err("same file");
        assert!(err.to_string().contains("refusing to overwrite source file"));
    }

    #[test]
    fn dotdot_alias_of_existing_input_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("subdir");
        let input = dir.path().join("wg0.conf");
        std::fs::write(&input, "[Interface]").expect("seed");

        let alias = dir.path().join("sub").join("..").join("wg0.conf");
        assert!(ensure_output_not_same(&alias, &input).is_err());
    }

    #[test]
    fn different_files_are_accepted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("wg0.conf");
        std::fs::write(&input, "[Interface]").expect("seed");

        ensure_output_not_same(&dir.path().join("ws0.conf"), &input).expect("different paths");
    }
}
