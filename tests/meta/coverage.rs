//! Keeps `tests/unit` a file-for-file mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Crate roots and module declarations carry no logic of their own
    fn is_structural(relative_path: &str) -> bool {
        relative_path == "main.rs" || relative_path == "lib.rs" || relative_path.ends_with("mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative_path);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(paths)
    }

    fn mirrored_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = collect_relative_paths(Path::new(SRC_DIR), Path::new(SRC_DIR)).unwrap();
        let unit = collect_relative_paths(Path::new(UNIT_DIR), Path::new(UNIT_DIR)).unwrap();
        (src, unit)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (src, unit) = mirrored_paths();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_structural(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without a unit test counterpart:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (src, unit) = mirrored_paths();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_structural(path) && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, found: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            if path.is_dir() {
                files_without_tests(&path, found)?;
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !file_name.ends_with(".rs") || is_structural(file_name) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                found.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut found = Vec::new();
        files_without_tests(Path::new(TESTS_DIR), &mut found).unwrap();

        assert!(
            found.is_empty(),
            "Test files without any #[test] functions:\n{}",
            found.join("\n")
        );
    }
}
