//! Keeps `tests/unit` a one-to-one mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Source files that only wire modules together or start the binary
    fn is_organizational(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn relative_rust_paths(root: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        collect_into(root, root, &mut paths)?;
        Ok(paths)
    }

    fn collect_into(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(|err| io::Error::other(err.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect_into(&path, root, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = relative_rust_paths(Path::new(SRC_DIR)).expect("src should be readable");
        let tests = relative_rust_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !tests.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = relative_rust_paths(Path::new(SRC_DIR)).expect("src should be readable");
        let tests = relative_rust_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = tests
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let files = relative_rust_paths(Path::new(TESTS_DIR)).expect("tests should be readable");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs"))
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new(TESTS_DIR).join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {TESTS_DIR}/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
