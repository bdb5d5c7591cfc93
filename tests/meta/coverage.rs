//! Checks that `tests/unit` mirrors `src` and that every test file is wired in

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Files that only declare modules or start a binary
    fn is_wiring(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = collect_relative_paths(base, base, &mut paths) {
            panic!("Failed to read {root}: {error}");
        }
        paths
    }

    fn collect_relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_prefix_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    // Every source module has a unit test file at the same relative path
    // Verified by deleting tests/unit/algorithm/shading.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = tree(UNIT_DIR);
        let missing: Vec<String> = tree(SRC_DIR)
            .into_iter()
            .filter(|path| !is_wiring(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Unit test files never outlive the module they test
    // Verified by adding tests/unit/math/probability.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = tree(SRC_DIR);
        let orphaned: Vec<String> = tree(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_wiring(path) && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source module:\n{}",
            orphaned.join("\n")
        );
    }

    // Each unit test directory declares every file it holds
    // Verified by removing `mod shading;` from tests/unit/algorithm/mod.rs
    #[test]
    fn test_unit_modules_are_declared() {
        let mut undeclared = Vec::new();
        for path in tree(UNIT_DIR) {
            if is_wiring(&path) || !path.ends_with(".rs") {
                continue;
            }
            let (dir, file) = path.rsplit_once('/').unwrap_or(("", path.as_str()));
            let declaring = if dir.is_empty() {
                format!("{UNIT_DIR}/main.rs")
            } else {
                format!("{UNIT_DIR}/{dir}/mod.rs")
            };
            let module = file.trim_end_matches(".rs");
            let declared = fs::read_to_string(&declaring)
                .is_ok_and(|content| content.lines().any(|line| line.trim() == format!("mod {module};")));
            if !declared {
                undeclared.push(format!("  - tests/unit/{path} (missing from {declaring})"));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files that are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Every test file under tests/ contains at least one test
    // Verified by emptying tests/pipeline.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();
        for path in tree("tests") {
            let file = path.rsplit('/').next().unwrap_or(path.as_str());
            if !path.ends_with(".rs") || file == "main.rs" || file == "mod.rs" {
                continue;
            }
            let content = fs::read_to_string(Path::new("tests").join(&path)).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - tests/{path}"));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
