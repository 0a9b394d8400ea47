//! Architecture rule tests.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

const FORBIDDEN_IN_DOMAIN: &[&str] = &[
    "locator_wait_usecases",
    "locator_wait_infra",
    "locator_wait_common",
    "tracing::",
    "crossbeam_channel",
    "std::thread",
];

const FORBIDDEN_IN_USECASES: &[&str] = &[
    "locator_wait_infra",
    "locator_wait_common",
    "tracing_subscriber",
    "Instant::now()",
];

fn crate_src(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(name)
        .join("src")
}

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, files)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    Ok(())
}

fn assert_no_forbidden_imports(
    layer: &str,
    root: &Path,
    forbidden: &[&str],
    skip_dir: Option<&str>,
) {
    let mut files = Vec::new();
    if let Err(err) = collect_rs_files(root, &mut files) {
        panic!("collect source files: {err}");
    }

    let mut violations = Vec::new();
    for file in files {
        if skip_dir.is_some_and(|dir| file.components().any(|c| c.as_os_str() == dir)) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&file) else {
            continue;
        };
        for token in forbidden {
            if contents.contains(token) {
                violations.push(format!("{}: {}", file.display(), token));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found forbidden dependencies in {} layer:\n{}",
        layer,
        violations.join("\n")
    );
}

#[test]
fn domain_layer_has_no_outward_dependencies() {
    assert_no_forbidden_imports(
        "domain",
        &crate_src("locator-wait-domain"),
        FORBIDDEN_IN_DOMAIN,
        None,
    );
}

#[test]
fn usecase_layer_reads_time_through_ports() {
    assert_no_forbidden_imports(
        "usecases",
        &crate_src("locator-wait-usecases"),
        FORBIDDEN_IN_USECASES,
        Some("test_support"),
    );
}
