use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_with_output_dir(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notebook-fixtures"))
        .arg("--output-dir")
        .arg(dir)
        .output()
        .expect("failed to spawn notebook-fixtures")
}

const EXPECTED: [&str; 6] = [
    "eso-integration/aws-credentials-test.ipynb",
    "eso-integration/database-connection-test.ipynb",
    "eso-integration/mlflow-tracking-test.ipynb",
    "model-validation/kserve/model-inference-kserve.ipynb",
    "model-validation/openshift-ai/sentiment-analysis-test.ipynb",
    "model-training/train-sentiment-model.ipynb",
];

#[test]
fn generates_all_notebooks_and_reports() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("fixtures");
    let output = run_with_output_dir(&root);
    assert!(
        output.status.success(),
        "should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for rel in EXPECTED {
        let path = root.join(rel);
        assert!(path.is_file(), "missing {}", path.display());
        assert!(
            stdout.contains(&format!("✓ Created: {}", path.display())),
            "no confirmation for {rel}: {stdout}"
        );
        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["nbformat"], 4);
    }
    assert!(
        stdout.contains(&format!(
            "✓ Successfully generated 6 test notebooks in {}",
            root.display()
        )),
        "{stdout}"
    );
    assert!(stdout.contains("Next steps:"), "{stdout}");
}

#[test]
fn rerun_leaves_identical_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(run_with_output_dir(tmp.path()).status.success());
    let first: Vec<Vec<u8>> = EXPECTED
        .iter()
        .map(|rel| fs::read(tmp.path().join(rel)).unwrap())
        .collect();

    assert!(run_with_output_dir(tmp.path()).status.success());
    let second: Vec<Vec<u8>> = EXPECTED
        .iter()
        .map(|rel| fs::read(tmp.path().join(rel)).unwrap())
        .collect();
    assert!(first == second, "second run changed file contents");
}

#[test]
fn missing_output_dir_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_notebook-fixtures"))
        .output()
        .expect("failed to spawn notebook-fixtures");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output-dir"), "{stderr}");
}

#[test]
fn unwritable_root_exits_nonzero() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let output = run_with_output_dir(&blocker.join("nested"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("create output directory"), "{stderr}");
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}
