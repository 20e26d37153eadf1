//! Integration tests for the rd2md binary

use std::fs;
use std::path::Path;
use std::process::Command;

fn rd2md() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rd2md"))
}

const FUNCTION_DOC: &str = "\
% Generated by roxygen2: do not edit by hand
\\name{create_experiment}
\\title{Create Experiment}
\\usage{
create_experiment(name = NULL)
}
\\arguments{
\\item{name}{Experiment name}
}
\\description{
Create an experiment for logging runs.
}
";

const CLASS_DOC: &str = "\
\\name{Experiment}
\\title{Experiment Class}
\\description{
An experiment tracks a single run.
}
\\section{Methods}{
\\subsection{Public methods}{
\\itemize{
\\item \\href{#method-Experiment-print}{\\code{Experiment$print()}}
}
\\if{html}{\\out{<hr>}}
\\if{html}{\\out{<a id=\"method-Experiment-print\"></a>}}
\\if{html}{\\out{</div>}}
\\subsection{Method \\code{print()}}{
Print a summary of the experiment.
\\subsection{Usage}{
\\if{html}{\\out{<div class=\"r\">}}\\preformatted{Experiment$print(...)}\\if{html}{\\out{</div>}}
}
}
}
}
";

fn write_rd(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

#[test]
fn converts_single_file() {
    let dir = tempfile::tempdir().unwrap();
    write_rd(dir.path(), "create_experiment.Rd", FUNCTION_DOC);

    let status = rd2md()
        .arg(dir.path().join("create_experiment.Rd"))
        .arg("-q")
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());

    let md = fs::read_to_string(dir.path().join("create_experiment.md")).unwrap();
    assert!(md.starts_with("# `create_experiment`"));
    assert!(md.contains("## Usage"));
    assert!(md.contains("`name` | Experiment name"));
}

#[test]
fn converts_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    write_rd(dir.path(), "create_experiment.Rd", FUNCTION_DOC);
    let out = dir.path().join("docs/reference.md");

    let status = rd2md()
        .arg(dir.path().join("create_experiment.Rd"))
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());
    assert!(out.exists());
}

#[test]
fn detects_class_doc_by_uppercase_stem() {
    let dir = tempfile::tempdir().unwrap();
    write_rd(dir.path(), "Experiment.Rd", CLASS_DOC);

    let status = rd2md()
        .arg(dir.path().join("Experiment.Rd"))
        .arg("-q")
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());

    let md = fs::read_to_string(dir.path().join("Experiment.md")).unwrap();
    assert!(md.contains("### Public Methods"));
    assert!(md.contains("<a id=\"method-Experiment-print\"></a>"));
    assert!(!md.contains("# `Experiment`"));
}

#[test]
fn converts_directory_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_rd(dir.path(), "create_experiment.Rd", FUNCTION_DOC);
    write_rd(&nested, "create_run.Rd", FUNCTION_DOC);
    let out_dir = dir.path().join("docs");

    let status = rd2md()
        .arg(dir.path())
        .arg("-o")
        .arg(&out_dir)
        .arg("-r")
        .arg("-q")
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());

    assert!(out_dir.join("create_experiment.md").exists());
    assert!(out_dir.join("nested/create_run.md").exists());
}

#[test]
fn config_forces_class_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_rd(dir.path(), "experiment.Rd", CLASS_DOC);
    fs::write(
        dir.path().join("_rd2md.toml"),
        "[output]\nextension = \".markdown\"\n\n[classes]\nnames = [\"experiment\"]\n",
    )
    .unwrap();

    let status = rd2md()
        .arg(dir.path().join("experiment.Rd"))
        .arg("-q")
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());

    let md = fs::read_to_string(dir.path().join("experiment.markdown")).unwrap();
    assert!(md.contains("### Public Methods"));
}

#[test]
fn failing_file_does_not_block_others() {
    let dir = tempfile::tempdir().unwrap();
    write_rd(dir.path(), "create_experiment.Rd", FUNCTION_DOC);
    write_rd(dir.path(), "broken.Rd", "\\description{never closed\n");
    let out_dir = dir.path().join("docs");

    let output = rd2md()
        .arg(dir.path())
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("Failed to run rd2md");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.Rd"));
    assert!(out_dir.join("create_experiment.md").exists());
}

#[test]
fn init_writes_sample_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_rd2md.toml");

    let status = rd2md()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .status()
        .expect("Failed to run rd2md");
    assert!(status.success());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#:schema"));
    assert!(content.contains("[output]"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_rd2md.toml");
    fs::write(&path, "[output]\n").unwrap();

    let status = rd2md()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .status()
        .expect("Failed to run rd2md");
    assert!(!status.success());
}
