//! End-to-end tests driving the `propgen` binary.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn propgen(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_propgen"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run propgen")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn writes_component_into_working_directory() {
    let temp = TempDir::new().unwrap();
    let output = propgen(
        temp.path(),
        &[
            "Button",
            "--props",
            "label:string:true",
            "onClick:func:false",
            "--defaults",
            "onClick:null_func",
        ],
    );

    assert!(output.status.success());
    let path = temp.path().join("Button.jsx");
    assert!(stdout(&output).starts_with("Created "));
    assert!(
        stdout(&output)
            .trim_end()
            .ends_with("Button.jsx with the specified structure.")
    );
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "import PropTypes from 'prop-types';\n\
         \n\
         const propTypes = {\n  \
           label: PropTypes.string.isRequired,\n  \
           onClick: PropTypes.func,\n\
         };\n\
         const defaultProps = {\n  \
           onClick: () => null,\n\
         };\n\
         \n\
         const Button = {\n  \
           propTypes,\n  \
           defaultProps,\n\
         };\n\
         \n\
         export default Button;\n"
    );
}

#[test]
fn output_flag_and_extension() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("components");
    fs::create_dir(&out_dir).unwrap();

    let output = propgen(
        temp.path(),
        &["Card", "-o", "components", "--ext", "js", "--props", "title:string:true"],
    );

    assert!(output.status.success());
    let content = fs::read_to_string(out_dir.join("Card.js")).unwrap();
    assert!(!content.contains("defaultProps"));
    assert!(content.ends_with("export default Card;\n"));
}

#[test]
fn invalid_prop_token_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = propgen(temp.path(), &["Button", "--props", "badtoken"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Error: Invalid prop format 'badtoken'. Use name:type:required (e.g., myProp:string:true).\n"
    );
    assert!(!temp.path().join("Button.jsx").exists());
}

#[test]
fn invalid_default_token_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = propgen(temp.path(), &["Button", "--defaults", "novalue"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Error: Invalid default format 'novalue'. Use name:value (e.g., myProp:defaultValue).\n"
    );
    assert!(!temp.path().join("Button.jsx").exists());
}

#[test]
fn missing_output_directory_reports_write_error() {
    let temp = TempDir::new().unwrap();
    let output = propgen(temp.path(), &["Button", "-o", "missing"]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("Error: Could not write to file '"));
    assert!(text.contains("Button.jsx': "));
}

#[test]
fn dry_run_prints_file() {
    let temp = TempDir::new().unwrap();
    let output = propgen(temp.path(), &["Button", "--dry-run"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("── Button.jsx ──\nimport PropTypes from 'prop-types';\n"));
    assert!(text.ends_with("── Summary ──\n1 file would be generated\n"));
    assert!(!temp.path().join("Button.jsx").exists());
}
