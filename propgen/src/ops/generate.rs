//! Generate operation - write (or preview) one component file.

use std::path::Path;

use eyre::Result;
use propgen_codegen_js::{Generator, LanguageCodegen};
use propgen_spec::ComponentSpec;

use crate::reports::{GenerateReport, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the component file is written into. Must already exist.
    pub output_dir: &'a Path,
    /// Extension of the component file, without the dot.
    pub extension: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Written paths, and the path in a [`propgen_core::WriteError`], are absolute.
pub fn generate(spec: &ComponentSpec, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(spec).with_extension(opts.extension);

    if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        return Ok(GenerateReport::Preview(files));
    }

    let output_dir = std::path::absolute(opts.output_dir)?;
    log::debug!(
        "generating {}.{} ({}) into {}",
        spec.name,
        generator.file_extension(),
        generator.language(),
        output_dir.display()
    );
    let result = generator.generate(&output_dir)?;

    Ok(GenerateReport::Written(result.written))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use propgen_core::WriteError;
    use tempfile::TempDir;

    use super::*;

    fn button() -> ComponentSpec {
        ComponentSpec::parse("Button", ["label:string:true"], ["label:Go"]).unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let spec = button();
        let opts = GenerateOptions {
            output_dir: temp.path(),
            extension: "jsx",
            dry_run: true,
        };

        let report = generate(&spec, opts).unwrap();

        let GenerateReport::Preview(files) = report else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "Button.jsx");
        assert!(!temp.path().join("Button.jsx").exists());
    }

    #[test]
    fn test_writes_component_file() {
        let temp = TempDir::new().unwrap();
        let spec = button();
        let opts = GenerateOptions {
            output_dir: temp.path(),
            extension: "js",
            dry_run: false,
        };

        let report = generate(&spec, opts).unwrap();

        let path = temp.path().join("Button.js");
        let GenerateReport::Written(written) = report else {
            panic!("expected written files");
        };
        assert_eq!(written, vec![path.clone()]);
        assert!(
            fs::read_to_string(&path)
                .unwrap()
                .contains("  label: \"Go\",\n")
        );
    }

    #[test]
    fn test_missing_output_dir_is_write_error() {
        let temp = TempDir::new().unwrap();
        let spec = button();
        let missing = temp.path().join("missing");
        let opts = GenerateOptions {
            output_dir: &missing,
            extension: "jsx",
            dry_run: false,
        };

        let err = generate(&spec, opts).unwrap_err();

        let write_err = err.downcast_ref::<WriteError>().expect("WriteError");
        assert_eq!(write_err.path, missing.join("Button.jsx"));
    }
}
