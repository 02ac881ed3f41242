//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Result of the generate command.
#[derive(Debug)]
pub enum GenerateReport {
    /// Files were written to disk, absolute paths.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Written(paths) => {
                for path in paths {
                    out.preformatted(&format!(
                        "Created {} with the specified structure.",
                        path.display()
                    ));
                }
            }
            GenerateReport::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    let noun = if files.len() == 1 { "file" } else { "files" };
    out.divider("Summary");
    out.preformatted(&format!("{} {} would be generated", files.len(), noun));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written() {
        let report = GenerateReport::Written(vec![PathBuf::from("/work/Button.jsx")]);
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec!["Created /work/Button.jsx with the specified structure."]
        );
    }

    #[test]
    fn test_preview() {
        let report = GenerateReport::Preview(vec![PreviewFile {
            path: "Button.jsx".to_string(),
            content: "export default Button;\n".to_string(),
        }]);
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── Button.jsx ──",
                "export default Button;\n",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}
