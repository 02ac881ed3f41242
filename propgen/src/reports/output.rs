//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a line of plain text.
    fn preformatted(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a user-facing failure.
    fn error(&mut self, msg: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation, writing to stdout.
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn error(&mut self, msg: &str) {
        println!("Error: {}", msg);
    }
}

/// Output that records each call as a line, for asserting on report layout.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("Error: {}", msg));
    }
}
