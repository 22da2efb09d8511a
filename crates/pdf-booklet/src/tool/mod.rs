//! External programs driven by the pipeline
//!
//! Each program is described by an [`ExternalTool`]: it knows how to build its
//! command line and how to read the captured output. Running the command is
//! left to a [`CommandRunner`], so argument construction and output parsing
//! can be exercised without spawning anything.

mod kpsewhich;
mod pdfcrop;
mod pdfjam;
mod soffice;

pub use kpsewhich::FontProbe;
pub use pdfcrop::{BoundsProbe, CropExecution, parse_bounding_boxes};
pub use pdfjam::Imposition;
pub use soffice::DocumentConversion;

use crate::types::*;
use std::ffi::OsString;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

/// A fully built command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Working directory for the child; inherited when `None`
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Arguments as lossy UTF-8, handy for assertions and logs
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished child process
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolOutput {
    /// Exit code; `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    pub(crate) fn exit_description(&self) -> String {
        self.code
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {}", c))
    }
}

/// Executes invocations and captures their output
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<ToolOutput>> + Send;
}

/// Runs invocations as real child processes.
///
/// The child inherits the environment, gets a null stdin, and has stdout and
/// stderr captured separately. Calls block until the child exits; there is no
/// timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ToolOutput> {
        let mut command = tokio::process::Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|source| BookletError::Spawn {
            program: invocation.program.to_string_lossy().into_owned(),
            source,
        })?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// One external capability: a command line and a reading of its output
pub trait ExternalTool {
    type Output;

    /// Short name used in diagnostics
    const NAME: &'static str;

    fn invocation(&self) -> Invocation;

    fn interpret(&self, output: ToolOutput) -> Result<Self::Output>;
}

/// Run `tool` through `runner` and interpret what it printed
pub async fn execute<T, R>(tool: &T, runner: &R) -> Result<T::Output>
where
    T: ExternalTool,
    R: CommandRunner,
{
    let invocation = tool.invocation();
    log::debug!("Running {}", invocation);
    let output = runner.run(&invocation).await?;
    log::debug!("{} finished with {}", T::NAME, output.exit_description());
    tool.interpret(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_quotes_whitespace() {
        let invocation = Invocation::new("pdfcrop")
            .arg("--bbox-odd")
            .arg("1 2 3 4")
            .arg("in.pdf");
        assert_eq!(invocation.to_string(), r#"pdfcrop --bbox-odd "1 2 3 4" in.pdf"#);
    }

    #[test]
    fn test_tool_output_success() {
        let mut output = ToolOutput::default();
        assert!(!output.success());
        output.code = Some(0);
        assert!(output.success());
        output.code = Some(1);
        assert!(!output.success());
        assert_eq!(output.exit_description(), "exit code 1");
    }
}
