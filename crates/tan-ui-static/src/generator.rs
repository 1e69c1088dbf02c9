//! The class-to-CSS generator seam.
//!
//! The generator reads the manifest page (through the entry stylesheet) and
//! writes CSS somewhere under the temp directory. Which file it writes is
//! discovered afterwards by [`discover_artifact`](crate::discover_artifact).

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// Paths handed to a generator run.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    /// Temporary working directory
    pub temp_dir: PathBuf,

    /// Rendered manifest page
    pub markup: PathBuf,

    /// Entry stylesheet importing the input CSS and sourcing the manifest
    pub entry_css: PathBuf,

    /// Fixed fallback output path
    pub output: PathBuf,
}

impl GenerateJob {
    /// Substitute `{temp_dir}`, `{markup}`, `{entry_css}` and `{output}` in an argument.
    pub fn expand(&self, arg: &str) -> String {
        arg.replace("{temp_dir}", &self.temp_dir.to_string_lossy())
            .replace("{markup}", &self.markup.to_string_lossy())
            .replace("{entry_css}", &self.entry_css.to_string_lossy())
            .replace("{output}", &self.output.to_string_lossy())
    }
}

/// Errors that can occur while running a generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Failed to start generator '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("Generator '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Generator '{program}' timed out after {seconds}s")]
    Timeout { program: String, seconds: u64 },

    #[error("Generator failed: {0}")]
    Other(String),
}

/// Something that turns the manifest into CSS.
pub trait CssGenerator: Send + Sync {
    /// Generator identifier for logs
    fn name(&self) -> &str;

    /// Run the generator for a job.
    fn generate(&self, job: &GenerateJob) -> impl Future<Output = Result<(), GeneratorError>> + Send;
}

/// Runs an external program, e.g. the Tailwind CLI.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    /// Program to execute
    pub program: String,

    /// Arguments, with job placeholders
    pub args: Vec<String>,

    /// Maximum run time
    pub timeout: Duration,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl CssGenerator for CommandGenerator {
    fn name(&self) -> &str {
        &self.program
    }

    async fn generate(&self, job: &GenerateJob) -> Result<(), GeneratorError> {
        let args: Vec<String> = self.args.iter().map(|a| job.expand(a)).collect();
        tracing::debug!("Running {} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| GeneratorError::Spawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| GeneratorError::Timeout {
                program: self.program.clone(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| GeneratorError::Other(e.to_string()))?;

        if !output.status.success() {
            return Err(GeneratorError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
