//! Socket discovery.
//!
//! Two sources, tried in order: the `SWAYSOCK` environment variable, then
//! `sway --get-socketpath`. The first one that yields a non-empty value wins.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ClientError, Result};

/// Environment variable naming the socket.
pub const SOCKET_ENV: &str = "SWAYSOCK";

/// Helper program asked for the socket path when the variable is unset.
pub const HELPER_PROGRAM: &str = "sway";

/// Arguments passed to [`HELPER_PROGRAM`].
pub const HELPER_ARGS: &[&str] = &["--get-socketpath"];

/// Default lookup order.
pub const DEFAULT_STRATEGIES: &[LocateStrategy] = &[LocateStrategy::EnvVar, LocateStrategy::Helper];

/// One way of finding the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateStrategy {
    /// Read the configured environment variable.
    EnvVar,
    /// Run the helper command and take its stdout.
    Helper,
}

/// Source of process-wide data the locator reads.
pub trait Environment {
    /// Value of an environment variable, if set.
    fn var(&self, key: &str) -> Option<OsString>;

    /// Stdout of `program args...` if it ran and exited successfully.
    fn helper_output(&self, program: &str, args: &[String]) -> Option<Vec<u8>>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn helper_output(&self, program: &str, args: &[String]) -> Option<Vec<u8>> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                debug!(program, error = %err, "socket helper failed to start");
                return None;
            }
        };

        if !output.status.success() {
            debug!(program, status = %output.status, "socket helper exited abnormally");
            return None;
        }
        Some(output.stdout)
    }
}

/// Resolves the socket path from an [`Environment`].
#[derive(Debug, Clone)]
pub struct SocketLocator<E = SystemEnvironment> {
    env: E,
    var_name: String,
    helper_program: String,
    helper_args: Vec<String>,
    strategies: Vec<LocateStrategy>,
}

impl SocketLocator<SystemEnvironment> {
    /// Locator over the real process environment with default settings.
    pub fn new() -> Self {
        Self::with_environment(SystemEnvironment)
    }
}

impl Default for SocketLocator<SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> SocketLocator<E> {
    /// Locator over a custom environment with default settings.
    pub fn with_environment(env: E) -> Self {
        Self {
            env,
            var_name: SOCKET_ENV.to_string(),
            helper_program: HELPER_PROGRAM.to_string(),
            helper_args: HELPER_ARGS.iter().map(|arg| arg.to_string()).collect(),
            strategies: DEFAULT_STRATEGIES.to_vec(),
        }
    }

    /// Read a different environment variable.
    pub fn var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = name.into();
        self
    }

    /// Run a different helper command.
    pub fn helper<I, A>(mut self, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.helper_program = program.into();
        self.helper_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the lookup order.
    pub fn strategies(mut self, order: &[LocateStrategy]) -> Self {
        self.strategies = order.to_vec();
        self
    }

    /// Find the socket path.
    ///
    /// The variable's value is returned verbatim; the path is not checked for
    /// existence. Helper output is trimmed. Helper diagnostics are discarded.
    pub fn resolve(&self) -> Result<PathBuf> {
        for strategy in &self.strategies {
            let found = match strategy {
                LocateStrategy::EnvVar => self.from_env(),
                LocateStrategy::Helper => self.from_helper(),
            };
            if let Some(path) = found {
                debug!(?strategy, ?path, "resolved sway socket");
                return Ok(path);
            }
        }
        Err(ClientError::NoAddressFound)
    }

    fn from_env(&self) -> Option<PathBuf> {
        self.env
            .var(&self.var_name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn from_helper(&self) -> Option<PathBuf> {
        let stdout = self
            .env
            .helper_output(&self.helper_program, &self.helper_args)?;
        let text = String::from_utf8_lossy(&stdout);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    }
}

/// Resolve the socket path with the default locator.
pub fn socket_path() -> Result<PathBuf> {
    SocketLocator::new().resolve()
}
