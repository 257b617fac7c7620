use crate::error::XpdfError;
use crate::exec::resolve::{resolve_binary_path, ResolveOptions};
use crate::tool::ToolName;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, warn};

/// What to do with the child's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Buffer stdout/stderr in memory and decode them at completion.
    #[default]
    Piped,
    /// Pass the parent's own streams through; nothing is captured.
    Inherit,
    /// Discard all output.
    Null,
}

/// Signal delivered to a child that outlives its timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillSignal {
    Term,
    Int,
    Kill,
    Other(i32),
}

impl Default for KillSignal {
    fn default() -> Self {
        KillSignal::Term
    }
}

#[cfg(unix)]
impl KillSignal {
    fn as_raw(self) -> libc::c_int {
        match self {
            KillSignal::Term => libc::SIGTERM,
            KillSignal::Int => libc::SIGINT,
            KillSignal::Kill => libc::SIGKILL,
            KillSignal::Other(n) => n,
        }
    }
}

/// How captured output bytes become text. The Xpdf tools emit UTF-8 by
/// default and Latin-1 when asked to via `-enc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// Lossy UTF-8; invalid sequences become replacement characters.
    #[default]
    Utf8,
    Latin1,
}

impl OutputEncoding {
    fn decode(self, bytes: &[u8]) -> String {
        match self {
            OutputEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            OutputEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Configuration for a single invocation. All fields are optional so a
/// client-level default can merge field-wise with call-level overrides; the
/// runner reads the merged value once and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub cwd: Option<PathBuf>,
    /// When set, replaces the child's environment wholesale; `None` inherits.
    pub env: Option<HashMap<String, String>>,
    /// Payload written to the child's stdin (Piped mode only); the stream is
    /// closed right after so the child sees end-of-input.
    pub stdin: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
    pub kill_signal: Option<KillSignal>,
    pub stdio: Option<StdioMode>,
    pub encoding: Option<OutputEncoding>,
    /// Explicit binary directory; a miss there is a hard failure.
    pub bin_dir: Option<PathBuf>,
    /// Prefer binaries found on the system `PATH` over the bundled set.
    pub use_system: Option<bool>,
    /// Client-configured binary directory (soft tier).
    pub config_bin_dir: Option<PathBuf>,
    /// Override of the bundled binary directory.
    pub bundled_dir: Option<PathBuf>,
}

impl RunOptions {
    /// The binary-location subset of these options, as the resolver sees it.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            bin_dir: self.bin_dir.clone(),
            config_bin_dir: self.config_bin_dir.clone(),
            prefer_system: self.use_system,
            bundled_dir: self.bundled_dir.clone(),
        }
    }
}

/// Outcome of one process execution.
///
/// A nonzero `exit_code` is tool-reported failure, returned as data rather
/// than an error; `-1` means the process was terminated by a signal and no
/// numeric status exists. Some tools report version/help via nonzero exit
/// with useful stdout, so callers should inspect the streams too.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// The resolved executable that was actually spawned.
    pub command: PathBuf,
    pub args: Vec<String>,
    /// Wall clock from spawn request to process exit, present even on
    /// failure or signal termination.
    pub duration: Duration,
}

/// Resolve `tool` and execute it asynchronously.
///
/// The invocation is exactly-once: no retries, and a timeout sends the
/// configured signal a single time without escalation. A child that ignores
/// the signal keeps the call pending.
pub async fn run(
    tool: ToolName,
    args: &[String],
    options: &RunOptions,
) -> Result<RunResult, XpdfError> {
    let command = resolve_binary_path(tool, &options.resolve_options())?;
    let stdio = options.stdio.unwrap_or_default();
    let encoding = options.encoding.unwrap_or_default();
    let start = Instant::now();

    let mut cmd = tokio::process::Command::new(&command);
    cmd.args(args);
    configure(cmd.as_std_mut(), options, stdio);

    debug!(tool = %tool, ?args, "spawning");
    let mut child = cmd
        .spawn()
        .map_err(|source| XpdfError::Launch { tool, source })?;

    let stdin_pipe = child.stdin.take();
    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();

    let write_stdin = async {
        if let (Some(payload), Some(mut pipe)) = (&options.stdin, stdin_pipe) {
            // A write failure just means the child stopped reading early;
            // its exit status tells the real story.
            if let Err(e) = pipe.write_all(payload).await {
                debug!(tool = %tool, error = %e, "stdin write failed");
            }
            // Dropping the handle closes the stream so the child sees EOF.
        }
    };
    let read_stdout = async {
        let mut buf = Vec::new();
        if let Some(pipe) = stdout_pipe.as_mut() {
            let _ = pipe.read_to_end(&mut buf).await;
        }
        buf
    };
    let read_stderr = async {
        let mut buf = Vec::new();
        if let Some(pipe) = stderr_pipe.as_mut() {
            let _ = pipe.read_to_end(&mut buf).await;
        }
        buf
    };
    let wait = async {
        match options.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    let signal = options.kill_signal.unwrap_or_default();
                    warn!(tool = %tool, ?limit, ?signal, "timed out, signaling child");
                    terminate(&mut child, signal);
                    child.wait().await
                }
            },
            None => child.wait().await,
        }
    };

    let (status, _, stdout_bytes, stderr_bytes) =
        tokio::join!(wait, write_stdin, read_stdout, read_stderr);
    let status = status?;

    Ok(RunResult {
        exit_code: status.code().unwrap_or(-1),
        stdout: encoding.decode(&stdout_bytes),
        stderr: encoding.decode(&stderr_bytes),
        command,
        args: args.to_vec(),
        duration: start.elapsed(),
    })
}

/// Blocking variant of [`run`].
///
/// The timeout is enforced by a watchdog thread that signals the child's pid
/// once the deadline passes. Unix only: on other platforms the sync deadline
/// is inert, and [`run`] is the portable choice.
pub fn run_sync(
    tool: ToolName,
    args: &[String],
    options: &RunOptions,
) -> Result<RunResult, XpdfError> {
    use std::io::Write;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let command = resolve_binary_path(tool, &options.resolve_options())?;
    let stdio = options.stdio.unwrap_or_default();
    let encoding = options.encoding.unwrap_or_default();
    let start = Instant::now();

    let mut cmd = std::process::Command::new(&command);
    cmd.args(args);
    configure(&mut cmd, options, stdio);

    debug!(tool = %tool, ?args, "spawning (sync)");
    let mut child = cmd
        .spawn()
        .map_err(|source| XpdfError::Launch { tool, source })?;

    if let Some(payload) = &options.stdin {
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(payload) {
                debug!(tool = %tool, error = %e, "stdin write failed");
            }
        }
    }

    let done = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    let watchdog = options.timeout.map(|limit| {
        let done = Arc::clone(&done);
        let signal = options.kill_signal.unwrap_or_default();
        let pid = child.id();
        std::thread::spawn(move || {
            let deadline = Instant::now() + limit;
            while Instant::now() < deadline {
                if done.load(Ordering::Relaxed) {
                    return;
                }
                std::thread::sleep(Duration::from_millis(20));
            }
            if !done.load(Ordering::Relaxed) {
                warn!(pid, ?signal, "sync timeout, signaling child");
                unsafe {
                    libc::kill(pid as libc::pid_t, signal.as_raw());
                }
            }
        })
    });

    let output = child.wait_with_output();
    done.store(true, Ordering::Relaxed);
    #[cfg(unix)]
    if let Some(handle) = watchdog {
        let _ = handle.join();
    }
    let output = output?;

    Ok(RunResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: encoding.decode(&output.stdout),
        stderr: encoding.decode(&output.stderr),
        command,
        args: args.to_vec(),
        duration: start.elapsed(),
    })
}

fn configure(cmd: &mut std::process::Command, options: &RunOptions, stdio: StdioMode) {
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    if let Some(env) = &options.env {
        cmd.env_clear();
        cmd.envs(env);
    }
    match stdio {
        StdioMode::Piped => {
            cmd.stdin(if options.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        }
        StdioMode::Inherit => {
            cmd.stdin(Stdio::inherit());
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }
        StdioMode::Null => {
            cmd.stdin(Stdio::null());
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }
    }
}

#[cfg(unix)]
fn terminate(child: &mut tokio::process::Child, signal: KillSignal) {
    // id() is None once the child has been reaped; nothing to signal then.
    if let Some(pid) = child.id() {
        unsafe {
            libc::kill(pid as libc::pid_t, signal.as_raw());
        }
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut tokio::process::Child, _signal: KillSignal) {
    let _ = child.start_kill();
}
