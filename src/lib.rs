use anyhow::{Result, ensure};
use log::debug;
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

mod command;
pub use command::invocation_line;

mod package_root;
pub use package_root::{package_root, package_root_from_exe};

mod status;
pub use status::exit_code;

/// Variable through which the install script learns where the package lives
pub const PACKAGE_ROOT_VAR: &str = "PACKAGE_ROOT";

/// Companion script, relative to the package root
pub const INSTALL_SCRIPT: &str = "install.sh";

pub const INTERPRETER: &str = "bash";

pub const SHELL: &str = "sh";

/// Exit code used when the install script produced no usable status
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Runs the install script with `args` and returns the code to exit with.
pub fn run<I, S>(args: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match launcher().args(args).build() {
        Ok(launcher) => launcher.run(),
        Err(error) => {
            debug!("failed to prepare launcher: {error:?}");
            FALLBACK_EXIT_CODE
        }
    }
}

#[must_use]
pub fn launcher() -> Builder {
    Builder {
        package_root: None,
        script: PathBuf::from(INSTALL_SCRIPT),
        args: Vec::new(),
    }
}

pub struct Builder {
    package_root: Option<PathBuf>,
    script: PathBuf,
    args: Vec<OsString>,
}

impl Builder {
    /// Use `path` instead of the directory above the current executable's
    #[must_use]
    pub fn package_root<P>(mut self, path: P) -> Builder
    where
        P: Into<PathBuf>,
    {
        self.package_root = Some(path.into());
        self
    }

    /// Run `name`, relative to the package root, instead of [`INSTALL_SCRIPT`]
    #[must_use]
    pub fn script<P>(mut self, name: P) -> Builder
    where
        P: Into<PathBuf>,
    {
        self.script = name.into();
        self
    }

    /// Pass `arg` to the install script
    #[must_use]
    pub fn arg<S>(mut self, arg: S) -> Builder
    where
        S: AsRef<OsStr>,
    {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Pass `args` to the install script
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Builder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    pub fn build(self) -> Result<Launcher> {
        let package_root = match self.package_root {
            Some(package_root) => package_root,
            None => package_root()?,
        };
        debug!("package root: {}", package_root.display());
        let script = package_root.join(self.script);
        Ok(Launcher {
            package_root,
            script,
            args: self.args,
        })
    }
}

pub struct Launcher {
    package_root: PathBuf,
    script: PathBuf,
    args: Vec<OsString>,
}

impl Launcher {
    #[must_use]
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }

    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The command that runs the install script, ready to spawn
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(SHELL);
        command.arg("-c");
        command.arg(invocation_line(
            OsStr::new(INTERPRETER),
            &self.script,
            &self.args,
        ));
        command.env(PACKAGE_ROOT_VAR, &self.package_root);
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());
        command
    }

    /// Runs the install script to completion. The script's existence is checked first so that a
    /// missing script is reported as a launch failure rather than as the interpreter's status.
    pub fn status(&self) -> Result<ExitStatus> {
        ensure!(
            self.script.is_file(),
            "install script not found: `{}`",
            self.script.display()
        );
        let mut command = self.command();
        debug!("spawning: {command:?}");
        let status = command.status()?;
        debug!("{status}");
        Ok(status)
    }

    #[must_use]
    pub fn run(self) -> i32 {
        match self.status() {
            Ok(status) => exit_code(status),
            Err(error) => {
                debug!("failed to run install script: {error:?}");
                FALLBACK_EXIT_CODE
            }
        }
    }
}
