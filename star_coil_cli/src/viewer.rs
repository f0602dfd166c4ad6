//! Opens generated images with the host's default image viewer.
use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

const NO_ARGS: &[&str] = &[];
// empty title argument so a quoted path is not taken as the window title
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];

/// Program and leading arguments that open a file with the default application for its type.
fn default_viewer() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

fn viewer_command(program: &str, args: &[&str], path: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).arg(path);
    cmd
}

fn open(program: &str, args: &[&str], path: &Path) -> io::Result<ExitStatus> {
    viewer_command(program, args, path).status()
}

/// Open every file in `files`. Failures are logged and skipped.
pub fn open_all(files: &[PathBuf]) {
    let (program, args) = default_viewer();
    open_all_with(program, args, files);
}

/// Open every file with `program`, returning how many could not be opened.
fn open_all_with(program: &str, args: &[&str], files: &[PathBuf]) -> usize {
    log::info!("Opening {} generated image(s)...", files.len());
    let mut failed = 0;
    for file in files {
        match open(program, args, file) {
            Ok(status) if status.success() => continue,
            Ok(status) => log::warn!("viewer exited with {status} for {}", file.display()),
            Err(e) => log::warn!("failed to launch viewer for {}: {e}", file.display()),
        }
        failed += 1;
    }

    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_targets_the_file() {
        let (program, args) = default_viewer();
        let cmd = viewer_command(program, args, Path::new("P010-S003-T010-I003.jpg"));
        let last = cmd.get_args().last().unwrap();
        assert_eq!(last, "P010-S003-T010-I003.jpg");
        assert_eq!(cmd.get_args().count(), args.len() + 1);
    }

    #[test]
    fn missing_viewer_is_skipped() {
        let files = vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")];
        let failed = open_all_with("starcoil-test-no-such-viewer", &[], &files);
        assert_eq!(failed, 2);
    }

    #[cfg(unix)]
    #[test]
    fn viewer_exit_status_is_checked() {
        let files = vec![PathBuf::from("a.jpg")];
        assert_eq!(open_all_with("true", &[], &files), 0);
        assert_eq!(open_all_with("false", &[], &files), 1);
    }
}
