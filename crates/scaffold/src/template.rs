//! Locating the project template

use pwa_core::probe::ProbeList;
use std::path::{Path, PathBuf};

/// Directory name of the template next to the installed binaries
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Where to look for the template when none is given explicitly:
/// beside the executable, in the install prefix's share directory, then
/// the working directory.
pub fn template_probes(exe_dir: Option<&Path>, cwd: &Path) -> ProbeList {
    let mut probes = ProbeList::new("template");
    if let Some(exe_dir) = exe_dir {
        probes = probes.with_candidates([
            exe_dir.join(TEMPLATE_DIR_NAME),
            exe_dir.join("../share/pwa-builder").join(TEMPLATE_DIR_NAME),
        ]);
    }
    probes.with_candidates([cwd.join(TEMPLATE_DIR_NAME)])
}

/// Explicit template directory if given, else the first probe that is a
/// directory, else `<cwd>/template` (which the creator reports as missing)
pub fn locate_template(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    template_probes(exe_dir.as_deref(), cwd)
        .resolve_with(Path::is_dir)
        .unwrap_or_else(|| cwd.join(TEMPLATE_DIR_NAME))
}
