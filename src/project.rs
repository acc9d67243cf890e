//! Project materialization: validate the request, create the directory
//! tree, write the rendered templates, and mark the scripts executable.

use crate::error::{MkcppError, Result};
use crate::fs;
use crate::templates;
use std::path::PathBuf;

/// A single scaffolding request, built once from CLI input and consumed by
/// [`create_project`].
#[derive(Debug)]
pub struct ProjectRequest {
    /// Project name. Validated here rather than in the argument parser.
    pub name: Option<String>,
    /// Directory the project is created under.
    pub path: PathBuf,
}

/// Create and populate a new project directory under `request.path`.
///
/// The name and existence checks run before any filesystem mutation. The
/// steps after that are not transactional: a failure part way through
/// leaves the partially created tree in place. The existence check also
/// races with concurrent invocations targeting the same path; the loser
/// fails on directory creation with a less specific message.
pub fn create_project(request: &ProjectRequest) -> Result<()> {
    let name = match request.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(MkcppError::MissingName),
    };

    let target = request.path.join(name);
    if target.exists() {
        return Err(MkcppError::AlreadyExists(target));
    }

    fs::create_dir(&target)?;
    fs::write_file(&target.join("CMakeLists.txt"), &templates::cmake_lists_txt(name))?;

    let build_sh = target.join("build.sh");
    fs::write_file(&build_sh, templates::build_sh())?;
    fs::make_executable(&build_sh)?;

    let run_sh = target.join("run.sh");
    fs::write_file(&run_sh, &templates::run_sh(name))?;
    fs::make_executable(&run_sh)?;

    let src_dir = target.join("src");
    fs::create_dir(&src_dir)?;
    fs::write_file(&src_dir.join("main.cc"), templates::main_cc())?;

    fs::create_dir(&target.join("include"))?;

    fs::write_file(&target.join(".gitignore"), templates::gitignore())?;

    Ok(())
}
