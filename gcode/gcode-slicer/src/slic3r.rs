//! Slic3r-backed mesh conversion.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use gcode_transform::GcodeProgram;
use tracing::{debug, info};

use crate::converter::MeshConverter;
use crate::error::{SlicerError, SlicerResult};

/// Slicer settings that produce a bare single-perimeter path: no solid
/// layers, no infill, no skirt. The result is one thin outline per
/// layer, which keeps downstream sequences short and uniform.
const THIN_PATH_ARGS: [&str; 5] = [
    "--bottom-solid-layers=0",
    "--top-solid-layers=0",
    "--perimeters=1",
    "--fill-density=0",
    "--skirts=0",
];

/// A [`MeshConverter`] that shells out to the `slic3r` binary.
///
/// Conversion runs in a temporary working directory:
///
/// 1. The mesh is staged into the directory as `input.stl` (symlinked
///    where the platform allows, copied otherwise).
/// 2. `slic3r --split` breaks it into one `.stl` per connected piece.
/// 3. Each piece is sliced with thin-path settings and the resulting
///    toolpath file is parsed into a [`GcodeProgram`].
///
/// The directory and everything in it are removed when conversion ends.
///
/// # Example
///
/// ```no_run
/// use gcode_slicer::{MeshConverter, Slic3rConverter};
///
/// let converter = Slic3rConverter::new();
/// let programs = converter.convert("model.stl".as_ref()).unwrap();
/// println!("{} piece(s)", programs.len());
/// ```
#[derive(Debug, Clone)]
pub struct Slic3rConverter {
    binary: PathBuf,
}

impl Slic3rConverter {
    /// Uses the `slic3r` binary from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("slic3r"),
        }
    }

    /// Uses a specific slicer binary.
    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Stage the input mesh into the working directory.
    fn stage_input(mesh_path: &Path, staged: &Path) -> SlicerResult<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(mesh_path, staged)?;
        }
        #[cfg(not(unix))]
        {
            fs::copy(mesh_path, staged)?;
        }
        Ok(())
    }

    /// Run a slicer invocation and map a non-zero exit to
    /// [`SlicerError::ToolFailed`].
    fn run(command: &mut Command) -> SlicerResult<()> {
        let status = command.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(SlicerError::ToolFailed { status })
        }
    }
}

impl Default for Slic3rConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshConverter for Slic3rConverter {
    fn convert(&self, mesh_path: &Path) -> SlicerResult<Vec<GcodeProgram>> {
        let mesh_path = mesh_path.canonicalize()?;
        let workdir = tempfile::tempdir()?;
        let staged = workdir.path().join("input.stl");
        Self::stage_input(&mesh_path, &staged)?;

        info!(mesh = %mesh_path.display(), "Splitting mesh into pieces");
        Self::run(Command::new(&self.binary).arg("--split").arg(&staged))?;

        let mut pieces: Vec<PathBuf> = fs::read_dir(workdir.path())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "stl") && *path != staged
            })
            .collect();
        pieces.sort();
        debug!(count = pieces.len(), "Mesh split complete");

        let mut programs = Vec::with_capacity(pieces.len());
        for (index, piece) in pieces.iter().enumerate() {
            // One output path per piece, so a tool that exits 0 without
            // writing anything cannot alias an earlier piece's file.
            let toolpath = workdir.path().join(format!("piece_{index}.gcode"));
            info!(piece = %piece.display(), "Slicing piece");
            Self::run(
                Command::new(&self.binary)
                    .args(THIN_PATH_ARGS)
                    .arg(piece)
                    .arg("-o")
                    .arg(&toolpath),
            )?;
            if !toolpath.exists() {
                return Err(SlicerError::MissingOutput { path: toolpath });
            }
            let text = fs::read_to_string(&toolpath)?;
            let program = GcodeProgram::parse_str(&text)?;
            info!(commands = program.len(), "Parsed piece toolpath");
            programs.push(program);
        }
        Ok(programs)
    }
}
