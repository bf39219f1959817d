//! Build walker: compiles input trees into an output directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::context::CompileContext;
use crate::error::{CompileError, Result};
use crate::{can_compile, new_compiler};

/// Build settings.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output: PathBuf,
    /// Copy resources no compiler handles.
    pub copy_unmanaged: bool,
    pub verbose: bool,
}

impl BuildOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into(), copy_unmanaged: false, verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_copy_unmanaged(mut self, copy: bool) -> Self {
        self.copy_unmanaged = copy;
        self
    }
}

/// What a build did with each resource, by input path.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub compiled: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.compiled.len() + self.copied.len() + self.skipped.len()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s != "." && s.starts_with('.'))
        .unwrap_or(false)
}

/// Map `path` from under `in_base` to the same place under `out_base`.
pub fn relocate(in_base: &Path, out_base: &Path, path: &Path) -> Result<PathBuf> {
    match path.strip_prefix(in_base) {
        Ok(rel) if !rel.as_os_str().is_empty() => Ok(out_base.join(rel)),
        _ => Err(CompileError::NotUnderBase(path.display().to_string())),
    }
}

/// Compile every input (file or directory) into `options.output`.
///
/// Directory structure is mirrored. Hidden files and directories are skipped,
/// as is anything already under the output directory.
pub fn build<P: AsRef<Path>>(inputs: &[P], options: &BuildOptions) -> Result<BuildReport> {
    fs::create_dir_all(&options.output)?;
    let out_base = fs::canonicalize(&options.output)?;
    let mut report = BuildReport::default();

    for input in inputs {
        let input = input.as_ref();
        let base = if input.is_dir() {
            input.to_path_buf()
        } else {
            match input.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };
        let in_base = fs::canonicalize(&base)?;
        tracing::debug!(input = %input.display(), base = %in_base.display(), "walking");

        let mut walker = WalkDir::new(input).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            let is_dir = entry.file_type().is_dir();

            if entry.depth() > 0 && is_hidden(&entry) {
                if is_dir {
                    walker.skip_current_dir();
                } else {
                    report.skipped.push(entry.path().to_path_buf());
                }
                continue;
            }

            let abs = fs::canonicalize(entry.path())?;
            if is_dir {
                if abs.starts_with(&out_base) {
                    walker.skip_current_dir();
                } else if abs != in_base {
                    fs::create_dir_all(relocate(&in_base, &out_base, &abs)?)?;
                }
                continue;
            }

            let out_path = relocate(&in_base, &out_base, &abs)?;
            process_resource(entry.path(), &out_path, options, &mut report)?;
        }
    }

    tracing::info!(
        total = report.total(),
        compiled = report.compiled.len(),
        copied = report.copied.len(),
        skipped = report.skipped.len(),
        "build finished"
    );
    Ok(report)
}

fn process_resource(
    input: &Path,
    out_path: &Path,
    options: &BuildOptions,
    report: &mut BuildReport,
) -> Result<()> {
    if can_compile(input) {
        let mut ctx = CompileContext::new().with_verbose(options.verbose);
        let compiler = new_compiler(input);
        let out_path = compiler.output_path(&ctx, out_path)?;
        let mut reader = File::open(input)?;
        let mut writer = File::create(&out_path)?;
        compiler.compile(&mut ctx, input, &mut reader, &mut writer)?;
        tracing::info!(compiler = compiler.name(), "[+] {}", input.display());
        report.compiled.push(input.to_path_buf());
    } else if options.copy_unmanaged {
        fs::copy(input, out_path)?;
        tracing::info!("[~] {}", input.display());
        report.copied.push(input.to_path_buf());
    } else {
        tracing::debug!("[ ] {}", input.display());
        report.skipped.push(input.to_path_buf());
    }
    Ok(())
}
