use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::context::CompileContext;
use crate::error::Result;

/// A resource compiler.
pub trait Compiler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Map an input path to the path the compiled resource is written to.
    fn output_path(&self, ctx: &CompileContext, input: &Path) -> Result<PathBuf>;

    /// Compile `input` into `output`. `input_path` identifies the resource
    /// in errors and in the context.
    fn compile(
        &self,
        ctx: &mut CompileContext,
        input_path: &Path,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<()>;
}
