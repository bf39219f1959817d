//! Pass-through compiler for resources that need no processing.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::context::CompileContext;
use crate::error::Result;
use crate::traits::Compiler;

#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralCompiler;

impl Compiler for LiteralCompiler {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn output_path(&self, _ctx: &CompileContext, input: &Path) -> Result<PathBuf> {
        Ok(input.to_path_buf())
    }

    fn compile(
        &self,
        ctx: &mut CompileContext,
        input_path: &Path,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<()> {
        io::copy(input, output)?;
        ctx.add_visited(input_path);
        Ok(())
    }
}
