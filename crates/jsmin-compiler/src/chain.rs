//! Compiler chains: several compilers applied in sequence.

use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use crate::context::CompileContext;
use crate::error::Result;
use crate::traits::Compiler;

/// Runs each compiler on the previous one's output. A chain is itself a
/// compiler, so chains nest.
#[derive(Default)]
pub struct CompilerChain {
    stages: Vec<Box<dyn Compiler>>,
}

impl CompilerChain {
    pub fn new(stages: Vec<Box<dyn Compiler>>) -> Self {
        Self { stages }
    }

    pub fn then(mut self, stage: impl Compiler + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Compiler for CompilerChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn output_path(&self, ctx: &CompileContext, input: &Path) -> Result<PathBuf> {
        let mut path = input.to_path_buf();
        for stage in &self.stages {
            path = stage.output_path(ctx, &path)?;
        }
        Ok(path)
    }

    fn compile(
        &self,
        ctx: &mut CompileContext,
        input_path: &Path,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<()> {
        let Some((first, rest)) = self.stages.split_first() else {
            io::copy(input, output)?;
            return Ok(());
        };

        let mut buffer = Vec::new();
        first.compile(ctx, input_path, input, &mut buffer)?;
        for stage in rest {
            let mut next = Vec::new();
            stage.compile(ctx, input_path, &mut Cursor::new(buffer), &mut next)?;
            buffer = next;
        }
        output.write_all(&buffer)?;
        Ok(())
    }
}
