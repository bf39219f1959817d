//! Minifying compiler for `.min.js` resources.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::context::CompileContext;
use crate::error::{CompileError, Result};
use crate::full_extension;
use crate::traits::Compiler;

pub const MINIFIED_JS_EXTENSION: &str = ".min.js";

/// Compiles `name.min.js` into a minified `name.js`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsMinCompiler;

impl Compiler for JsMinCompiler {
    fn name(&self) -> &'static str {
        "jsmin"
    }

    fn output_path(&self, _ctx: &CompileContext, input: &Path) -> Result<PathBuf> {
        let ext = full_extension(input);
        if ext != MINIFIED_JS_EXTENSION {
            return Err(CompileError::InvalidExtension(ext));
        }
        let name = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let stem = &name[..name.len() - ext.len()];
        Ok(input.with_file_name(format!("{stem}.js")))
    }

    fn compile(
        &self,
        ctx: &mut CompileContext,
        input_path: &Path,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<()> {
        let mut source = Vec::new();
        input.read_to_end(&mut source)?;

        let minified = jsmin::minify_bytes(&source).map_err(|e| CompileError::Minify {
            path: input_path.display().to_string(),
            source: e,
        })?;
        output.write_all(&minified)?;

        if ctx.is_verbose() {
            tracing::info!(
                path = %input_path.display(),
                original = source.len(),
                minified = minified.len(),
                "compiled"
            );
        } else {
            tracing::debug!(
                path = %input_path.display(),
                original = source.len(),
                minified = minified.len(),
                "compiled"
            );
        }
        ctx.add_visited(input_path);
        Ok(())
    }
}
