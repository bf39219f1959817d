//! Resource compilers for jsmin.
//!
//! A [`Compiler`] maps an input path to an output path and turns input bytes
//! into output bytes. `.min.js` resources are minified; everything else is
//! passed through. The [`build`] walker applies them to whole directory trees.

pub mod build;
pub mod chain;
pub mod context;
pub mod error;
pub mod literal;
pub mod minify;
pub mod traits;

pub use build::{build, BuildOptions, BuildReport};
pub use chain::CompilerChain;
pub use context::CompileContext;
pub use error::{CompileError, Result};
pub use literal::LiteralCompiler;
pub use minify::JsMinCompiler;
pub use traits::Compiler;

use std::path::Path;

/// Every extension of a path's file name: `app.min.js` → `.min.js`.
/// Names starting with a dot have no extension.
pub fn full_extension(path: &Path) -> String {
    let base = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match base.find('.') {
        Some(i) if i > 0 => base[i..].to_string(),
        _ => String::new(),
    }
}

/// Whether a resource has a compiler other than the literal one.
pub fn can_compile(path: &Path) -> bool {
    full_extension(path) == minify::MINIFIED_JS_EXTENSION
}

/// The default compiler for a resource.
pub fn new_compiler(path: &Path) -> Box<dyn Compiler> {
    if can_compile(path) {
        Box::new(JsMinCompiler)
    } else {
        Box::new(LiteralCompiler)
    }
}
