//! Mapping request paths to candidate resources on disk.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

/// Percent-decode a request path. `None` if the decoded bytes are not UTF-8.
pub fn decode_path(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Apply the longest route prefix matching `path`, if any.
pub fn apply_routes(routes: &BTreeMap<String, String>, path: &str) -> String {
    let matched = routes
        .iter()
        .filter(|(remote, _)| path.starts_with(remote.as_str()))
        .max_by_key(|(remote, _)| remote.len());
    match matched {
        Some((remote, local)) => {
            let rest = path[remote.len()..].trim_start_matches('/');
            let local = local.trim_end_matches('/');
            if rest.is_empty() {
                format!("/{}", local.trim_start_matches('/'))
            } else {
                format!("/{}/{}", local.trim_start_matches('/'), rest)
            }
        }
        None => path.to_string(),
    }
}

/// Last extension of the final path segment, including the dot.
fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}

/// Relative files to try, in order, for a request path.
pub fn candidates(path: &str) -> Vec<String> {
    let relative = path.trim_start_matches('/');
    let ext = extension(relative);
    match ext {
        ".js" => {
            let base = &relative[..relative.len() - ext.len()];
            vec![format!("{base}.min.js"), relative.to_string()]
        }
        _ => vec![relative.to_string()],
    }
}

/// Content type for a request path.
pub fn mimetype(path: &str) -> &'static str {
    match extension(path) {
        ".js" => "application/javascript",
        ".css" => "text/css",
        ".html" => "text/html",
        _ => "text/plain",
    }
}

/// Rejects paths that climb out of the server root.
pub fn is_safe(path: &str) -> bool {
    !path.split('/').any(|segment| segment == "..")
}
