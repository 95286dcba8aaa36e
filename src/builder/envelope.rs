//! Module envelope encoding for the scripts output.
//!
//! A script is wrapped in a self-registering declaration understood by the
//! bundled module runtime:
//!
//! ```text
//! require.register("components/x/x.js", function(exports, require, module){
//! <file content>
//! });
//! ```
//!
//! Declarations are concatenated as-is. A module name registered twice yields
//! two declarations; which one wins is up to the runtime.

use serde_json::Value;
use std::path::Path;

use crate::utils::{relative_path, to_forward_slashes};

/// Wraps `content` in a module registration named `module_name`.
#[must_use]
pub fn wrap(module_name: &str, content: &str) -> String {
    format!(
        "require.register({}, function(exports, require, module){{\n{}\n}});",
        quote(module_name),
        content
    )
}

/// Turns text (an HTML template, for instance) into a module exporting it as a string.
#[must_use]
pub fn string_module(content: &str) -> String {
    format!("module.exports = {};", quote(content))
}

/// Module name of `file`: its path relative to the build root, `/`-separated.
#[must_use]
pub fn module_name(root_path: &Path, file: &Path) -> String {
    to_forward_slashes(&relative_path(root_path, file))
}

fn quote(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_envelope_format() {
        assert_eq!(
            wrap("components/x/x.js", "module.exports = 1;"),
            "require.register(\"components/x/x.js\", function(exports, require, module){\nmodule.exports = 1;\n});"
        );
    }

    #[test]
    fn test_wrap_keeps_content_verbatim() {
        let content = "var s = \"quoted\";\n// trailing comment";
        assert!(wrap("a.js", content).contains(content));
    }

    #[test]
    fn test_wrap_escapes_module_name() {
        assert!(wrap("odd\"name.js", "").starts_with("require.register(\"odd\\\"name.js\""));
    }

    #[test]
    fn test_string_module_escapes_content() {
        assert_eq!(string_module("<p class=\"a\">\n</p>"), "module.exports = \"<p class=\\\"a\\\">\\n</p>\";");
    }

    #[test]
    fn test_module_name_is_relative_to_root() {
        assert_eq!(
            module_name(Path::new("/app"), Path::new("/app/components/x/x.js")),
            "components/x/x.js"
        );
        assert_eq!(module_name(Path::new("/app/main"), Path::new("/app/lib/y.js")), "../lib/y.js");
    }
}
