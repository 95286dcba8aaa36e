//! Module runtime expected by the scripts output.
//!
//! The scripts aggregate only contains `require.register(...)` declarations;
//! this runtime defines `require` so the declarations can be evaluated and
//! loaded in a browser. It is shipped verbatim in front of the scripts output
//! by the CLI.

/// Source of the `require` runtime with `register`, relative resolution and
/// `index.js` lookup.
pub const REQUIRE_RUNTIME: &str = r#"function require(path, parent, orig) {
  var resolved = require.resolve(path);
  if (null == resolved) {
    orig = orig || path;
    parent = parent || 'root';
    var err = new Error('Failed to require "' + orig + '" from "' + parent + '"');
    err.path = orig;
    err.parent = parent;
    err.require = true;
    throw err;
  }
  var module = require.modules[resolved];
  if (!module._resolving && !module.exports) {
    var mod = {};
    mod.exports = {};
    mod.client = mod.component = true;
    module._resolving = true;
    module.call(this, mod.exports, require.relative(resolved), mod);
    delete module._resolving;
    module.exports = mod.exports;
  }
  return module.exports;
}

require.modules = {};

require.resolve = function(path) {
  if (path.charAt(0) === '/') path = path.slice(1);
  var paths = [path, path + '.js', path + '.json', path + '/index.js', path + '/index.json'];
  for (var i = 0; i < paths.length; i++) {
    if (require.modules.hasOwnProperty(paths[i])) return paths[i];
  }
  return null;
};

require.normalize = function(curr, path) {
  var segs = [];
  if ('.' != path.charAt(0)) return path;
  curr = curr.split('/');
  path = path.split('/');
  for (var i = 0; i < path.length; ++i) {
    if ('..' == path[i]) {
      curr.pop();
    } else if ('.' != path[i] && '' != path[i]) {
      segs.push(path[i]);
    }
  }
  return curr.concat(segs).join('/');
};

require.register = function(path, definition) {
  require.modules[path] = definition;
};

require.relative = function(parent) {
  var dir = parent.split('/').slice(0, -1).join('/');
  function localRequire(path) {
    return require(require.normalize(dir, path), parent, path);
  }
  localRequire.resolve = function(path) {
    return require.resolve(require.normalize(dir, path));
  };
  localRequire.exists = function(path) {
    return require.modules.hasOwnProperty(localRequire.resolve(path));
  };
  return localRequire;
};
"#;
