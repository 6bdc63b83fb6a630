use std::path::PathBuf;

/// A small webpack stats file for integration tests.
///
/// Importers (module <- importer):
///   lodash     <- button.js (cjs require)
///   button.js  <- app.js, lazy.js
///   lazy.js    <- app.js (dynamic import())
///   app.js     <- index.js
///   index.js   entry, no importer
///
/// Chunks: main.js (index, app, button), 1.lazy.js (lazy), vendors.js (lodash).
pub struct StatsFixture {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

pub const STATS: &str = r#"{
    "version": "5.90.0",
    "hash": "f00ba4",
    "chunks": [
        {
            "id": 0,
            "names": ["main"],
            "files": ["main.js", "main.js.map"],
            "modules": [
                {
                    "name": "./src/index.js",
                    "reasons": [ { "moduleName": null, "type": "entry", "userRequest": "./src/index.js" } ]
                },
                {
                    "name": "./src/app.js",
                    "reasons": [ { "moduleName": "./src/index.js", "type": "harmony side effect evaluation", "userRequest": "./app" } ]
                },
                {
                    "name": "./src/button.js",
                    "reasons": [
                        { "moduleName": "./src/app.js", "type": "harmony import specifier", "userRequest": "./button" },
                        { "moduleName": "./src/lazy.js", "type": "harmony import specifier", "userRequest": "./button" }
                    ]
                }
            ]
        },
        {
            "id": 1,
            "names": [],
            "files": ["1.lazy.js"],
            "modules": [
                {
                    "name": "./src/lazy.js",
                    "reasons": [ { "moduleName": "./src/app.js", "type": "import()", "userRequest": "./lazy" } ]
                }
            ]
        },
        {
            "id": "vendors",
            "names": ["vendors"],
            "files": ["vendors.js"],
            "modules": [
                {
                    "name": "./node_modules/lodash/lodash.js",
                    "reasons": [ { "moduleName": "./src/button.js", "type": "cjs require", "userRequest": "lodash" } ]
                }
            ]
        }
    ]
}"#;

impl StatsFixture {
    /// Write the default stats file. Keep the value alive while the file is used.
    pub fn new() -> Self {
        Self::with_contents(STATS)
    }

    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, contents).unwrap();
        Self { dir, path }
    }
}
