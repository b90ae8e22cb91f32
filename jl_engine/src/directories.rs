//! Engine and application directory layout, and the shader cache scan.
//!
//! Setting the engine directory derives the tools and shaders folders;
//! setting the application directory resets the compiled shader cache
//! location, which is always relative to the app (`csh/`).
//!
//! Directory paths keep a trailing separator (`/opt/jle/tools/`) so their
//! string form matches what shader tooling expects when names are appended.

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::engine_bail;

/// Relative folder holding compiled shaders
pub const COMPILED_SHADERS_DIR: &str = "csh/";

/// Extension appended to a shader file name for its compiled SPIR-V
pub const COMPILED_SHADER_EXTENSION: &str = "spv";

/// Result of comparing shader sources against the compiled cache.
///
/// Both lists hold source paths (inside `shaders_dir`), sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderScan {
    /// Sources with an existing `<app>/csh/<name>.spv`
    pub compiled: Vec<PathBuf>,
    /// Sources with no compiled output yet
    pub pending: Vec<PathBuf>,
}

impl ShaderScan {
    /// Every source, compiled or not (the set that needs validation).
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.compiled.iter().chain(self.pending.iter())
    }
}

/// Directory layout used to locate engine tools, shaders and app data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineDirectories {
    engine_dir: PathBuf,
    app_dir: PathBuf,
    tools_dir: PathBuf,
    shaders_dir: PathBuf,
    compiled_shaders_dir: PathBuf,
}

impl EngineDirectories {
    /// Empty layout (all paths empty)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine root; `tools/` and `shaders/` live under it.
    pub fn set_engine_directory(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.engine_dir = path.to_path_buf();
        self.tools_dir = path.join("tools/");
        self.shaders_dir = path.join("shaders/");
    }

    /// Set the application root; compiled shaders go to `csh/`.
    pub fn set_app_directory(&mut self, path: impl AsRef<Path>) {
        // Joining "" appends the trailing separator
        self.app_dir = path.as_ref().join("");
        self.compiled_shaders_dir = PathBuf::from(COMPILED_SHADERS_DIR);
    }

    pub fn engine_dir(&self) -> &Path {
        &self.engine_dir
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn tools_dir(&self) -> &Path {
        &self.tools_dir
    }

    pub fn shaders_dir(&self) -> &Path {
        &self.shaders_dir
    }

    pub fn compiled_shaders_dir(&self) -> &Path {
        &self.compiled_shaders_dir
    }

    /// Absolute location of the compiled shader cache (`<app>/csh/`).
    pub fn compiled_shaders_path(&self) -> PathBuf {
        self.app_dir.join(&self.compiled_shaders_dir)
    }

    /// Compiled output path for a shader source file name.
    pub fn compiled_shader_path(&self, shader_name: &str) -> PathBuf {
        self.compiled_shaders_path()
            .join(format!("{}.{}", shader_name, COMPILED_SHADER_EXTENSION))
    }

    /// Sort the shader sources into already compiled and pending.
    ///
    /// Creates the compiled shader cache folder when it does not exist.
    /// Only regular files directly inside `shaders_dir` are considered.
    ///
    /// # Errors
    ///
    /// - `InitializationFailed` if the engine, tools or shaders folder is missing
    /// - `BackendError` if the cache folder cannot be created or a folder cannot be read
    pub fn scan_shaders(&self) -> Result<ShaderScan> {
        if !self.engine_dir.is_dir() {
            engine_bail!("jlengine::Shaders", InitializationFailed,
                "Shaders can't compile, engine folder '{}' doesn't exist", self.engine_dir.display());
        }
        if !self.tools_dir.is_dir() {
            engine_bail!("jlengine::Shaders", InitializationFailed,
                "Shaders can't compile, tools folder '{}' doesn't exist", self.tools_dir.display());
        }
        if !self.shaders_dir.is_dir() {
            engine_bail!("jlengine::Shaders", InitializationFailed,
                "Shaders folder '{}' doesn't exist", self.shaders_dir.display());
        }

        let cache = self.compiled_shaders_path();
        if !cache.is_dir() {
            crate::engine_warn!("jlengine::Shaders",
                "Compiled shader folder '{}' doesn't exist, creating it", cache.display());
            if let Err(e) = fs::create_dir_all(&cache) {
                engine_bail!("jlengine::Shaders", BackendError,
                    "Failed to create '{}': {}", cache.display(), e);
            }
        }

        let entries = match fs::read_dir(&self.shaders_dir) {
            Ok(entries) => entries,
            Err(e) => engine_bail!("jlengine::Shaders", BackendError,
                "Failed to read '{}': {}", self.shaders_dir.display(), e),
        };

        let mut scan = ShaderScan::default();
        for entry in entries.flatten() {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.compiled_shader_path(&name).exists() {
                crate::engine_trace!("jlengine::Shaders", " C > {}", name);
                scan.compiled.push(entry.path());
            } else {
                crate::engine_trace!("jlengine::Shaders", " X > {}", name);
                scan.pending.push(entry.path());
            }
        }
        scan.compiled.sort();
        scan.pending.sort();

        crate::engine_info!("jlengine::Shaders",
            "{} shaders not compiled / {} shaders already compiled",
            scan.pending.len(), scan.compiled.len());

        Ok(scan)
    }
}

#[cfg(test)]
#[path = "directories_tests.rs"]
mod tests;
