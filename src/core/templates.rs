//! Fixed content written into freshly initialized repositories.
//!
//! Repository init writes one ignore file and registers a default set of
//! binary asset patterns with LFS. Both content sets live here so the init
//! flow stays readable and tests can assert against the exact bytes.
//!
//! # Public API
//! - [`DEFAULT_IGNORE_PATTERNS`] / [`render_ignore_file`]
//! - [`DEFAULT_LFS_PATTERNS`]
//! - [`lfs_initialized`]

use std::fs;
use std::io::Read;
use std::path::Path;

/// Ignore-file defaults for content-creation projects: keep the document
/// itself, drop backup files and heavyweight export formats.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 5] = [
    "*.blend*",
    "!*.blend",
    "*.fbx",
    "*.glb",
    "*.gltf",
];

/// Binary asset extensions tracked through LFS on repository init.
pub const DEFAULT_LFS_PATTERNS: [&str; 71] = [
    // Models
    "*.fbx", "*.obj", "*.max", "*.blend", "*.blender", "*.dae", "*.mb",
    "*.ma", "*.3ds", "*.dfx", "*.c4d", "*.lwo", "*.lwo2", "*.abc",
    "*.3dm", "*.bin", "*.glb",
    // Images
    "*.jpg", "*.jpeg", "*.png", "*.apng", "*.atsc", "*.gif", "*.bmp",
    "*.exr", "*.tga", "*.tiff", "*.tif", "*.iff", "*.pict", "*.dds",
    "*.xcf", "*.leo", "*.kra", "*.kpp", "*.clip", "*.webm", "*.webp",
    "*.svg", "*.svgz", "*.psd",
    // Archives
    "*.zip", "*.7z", "*.gz", "*.rar", "*.tar",
    // Engine assets
    "*.meta", "*.unity", "*.unitypackage", "*.asset", "*.prefab",
    "*.mat", "*.anim", "*.controller", "*.overrideController",
    "*.physicMaterial", "*.physicsMaterial2D", "*.playable",
    "*.mask", "*.brush", "*.flare", "*.fontsettings", "*.guiskin",
    "*.giparams", "*.renderTexture", "*.spriteatlas", "*.terrainlayer",
    "*.mixer", "*.shadervariants", "*.preset", "*.asmdef",
];

/// The ignore file content with normalized line endings.
pub fn render_ignore_file() -> String {
    let mut content = DEFAULT_IGNORE_PATTERNS.join("\n");
    content.push('\n');
    content
}

/// Whether LFS tracking was already set up: any `lfs` mention in the
/// repository's `.gitattributes` counts.
pub fn lfs_initialized(root: &Path) -> bool {
    let attributes = root.join(".gitattributes");
    let mut content = String::new();
    match fs::File::open(attributes) {
        Ok(mut file) => {
            if file.read_to_string(&mut content).is_err() {
                return false;
            }
            content.lines().any(|line| line.contains("lfs"))
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ignore_file_keeps_documents_but_drops_backups() {
        let rendered = render_ignore_file();
        assert!(rendered.contains("*.blend*\n"));
        assert!(rendered.contains("!*.blend\n"));
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.contains('\r'));
    }

    #[test]
    fn test_lfs_not_initialized_without_attributes_file() {
        let tmp = TempDir::new().unwrap();
        assert!(!lfs_initialized(tmp.path()));
    }

    #[test]
    fn test_lfs_initialized_detects_filter_line() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".gitattributes"),
            "*.png filter=lfs diff=lfs merge=lfs -text\n",
        )
        .unwrap();
        assert!(lfs_initialized(tmp.path()));
    }

    #[test]
    fn test_unrelated_attributes_do_not_count() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".gitattributes"), "*.txt text=auto\n").unwrap();
        assert!(!lfs_initialized(tmp.path()));
    }
}
