//! Font loading from BMFont descriptors or JSON font manifests.
//!
//! A `.fnt` path is parsed directly and its atlas is synthesized from the
//! descriptor's first page and `scaleW`/`scaleH`. A `.json` path is a
//! [`FontManifest`] naming the descriptor and describing the atlas.

use bmfont_core::{
    parse_descriptor, BitmapFont, DescriptorError, FontDescriptor, FontError, Rect, Texture,
    TextureRegion,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Recognized descriptor extensions.
pub const DESCRIPTOR_EXTENSIONS: &[&str] = &["fnt", "txt"];

/// Recognized manifest extensions.
pub const MANIFEST_EXTENSIONS: &[&str] = &["json"];

/// Identifies how a font was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// BMFont text descriptor.
    Descriptor,
    /// JSON manifest pointing at a descriptor.
    Manifest,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Descriptor => "descriptor",
            SourceKind::Manifest => "manifest",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON manifest describing a font and its atlas.
///
/// ```json
/// {
///   "descriptor": "fonts/ui.fnt",
///   "atlas": { "name": "ui.png", "width": 512, "height": 512, "region": [0, 256, 128, 64] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontManifest {
    /// Descriptor path, relative to the manifest's directory.
    pub descriptor: PathBuf,

    /// Atlas texture. Synthesized from the descriptor when omitted.
    #[serde(default)]
    pub atlas: Option<AtlasConfig>,
}

/// Atlas texture description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasConfig {
    /// Image name.
    pub name: String,
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels.
    pub height: i32,
    /// Font area within the image as `[x, y, width, height]`. Whole image when omitted.
    #[serde(default)]
    pub region: Option<[i32; 4]>,
}

impl AtlasConfig {
    /// Synthesizes an atlas covering page 0 as declared by the descriptor.
    pub fn from_descriptor(descriptor: &FontDescriptor) -> Self {
        Self {
            name: descriptor.page_file(0).unwrap_or("page0").to_string(),
            width: descriptor.common.scale_w,
            height: descriptor.common.scale_h,
            region: None,
        }
    }

    /// The configured region of a freshly created texture handle.
    pub fn to_region(&self) -> TextureRegion {
        let texture = Arc::new(Texture::new(self.name.clone(), self.width, self.height));
        match self.region {
            Some([x, y, w, h]) => TextureRegion::new(texture, Rect::new(x, y, w, h)),
            None => TextureRegion::whole(texture),
        }
    }
}

/// A font loaded from disk, with the intermediate records kept for reporting.
#[derive(Debug)]
pub struct LoadedFont {
    pub font: BitmapFont,
    pub descriptor: FontDescriptor,
    pub atlas: AtlasConfig,
    pub source_kind: SourceKind,
    /// Path of the descriptor text actually parsed.
    pub descriptor_path: PathBuf,
    /// BLAKE3 hash of the descriptor text (hex string).
    pub source_hash: String,
}

/// Errors that can occur during font loading.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown file extension.
    #[error("unknown font file extension: {}", .extension.as_deref().unwrap_or("(none)"))]
    UnknownExtension { extension: Option<String> },

    /// Manifest JSON is invalid.
    #[error("invalid font manifest: {message}")]
    Manifest { message: String },

    /// Descriptor text is invalid.
    #[error("{0}")]
    Descriptor(#[from] DescriptorError),

    /// Font could not be built.
    #[error("{0}")]
    Font(#[from] FontError),
}

impl InputError {
    /// Returns a stable error code string for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => "I001",
            InputError::UnknownExtension { .. } => "I002",
            InputError::Manifest { .. } => "I003",
            InputError::Descriptor(e) => FontError::from(e.clone()).code(),
            InputError::Font(e) => e.code(),
        }
    }
}

/// Loads a font from a descriptor or manifest path.
pub fn load_font(path: &Path) -> Result<LoadedFont, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some(ext) if DESCRIPTOR_EXTENSIONS.contains(&ext) => {
            load_descriptor(path, None, SourceKind::Descriptor)
        }
        Some(ext) if MANIFEST_EXTENSIONS.contains(&ext) => {
            let manifest = load_manifest(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            load_descriptor(
                &base.join(&manifest.descriptor),
                manifest.atlas,
                SourceKind::Manifest,
            )
        }
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

/// Reads and parses a font manifest.
pub fn load_manifest(path: &Path) -> Result<FontManifest, InputError> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|e| InputError::Manifest {
        message: e.to_string(),
    })
}

fn load_descriptor(
    path: &Path,
    atlas: Option<AtlasConfig>,
    source_kind: SourceKind,
) -> Result<LoadedFont, InputError> {
    let text = read_file(path)?;
    let source_hash = blake3::hash(text.as_bytes()).to_hex().to_string();

    let descriptor = parse_descriptor(&text)?;
    let atlas = atlas.unwrap_or_else(|| AtlasConfig::from_descriptor(&descriptor));
    let font = BitmapFont::from_descriptor(&descriptor, atlas.to_region())?;

    log::debug!(
        "loaded {} ({} glyphs, atlas `{}`)",
        path.display(),
        font.glyphs().len(),
        atlas.name
    );

    Ok(LoadedFont {
        font,
        descriptor,
        atlas,
        source_kind,
        descriptor_path: path.to_path_buf(),
        source_hash,
    })
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const FNT: &str = "common lineHeight=14 scaleW=64 scaleH=32\n\
        page id=0 file=\"atlas.png\"\n\
        char id=65 x=0 y=0 width=8 height=10 xoffset=0 yoffset=0 xadvance=9\n";

    #[test]
    fn test_load_descriptor_synthesizes_atlas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font.fnt");
        fs::write(&path, FNT).unwrap();

        let loaded = load_font(&path).unwrap();
        assert_eq!(loaded.source_kind, SourceKind::Descriptor);
        assert_eq!(
            loaded.atlas,
            AtlasConfig {
                name: "atlas.png".to_string(),
                width: 64,
                height: 32,
                region: None,
            }
        );
        assert_eq!(loaded.font.line_height(), 14);
        assert_eq!(loaded.source_hash.len(), 64);
    }

    #[test]
    fn test_load_manifest_with_region() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts").join("ui.fnt"), FNT).unwrap();
        let manifest = dir.path().join("ui.json");
        fs::write(
            &manifest,
            r#"{
                "descriptor": "fonts/ui.fnt",
                "atlas": { "name": "sheet.png", "width": 256, "height": 256, "region": [32, 64, 64, 32] }
            }"#,
        )
        .unwrap();

        let loaded = load_font(&manifest).unwrap();
        assert_eq!(loaded.source_kind, SourceKind::Manifest);
        let a = loaded.font.glyphs().get('A').unwrap();
        assert_eq!(a.region().bounds(), Rect::new(32, 64, 8, 10));
        assert_eq!(a.region().texture().name(), "sheet.png");
    }

    #[test]
    fn test_manifest_rejects_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("bad.json");
        fs::write(&manifest, r#"{ "descriptor": "x.fnt", "scale": 2 }"#).unwrap();

        let err = load_font(&manifest).unwrap_err();
        assert!(matches!(err, InputError::Manifest { .. }));
        assert_eq!(err.code(), "I003");
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_font(Path::new("font.bin")).unwrap_err();
        assert!(matches!(err, InputError::UnknownExtension { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_font(Path::new("/nonexistent/dir/font.fnt")).unwrap_err();
        assert_eq!(err.code(), "I001");
    }

    #[test]
    fn test_descriptor_error_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.fnt");
        fs::write(&path, "info face=\"Broken\"\n").unwrap();
        let err = load_font(&path).unwrap_err();
        assert_eq!(err.code(), "F013");
    }
}
