//! Explicit, caller-owned cache for the embedded default fonts.
//!
//! The application's top-level context owns a [`FontCache`] and hands out
//! `Arc<BitmapFont>` clones. Each default font is built on first request and
//! kept for the lifetime of the cache.

use log::debug;
use std::sync::{Arc, OnceLock};

use crate::atlas::TextureRegion;
use crate::error::FontError;
use crate::font::BitmapFont;

const DEFAULT_FNT: &str = include_str!("../resources/default.fnt");
const DEFAULT_SMALL_FNT: &str = include_str!("../resources/default_small.fnt");

/// The embedded default fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultFont {
    /// 16px UI font.
    Regular,
    /// 10px UI font.
    Small,
}

impl DefaultFont {
    pub const ALL: [DefaultFont; 2] = [DefaultFont::Regular, DefaultFont::Small];

    /// The embedded BMFont descriptor text.
    pub fn descriptor(&self) -> &'static str {
        match self {
            DefaultFont::Regular => DEFAULT_FNT,
            DefaultFont::Small => DEFAULT_SMALL_FNT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultFont::Regular => "regular",
            DefaultFont::Small => "small",
        }
    }
}

impl std::fmt::Display for DefaultFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type Slot = OnceLock<Result<Arc<BitmapFont>, FontError>>;

/// Lazily built default fonts, safe to share across threads.
#[derive(Debug)]
pub struct FontCache {
    regular_atlas: TextureRegion,
    small_atlas: TextureRegion,
    regular: Slot,
    small: Slot,
}

impl FontCache {
    /// Creates an empty cache. The atlas regions locate each default font's
    /// glyph sheet inside the caller's loaded UI texture.
    pub fn new(regular_atlas: TextureRegion, small_atlas: TextureRegion) -> Self {
        Self {
            regular_atlas,
            small_atlas,
            regular: OnceLock::new(),
            small: OnceLock::new(),
        }
    }

    /// Returns the default font for `key`, building it on first access.
    ///
    /// Concurrent first calls build at most once; every caller observes the
    /// same instance (or the same error).
    pub fn get_or_build_default(&self, key: DefaultFont) -> Result<Arc<BitmapFont>, FontError> {
        let (slot, atlas) = self.slot(key);
        slot.get_or_init(|| {
            debug!("building default font `{}`", key);
            BitmapFont::from_fnt_str(key.descriptor(), atlas.clone()).map(Arc::new)
        })
        .clone()
    }

    /// Whether `key` has been built (or failed to build) already.
    pub fn is_built(&self, key: DefaultFont) -> bool {
        self.slot(key).0.get().is_some()
    }

    fn slot(&self, key: DefaultFont) -> (&Slot, &TextureRegion) {
        match key {
            DefaultFont::Regular => (&self.regular, &self.regular_atlas),
            DefaultFont::Small => (&self.small, &self.small_atlas),
        }
    }
}
