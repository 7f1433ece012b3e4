//! Compute-once storage for decoded outlines.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use raw::types::GlyphId;

use super::DrawError;

type Slot<V> = Arc<OnceLock<Arc<V>>>;

/// Thread safe cache of decoded outlines, keyed by glyph identifier.
///
/// Each glyph is decoded at most once, even when requested from several
/// threads at the same time: concurrent callers for the same glyph wait for
/// the first decode to finish and share its result. Different glyphs decode
/// in parallel.
///
/// A decode that fails is logged and replaced by `V::default()`, typically
/// an empty path, so that one broken glyph does not prevent drawing the
/// rest of a run of text.
pub struct OutlineCache<V> {
    slots: Mutex<HashMap<GlyphId, Slot<V>>>,
}

impl<V> OutlineCache<V>
where
    V: Default,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the outline for `glyph_id`, calling `decode` to produce it
    /// if this is the first request.
    pub fn get_or_decode(
        &self,
        glyph_id: GlyphId,
        decode: impl FnOnce() -> Result<V, DrawError>,
    ) -> Arc<V> {
        // The map lock is only held to find the slot so that decoding does
        // not block requests for other glyphs.
        let slot = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(glyph_id)
            .or_default()
            .clone();
        slot.get_or_init(|| match decode() {
            Ok(outline) => Arc::new(outline),
            Err(e) => {
                log::warn!("failed to decode outline for {glyph_id}, using an empty outline: {e}");
                Arc::new(V::default())
            }
        })
        .clone()
    }

    /// Returns the outline for `glyph_id` if it has already been decoded.
    pub fn get(&self, glyph_id: GlyphId) -> Option<Arc<V>> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&glyph_id)
            .and_then(|slot| slot.get().cloned())
    }

    /// Number of glyphs that have been requested.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached outlines.
    ///
    /// Outlines already handed out remain valid.
    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<V: Default> Default for OutlineCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> core::fmt::Debug for OutlineCache<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let len = self
            .slots
            .lock()
            .map(|slots| slots.len())
            .unwrap_or_default();
        f.debug_struct("OutlineCache").field("len", &len).finish()
    }
}
