//! Playable item extraction
//!
//! Bridges loaded lesson content to the playback controller. Only the
//! dialogue and vocabulary tabs carry per-item audio.

use hagwon_core::{LessonContent, SectionKind};
use hagwon_playback::PlayableItem;

/// Ordered playable items for one lesson tab
///
/// Each item's `index` is its position within the tab, so the controller's
/// `active_index` maps straight onto the rendered list. Items with no
/// recording keep an empty `audio_ref`; the controller reports those itself
/// when asked to play them.
pub fn playable_items(content: &LessonContent, kind: SectionKind) -> Vec<PlayableItem> {
    match kind {
        SectionKind::Dialogue => content
            .dialogue
            .sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| PlayableItem::new(index, sentence.audio.clone()))
            .collect(),
        SectionKind::Vocabulary => content
            .vocabulary
            .words
            .iter()
            .enumerate()
            .map(|(index, word)| PlayableItem::new(index, word.audio.clone()))
            .collect(),
        // No per-item audio on these tabs
        SectionKind::Grammar | SectionKind::Listening | SectionKind::Reading => Vec::new(),
    }
}
