//! Font size calculation
//!
//! Two independent rules: a width-banded size for card text, and a
//! card-height driven size for the definition labels that shrinks as the
//! label gets longer.

/// Smallest label size that stays legible on a phone
pub const MIN_LABEL_FONT_PX: f32 = 12.0;

/// Label size never exceeds this share of the card height
pub const LABEL_HEIGHT_RATIO: f32 = 0.4;

/// Labels up to this many characters render at the full base size
pub const LABEL_SOFT_LENGTH: usize = 4;

/// Card text size by viewport width; non-decreasing in width
pub fn font_size_by_width(width: u32) -> f32 {
    match width {
        0..=479 => 14.0,
        480..=767 => 16.0,
        768..=1023 => 18.0,
        1024..=1439 => 20.0,
        _ => 24.0,
    }
}

/// Label font size for a card of `card_height` showing `text_length` characters.
///
/// Beyond the soft length the size scales by `LABEL_SOFT_LENGTH / text_length`
/// so the rendered label keeps roughly the same width. The result is clamped
/// to `[MIN_LABEL_FONT_PX, card_height * LABEL_HEIGHT_RATIO]`; the floor wins
/// when the card is too short for both.
pub fn label_font_size(card_height: f32, text_length: usize) -> f32 {
    let card_height = if card_height.is_finite() { card_height.max(0.0) } else { 0.0 };
    let ceiling = card_height * LABEL_HEIGHT_RATIO;

    let mut size = ceiling;
    if text_length > LABEL_SOFT_LENGTH {
        size *= LABEL_SOFT_LENGTH as f32 / text_length as f32;
    }

    size.min(ceiling).max(MIN_LABEL_FONT_PX)
}

/// Label length in characters; CJK ideographs count as one each
pub fn text_length(text: &str) -> usize {
    text.trim().chars().count()
}
