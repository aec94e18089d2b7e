use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::proto::PhotoSize;

/// This object represents a sticker.
/// https://core.telegram.org/bots/api#sticker
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Sticker {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub width: i32,
    pub height: i32,
    pub is_animated: bool,
    pub thumb: Option<PhotoSize>,
    pub emoji: Option<CompactString>,
    pub set_name: Option<CompactString>,
    pub mask_position: Option<MaskPosition>,
    pub file_size: Option<i64>,
}

/// This object represents a sticker set.
/// https://core.telegram.org/bots/api#stickerset
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct StickerSet {
    pub name: CompactString,
    pub title: CompactString,
    pub is_animated: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    pub thumb: Option<PhotoSize>,
}

/// This object describes the position on faces where a mask should be placed by default.
/// https://core.telegram.org/bots/api#maskposition
#[derive(Debug, Deserialize, Serialize)]
pub struct MaskPosition {
    pub point: CompactString,
    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}
