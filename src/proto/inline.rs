use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::proto::{InlineKeyboardMarkup, Location, MessageEntity, ParseMode, User};

/// This object represents an incoming inline query. When the user sends
/// an empty query, your bot could return some default or trending results.
/// https://core.telegram.org/bots/api#inlinequery
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQuery {
    pub id: CompactString,
    pub from: User,
    pub location: Option<Location>,
    pub query: CompactString,
    pub offset: CompactString,
}

/// Represents a result of an inline query that was chosen by the user
/// and sent to their chat partner.
/// https://core.telegram.org/bots/api#choseninlineresult
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ChosenInlineResult {
    pub result_id: CompactString,
    pub from: User,
    pub location: Option<Location>,
    pub inline_message_id: Option<CompactString>,
    pub query: Option<CompactString>,
}

/// One result of an inline query.
/// https://core.telegram.org/bots/api#inlinequeryresult
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InlineQueryResult {
    CachedAudio(InlineQueryResultCachedAudio),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    Article(InlineQueryResultArticle),
    Audio(InlineQueryResultAudio),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    Document(InlineQueryResultDocument),
    Gif(InlineQueryResultGif),
    Location(InlineQueryResultLocation),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Photo(InlineQueryResultPhoto),
    Venue(InlineQueryResultVenue),
    Video(InlineQueryResultVideo),
    Voice(InlineQueryResultVoice),
}

/// Represents a link to an article or web page.
/// https://core.telegram.org/bots/api#inlinequeryresultarticle
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultArticle {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub title: CompactString,
    pub input_message_content: InputMessageContent,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub url: Option<CompactString>,
    pub hide_url: Option<bool>,
    pub description: Option<CompactString>,
    pub thumb_url: Option<CompactString>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

/// Represents a link to a photo. By default, this photo will be sent by the
/// user with optional caption.
/// https://core.telegram.org/bots/api#inlinequeryresultphoto
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultPhoto {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub photo_url: CompactString,
    pub thumb_url: CompactString,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub title: Option<CompactString>,
    pub description: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to an animated GIF file.
/// https://core.telegram.org/bots/api#inlinequeryresultgif
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultGif {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub gif_url: CompactString,
    pub gif_width: Option<i32>,
    pub gif_height: Option<i32>,
    pub gif_duration: Option<i32>,
    pub thumb_url: CompactString,
    pub thumb_mime_type: Option<CompactString>,
    pub title: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a video animation (H.264/MPEG-4 AVC video without sound).
/// https://core.telegram.org/bots/api#inlinequeryresultmpeg4gif
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultMpeg4Gif {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub mpeg4_url: CompactString,
    pub mpeg4_width: Option<i32>,
    pub mpeg4_height: Option<i32>,
    pub mpeg4_duration: Option<i32>,
    pub thumb_url: CompactString,
    pub thumb_mime_type: Option<CompactString>,
    pub title: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a page containing an embedded video player or a video file.
/// https://core.telegram.org/bots/api#inlinequeryresultvideo
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultVideo {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub video_url: CompactString,
    pub mime_type: CompactString,
    pub thumb_url: CompactString,
    pub title: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub video_width: Option<i32>,
    pub video_height: Option<i32>,
    pub video_duration: Option<i32>,
    pub description: Option<CompactString>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to an MP3 audio file.
/// https://core.telegram.org/bots/api#inlinequeryresultaudio
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultAudio {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub audio_url: CompactString,
    pub title: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub performer: Option<CompactString>,
    pub audio_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a voice recording in an .OGG container encoded with OPUS.
/// https://core.telegram.org/bots/api#inlinequeryresultvoice
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultVoice {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub voice_url: CompactString,
    pub title: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub voice_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a file. Currently, only .PDF and .ZIP files can be
/// sent using this method.
/// https://core.telegram.org/bots/api#inlinequeryresultdocument
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultDocument {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub title: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub document_url: CompactString,
    pub mime_type: CompactString,
    pub description: Option<CompactString>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<CompactString>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

/// Represents a location on a map.
/// https://core.telegram.org/bots/api#inlinequeryresultlocation
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultLocation {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub latitude: f64,
    pub longitude: f64,
    pub title: CompactString,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<CompactString>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

/// Represents a venue.
/// https://core.telegram.org/bots/api#inlinequeryresultvenue
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultVenue {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub latitude: f64,
    pub longitude: f64,
    pub title: CompactString,
    pub address: CompactString,
    pub foursquare_id: Option<CompactString>,
    pub foursquare_type: Option<CompactString>,
    pub google_place_id: Option<CompactString>,
    pub google_place_type: Option<CompactString>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<CompactString>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

/// Represents a contact with a phone number.
/// https://core.telegram.org/bots/api#inlinequeryresultcontact
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultContact {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub phone_number: CompactString,
    pub first_name: CompactString,
    pub last_name: Option<CompactString>,
    pub vcard: Option<CompactString>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<CompactString>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

/// Represents a Game.
/// https://core.telegram.org/bots/api#inlinequeryresultgame
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultGame {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub game_short_name: CompactString,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Represents a link to a photo stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedphoto
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedPhoto {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub photo_file_id: CompactString,
    pub title: Option<CompactString>,
    pub description: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to an animated GIF file stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedgif
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedGif {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub gif_file_id: CompactString,
    pub title: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a video animation (H.264/MPEG-4 AVC video without
/// sound) stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedmpeg4gif
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedMpeg4Gif {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub mpeg4_file_id: CompactString,
    pub title: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a sticker stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedsticker
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedSticker {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub sticker_file_id: CompactString,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a file stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcacheddocument
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedDocument {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub title: CompactString,
    pub document_file_id: CompactString,
    pub description: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a video file stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedvideo
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedVideo {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub video_file_id: CompactString,
    pub title: CompactString,
    pub description: Option<CompactString>,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to a voice message stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedvoice
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedVoice {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub voice_file_id: CompactString,
    pub title: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// Represents a link to an MP3 audio file stored on the Telegram servers.
/// https://core.telegram.org/bots/api#inlinequeryresultcachedaudio
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineQueryResultCachedAudio {
    #[serde(rename = "type")]
    pub result_type: CompactString,
    pub id: CompactString,
    pub audio_file_id: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// The content of a message to be sent as a result of an inline query.
/// https://core.telegram.org/bots/api#inputmessagecontent
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
}

/// Represents the content of a text message to be sent as the result of an inline query.
/// https://core.telegram.org/bots/api#inputtextmessagecontent
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputTextMessageContent {
    pub message_text: CompactString,
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
}

/// Represents the content of a location message to be sent as the result of an inline query.
/// https://core.telegram.org/bots/api#inputlocationmessagecontent
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
}

/// Represents the content of a venue message to be sent as the result of an inline query.
/// https://core.telegram.org/bots/api#inputvenuemessagecontent
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: CompactString,
    pub address: CompactString,
    pub foursquare_id: Option<CompactString>,
    pub foursquare_type: Option<CompactString>,
    pub google_place_id: Option<CompactString>,
    pub google_place_type: Option<CompactString>,
}

/// Represents the content of a contact message to be sent as the result of an inline query.
/// https://core.telegram.org/bots/api#inputcontactmessagecontent
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputContactMessageContent {
    pub phone_number: CompactString,
    pub first_name: CompactString,
    pub last_name: Option<CompactString>,
    pub vcard: Option<CompactString>,
}
