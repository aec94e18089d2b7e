mod games;
mod inline;
mod passport;
mod stickers;

pub use self::{games::*, inline::*, passport::*, stickers::*};

use compact_str::CompactString;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_json::Map;
use serde_with::skip_serializing_none;

use crate::basic_types::{ChatIntId, Date, MessageId, UpdateId, UserId};

/// The kinds of updates a bot may subscribe to through `allowed_updates`.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
}

/// An incoming update. Any given update carries exactly one payload,
/// decoded into [`UpdateKind`].
/// https://core.telegram.org/bots/api#update
#[derive(Debug)]
pub struct Update {
    pub id: UpdateId,
    pub kind: UpdateKind,
}

#[derive(Debug)]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    ShippingQuery(ShippingQuery),
    PreCheckoutQuery(PreCheckoutQuery),
    Poll(Poll),
    PollAnswer(PollAnswer),
}

impl<'de> Deserialize<'de> for Update {
    fn deserialize<D>(deserializer: D) -> Result<Update, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = Map::deserialize(deserializer)?;

        let id = map
            .remove("update_id")
            .ok_or_else(|| de::Error::missing_field("update_id"))
            .map(Deserialize::deserialize)?
            .map_err(de::Error::custom)?;

        let (key, value) = map
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("update with no payload"))?;

        let kind = match key.as_str() {
            "message" => serde_json::from_value::<Message>(value).map(UpdateKind::Message),
            "edited_message" => {
                serde_json::from_value::<Message>(value).map(UpdateKind::EditedMessage)
            }
            "channel_post" => serde_json::from_value::<Message>(value).map(UpdateKind::ChannelPost),
            "edited_channel_post" => {
                serde_json::from_value::<Message>(value).map(UpdateKind::EditedChannelPost)
            }
            "inline_query" => {
                serde_json::from_value::<InlineQuery>(value).map(UpdateKind::InlineQuery)
            }
            "chosen_inline_result" => serde_json::from_value::<ChosenInlineResult>(value)
                .map(UpdateKind::ChosenInlineResult),
            "callback_query" => {
                serde_json::from_value::<CallbackQuery>(value).map(UpdateKind::CallbackQuery)
            }
            "shipping_query" => {
                serde_json::from_value::<ShippingQuery>(value).map(UpdateKind::ShippingQuery)
            }
            "pre_checkout_query" => {
                serde_json::from_value::<PreCheckoutQuery>(value).map(UpdateKind::PreCheckoutQuery)
            }
            "poll" => serde_json::from_value::<Poll>(value).map(UpdateKind::Poll),
            "poll_answer" => serde_json::from_value::<PollAnswer>(value).map(UpdateKind::PollAnswer),
            _ => {
                return Err(de::Error::custom("unknown update"));
            }
        }
        .map_err(de::Error::custom)?;
        Ok(Update { id, kind })
    }
}

impl Update {
    /// The message payload, whichever update kind delivered it.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message) => Some(message),
            _ => None,
        }
    }
}

/// Current status of a webhook.
/// https://core.telegram.org/bots/api#webhookinfo
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookInfo {
    pub url: CompactString,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    pub ip_address: Option<CompactString>,
    pub last_error_date: Option<Date>,
    pub last_error_message: Option<CompactString>,
    pub max_connections: Option<i32>,
    pub allowed_updates: Option<Vec<UpdateType>>,
}

/// This object represents a Telegram user or bot.
/// https://core.telegram.org/bots/api#user
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: CompactString,
    pub last_name: Option<CompactString>,
    pub username: Option<CompactString>,
    pub language_code: Option<CompactString>,
    pub can_join_groups: Option<bool>,
    pub can_read_all_group_messages: Option<bool>,
    pub supports_inline_queries: Option<bool>,
}

impl User {
    pub fn full_name(&self) -> CompactString {
        let mut name = self.first_name.clone();
        if let Some(s) = &self.last_name {
            name += " ";
            name += s.as_str();
        }
        name
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Sender,
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
}

/// This object represents a chat.
/// https://core.telegram.org/bots/api#chat
#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: ChatIntId,
    #[serde(default, rename = "type")]
    pub chat_type: ChatType,
    pub title: Option<CompactString>,
    pub username: Option<CompactString>,
    pub first_name: Option<CompactString>,
    pub last_name: Option<CompactString>,
    pub photo: Option<ChatPhoto>,
    pub bio: Option<CompactString>,
    pub description: Option<CompactString>,
    pub invite_link: Option<CompactString>,
    pub pinned_message: Option<Box<Message>>,
    pub permissions: Option<ChatPermissions>,
    pub slow_mode_delay: Option<i64>,
    pub sticker_set_name: Option<CompactString>,
    pub can_set_sticker_set: Option<bool>,
    pub linked_chat_id: Option<ChatIntId>,
    pub location: Option<ChatLocation>,
}

/// A chat target: the numeric id, or a `@channelusername` handle.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum ChatId {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    Int(ChatIntId),
    Str(CompactString),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<CompactString> for ChatId {
    fn from(id: CompactString) -> Self {
        Self::Str(id)
    }
}

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        Self::Str(id.into())
    }
}

/// This object represents a message.
/// https://core.telegram.org/bots/api#message
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub from: Option<User>,
    pub sender_chat: Option<Chat>,
    pub date: Date,
    pub chat: Chat,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<MessageId>,
    pub forward_signature: Option<CompactString>,
    pub forward_sender_name: Option<CompactString>,
    pub forward_date: Option<Date>,
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<User>,
    pub edit_date: Option<Date>,
    pub media_group_id: Option<CompactString>,
    pub author_signature: Option<CompactString>,
    pub text: Option<CompactString>,
    pub entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub video_note: Option<VideoNote>,
    pub voice: Option<Voice>,
    pub caption: Option<CompactString>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub contact: Option<Contact>,
    pub dice: Option<Dice>,
    pub game: Option<Game>,
    pub poll: Option<Poll>,
    pub venue: Option<Venue>,
    pub location: Option<Location>,
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<CompactString>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: Option<bool>,
    pub group_chat_created: Option<bool>,
    pub supergroup_chat_created: Option<bool>,
    pub channel_chat_created: Option<bool>,
    pub migrate_to_chat_id: Option<ChatIntId>,
    pub migrate_from_chat_id: Option<ChatIntId>,
    pub pinned_message: Option<Box<Message>>,
    pub invoice: Option<Invoice>,
    pub successful_payment: Option<SuccessfulPayment>,
    pub connected_website: Option<CompactString>,
    pub passport_data: Option<PassportData>,
    pub proximity_alert_triggered: Option<ProximityAlertTriggered>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    pub fn entity_of_type(&self, entity_type: MessageEntityType) -> Option<&MessageEntity> {
        self.entities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|entity| entity.entity_type == entity_type)
    }
}

/// This object represents one special entity in a text message.
/// For example, hashtags, usernames, URLs, etc.
/// https://core.telegram.org/bots/api#messageentity
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub entity_type: MessageEntityType,
    pub offset: i64,
    pub length: usize,
    pub url: Option<CompactString>,
    pub user: Option<User>,
    pub language: Option<CompactString>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
    TextMention,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    Markdown,
    MarkdownV2,
}

/// This object represents one size of a photo
/// or a [file](https://core.telegram.org/bots/api#document) /
/// [sticker](https://core.telegram.org/bots/api#sticker) thumbnail.
/// https://core.telegram.org/bots/api#photosize
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct PhotoSize {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub width: i32,
    pub height: i32,
    pub file_size: Option<i64>,
}

/// This object represents an animation file (GIF or H.264/MPEG-4 AVC video without sound).
/// https://core.telegram.org/bots/api#animation
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Animation {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<CompactString>,
    pub mime_type: Option<CompactString>,
    pub file_size: Option<i64>,
}

/// This object represents an audio file to be treated as music by the Telegram clients.
/// https://core.telegram.org/bots/api#audio
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Audio {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub duration: i32,
    pub performer: Option<CompactString>,
    pub title: Option<CompactString>,
    pub file_name: Option<CompactString>,
    pub mime_type: Option<CompactString>,
    pub file_size: Option<i64>,
    pub thumb: Option<PhotoSize>,
}

/// This object represents a general file (as opposed to photos, voice messages and audio files).
/// https://core.telegram.org/bots/api#document
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Document {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<CompactString>,
    pub mime_type: Option<CompactString>,
    pub file_size: Option<i64>,
}

/// This object represents a video file.
/// https://core.telegram.org/bots/api#video
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Video {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<CompactString>,
    pub mime_type: Option<CompactString>,
    pub file_size: Option<i64>,
}

/// This object represents a [video message](https://telegram.org/blog/video-messages-and-telescope).
/// https://core.telegram.org/bots/api#videonote
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct VideoNote {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub length: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_size: Option<i64>,
}

/// This object represents a voice note.
/// https://core.telegram.org/bots/api#voice
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Voice {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub duration: i32,
    pub mime_type: Option<CompactString>,
    pub file_size: Option<i64>,
}

/// This object represents a phone contact.
/// https://core.telegram.org/bots/api#contact
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Contact {
    pub phone_number: CompactString,
    pub first_name: CompactString,
    pub last_name: Option<CompactString>,
    pub user_id: Option<UserId>,
    pub vcard: Option<CompactString>,
}

/// This object represents an animated emoji that displays a random value.
/// https://core.telegram.org/bots/api#dice
#[derive(Debug, Deserialize, Serialize)]
pub struct Dice {
    pub emoji: CompactString,
    pub value: u8,
}

/// This object contains information about one answer option in a poll.
/// https://core.telegram.org/bots/api#polloption
#[derive(Debug, Deserialize, Serialize)]
pub struct PollOption {
    pub text: CompactString,
    pub voter_count: i32,
}

/// This object represents an answer of a user in a non-anonymous poll.
/// https://core.telegram.org/bots/api#pollanswer
#[derive(Debug, Deserialize, Serialize)]
pub struct PollAnswer {
    pub poll_id: CompactString,
    pub user: User,
    pub option_ids: Vec<u64>,
}

/// This object contains information about a poll.
/// https://core.telegram.org/bots/api#poll
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Poll {
    pub id: CompactString,
    pub question: CompactString,
    pub options: Vec<PollOption>,
    pub total_voter_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub allows_multiple_answers: bool,
    pub correct_option_id: Option<i32>,
    pub explanation: Option<CompactString>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i32>,
    pub close_date: Option<Date>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PollType {
    Quiz,
    Regular,
}

/// This object represents a point on the map.
/// https://core.telegram.org/bots/api#location
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
}

/// This object represents a venue.
/// https://core.telegram.org/bots/api#venue
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Venue {
    pub location: Location,
    pub title: CompactString,
    pub address: CompactString,
    pub foursquare_id: Option<CompactString>,
    pub foursquare_type: Option<CompactString>,
    pub google_place_id: Option<CompactString>,
    pub google_place_type: Option<CompactString>,
}

/// This object represents the content of a service message,
/// sent whenever a user in the chat triggers a proximity alert set by another user.
/// https://core.telegram.org/bots/api#proximityalerttriggered
#[derive(Debug, Deserialize, Serialize)]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,
    pub distance: i32,
}

/// This object represent a user's profile pictures.
/// https://core.telegram.org/bots/api#userprofilephotos
#[derive(Debug, Deserialize, Serialize)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    pub photos: Vec<Vec<PhotoSize>>,
}

/// This object represents a file ready to be downloaded.
/// The file can be downloaded via the link `https://api.telegram.org/file/bot<token>/<file_path>`.
/// It is guaranteed that the link will be valid for at least 1 hour.
/// https://core.telegram.org/bots/api#file
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct File {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub file_size: Option<i64>,
    pub file_path: Option<CompactString>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboardMarkup(InlineKeyboardMarkup),
    ReplyKeyboardMarkup(ReplyKeyboardMarkup),
    ReplyKeyboardRemove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

/// This object represents a [custom keyboard](https://core.telegram.org/bots/features#keyboards)
/// with reply options.
/// https://core.telegram.org/bots/api#replykeyboardmarkup
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: Option<bool>,
    pub one_time_keyboard: Option<bool>,
    pub selective: Option<bool>,
}

/// This object represents one button of the reply keyboard.
/// The optional fields `request_contact`, `request_location` and `request_poll`
/// are mutually exclusive.
/// https://core.telegram.org/bots/api#keyboardbutton
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct KeyboardButton {
    pub text: CompactString,
    pub request_contact: Option<bool>,
    pub request_location: Option<bool>,
    pub request_poll: Option<KeyboardButtonPollType>,
}

/// This object represents type of a poll, which is allowed to be created
/// and sent when the corresponding button is pressed.
/// https://core.telegram.org/bots/api#keyboardbuttonpolltype
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct KeyboardButtonPollType {
    #[serde(default, rename = "type")]
    pub poll_type: Option<PollType>,
}

/// Upon receiving a message with this object, Telegram clients will remove
/// the current custom keyboard and display the default letter-keyboard.
/// https://core.telegram.org/bots/api#replykeyboardremove
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
    pub selective: Option<bool>,
}

/// This object represents an [inline keyboard](https://core.telegram.org/bots/features#inline-keyboards)
/// that appears right next to the message it belongs to.
/// https://core.telegram.org/bots/api#inlinekeyboardmarkup
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// This object represents one button of an inline keyboard.
/// You **must** use exactly one of the optional fields.
/// https://core.telegram.org/bots/api#inlinekeyboardbutton
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InlineKeyboardButton {
    pub text: CompactString,
    pub url: Option<CompactString>,
    pub login_url: Option<LoginUrl>,
    pub callback_data: Option<CompactString>,
    pub switch_inline_query: Option<CompactString>,
    pub switch_inline_query_current_chat: Option<CompactString>,
    pub callback_game: Option<CallbackGame>,
    pub pay: Option<bool>,
}

/// This object represents a parameter of the inline keyboard button used to
/// automatically authorize a user.
/// https://core.telegram.org/bots/api#loginurl
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginUrl {
    pub url: CompactString,
    pub forward_text: Option<CompactString>,
    pub bot_username: Option<CompactString>,
    pub request_write_access: Option<bool>,
}

/// This object represents an incoming callback query from a callback button
/// in an inline keyboard. Exactly one of the fields `data` or
/// `game_short_name` will be present.
/// https://core.telegram.org/bots/api#callbackquery
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: CompactString,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<CompactString>,
    pub chat_instance: Option<CompactString>,
    pub data: Option<CompactString>,
    pub game_short_name: Option<CompactString>,
}

/// Upon receiving a message with this object, Telegram clients will display
/// a reply interface to the user (act as if the user has selected the bot's
/// message and tapped 'Reply').
/// https://core.telegram.org/bots/api#forcereply
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ForceReply {
    pub force_reply: bool,
    pub selective: Option<bool>,
}

/// This object represents a chat photo.
/// https://core.telegram.org/bots/api#chatphoto
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatPhoto {
    pub small_file_id: CompactString,
    pub small_file_unique_id: CompactString,
    pub big_file_id: CompactString,
    pub big_file_unique_id: CompactString,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
}

/// This object contains information about one member of a chat.
/// https://core.telegram.org/bots/api#chatmember
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatMember {
    pub user: User,
    pub status: ChatMemberStatus,
    pub custom_title: Option<CompactString>,
    pub is_anonymous: Option<bool>,
    pub can_be_edited: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub is_member: Option<bool>,
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub until_date: Option<Date>,
}

/// Describes actions that a non-administrator user is allowed to take in a chat.
/// https://core.telegram.org/bots/api#chatpermissions
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatPermissions {
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
}

/// Represents a location to which a chat is connected.
/// https://core.telegram.org/bots/api#chatlocation
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: CompactString,
}

/// This object represents a bot command.
/// https://core.telegram.org/bots/api#botcommand
#[derive(Debug, Deserialize, Serialize)]
pub struct BotCommand {
    pub command: CompactString,
    pub description: CompactString,
}

/// Contains information about why a request was unsuccessful.
/// https://core.telegram.org/bots/api#responseparameters
#[skip_serializing_none]
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct ResponseParameters {
    pub migrate_to_chat_id: Option<ChatIntId>,
    pub retry_after: Option<i64>,
}

/// This object contains basic information about an invoice.
/// https://core.telegram.org/bots/api#invoice
#[derive(Debug, Deserialize, Serialize)]
pub struct Invoice {
    pub title: CompactString,
    pub description: CompactString,
    pub start_parameter: CompactString,
    pub currency: CompactString,
    pub total_amount: i64,
}

/// This object contains basic information about a successful payment.
/// https://core.telegram.org/bots/api#successfulpayment
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct SuccessfulPayment {
    pub currency: CompactString,
    pub total_amount: i64,
    pub invoice_payload: CompactString,
    pub shipping_option_id: Option<CompactString>,
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: CompactString,
    pub provider_payment_charge_id: CompactString,
}

/// This object represents a shipping address.
/// https://core.telegram.org/bots/api#shippingaddress
#[derive(Debug, Deserialize, Serialize)]
pub struct ShippingAddress {
    pub country_code: CompactString,
    pub state: CompactString,
    pub city: CompactString,
    pub street_line1: CompactString,
    pub street_line2: CompactString,
    pub post_code: CompactString,
}

/// This object represents information about an order.
/// https://core.telegram.org/bots/api#orderinfo
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct OrderInfo {
    pub name: Option<CompactString>,
    pub phone_number: Option<CompactString>,
    pub email: Option<CompactString>,
    pub shipping_address: Option<ShippingAddress>,
}

/// This object contains information about an incoming shipping query.
/// https://core.telegram.org/bots/api#shippingquery
#[derive(Debug, Deserialize, Serialize)]
pub struct ShippingQuery {
    pub id: CompactString,
    pub from: User,
    pub invoice_payload: CompactString,
    pub shipping_address: ShippingAddress,
}

/// This object contains information about an incoming pre-checkout query.
/// https://core.telegram.org/bots/api#precheckoutquery
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct PreCheckoutQuery {
    pub id: CompactString,
    pub from: User,
    pub currency: CompactString,
    pub total_amount: u64,
    pub invoice_payload: CompactString,
    pub shipping_option_id: Option<CompactString>,
    pub order_info: Option<OrderInfo>,
}

/// The content of a media message to be sent.
/// https://core.telegram.org/bots/api#inputmedia
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputMedia {
    Animation(InputMediaAnimation),
    Document(InputMediaDocument),
    Audio(InputMediaAudio),
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
}

/// Represents a photo to be sent.
/// https://core.telegram.org/bots/api#inputmediaphoto
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputMediaPhoto {
    #[serde(rename = "type")]
    pub media_type: CompactString,
    pub media: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
}

/// Represents a video to be sent.
/// https://core.telegram.org/bots/api#inputmediavideo
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputMediaVideo {
    #[serde(rename = "type")]
    pub media_type: CompactString,
    pub media: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
    pub supports_streaming: Option<bool>,
}

/// Represents an animation file (GIF or H.264/MPEG-4 AVC video without sound) to be sent.
/// https://core.telegram.org/bots/api#inputmediaanimation
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputMediaAnimation {
    #[serde(rename = "type")]
    pub media_type: CompactString,
    pub media: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
}

/// Represents an audio file to be treated as music to be sent.
/// https://core.telegram.org/bots/api#inputmediaaudio
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputMediaAudio {
    #[serde(rename = "type")]
    pub media_type: CompactString,
    pub media: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i32>,
    pub performer: Option<CompactString>,
    pub title: Option<CompactString>,
}

/// Represents a general file to be sent.
/// https://core.telegram.org/bots/api#inputmediadocument
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct InputMediaDocument {
    #[serde(rename = "type")]
    pub media_type: CompactString,
    pub media: CompactString,
    pub caption: Option<CompactString>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub disable_content_type_detection: Option<bool>,
}

#[cfg(test)]
mod tests {
    use crate::proto::{Update, UpdateKind};

    #[test]
    fn deserialize_message_update() {
        let data = serde_json::json!({
            "update_id": 10000,
            "message": {
                "message_id": 1365,
                "date": 1441645532,
                "chat": {
                    "id": 1111111,
                    "type": "private",
                    "first_name": "Test",
                    "username": "Test"
                },
                "from": {
                    "id": 1111111,
                    "is_bot": false,
                    "first_name": "Test",
                    "username": "Test"
                },
                "text": "/start"
            }
        });
        let update = serde_json::from_value::<Update>(data).unwrap();
        assert_eq!(update.id, 10000);
        let message = update.message().unwrap();
        assert_eq!(message.message_id, 1365);
        assert_eq!(message.text.as_deref(), Some("/start"));
    }

    #[test]
    fn deserialize_callback_query_update() {
        let data = serde_json::json!({
            "update_id": 10001,
            "callback_query": {
                "id": "4382bfdwdsb323b2d9",
                "from": {
                    "id": 1111111,
                    "is_bot": false,
                    "first_name": "Test",
                    "username": "Test"
                },
                "chat_instance": "23asdas123",
                "data": "Data from button callback"
            }
        });
        let update = serde_json::from_value::<Update>(data).unwrap();
        let UpdateKind::CallbackQuery(query) = update.kind else {
            panic!("expected a callback query update");
        };
        assert_eq!(query.data.as_deref(), Some("Data from button callback"));
        assert!(query.game_short_name.is_none());
    }

    #[test]
    fn update_without_payload_is_rejected() {
        let data = serde_json::json!({ "update_id": 1 });
        assert!(serde_json::from_value::<Update>(data).is_err());
    }
}
