use crate::basic_types::MessageId;
use compact_str::CompactString;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::proto::{ChatId, MessageEntity, ParseMode, ReplyMarkup, UpdateType};

/// https://core.telegram.org/bots/api#getme
#[derive(Debug, Default, Serialize)]
pub struct GetMeRequest {}

/// https://core.telegram.org/bots/api#getupdates
#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
pub struct GetUpdatesRequest {
    pub offset: Option<usize>,
    pub limit: Option<u32>,
    pub timeout: Option<u32>,
    /// Update kinds to receive. Set to an empty list to reset a previously
    /// configured filter; leave unset to keep the server-side default.
    pub allowed_updates: Option<Vec<UpdateType>>,
}

/// https://core.telegram.org/bots/api#sendmessage
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: ChatId,
    pub text: CompactString,
    #[serde(flatten)]
    pub params: SendMessageParams,
}

/// Optional knobs of `sendMessage`, kept apart from the two mandatory
/// fields so callers can `..Default::default()` the rest.
#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
pub struct SendMessageParams {
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<MessageId>,
    pub allow_sending_without_reply: Option<bool>,
    pub reply_markup: Option<ReplyMarkup>,
}

/// https://core.telegram.org/bots/api#setwebhook
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct SetWebhookRequest {
    pub url: CompactString,
    #[serde(flatten)]
    pub params: SetWebhookParams,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
pub struct SetWebhookParams {
    pub ip_address: Option<CompactString>,
    pub max_connections: Option<i32>,
    pub allowed_updates: Option<Vec<UpdateType>>,
    pub drop_pending_updates: Option<bool>,
}

/// https://core.telegram.org/bots/api#deletewebhook
#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
pub struct DeleteWebhookRequest {
    pub drop_pending_updates: Option<bool>,
}

/// https://core.telegram.org/bots/api#getwebhookinfo
#[derive(Debug, Default, Serialize)]
pub struct GetWebhookInfoRequest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ToParams;
    use assert2::check;

    #[test]
    fn unset_fields_stay_out_of_params() {
        let params = GetUpdatesRequest {
            offset: Some(3),
            ..Default::default()
        }
        .to_params()
        .unwrap();

        check!(params.len() == 1);
        check!(params["offset"] == "3");
    }

    #[test]
    fn reset_update_filter_sends_empty_list() {
        let params = GetUpdatesRequest {
            allowed_updates: Some(vec![]),
            ..Default::default()
        }
        .to_params()
        .unwrap();

        check!(params["allowed_updates"] == "[]");
    }

    #[test]
    fn update_filter_names_are_snake_case() {
        let params = GetUpdatesRequest {
            allowed_updates: Some(vec![
                UpdateType::Message,
                UpdateType::CallbackQuery,
            ]),
            ..Default::default()
        }
        .to_params()
        .unwrap();

        check!(params["allowed_updates"] == r#"["message","callback_query"]"#);
    }

    #[test]
    fn send_message_flattens_optional_params() {
        let params = SendMessageRequest {
            chat_id: ChatId::from(12345),
            text: "hello".into(),
            params: SendMessageParams {
                parse_mode: Some(ParseMode::MarkdownV2),
                disable_notification: Some(true),
                ..Default::default()
            },
        }
        .to_params()
        .unwrap();

        check!(params["chat_id"] == "12345");
        check!(params["text"] == "hello");
        check!(params["parse_mode"] == "MarkdownV2");
        check!(params["disable_notification"] == "true");
        check!(!params.contains_key("reply_markup"));
    }

    #[test]
    fn channel_username_encodes_verbatim() {
        let params = SendMessageRequest {
            chat_id: ChatId::from("@channel"),
            text: "hi".into(),
            params: SendMessageParams::default(),
        }
        .to_params()
        .unwrap();

        check!(params["chat_id"] == "@channel");
    }
}
