use crate::{
    endpoints::{
        DeleteWebhook, Endpoint, GetMe, GetUpdates, GetWebhookInfo, SendMessage, SetWebhook,
    },
    error::Error,
    params::ToParams,
    proto::{ChatId, Message, Update, User, WebhookInfo},
    request::{
        DeleteWebhookRequest, GetMeRequest, GetUpdatesRequest, GetWebhookInfoRequest,
        SendMessageParams, SendMessageRequest, SetWebhookParams, SetWebhookRequest,
    },
    response::CommonResponse,
    transport::{HttpTransport, Transport},
};
use compact_str::{CompactString, ToCompactString};
use serde::{de::DeserializeOwned, Serialize};

pub const BASE_URL: &str = "https://api.telegram.org";

/// Construction-time knobs of [`Bot`]. Anything left unset falls back to the
/// production default: the public API host over a fresh HTTP client.
#[derive(Default)]
pub struct BotConfig {
    pub host: Option<CompactString>,
    pub transport: Option<Box<dyn Transport>>,
}

pub struct Bot {
    token: CompactString,
    host: CompactString,
    transport: Box<dyn Transport>,
    me: User,
}

impl Bot {
    /// Connects with the given token and verifies it by fetching the bot's
    /// own identity. An invalid token therefore fails here, not on the
    /// first real call.
    pub async fn new(token: &str) -> Result<Self, Error> {
        Self::with_config(token, BotConfig::default()).await
    }

    pub async fn with_config(token: &str, config: BotConfig) -> Result<Self, Error> {
        let host = config
            .host
            .unwrap_or_else(|| BASE_URL.to_compact_string());
        let transport = config
            .transport
            .unwrap_or_else(|| Box::new(HttpTransport::new()));
        let me = Self::send_request::<GetMe>(
            transport.as_ref(),
            &host,
            token,
            &GetMeRequest::default(),
        )
        .await?;
        Ok(Self {
            token: token.to_compact_string(),
            host,
            transport,
            me,
        })
    }

    /// The identity fetched at construction. Never refreshed afterwards.
    pub fn me(&self) -> &User {
        &self.me
    }

    pub async fn get_me(&self) -> Result<User, Error> {
        self.request::<GetMe>(&GetMeRequest::default()).await
    }

    pub async fn get_updates(
        &self,
        request: &GetUpdatesRequest,
    ) -> Result<Vec<Update>, Error> {
        self.request::<GetUpdates>(request).await
    }

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<CompactString>,
        params: SendMessageParams,
    ) -> Result<Message, Error> {
        let request = SendMessageRequest {
            chat_id: chat_id.into(),
            text: text.into(),
            params,
        };
        self.request::<SendMessage>(&request).await
    }

    pub async fn set_webhook(
        &self,
        url: impl Into<CompactString>,
        params: SetWebhookParams,
    ) -> Result<bool, Error> {
        let request = SetWebhookRequest {
            url: url.into(),
            params,
        };
        self.request::<SetWebhook>(&request).await
    }

    pub async fn delete_webhook(
        &self,
        request: &DeleteWebhookRequest,
    ) -> Result<bool, Error> {
        self.request::<DeleteWebhook>(request).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, Error> {
        self.request::<GetWebhookInfo>(&GetWebhookInfoRequest::default())
            .await
    }

    async fn request<E>(&self, data: &E::Request) -> Result<E::Response, Error>
    where
        E: Endpoint,
        E::Request: Serialize,
        E::Response: DeserializeOwned,
    {
        Self::send_request::<E>(self.transport.as_ref(), &self.host, &self.token, data).await
    }

    async fn send_request<E>(
        transport: &dyn Transport,
        host: &str,
        token: &str,
        data: &E::Request,
    ) -> Result<E::Response, Error>
    where
        E: Endpoint,
        E::Request: Serialize,
        E::Response: DeserializeOwned,
    {
        let url = format!("{}/bot{}/{}", host, token, E::PATH);
        let params = data.to_params()?;
        let text = transport.execute(E::METHOD, &url, &params).await?;
        let response = serde_json::from_str::<CommonResponse<E::Response>>(&text)?;
        response.into_result().map_err(Error::Api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params::Params, proto::UpdateType};
    use assert2::{check, let_assert};
    use async_trait::async_trait;
    use http::Method;
    use serde_json::json;

    const VALID_TOKEN: &str = "123456:token";

    /// Plays the server side of a conversation: rejects wrong tokens with a
    /// 401 envelope, answers `getMe` with a fixed identity, and defers every
    /// other method to the supplied closure.
    struct StubTransport<F> {
        handler: F,
    }

    impl<F> StubTransport<F>
    where
        F: Fn(&str, &Params) -> String + Send + Sync,
    {
        fn new(handler: F) -> Self {
            Self { handler }
        }
    }

    fn stub(
    ) -> StubTransport<impl Fn(&str, &Params) -> String + Send + Sync> {
        StubTransport::new(|method, _| {
            panic!("unexpected call to {method}")
        })
    }

    #[async_trait]
    impl<F> Transport for StubTransport<F>
    where
        F: Fn(&str, &Params) -> String + Send + Sync,
    {
        async fn execute(
            &self,
            _method: Method,
            url: &str,
            params: &Params,
        ) -> Result<String, Error> {
            let path = url
                .strip_prefix("https://api.telegram.org/bot")
                .unwrap();
            let (token, api_method) = path.split_once('/').unwrap();
            if token != VALID_TOKEN {
                return Ok(json!({
                    "ok": false,
                    "error_code": 401,
                    "description": "Unauthorized"
                })
                .to_string());
            }
            if api_method == "getMe" {
                return Ok(json!({
                    "ok": true,
                    "result": {
                        "id": 123456,
                        "is_bot": true,
                        "first_name": "TestBot",
                        "username": "test_bot",
                        "can_join_groups": true,
                        "can_read_all_group_messages": false,
                        "supports_inline_queries": false
                    }
                })
                .to_string());
            }
            Ok((self.handler)(api_method, params))
        }
    }

    async fn connect<F>(transport: StubTransport<F>) -> Bot
    where
        F: Fn(&str, &Params) -> String + Send + Sync + 'static,
    {
        Bot::with_config(
            VALID_TOKEN,
            BotConfig {
                host: None,
                transport: Some(Box::new(transport)),
            },
        )
        .await
        .unwrap()
    }

    fn update_fixtures() -> Vec<serde_json::Value> {
        (0..4)
            .map(|i| {
                json!({
                    "update_id": i,
                    "message": {
                        "message_id": i + 100,
                        "date": 1644000000u64 + i as u64,
                        "chat": { "id": 12345, "type": "private" },
                        "from": { "id": 12345, "is_bot": false, "first_name": "User" },
                        "text": format!("message {i}")
                    }
                })
            })
            .collect()
    }

    #[tokio::test]
    async fn new_bot_fetches_its_own_identity() {
        let bot = connect(stub()).await;

        check!(bot.me().id == 123456);
        check!(bot.me().is_bot);
        check!(bot.me().first_name == "TestBot");
        check!(bot.me().username.as_deref() == Some("test_bot"));
    }

    #[tokio::test]
    async fn new_bot_rejects_invalid_token() {
        let result = Bot::with_config(
            "bad:token",
            BotConfig {
                host: None,
                transport: Some(Box::new(stub())),
            },
        )
        .await;

        let_assert!(Err(Error::Api(err)) = result);
        check!(err.error_code == 401);
        check!(err.description == "Unauthorized");
    }

    #[tokio::test]
    async fn get_updates_decodes_batch() {
        let bot = connect(StubTransport::new(|method, _| {
            check!(method == "getUpdates");
            json!({ "ok": true, "result": update_fixtures() }).to_string()
        }))
        .await;

        let updates = bot
            .get_updates(&GetUpdatesRequest::default())
            .await
            .unwrap();

        check!(updates.len() == 4);
        for (i, update) in updates.iter().enumerate() {
            check!(update.id == i as i64);
            let message = update.message().unwrap();
            check!(message.message_id == i as i32 + 100);
            check!(message.from.as_ref().unwrap().id == 12345);
            check!(message.text.as_deref() == Some(&*format!("message {i}")));
        }
    }

    #[tokio::test]
    async fn get_updates_passes_paging_params() {
        let bot = connect(StubTransport::new(|method, params| {
            check!(method == "getUpdates");
            check!(params["offset"] == "1");
            check!(params["limit"] == "2");
            check!(params["allowed_updates"] == "[]");
            let offset: usize = params["offset"].parse().unwrap();
            let limit: usize = params["limit"].parse().unwrap();
            let batch: Vec<_> = update_fixtures()
                .into_iter()
                .skip(offset)
                .take(limit)
                .collect();
            json!({ "ok": true, "result": batch }).to_string()
        }))
        .await;

        let updates = bot
            .get_updates(&GetUpdatesRequest {
                offset: Some(1),
                limit: Some(2),
                allowed_updates: Some(vec![]),
                ..Default::default()
            })
            .await
            .unwrap();

        check!(updates.len() == 2);
        check!(updates[0].id == 1);
        check!(updates[1].id == 2);
    }

    #[tokio::test]
    async fn get_updates_surfaces_api_error() {
        let bot = connect(StubTransport::new(|_, _| {
            json!({
                "ok": false,
                "error_code": 409,
                "description": "Conflict: terminated by other getUpdates request"
            })
            .to_string()
        }))
        .await;

        let result = bot.get_updates(&GetUpdatesRequest::default()).await;

        let_assert!(Err(Error::Api(err)) = result);
        check!(err.error_code == 409);
    }

    #[tokio::test]
    async fn send_message_round_trips_text() {
        let bot = connect(StubTransport::new(|method, params| {
            check!(method == "sendMessage");
            check!(params["chat_id"] == "12345");
            check!(params["text"] == "hello");
            json!({
                "ok": true,
                "result": {
                    "message_id": 1,
                    "date": 1644000000u64,
                    "chat": { "id": 12345, "type": "private" },
                    "text": "hello"
                }
            })
            .to_string()
        }))
        .await;

        let message = bot
            .send_message(12345, "hello", SendMessageParams::default())
            .await
            .unwrap();

        check!(message.message_id == 1);
        check!(message.text.as_deref() == Some("hello"));
        check!(message.chat.id == 12345);
    }

    #[tokio::test]
    async fn set_webhook_passes_optional_params() {
        let bot = connect(StubTransport::new(|method, params| {
            check!(method == "setWebhook");
            check!(params["url"] == "https://example.com/hook");
            check!(params["ip_address"] == "127.0.0.1");
            check!(params["max_connections"] == "100");
            check!(params["allowed_updates"] == r#"["message"]"#);
            check!(params["drop_pending_updates"] == "true");
            json!({ "ok": true, "result": true }).to_string()
        }))
        .await;

        let done = bot
            .set_webhook(
                "https://example.com/hook",
                SetWebhookParams {
                    ip_address: Some("127.0.0.1".into()),
                    max_connections: Some(100),
                    allowed_updates: Some(vec![UpdateType::Message]),
                    drop_pending_updates: Some(true),
                },
            )
            .await
            .unwrap();

        check!(done);
    }

    #[tokio::test]
    async fn set_webhook_rejects_plain_http_url() {
        let bot = connect(StubTransport::new(|_, params| {
            if params["url"].starts_with("https://") {
                json!({ "ok": true, "result": true }).to_string()
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: bad webhook: An HTTPS URL must be provided"
                })
                .to_string()
            }
        }))
        .await;

        let result = bot
            .set_webhook("http://example.com/hook", SetWebhookParams::default())
            .await;

        let_assert!(Err(Error::Api(err)) = result);
        check!(err.error_code == 400);
    }

    #[tokio::test]
    async fn delete_webhook_reports_success() {
        let bot = connect(StubTransport::new(|method, params| {
            check!(method == "deleteWebhook");
            check!(params["drop_pending_updates"] == "true");
            json!({ "ok": true, "result": true }).to_string()
        }))
        .await;

        let done = bot
            .delete_webhook(&DeleteWebhookRequest {
                drop_pending_updates: Some(true),
            })
            .await
            .unwrap();

        check!(done);
    }

    #[tokio::test]
    async fn get_webhook_info_decodes_state() {
        let bot = connect(StubTransport::new(|method, _| {
            check!(method == "getWebhookInfo");
            json!({
                "ok": true,
                "result": {
                    "url": "https://example.com/hook",
                    "has_custom_certificate": false,
                    "pending_update_count": 3,
                    "max_connections": 40
                }
            })
            .to_string()
        }))
        .await;

        let info = bot.get_webhook_info().await.unwrap();

        check!(info.url == "https://example.com/hook");
        check!(!info.has_custom_certificate);
        check!(info.pending_update_count == 3);
        check!(info.max_connections == Some(40));
    }
}
