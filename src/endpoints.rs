use http::Method;

use crate::{
    proto::{Message, Update, User, WebhookInfo},
    request::{
        DeleteWebhookRequest, GetMeRequest, GetUpdatesRequest, GetWebhookInfoRequest,
        SendMessageRequest, SetWebhookRequest,
    },
};

pub trait Endpoint {
    type Request;
    type Response;

    const METHOD: Method;
    const PATH: &'static str;
}

pub struct GetMe;
impl Endpoint for GetMe {
    type Request = GetMeRequest;
    type Response = User;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "getMe";
}

pub struct GetUpdates;
impl Endpoint for GetUpdates {
    type Request = GetUpdatesRequest;
    type Response = Vec<Update>;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "getUpdates";
}

pub struct SendMessage;
impl Endpoint for SendMessage {
    type Request = SendMessageRequest;
    type Response = Message;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "sendMessage";
}

pub struct SetWebhook;
impl Endpoint for SetWebhook {
    type Request = SetWebhookRequest;
    type Response = bool;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "setWebhook";
}

pub struct DeleteWebhook;
impl Endpoint for DeleteWebhook {
    type Request = DeleteWebhookRequest;
    type Response = bool;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "deleteWebhook";
}

pub struct GetWebhookInfo;
impl Endpoint for GetWebhookInfo {
    type Request = GetWebhookInfoRequest;
    type Response = WebhookInfo;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "getWebhookInfo";
}
