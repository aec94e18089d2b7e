use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::proto::{Animation, MessageEntity, PhotoSize, User};

/// This object represents a game. Use BotFather to create and edit games,
/// their short names will act as unique identifiers.
/// https://core.telegram.org/bots/api#game
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct Game {
    pub title: CompactString,
    pub description: CompactString,
    pub photo: Vec<PhotoSize>,
    pub text: Option<CompactString>,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
}

/// A placeholder, currently holds no information. Use BotFather to set up your game.
/// https://core.telegram.org/bots/api#callbackgame
#[derive(Debug, Deserialize, Serialize)]
pub struct CallbackGame {}

/// This object represents one row of the high scores table for a game.
/// https://core.telegram.org/bots/api#gamehighscore
#[derive(Debug, Deserialize, Serialize)]
pub struct GameHighScore {
    pub position: i32,
    pub user: User,
    pub score: i64,
}
