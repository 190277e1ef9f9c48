//! User command parsing
//!
//! Translates terminal input lines into user actions. These stand in
//! for the page's buttons and forms; parse failures never reach the
//! network.

use crate::domain::entities::PostId;
use crate::error::ParseError;

/// A user intent entered at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Feed,
    Post(String),
    Like(PostId),
    Dislike(PostId),
    Share(PostId),
    Comment(PostId, String),
    Help,
    Quit,
}

/// Parse one input line into an action
pub fn parse_command(input: &str) -> Result<UserAction, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.splitn(3, ' ').collect();
    let command = parts[0].to_lowercase();

    match command.as_str() {
        "feed" | "refresh" => Ok(UserAction::Feed),

        // Content is whatever follows the command, forwarded as-is
        // (including empty); the server decides whether to accept it.
        "post" => Ok(UserAction::Post(parts[1..].join(" "))),

        "like" => Ok(UserAction::Like(parse_id("like", &parts)?)),

        "dislike" => Ok(UserAction::Dislike(parse_id("dislike", &parts)?)),

        "share" => Ok(UserAction::Share(parse_id("share", &parts)?)),

        "comment" => {
            let id = parse_id("comment", &parts)?;
            let content = parts.get(2).copied().unwrap_or("").to_string();
            Ok(UserAction::Comment(id, content))
        }

        "help" => Ok(UserAction::Help),

        "quit" | "exit" => Ok(UserAction::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

fn parse_id(command: &str, parts: &[&str]) -> Result<PostId, ParseError> {
    let arg = parts.get(1).ok_or_else(|| {
        ParseError::MissingArgument(format!("{command} requires a post id"))
    })?;
    Ok(PostId(arg.parse()?))
}

/// Help text listing the available commands
pub fn help_text() -> &'static str {
    "Commands:\n\
     - `feed` - fetch and show the posts feed\n\
     - `post <text>` - create a new post\n\
     - `like <id>` - like a post\n\
     - `dislike <id>` - dislike a post\n\
     - `share <id>` - get a share link for a post\n\
     - `comment <id> <text>` - comment on a post\n\
     - `help` - show this help\n\
     - `quit` - exit"
}
