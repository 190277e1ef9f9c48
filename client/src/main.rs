//! PostFlow terminal client
//!
//! Fetches the posts feed from the PostFlow service, renders it, and
//! forwards user actions (post, like, dislike, share, comment) to the
//! service. Every successful mutation re-fetches the whole feed; a
//! failed call leaves the last rendered feed untouched.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use adapters::{HttpPostsApi, TerminalNotifier};
use app::{help_text, parse_command, FeedSyncService, UserAction};
use config::Config;
use feed::FeedView;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout carries the rendered feed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(api = %config.api_base_url, "starting PostFlow client");

    let api = Arc::new(HttpPostsApi::new(config.api_base_url));
    let notifier = Arc::new(TerminalNotifier);
    let view = Arc::new(FeedView::new());
    let sync = FeedSyncService::new(api, notifier, view.clone());

    // Initial load; on failure the view stays empty until the next action
    if sync.refresh().await.is_ok() {
        println!("{}", view.markup());
    }
    println!("{}", help_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let action = match parse_command(&line) {
            Ok(action) => action,
            Err(e) => {
                println!("{e}");
                println!("{}", help_text());
                continue;
            }
        };

        // Failures are already reported by the sync service; the loop
        // just skips the re-print and keeps going.
        match action {
            UserAction::Quit => break,
            UserAction::Help => println!("{}", help_text()),
            UserAction::Feed => {
                if sync.refresh().await.is_ok() {
                    println!("{}", view.markup());
                }
            }
            UserAction::Post(content) => {
                if sync.create_post(&content).await.is_ok() {
                    println!("{}", view.markup());
                }
            }
            UserAction::Like(id) => {
                if sync.like_post(id).await.is_ok() {
                    println!("{}", view.markup());
                }
            }
            UserAction::Dislike(id) => {
                if sync.dislike_post(id).await.is_ok() {
                    println!("{}", view.markup());
                }
            }
            UserAction::Share(id) => {
                // The notifier prints the link on success
                let _ = sync.share_post(id).await;
            }
            UserAction::Comment(id, content) => {
                if sync.add_comment(id, &content).await.is_ok() {
                    println!("{}", view.markup());
                }
            }
        }
    }

    Ok(())
}
