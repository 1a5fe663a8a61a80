//! Command-line client for the blog API.

mod args;
mod client;
mod views;

use clap::Parser;

use args::{Cli, Command};
use client::{BlogApiClient, ListOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = BlogApiClient::new(&cli.api_url);

    match cli.command {
        Command::List {
            page,
            page_size,
            author,
            from,
            to,
            search,
        } => {
            views::list(
                &client,
                ListOptions {
                    page,
                    page_size,
                    author,
                    from,
                    to,
                    search,
                },
            )
            .await
        }
        Command::Show { id } => views::show(&client, id).await,
        Command::New {
            title,
            content,
            author,
        } => views::create(&client, title, content, author).await,
        Command::Edit {
            id,
            title,
            content,
            author,
        } => views::edit(&client, id, title, content, author).await,
        Command::Delete { id, yes } => views::delete(&client, id, yes).await,
    }
}
