//! CLI argument definitions using clap
//!
//! Commands:
//! - blog list [--page N] [--page-size N] [--author S] [--from D] [--to D] [--search S]
//! - blog show <id>
//! - blog new --title T --content C --author A
//! - blog edit <id> [--title T] [--content C] [--author A]
//! - blog delete <id> [--yes]

use clap::{Parser, Subcommand};

/// Command-line client for the blog API
#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the blog API server
    #[arg(
        long,
        global = true,
        env = "BLOG_API_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List posts, paged and filtered
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<i64>,

        /// Posts per page (max 100)
        #[arg(long)]
        page_size: Option<i64>,

        /// Only posts whose author contains this substring
        #[arg(long)]
        author: Option<String>,

        /// Only posts created at or after this date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only posts created at or before this date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only posts whose title or content contains this substring
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one post
    Show { id: i32 },

    /// Create a post
    New {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        #[arg(long)]
        author: String,
    },

    /// Edit an existing post; omitted fields keep their current values
    Edit {
        id: i32,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        author: Option<String>,
    },

    /// Delete a post
    Delete {
        id: i32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
