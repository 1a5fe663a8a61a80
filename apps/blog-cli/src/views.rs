//! The three views: list, detail, and the shared create/edit form.

use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::client::{BlogApiClient, ClientError, ListOptions};

/// List view: one page of posts plus paging hints, disabled at the bounds.
pub async fn list(client: &BlogApiClient, opts: ListOptions) -> anyhow::Result<()> {
    let page = client.list(&opts).await.map_err(report)?;

    if page.items.is_empty() {
        println!("No posts found.");
    }
    for post in &page.items {
        println!(
            "{:>5}  {}  by {} ({})",
            post.id,
            post.title,
            post.author,
            post.created_at.format("%Y-%m-%d %H:%M UTC"),
        );
    }

    let pages = total_pages(page.total, page.page_size);
    println!("page {} of {} ({} total)", page.page, pages, page.total);
    if page.page > 1 {
        println!("prev: --page {}", page.page - 1);
    }
    if page.page < pages {
        println!("next: --page {}", page.page + 1);
    }

    Ok(())
}

/// Detail view: one post by id.
pub async fn show(client: &BlogApiClient, id: i32) -> anyhow::Result<()> {
    let post = client.get(id).await.map_err(report)?;
    print_detail(&post);
    Ok(())
}

/// Form view, create mode.
pub async fn create(
    client: &BlogApiClient,
    title: String,
    content: String,
    author: String,
) -> anyhow::Result<()> {
    let req = CreateBlogPostRequest {
        title,
        content,
        author,
    };
    let post = client.create(&req).await.map_err(report)?;

    println!("Created post {}.", post.id);
    print_detail(&post);
    Ok(())
}

/// Form view, edit mode: pre-load the existing post, overlay the provided
/// fields, then replace wholesale.
pub async fn edit(
    client: &BlogApiClient,
    id: i32,
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
) -> anyhow::Result<()> {
    let existing = client.get(id).await.map_err(report)?;

    let req = UpdateBlogPostRequest {
        id,
        title: title.unwrap_or(existing.title),
        content: content.unwrap_or(existing.content),
        author: author.unwrap_or(existing.author),
    };
    let post = client.update(&req).await.map_err(report)?;

    println!("Updated post {}.", post.id);
    print_detail(&post);
    Ok(())
}

/// Delete with confirmation; `yes` skips the prompt.
pub async fn delete(client: &BlogApiClient, id: i32, yes: bool) -> anyhow::Result<()> {
    let post = client.get(id).await.map_err(report)?;

    if !yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", post.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    client.delete(id).await.map_err(report)?;
    println!("Deleted post {id}.");
    Ok(())
}

fn print_detail(post: &BlogPostResponse) {
    println!("#{} {}", post.id, post.title);
    println!("by {}", post.author);
    println!(
        "created {}  updated {}",
        post.created_at.to_rfc3339(),
        post.updated_at.to_rfc3339()
    );
    println!();
    println!("{}", post.content);
}

/// Total page count for the envelope; an empty result still has one page.
fn total_pages(total: u64, page_size: u64) -> u64 {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Surface client errors the way the views present them: validation failures
/// per field, everything else as a single message.
fn report(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Validation(errors) => {
            eprintln!("The post was rejected:");
            for (field, messages) in &errors {
                for message in messages {
                    eprintln!("  {field}: {message}");
                }
            }
            anyhow::anyhow!("validation failed")
        }
        other => anyhow::anyhow!(other),
    }
}
