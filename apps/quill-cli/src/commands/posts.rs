use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use quill_client::PostsApi;
use quill_client::views::{BrowseView, CreateForm, Field, Submission};

use crate::render;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post id
    pub id: Uuid,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short, long)]
    pub title: String,

    #[arg(short, long)]
    pub content: String,

    #[arg(short, long)]
    pub author: String,

    /// Comma separated, e.g. "tech, life"
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Post id
    pub id: Uuid,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long)]
    pub author: Option<String>,

    /// Comma separated; replaces all existing tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Post id
    pub id: Uuid,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Loads the list, failing with the view's banner if it could not.
async fn browse<A: PostsApi + ?Sized>(api: &A) -> Result<BrowseView> {
    let mut view = BrowseView::new();
    view.load(api).await;
    if let Some(error) = view.error() {
        bail!("{error}");
    }
    Ok(view)
}

pub async fn list<A: PostsApi + ?Sized>(api: &A) -> Result<()> {
    let view = browse(api).await?;
    print!("{}", render::cards(&view.cards()));
    Ok(())
}

pub async fn show<A: PostsApi + ?Sized>(api: &A, args: ShowArgs) -> Result<()> {
    let mut view = browse(api).await?;
    if !view.open_detail(args.id) {
        bail!("Post not found");
    }
    let post = view.detail().ok_or_else(|| anyhow!("Post not found"))?;
    print!("{}", render::detail(post));
    Ok(())
}

pub async fn create<A: PostsApi + ?Sized>(api: &A, args: CreateArgs) -> Result<()> {
    let mut form = CreateForm::new();
    form.set_title(args.title);
    form.set_content(args.content);
    form.set_author(args.author);
    form.set_tags(args.tags.unwrap_or_default());

    match form.submit(api).await {
        Submission::Created {
            post,
            redirect_after,
        } => {
            println!(
                "{} Post created successfully! Redirecting...",
                "✓".green()
            );
            tracing::debug!(post_id = %post.id, "Waiting before showing the list");
            tokio::time::sleep(redirect_after).await;
            println!();
            list(api).await
        }
        Submission::Invalid | Submission::Failed => {
            eprint!("{}", render::form_errors(form.errors()));
            bail!("Post was not created")
        }
    }
}

pub async fn edit<A: PostsApi + ?Sized>(api: &A, args: EditArgs) -> Result<()> {
    let mut view = browse(api).await?;
    if !view.open_edit(args.id) {
        bail!("Post not found");
    }

    let dialog = view
        .edit_dialog_mut()
        .ok_or_else(|| anyhow!("Post not found"))?;
    let changes = [
        (Field::Title, args.title),
        (Field::Content, args.content),
        (Field::Author, args.author),
        (Field::Tags, args.tags),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            dialog.set(field, value);
        }
    }

    if !view.submit_edit(api).await {
        if let Some(dialog) = view.edit_dialog() {
            eprint!("{}", render::form_errors(&dialog.errors));
        }
        bail!("Post was not updated");
    }

    println!("{} Post updated", "✓".green());
    view.open_detail(args.id);
    if let Some(post) = view.detail() {
        print!("{}", render::detail(post));
    }
    Ok(())
}

pub async fn delete<A: PostsApi + ?Sized>(api: &A, args: DeleteArgs) -> Result<()> {
    let mut view = browse(api).await?;
    if !view.request_delete(args.id) {
        bail!("Post not found");
    }

    if !args.yes {
        let title = view
            .pending_delete()
            .map(|p| p.title.clone())
            .unwrap_or_default();
        if !confirm(&format!(
            "Delete \"{title}\"? This action cannot be undone."
        ))? {
            view.cancel_delete();
            println!("Cancelled");
            return Ok(());
        }
    }

    view.confirm_delete(api).await?;
    println!("{} Post deleted successfully", "✓".green());
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
