// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod compose;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use compose::{DraftArgs, compose, render_findings};
use serde::Serialize;
use sportshub_api::{
    ApiError, ApplicationDecision, ApplicationRecord, DEFAULT_PAGE_SIZE, ListQuery, Operation,
    RecruitApi, RecruitClient, RecruitPost, Session, apply_to_post, cancel_application,
    count_recruiting, create_post, delete_post, filter_posts, list_applications, list_posts,
    load_draft, received_applications, review_application, sent_applications, submission_gateway,
    translate_core_error, translate_domain_error, update_post,
};
use sportshub_domain::{
    DomainError, PostDetails, PostDraft, RecruitCategory, ValidationContext, parse_timezone,
    validate_for_submit,
};
use sportshub_recruit::{
    Command, SubmissionGateway, SystemClock, TransitionResult, validation_context,
};
use std::process::ExitCode;
use tracing::{error, info};

/// Sportshub recruit - compose and publish recruitment posts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the recruitment backend
    #[arg(long, env = "SPORTSHUB_API_URL", default_value = "http://localhost:8084")]
    api_url: String,

    /// IANA timezone game dates and times are entered in
    #[arg(long, env = "SPORTSHUB_TIMEZONE", default_value = "Asia/Seoul")]
    timezone: String,

    /// Team of the signed-in profile
    #[arg(long, env = "SPORTSHUB_TEAM_ID")]
    team_id: Option<i64>,

    /// Signed-in profile
    #[arg(long, env = "SPORTSHUB_PROFILE_ID")]
    profile_id: Option<i64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List posts on a board
    List {
        /// MERCENARY, TEAM or MATCH
        #[arg(long)]
        category: RecruitCategory,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        /// Keep posts whose title, region or content contains this text
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show a single post
    Show {
        /// Post id
        post_id: i64,
    },
    /// Check a draft without submitting it
    Validate {
        /// MERCENARY, TEAM or MATCH
        #[arg(long)]
        category: RecruitCategory,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Publish a new post
    Create {
        /// MERCENARY, TEAM or MATCH
        #[arg(long)]
        category: RecruitCategory,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Edit an existing post
    Update {
        /// Post id
        post_id: i64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a post
    Delete {
        /// Post id
        post_id: i64,
    },
    /// Apply to a post
    Apply {
        /// Post id
        post_id: i64,
        /// Note to the author
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Manage applications
    Applications {
        #[command(subcommand)]
        action: ApplicationAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ApplicationAction {
    /// List applications to a post
    List {
        /// Post id
        post_id: i64,
    },
    /// List applications you have sent
    Sent,
    /// List applications to your posts
    Received,
    /// Accept an application
    Accept {
        /// Post id
        post_id: i64,
        /// Application id
        application_id: i64,
    },
    /// Reject an application
    Reject {
        /// Post id
        post_id: i64,
        /// Application id
        application_id: i64,
    },
    /// Withdraw an application you sent
    Cancel {
        /// Post id
        post_id: i64,
        /// Application id
        application_id: i64,
    },
}

/// Errors surfaced to the terminal.
#[derive(Debug)]
enum CliError {
    Api(ApiError),
    Output(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{}", err.user_message()),
            Self::Output(err) => write!(f, "Failed to render output: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Api(translate_domain_error(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Applies flag edits to `draft` and prints every finding to stderr.
fn edit_draft(
    draft: PostDraft,
    args: &DraftArgs,
    context: &ValidationContext,
) -> Result<PostDraft, CliError> {
    let current: PostDetails = draft.details.clone();
    let commands: Vec<Command> = args.commands(&current)?;
    let result: TransitionResult =
        compose(draft, commands, context).map_err(translate_core_error)?;
    for line in render_findings(&result.report) {
        eprintln!("{line}");
    }
    Ok(result.new_draft)
}

async fn run_applications(
    client: &RecruitClient,
    session: &Session,
    action: ApplicationAction,
) -> Result<(), CliError> {
    match action {
        ApplicationAction::List { post_id } => {
            print_json(&list_applications(client, post_id).await?)
        }
        ApplicationAction::Sent => print_json(&sent_applications(client, session).await?),
        ApplicationAction::Received => {
            print_json(&received_applications(client, session).await?)
        }
        ApplicationAction::Accept {
            post_id,
            application_id,
        } => review(client, session, post_id, application_id, ApplicationDecision::Accept).await,
        ApplicationAction::Reject {
            post_id,
            application_id,
        } => review(client, session, post_id, application_id, ApplicationDecision::Reject).await,
        ApplicationAction::Cancel {
            post_id,
            application_id,
        } => {
            cancel_application(client, post_id, application_id, session).await?;
            eprintln!("신청이 취소되었습니다.");
            Ok(())
        }
    }
}

async fn review(
    client: &RecruitClient,
    session: &Session,
    post_id: i64,
    application_id: i64,
    decision: ApplicationDecision,
) -> Result<(), CliError> {
    let record: ApplicationRecord =
        review_application(client, post_id, application_id, decision, session).await?;
    eprintln!("{}", decision.confirmation());
    print_json(&record)
}

async fn run(args: Args) -> Result<(), CliError> {
    let timezone: Tz = parse_timezone(&args.timezone)?;
    let client: RecruitClient = RecruitClient::new(&args.api_url);
    let session: Session = Session::new(args.profile_id, args.team_id);
    let clock: SystemClock = SystemClock;

    info!(api_url = %client.base_url(), timezone = %timezone, "Using recruitment backend");

    match args.action {
        Action::List {
            category,
            page,
            size,
            search,
        } => {
            let posts: Vec<RecruitPost> = filter_posts(
                list_posts(&client, ListQuery { category, page, size }).await?,
                &search,
            );
            eprintln!(
                "{} posts, {} recruiting",
                posts.len(),
                count_recruiting(&posts)
            );
            print_json(&posts)
        }
        Action::Show { post_id } => {
            let post: RecruitPost = client.fetch_post(post_id).await?;
            print_json(&post)
        }
        Action::Validate { category, draft } => {
            let context: ValidationContext = validation_context(&clock, timezone);
            let draft: PostDraft = edit_draft(PostDraft::new(category), &draft, &context)?;
            validate_for_submit(&draft, &context)?;
            println!("ok");
            Ok(())
        }
        Action::Create { category, draft } => {
            let edit_context: ValidationContext = validation_context(&clock, timezone);
            let draft: PostDraft = edit_draft(PostDraft::new(category), &draft, &edit_context)?;
            let mut gateway: SubmissionGateway = submission_gateway(Operation::Create);
            let post: RecruitPost = create_post(
                &client,
                &mut gateway,
                &draft,
                &session,
                &validation_context(&clock, timezone),
            )
            .await?;
            print_json(&post)
        }
        Action::Update { post_id, draft } => {
            let existing: PostDraft = load_draft(&client, post_id).await?;
            let edit_context: ValidationContext = validation_context(&clock, timezone);
            let draft: PostDraft = edit_draft(existing, &draft, &edit_context)?;
            let mut gateway: SubmissionGateway = submission_gateway(Operation::Update);
            let post: RecruitPost = update_post(
                &client,
                &mut gateway,
                post_id,
                &draft,
                &session,
                &validation_context(&clock, timezone),
            )
            .await?;
            print_json(&post)
        }
        Action::Delete { post_id } => {
            delete_post(&client, post_id, &session).await?;
            println!("deleted {post_id}");
            Ok(())
        }
        Action::Apply { post_id, message } => {
            let record: ApplicationRecord =
                apply_to_post(&client, post_id, &message, &session).await?;
            print_json(&record)
        }
        Action::Applications { action } => run_applications(&client, &session, action).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let CliError::Api(api_err) = &err {
                error!(error = %api_err, "Command failed");
            }
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
