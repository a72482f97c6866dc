use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use smartedu::cli::{App, today};
use smartedu::components::ListFilters;
use smartedu::config::LoggingConfig;
use smartedu::models::ids::{ChapterId, ClassId, SubjectId, TopicId, VideoId};
use smartedu::observability::{init_basic_console_logging, init_file_logging, log_sink};
use tracing::info;

#[derive(Parser)]
#[command(name = "smartedu")]
#[command(about = "SmartEdu Hub client - browse your school from the terminal", long_about = None)]
struct Cli {
    /// Session JSON file (defaults to SMARTEDU_* environment variables)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the endpoint receiving forwarded client logs
    LogSink {
        #[arg(long, default_value = "127.0.0.1:4000")]
        addr: SocketAddr,
    },

    #[command(flatten)]
    Client(ClientCommand),
}

#[derive(Subcommand)]
enum ClientCommand {
    /// Show the shell and navigation for a path
    Shell {
        #[arg(default_value = "/")]
        path: String,
    },
    /// List students
    Students {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long)]
        class: Option<ClassId>,

        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Page through results with prompts
        #[arg(short, long)]
        interactive: bool,
    },
    /// List subjects
    Subjects,
    /// List classes
    Classes,
    /// List academic sessions and the selectable date range
    Sessions,
    /// List assessments for a subject
    Assessments {
        #[arg(short, long)]
        subject: Option<SubjectId>,
    },
    /// Show the attendance register of a class
    Attendance {
        #[arg(short, long)]
        class: Option<ClassId>,

        /// Register date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Show a timetable (yours, or a class's)
    Schedule {
        #[arg(short, long)]
        class: Option<ClassId>,
    },
    /// Browse library content
    Library {
        #[arg(long)]
        subject: Option<SubjectId>,

        #[arg(long)]
        chapter: Option<ChapterId>,

        #[arg(long)]
        topic: Option<TopicId>,
    },
    /// Explore resources of a class, or the subject catalogue
    Explore {
        #[arg(short, long)]
        class: Option<ClassId>,
    },
    /// Show your dashboard summary
    Dashboard,
    /// Open a video
    Play { video: Option<VideoId> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let logging = LoggingConfig::from_env();

    let command = match cli.command {
        Commands::LogSink { addr } => return run_log_sink(&logging, addr).await,
        Commands::Client(command) => command,
    };

    init_basic_console_logging(&logging);
    let mut app = App::bootstrap(cli.session_file.as_deref())?;

    let output = match command {
        ClientCommand::Shell { path } => app.shell(&path),
        ClientCommand::Students {
            search,
            class,
            page,
            interactive,
        } => {
            let mut filters = ListFilters::new("class_id");
            filters.set_search(search.unwrap_or_default());
            filters.set_filter(class);
            filters.set_page(page);
            if interactive {
                app.students_interactive(filters).await?;
                String::new()
            } else {
                app.students(&filters).await
            }
        }
        ClientCommand::Subjects => app.subjects().await,
        ClientCommand::Classes => app.classes().await,
        ClientCommand::Sessions => app.sessions(today()).await,
        ClientCommand::Assessments { subject } => app.assessments(subject).await,
        ClientCommand::Attendance { class, date } => {
            let today = today();
            app.attendance(class, date.unwrap_or(today), today).await
        }
        ClientCommand::Schedule { class } => app.schedule(class).await,
        ClientCommand::Library {
            subject,
            chapter,
            topic,
        } => app.library(subject, chapter, topic).await,
        ClientCommand::Explore { class } => app.explore(class).await,
        ClientCommand::Dashboard => app.dashboard().await,
        ClientCommand::Play { video } => app.play(video).await,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    app.flush().await;
    Ok(())
}

async fn run_log_sink(logging: &LoggingConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let _guard = init_file_logging(logging);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, log_dir = %logging.log_dir, "Log sink listening");

    axum::serve(listener, log_sink::router())
        .await
        .context("Log sink stopped")
}
