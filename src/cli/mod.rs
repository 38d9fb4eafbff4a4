pub mod output;

use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use output::{write_overview, write_today, Palette};
use tracing::{info, level_filters::LevelFilter};

use crate::{
    activity::NewActivity,
    client::{
        http::{HttpCollaborator, DEFAULT_SERVER_URL},
        ActivityCollaborator,
    },
    controller::LifecycleController,
    utils::{
        clock::{Clock, DefaultClock},
        dir::create_application_path,
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "ptrack", version, long_about = None)]
#[command(about = "Track how long your activities take", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        global = true,
        env = "PTRACK_SERVER",
        default_value = DEFAULT_SERVER_URL,
        help = "Base url of the activity backend"
    )]
    server: String,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default uses $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Print logs to the console")]
    log: bool,
    #[arg(long = "log-filter", global = true, help = "Level of logs to keep")]
    log_filter: Option<LevelFilter>,
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Show activities in progress and finished ones")]
    List,
    #[command(about = "Start a new activity")]
    Start {
        #[arg(help = "Activity title, at most 100 characters")]
        title: String,
        #[arg(
            short,
            long,
            default_value = "",
            help = "Activity description, at most 200 characters"
        )]
        description: String,
    },
    #[command(about = "End an activity that is in progress")]
    End {
        #[arg(help = "Id of the activity, as shown by `list`")]
        id: String,
    },
    #[command(about = "Print today's date")]
    Today,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = create_application_path(args.dir.as_deref())?;
    let logging_level = args
        .log_filter
        .or(if args.log { Some(LevelFilter::TRACE) } else { None });
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let collaborator = HttpCollaborator::new(&args.server)?;
    info!("Using backend {}", collaborator.base_url());
    let controller = LifecycleController::new(collaborator);
    let palette = Palette::new(!args.no_color && io::stdout().is_terminal());

    process_command(
        args.commands,
        &controller,
        &DefaultClock,
        &mut io::stdout().lock(),
        palette,
    )
    .await
}

/// Runs a single command against `controller` and prints the result into `out`.
pub async fn process_command<C: ActivityCollaborator, W: Write>(
    command: Commands,
    controller: &LifecycleController<C>,
    clock: &dyn Clock,
    out: &mut W,
    palette: Palette,
) -> Result<()> {
    match command {
        Commands::List => controller.refresh().await?,
        Commands::Start { title, description } => {
            let activity = NewActivity::new(&title, &description).map_err(|e| {
                Args::command().error(clap::error::ErrorKind::ValueValidation, e.to_string())
            })?;
            controller.start(activity).await?;
        }
        Commands::End { id } => controller.end(&id.into()).await?,
        Commands::Today => {
            write_today(out, &Local, clock.time(), palette)?;
            return Ok(());
        }
    }

    write_overview(
        out,
        &Local,
        clock.time(),
        &controller.active(),
        &controller.completed(),
        palette,
    )?;
    Ok(())
}
