//! CLI entry point for albatross-launcher
//!
//! Provides command-line interface for listing tools, printing or
//! watching the clock, activating a tool headlessly, and launching the GUI.

use albatross_launcher::core::{
    registry, watch::watch as watch_ticks, Activation, ClockState, Dispatcher, ManualClock,
    SystemClock, TimeSource, ToolId, View,
};
use albatross_launcher::ui::{opener::GioOpener, timer::GlibScheduler, App, LaunchOptions};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use colored::*;

#[derive(Parser)]
#[command(name = "albatross-launcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the landing page window (default)
    Gui {
        /// View to open on (landing, viewer, shuffle, manual, merge)
        #[arg(long, default_value = "landing")]
        view: View,

        /// Show cards and pages without fade-in animations
        #[arg(long)]
        no_animations: bool,
    },

    /// List all tools in display order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current time and date
    Clock {
        /// Keep printing once per second
        #[arg(short, long)]
        watch: bool,

        /// Stop watching after this many updates
        #[arg(long, requires = "watch", value_parser = clap::value_parser!(u32).range(1..))]
        ticks: Option<u32>,

        /// Format this local date-time instead of now (e.g. 2025-03-15T15:04:05)
        #[arg(long, conflicts_with = "watch")]
        at: Option<NaiveDateTime>,
    },

    /// Activate a tool as if its card was clicked
    Open {
        /// Tool identifier (google-sheets, viewer, shuffle, manual, merge)
        tool: ToolId,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command.unwrap_or(Commands::Gui {
        view: View::Landing,
        no_animations: false,
    }) {
        Commands::Gui {
            view,
            no_animations,
        } => {
            let options = LaunchOptions {
                initial_view: view,
                animations: !no_animations,
            };
            let code = App::new(options).run();
            if code != glib::ExitCode::SUCCESS {
                anyhow::bail!("GUI exited with {:?}", code);
            }
        }
        Commands::List { json } => list_tools(json)?,
        Commands::Clock { watch, ticks, at } => {
            if watch {
                watch_clock(ticks);
            } else {
                let clock: Box<dyn TimeSource> = match at {
                    Some(at) => Box::new(ManualClock::new(at)),
                    None => Box::new(SystemClock),
                };
                print_clock(&ClockState::at(clock.now()));
            }
        }
        Commands::Open { tool } => open_tool(tool),
    }

    Ok(())
}

/// List all tools in the registry
fn list_tools(json: bool) -> anyhow::Result<()> {
    let tools = registry::tools();

    if json {
        println!("{}", serde_json::to_string_pretty(tools)?);
        return Ok(());
    }

    println!("{}", "Albatross tools\n".bold());

    for (i, tool) in tools.iter().enumerate() {
        let target = if tool.id.is_external() {
            "external".magenta()
        } else {
            "view".green()
        };

        println!(
            "{} {} {} [{}]",
            format!("{}.", i + 1).dimmed(),
            format!("{:<14}", tool.id.as_str()).cyan().bold(),
            tool.name,
            target,
        );
        println!("   {}", tool.description.dimmed());
    }

    println!("\n{} Total: {} tools", "✓".green(), tools.len());

    Ok(())
}

fn print_clock(state: &ClockState) {
    println!("{}  {}", state.time_text.cyan().bold(), state.date_text);
}

/// Drive the clock watch on a bare GLib main loop and print every update
fn watch_clock(ticks: Option<u32>) {
    let main_loop = glib::MainLoop::new(None, false);

    let loop_for_finish = main_loop.clone();
    let clock_watch = watch_ticks(GlibScheduler, SystemClock, ticks, print_clock, move || {
        loop_for_finish.quit()
    });

    // A one-tick watch is finished before the loop would even run
    if !clock_watch.is_finished() {
        main_loop.run();
    }

    clock_watch.stop();
    log::debug!("Printed {} clock updates", clock_watch.published());
}

/// Activate a tool without a window
fn open_tool(tool: ToolId) {
    let dispatcher = Dispatcher::new(GioOpener, |_view| {});

    match dispatcher.activate(tool) {
        Activation::Navigated(view) => {
            println!(
                "{} {} → host view '{}'",
                "→".cyan(),
                tool.as_str().bold(),
                view
            );
        }
        Activation::ExternalOpened(url) => {
            println!("{} Opening {}", "→".cyan(), url.underline());
        }
    }
}
