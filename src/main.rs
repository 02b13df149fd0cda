use clap::Parser;
use miette::Result;
use tracing_subscriber::{fmt, EnvFilter};
use vinsight::cli::{Cli, Commands, GlobalOpts};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    init_tracing(&global);

    match cli.command {
        Commands::Add(args) => vinsight::cli::commands::add::run(args, &global),
        Commands::List(args) => vinsight::cli::commands::list::run(args, &global),
        Commands::Show(args) => vinsight::cli::commands::show::run(args, &global),
        Commands::Edit(args) => vinsight::cli::commands::edit::run(args, &global),
        Commands::Delete(args) => vinsight::cli::commands::delete::run(args, &global),
        Commands::Search(args) => vinsight::cli::commands::search::run(args, &global),
        Commands::Export(args) => vinsight::cli::commands::export::run(args, &global),
        Commands::Config(cmd) => vinsight::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => vinsight::cli::commands::completions::run(args),
    }
}

/// Log to stderr; RUST_LOG wins over -v/-q
fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(global.verbose)
        .try_init();
}
