use anyhow::Context;
use appshots::{jobs, Cli, Commands, JobConfig, JobReport};
use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let root = std::env::current_dir().context("Cannot determine the working directory")?;
    let config = JobConfig {
        show_progress: !cli.quiet,
        ..Default::default()
    };

    match cli.command {
        Commands::Screenshots => {
            let report = jobs::screenshots(&root, config).context("Screenshot resize failed")?;
            print_summary(&report);
        }
        Commands::Ipad => {
            let report = jobs::ipad(&root, config).context("iPad screenshot derivation failed")?;
            print_summary(&report);
            if !report.saved.is_empty() {
                println!(
                    "Upload the *_iPad13_2064x2752.png files to App Store Connect for iPad Pro 13\"."
                );
            }
        }
        Commands::Icon => {
            jobs::icon(&root, config).context("App icon preparation failed")?;
        }
    }

    Ok(())
}

fn print_summary(report: &JobReport) {
    if report.skipped.is_empty() {
        println!("Done. {} files written.", report.saved.len());
    } else {
        println!(
            "Done. {} files written, {} sources skipped.",
            report.saved.len(),
            report.skipped.len()
        );
    }
}
