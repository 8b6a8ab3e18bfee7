use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use neonkit::{
    app::App,
    infrastructure::{cli::Cli, config::Config, tui::Tui},
    presentation::components::Page,
    utils::{initialize_logging, initialize_panic_handler},
};

fn start_page(args: &Cli) -> Result<Page> {
    match &args.page {
        Some(name) => name
            .parse::<Page>()
            .map_err(|_| eyre!("Unknown page: {name}")),
        None if args.skip_boot => Ok(Page::Controls),
        None => Ok(Page::Boot),
    }
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = Cli::parse();
    let config = Config::new()?;
    let page = start_page(&args)?;

    let mut tui = Tui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut app = App::new(config, page)?;
    app.run(&mut tui).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
