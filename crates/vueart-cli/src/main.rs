//! VueArt CLI - Interactive scaffolding for Vue, Vuetify, and Nuxt projects

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(name = "vueart")]
#[command(about = "Interactive scaffolding for Vue, Vuetify, and Nuxt projects")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt: cancellation is a normal outcome, exit 0
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        println!();
        println!("{}", "Operation canceled by user.".yellow());
        std::process::exit(0);
    })
    .ok();

    let _args = Args::parse();

    let result = vueart_core::run().await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
