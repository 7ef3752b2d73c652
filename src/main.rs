use recipe_finder::{search_to_text, AppConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Search terms on the command line: print the results instead of opening a window
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let text = runtime.block_on(search_to_text(&config, &args.join(" ")))?;
        println!("{}", text);
        return Ok(());
    }

    run_window(config, runtime.handle().clone())
}

#[cfg(feature = "gui")]
fn run_window(
    config: AppConfig,
    runtime: tokio::runtime::Handle,
) -> Result<(), Box<dyn std::error::Error>> {
    recipe_finder::gui::run(config, runtime)
}

#[cfg(not(feature = "gui"))]
fn run_window(
    _config: AppConfig,
    _runtime: tokio::runtime::Handle,
) -> Result<(), Box<dyn std::error::Error>> {
    log::error!("Built without the gui feature, pass search terms as arguments");
    Err("Please provide search terms as arguments".into())
}
