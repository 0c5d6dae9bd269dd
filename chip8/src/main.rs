use clap::Parser;

mod config;
mod keymap;
mod run;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = config::Config::parse();
    run::run(config)
}
