use anyhow::Result;
use clap::Parser;
use png2obj::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let (dst, written) = png2obj::run(&cli)?;
    println!("{} created ({written} bytes).", dst.display());
    Ok(())
}
