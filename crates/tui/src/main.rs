mod renderer;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut light = false;
    let mut path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--light" => light = true,
            "--help" | "-h" => {
                eprintln!("Usage: unfold [page.json] [--light]");
                return Ok(());
            }
            other => path = Some(PathBuf::from(other)),
        }
    }

    let page = match &path {
        Some(p) => {
            let data = std::fs::read(p)?;
            unfold_core::content::parse_page(&data)?
        }
        None => unfold_core::content::default_page(),
    };
    tracing::debug!(brand = %page.meta.brand, "page loaded");

    renderer::run_tui(page, light)?;
    Ok(())
}
