//! Command-line client for sbom-scanner.
//!
//! Queries the daemon on this host and prints its status followed by the
//! component inventory. Takes no arguments.

use anyhow::{Context, Result};

use sbom_scanner::api_client::Client;
use sbom_scanner::inventory::Component;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::local();

    let status = client
        .status()
        .await
        .with_context(|| format!("querying {}", client.base_url()))?;
    println!("{} {} ({})", status.service, status.version, status.status);

    let components = client.components().await.context("listing components")?;
    print!("{}", render_table(&components));

    Ok(())
}

fn render_table(components: &[Component]) -> String {
    const HEADER: [&str; 4] = ["NAME", "VERSION", "LICENSE", "SUPPLIER"];

    let mut widths = HEADER.map(str::len);
    for c in components {
        for (width, field) in widths.iter_mut().zip(fields(c)) {
            *width = (*width).max(field.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(HEADER).chain(components.iter().map(fields)) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(field, width)| format!("{field:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn fields(c: &Component) -> [&str; 4] {
    [&c.name, &c.version, &c.license, &c.supplier]
}
