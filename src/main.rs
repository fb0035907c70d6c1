mod settings; // brings `settings.rs` in as `crate::settings`

use anyhow::Context;
use planar_geometry::Point;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let demo = settings::load_settings().context("Failed to load demo settings")?;
    info!(?demo, "Demo settings loaded");

    let p1 = Point::new(demo.p1[0], demo.p1[1]);
    let p2 = Point::new(demo.p2[0], demo.p2[1]);

    p1.print();
    p2.print();

    (p1 + p2).print();

    info!("Demo complete");
    Ok(())
}
