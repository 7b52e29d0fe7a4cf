//! Builds the reference frustum, tilts it 60 degrees about X for a view of
//! the bottom cap, and hands it to the summary renderer.
//!
//! Run with `RUST_LOG=info` (or `debug`) to see the output.

use anyhow::Context;
use config::constants::GlobalConfig;
use frustum_mesh::{transform, Axis, FrustumSpec, Renderer, SummaryRenderer};
use glam::DVec3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GlobalConfig::default();
    let spec = FrustumSpec::from_config(&config, DVec3::ZERO, 5.0, 4.0, 2.0);

    let mesh = spec.build().context("building frustum")?;
    let mesh = transform::rotate(&mesh, Axis::X, 60.0).context("rotating frustum")?;

    let mut renderer = SummaryRenderer::new();
    renderer.render(&mesh).context("rendering frustum")?;

    log::info!("rendered {} mesh(es)", renderer.rendered());
    Ok(())
}
