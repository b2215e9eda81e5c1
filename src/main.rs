//! Scripted demo: long-press an item in one strip and drop it into another.
//!
//! Usage: `gridshift-demo [config.json]`. Set `RUST_LOG=gridshift=trace` to
//! see every sample.

use anyhow::{Context, Result};
use gridshift::gesture::{LongPressRecognizer, PointerInput};
use gridshift::session::{outcome_of, DragCoordinator, GestureDriver};
use gridshift::surface::{CollectionSurface, FlowLayout, VecDataSource};
use gridshift::{DragConfig, Point, Rect, Size};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gridshift=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => DragConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DragConfig::default(),
    };

    let layout = FlowLayout::horizontal(Size::new(50.0, 50.0), 10.0);
    let top = VecDataSource::shared(vec!["alpha", "beta", "gamma"]);
    let bottom = VecDataSource::shared(vec!["delta"]);

    let mut recognizer = LongPressRecognizer::from_config(&config);
    let mut driver: GestureDriver<&'static str> = GestureDriver::new(DragCoordinator::new(config)?);
    driver.register(CollectionSurface::new(
        Rect::new(0.0, 0.0, 300.0, 50.0),
        layout,
        top.clone(),
    ))?;
    driver.register(CollectionSurface::new(
        Rect::new(0.0, 100.0, 300.0, 50.0),
        layout,
        bottom.clone(),
    ))?;

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    let script = [
        (0, Some(PointerInput::Down(Point::new(25.0, 25.0)))),
        (500, None),
        (550, Some(PointerInput::Move(Point::new(25.0, 80.0)))),
        (600, Some(PointerInput::Move(Point::new(25.0, 125.0)))),
        (650, Some(PointerInput::Move(Point::new(85.0, 125.0)))),
        (700, Some(PointerInput::Up(Point::new(85.0, 125.0)))),
    ];

    for (ms, input) in script {
        let now = at(ms);
        let sample = match input {
            Some(input) => recognizer.process(input, now),
            None => recognizer.check_long_press(now),
        };

        let mut updates = driver.tick(now);
        if let Some(sample) = sample {
            updates.extend(driver.handle(sample));
        }
        for update in &updates {
            info!(?update, "Update");
        }
        if let Some(outcome) = outcome_of(&updates) {
            info!(?outcome, "Drag finished");
        }
    }

    info!(top = ?top.lock().items(), bottom = ?bottom.lock().items(), "Final sequences");
    Ok(())
}
