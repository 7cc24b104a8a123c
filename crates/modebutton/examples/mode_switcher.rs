//! Mode Switcher Example
//!
//! Builds a mode button with Hour/Day/Week/Month/Year segments plus the
//! content of an "Open" push button, drives it with synthetic pointer
//! events, and paints it into a recording renderer. A separate "Remove"
//! button removes whatever segment is selected.
//!
//! Run with: cargo run -p modebutton --example mode_switcher [config.toml]
//!
//! Set `RUST_LOG=modebutton=debug` to see selection changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use modebutton::prelude::*;
use modebutton::widget::{LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent};
use tracing_subscriber::EnvFilter;

fn hover_and_press(modes: &mut ModeButton, x: f32) {
    let pos = Point::new(x, 12.0);
    modes.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(pos)));
    modes.event(&mut WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, pos)));
}

fn click(button: &mut PushButton) {
    let pos = Point::new(4.0, 4.0);
    button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, pos)));
    button.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, pos)));
}

fn paint(modes: &mut ModeButton, style: &PaletteStyle) {
    let mut renderer = RecordingRenderer::new();
    FrameRenderer::render(modes, &mut renderer, style);
    println!(
        "painted {} commands, segments: {:?}",
        renderer.commands().len(),
        renderer.texts()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ModeButtonConfig::load(path)?,
        None => ModeButtonConfig::default(),
    };
    let style = config.style();

    let mut modes = ModeButton::with_config(&config);
    modes.changed.connect(|&index| tracing::info!(index, "switched"));
    modes.removed.connect(|id| tracing::info!(?id, "segment removed"));

    for text in ["Hour", "Day", "Week", "Month", "Year"] {
        modes.append(Label::new(text));
    }
    modes.append_button(PushButton::new("Open"));
    modes.set_geometry(Rect::new(12.0, 12.0, 300.0, 28.0));

    let remove_requested = Arc::new(AtomicBool::new(false));
    let mut remove = PushButton::new("Remove");
    remove.set_geometry(Rect::new(12.0, 46.0, 300.0, 28.0));
    let flag = remove_requested.clone();
    remove.clicked.connect(move |_| flag.store(true, Ordering::SeqCst));

    paint(&mut modes, &style);

    // Week: 300px over six segments is 50px per slice.
    hover_and_press(&mut modes, 125.0);
    println!("selected: {}", modes.selected());
    paint(&mut modes, &style);

    click(&mut remove);
    if remove_requested.swap(false, Ordering::SeqCst) {
        let selected = modes.selected();
        if selected >= 0 {
            let widget = modes.remove(selected)?;
            println!(
                "removed segment {selected} (object {:?}), selection is now {}",
                widget.object_id(),
                modes.selected()
            );
        }
    }

    modes.event(&mut WidgetEvent::Leave(LeaveEvent::new()));
    paint(&mut modes, &style);

    Ok(())
}
