//! Modal Demo
//!
//! Drives an animated modal through a show/hide cycle at 60fps and logs each
//! frame's visibility, card style and layout. Pass a TOML file to try other
//! presets:
//!
//! Run with: cargo run -p scrim_modal --example modal_demo -- [modal.toml]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use scrim_modal::prelude::*;

const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ModalConfig::load(path)?,
        None => ModalConfig {
            animation_type: AnimationType::FlipAndScale,
            card_position: CardPosition::Bottom,
            backdrop: BackdropConfig::default().fade_with_content(true),
            ..ModalConfig::default()
        },
    };

    let viewport = Size::new(390.0, 844.0);
    let scheduler = AnimationScheduler::new();

    // The host owns visibility; the backdrop only asks for dismissal
    let dismiss_requested = Arc::new(AtomicBool::new(false));
    let requested = Arc::clone(&dismiss_requested);

    let mut modal = AnimatedModal::new(
        scheduler.handle(),
        config.into_props(false).style(
            Style::new()
                .bg(Color::from_hex(0xFAFAFA))
                .rounded(16.0)
                .padding(24.0)
                .w(320.0),
        ),
        "Delete this item?",
        move || requested.store(true, Ordering::SeqCst),
    );
    modal.set_content_size(Size::new(320.0, 180.0));

    tracing::info!(
        animation_type = modal.props().animation_type.name(),
        position = modal.props().card_position.name(),
        duration_ms = modal.props().duration_ms,
        "showing modal"
    );
    modal.set_visible(true);
    run_until_idle(&scheduler, &modal, viewport);

    // Tap outside the card
    modal.handle_press_at(Point::new(8.0, 8.0), viewport);
    if dismiss_requested.swap(false, Ordering::SeqCst) {
        tracing::info!("backdrop pressed, hiding modal");
        modal.set_visible(false);
    }
    run_until_idle(&scheduler, &modal, viewport);

    tracing::info!(rendered = modal.is_rendered(), phase = ?modal.phase(), "done");
    Ok(())
}

fn run_until_idle(scheduler: &AnimationScheduler, modal: &AnimatedModal<&str>, viewport: Size) {
    let mut frame_index = 0;
    loop {
        let active = scheduler.tick_by(FRAME_MS);
        match modal.render(viewport) {
            Some(frame) => {
                let transform = frame
                    .card
                    .style
                    .transform
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                tracing::info!(
                    frame = frame_index,
                    phase = ?frame.phase,
                    visibility = modal.visibility(),
                    opacity = frame.card.style.opacity.unwrap_or(1.0),
                    transform = %transform,
                    backdrop_alpha = frame.backdrop.color.fade(frame.backdrop.opacity).a,
                    card_y = frame.card.rect.y(),
                    content = *frame.content,
                );
            }
            None => tracing::info!(frame = frame_index, "unmounted"),
        }
        frame_index += 1;
        if !active {
            break;
        }
    }
}
