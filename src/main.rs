use clap::Parser;
use sdl2::keyboard::Keycode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use scanfill::config::Args;
use scanfill::display::{Display, InputEvent, MouseButtonKind, PixelBuffer, RenderTarget};
use scanfill::ui::Toolbar;
use scanfill::util::Rng;
use scanfill::{Point, PolygonEditor, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Args::parse().into_config()?;
    let (width, height) = (config.width, config.height);

    let (mut display, texture_creator) =
        Display::with_options("scanfill", width, height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = PixelBuffer::with_size(width, height);

    let rng = config.seed.map_or_else(Rng::from_time, Rng::new);
    let mut editor = PolygonEditor::new(config.max_vertices, config.ordering, rng)
        .with_colors(config.fill_color, config.outline_color);
    let toolbar = Toolbar::new(width, height);

    info!(width, height, vsync = config.vsync, ordering = ?config.ordering, "scanfill started");
    info!("left click on the board places a point, shift locks it to the last point's row or column");
    info!("Clear empties the board, Fill closes and fills the polygon, swatches pick the fill color");

    let mut shift_held = false;

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::LShift | Keycode::RShift) => shift_held = true,
                InputEvent::KeyUp(Keycode::LShift | Keycode::RShift) => shift_held = false,
                InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButtonKind::Left,
                } => {
                    let click = Point::new(x as f32, y as f32);
                    if let Some(action) = toolbar.resolve_click(click, &editor, shift_held) {
                        if let Err(e) = editor.dispatch(action) {
                            debug!(%e, "action ignored");
                        }
                    }
                },
                _ => {},
            }
        }

        toolbar.render(&mut buffer, &editor);
        toolbar.render_vertices(&mut buffer, &editor);
        editor.render(&mut buffer, toolbar.board());

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
