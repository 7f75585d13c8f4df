//! The frame loop driver.

use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::window::{Conf, next_frame};

use crate::graphics;
use crate::keyboard::KeyboardInput;
use crate::pacing::FrameLimiter;
use crate::simulation::input::HeldKeys;
use crate::simulation::params::{Params, ParamsError};
use crate::simulation::session::Session;

/// Window settings for the given parameters.
///
/// `params` should already be validated so the sizes are whole pixels.
pub fn window_conf(params: &Params) -> Conf {
    Conf {
        window_title: "Block Mover".to_owned(),
        window_width: params.window_width as i32,
        window_height: params.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Runs the demo until the window is asked to close.
///
/// Each frame polls the arrow keys, moves the block, draws it and waits out
/// the rest of the frame interval. A quit request ends the loop and returns
/// the finished session.
pub async fn run(params: Params) -> Result<Session, ParamsError> {
    let mut session = Session::new(params)?;
    let mut limiter = FrameLimiter::new(session.params().target_fps);

    // Closing the window becomes a loop exit instead of killing the process.
    prevent_quit();

    log::info!(
        "Starting block mover: {}x{} window, block {} px, speed {} px/frame, {} fps",
        session.params().window_width,
        session.params().window_height,
        session.params().block_size,
        session.params().speed,
        session.params().target_fps
    );

    loop {
        if is_quit_requested() {
            break;
        }

        let input = HeldKeys::capture(&KeyboardInput);
        session.update(&input);

        graphics::draw_frame(&session);

        limiter.wait();
        next_frame().await;
    }

    log::info!("Quit requested after {} frames", session.frames());
    Ok(session)
}
