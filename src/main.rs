use block_mover::app;
use block_mover::simulation::params::Params;

fn window_conf() -> macroquad::window::Conf {
    app::window_conf(&Params::default())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run(Params::default()).await {
        log::error!("Cannot start block mover: {err}");
        std::process::exit(1);
    }
}
