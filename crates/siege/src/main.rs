use tracing::error;

mod app;

fn main() {
    let wiring = match app::bootstrap::build_app() {
        Ok(wiring) => wiring,
        Err(error) => {
            error!(error = %error, "startup_failed");
            std::process::exit(1);
        }
    };

    if let Err(error) = engine::run_app(wiring.config, wiring.scene) {
        error!(error = %error, "event_loop_failed");
        std::process::exit(1);
    }
}
