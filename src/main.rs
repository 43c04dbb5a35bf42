//! Rent Runner headless runner
//!
//! Loads sprites and tuning, then plays the level at 60 Hz with the
//! autopilot and prints the final frame as JSON.
//!
//! Usage: rent-runner [ASSET_DIR] [--tuning FILE] [--settings FILE] [--seconds N] [--seed N] [--basic]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use rent_runner::assets::FsAssetLoader;
    use rent_runner::autopilot::Autopilot;
    use rent_runner::sim::{GameEvent, LevelVariant};
    use rent_runner::{Host, HostError, Settings, Tuning};

    /// Host callback rate
    const FRAME_RATE: f64 = 60.0;

    const USAGE: &str = "usage: rent-runner [ASSET_DIR] [--tuning FILE] [--settings FILE] \
                         [--seconds N] [--seed N] [--basic]";

    pub struct Args {
        asset_dir: PathBuf,
        tuning: Option<PathBuf>,
        settings: Option<PathBuf>,
        seconds: f64,
        seed: u64,
        variant: LevelVariant,
    }

    impl Default for Args {
        fn default() -> Self {
            Self {
                asset_dir: PathBuf::from("assets"),
                tuning: None,
                settings: None,
                seconds: 60.0,
                seed: 1,
                variant: LevelVariant::Standard,
            }
        }
    }

    pub fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tuning" => {
                    let path = args.next().ok_or("--tuning needs a file")?;
                    parsed.tuning = Some(PathBuf::from(path));
                }
                "--settings" => {
                    let path = args.next().ok_or("--settings needs a file")?;
                    parsed.settings = Some(PathBuf::from(path));
                }
                "--seconds" => {
                    let value = args.next().ok_or("--seconds needs a number")?;
                    parsed.seconds = value
                        .parse()
                        .map_err(|_| format!("invalid --seconds: {value}"))?;
                }
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a number")?;
                    parsed.seed = value
                        .parse()
                        .map_err(|_| format!("invalid --seed: {value}"))?;
                }
                "--basic" => parsed.variant = LevelVariant::Basic,
                "-h" | "--help" => return Err(USAGE.to_string()),
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                dir => parsed.asset_dir = PathBuf::from(dir),
            }
        }
        Ok(parsed)
    }

    pub fn run(args: Args) -> Result<(), HostError> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };

        let settings = args.settings.as_ref().map(Settings::load).unwrap_or_default();

        let loader = FsAssetLoader::new(&args.asset_dir);
        let mut host = Host::start(tuning, args.variant, &loader)?.with_settings(settings);
        host.set_autopilot(Some(Autopilot::new(args.seed)));

        let frames = (args.seconds * FRAME_RATE).ceil() as u64;
        for i in 0..=frames {
            host.frame(i as f64 / FRAME_RATE);

            for event in host.events() {
                match event {
                    GameEvent::Damaged { burnout } => log::info!("Burnout now {}", burnout),
                    GameEvent::CreditCollected { total, .. } => {
                        log::info!("Credits now {}", total)
                    }
                    GameEvent::CoffeeCollected => log::info!("Coffee break"),
                    GameEvent::GameOver => log::warn!("Game over"),
                    GameEvent::Jumped | GameEvent::HazardTurned => {}
                }
            }

            if !host.state().is_running() {
                break;
            }
        }

        for line in &host.hud().counters {
            log::info!("Finished: {}", line.text);
        }
        let frame = host.render_frame();
        match serde_json::to_string_pretty(frame) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize final frame: {}", e),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rent Runner (headless) starting...");

    let args = match native::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    if let Err(e) = native::run(args) {
        log::error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven by the page's animation-frame callback
}
