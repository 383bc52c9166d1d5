//! Bubble Shooter entry point
//!
//! Native demo: loads settings, builds the starting board and prints it,
//! then sweeps the launcher to show the aiming math.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bubble Shooter (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match bubble_shooter::Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No settings file given, using defaults");
            bubble_shooter::Settings::default()
        }
    };

    if let Err(e) = run(&settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The geometry core is consumed as a library on the web
}

#[cfg(not(target_arch = "wasm32"))]
fn run(settings: &bubble_shooter::Settings) -> Result<(), bubble_shooter::GeometryError> {
    use bubble_shooter::geom::{Direction, Vec2D, rotate_steps, try_create_bubble_grid};

    let field = settings.playground;
    let mut palette = settings.palette();
    let grid = try_create_bubble_grid(field.width, field.height, || palette.pick())?;
    log::info!(
        "Board {}x{} (seed {}): {} bubbles",
        field.width,
        field.height,
        settings.seed,
        grid.bubble_count()
    );

    for row in 0..field.height {
        let indent = if row % 2 != 0 { " " } else { "" };
        let cells: Vec<String> = (0..field.width)
            .filter_map(|col| grid.key_at(row, col))
            .map(|key| match grid.get(key).flatten() {
                Some(color) => color.as_char().to_string(),
                None => ".".to_string(),
            })
            .collect();
        println!("{}{}", indent, cells.join(" "));
    }

    // Launcher sits at the bottom center, aiming straight up
    let launcher = field.to_canvas(Vec2D::ZERO);
    let up = Vec2D::new(0.0, 1.0);
    for (direction, steps) in [(Direction::Left, 60), (Direction::Right, 60)] {
        let aim = rotate_steps(up, direction, steps);
        let tip = field.to_canvas(aim.scalar_mul(2.0));
        log::info!(
            "Aim {} x{}: direction {}, canvas {} -> {}",
            direction,
            steps,
            aim,
            launcher,
            tip
        );
    }

    Ok(())
}
