//! istaka - masonry bond generator and robot build planner
//!
//! Lays a chosen bond pattern across the configured wall, plans the build
//! order for a reach-limited robot, and writes an SVG audit file or a
//! terminal view of the result.
//!
//! ```bash
//! # Default stretcher bond on the default 2.3 m x 2.0 m wall
//! cargo run --release
//!
//! # Wild bond with a fixed seed, SVG output
//! cargo run --release -- --bond wild --seed 7 --svg output/wall.svg
//!
//! # Custom wall from a TOML file, printed to the terminal
//! cargo run --release -- --config garden.toml --ascii
//! ```

use std::io::Write as _;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use istaka::io::{render_ascii, SvgRenderer};
use istaka::{BondPattern, IstakaConfig, Result, Robot, StrideManager, Wall};

/// Masonry bond generator and robot build planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (falls back to istaka.toml, then defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bond pattern to lay
    #[arg(short, long, value_enum, default_value_t = BondPattern::Stretcher)]
    bond: BondPattern,

    /// Seed for the wild bond course shuffle
    #[arg(long, default_value_t = 44)]
    seed: u64,

    /// Write an SVG audit file of the planned wall
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the wall to the terminal, one course per line
    #[arg(long)]
    ascii: bool,
}

fn load_config(args: &Args) -> Result<IstakaConfig> {
    match &args.config {
        Some(path) => {
            let config = IstakaConfig::load(path)?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => {
            let fallback = Path::new("istaka.toml");
            if fallback.exists() {
                let config = IstakaConfig::load(fallback)?;
                info!("Loaded config from {}", fallback.display());
                Ok(config)
            } else {
                Ok(IstakaConfig::default())
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let catalog = config.catalog();
    let joints = config.joint_dims();
    let name = config.name.clone().unwrap_or_else(|| "wall".to_string());

    info!(
        "{}: {:.0} x {:.0} mm, {} bond",
        name,
        config.wall.width,
        config.wall.height,
        args.bond.as_str()
    );

    let mut wall = Wall::new(config.wall.width, config.wall.height, &catalog, &joints);
    let bricks = args.bond.generate(&wall, &catalog, &joints, args.seed);
    info!("Generated {} bricks in {} courses", bricks.len(), wall.num_courses());

    // A rejected placement means the generator and the wall disagree;
    // abort rather than plan a partial wall.
    for brick in bricks {
        wall.try_add(brick, &catalog)?;
    }

    let mut robot = Robot::new(config.robot.reach_width, config.robot.reach_height);
    let mut manager = StrideManager::new();
    let plan = istaka::plan_build(&mut wall, &mut robot, &mut manager, &catalog);

    info!(
        "Build plan: {} strides, {} movements, {} bricks unreachable",
        plan.strides.len(),
        plan.movements.len(),
        plan.unassigned
    );
    for movement in &plan.movements {
        log::debug!("move {}", movement);
    }

    if let Some(path) = &args.svg {
        let title = format!(
            "{} - {} bond, {} strides",
            name,
            args.bond.as_str(),
            plan.strides.len()
        );
        SvgRenderer::new(&wall, &catalog)
            .with_plan(&plan.strides, &plan.movements)
            .with_title(title)
            .save(path)?;
        info!("Wrote {}", path.display());
    }

    if args.ascii {
        print!("{}", render_ascii(&wall));
    }

    Ok(())
}
