use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use galaxy_gen::color::Rgb;
use galaxy_gen::GalaxyParameters;
use std::io;

/// Procedural spiral-galaxy point cloud generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Number of points to generate
  #[arg(short, long, default_value_t = 100_000)]
  count: u32,
  /// Rendered point size, passed through to the sink
  #[arg(long, default_value_t = 0.01)]
  size: f32,
  /// Maximum galactic radius
  #[arg(long, default_value_t = 5.0)]
  radius: f32,
  /// Number of spiral arms
  #[arg(long, default_value_t = 3)]
  branches: u32,
  /// Extra rotation per unit radius, in radians
  #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
  spin: f32,
  /// Jitter magnitude scale
  #[arg(long, default_value_t = 0.2)]
  randomness: f32,
  /// Exponent biasing jitter toward the arm centerline
  #[arg(long, default_value_t = 3.0)]
  randomness_power: f32,
  /// Color at the galactic core, `#rrggbb`
  #[arg(long, default_value = "#ff6030")]
  inside_color: Rgb,
  /// Color at the rim, `#rrggbb`
  #[arg(long, default_value = "#1b3984")]
  outside_color: Rgb,
  /// Seed for the point cloud's random source
  #[arg(long, default_value_t = 42)]
  seed: u64,
  /// Regeneration cycles to run; 0 keeps regenerating until interrupted
  #[arg(long, default_value_t = 1)]
  cycles: u32,
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Generate shell completion scripts
  Completions {
    /// The shell to generate the script for
    #[arg(value_enum)]
    shell: Shell,
  },
}

fn main() {
  let args = Args::parse();

  if let Some(Commands::Completions { shell }) = args.command {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    return;
  }

  let params = GalaxyParameters {
    count: args.count,
    size: args.size,
    radius: args.radius,
    branches: args.branches,
    spin: args.spin,
    randomness: args.randomness,
    randomness_power: args.randomness_power,
    inside_color: args.inside_color,
    outside_color: args.outside_color,
  };

  if let Err(err) = galaxy_gen::state::run(&params, args.seed, args.cycles) {
    eprintln!("error: {err}");
    std::process::exit(1);
  }
}
