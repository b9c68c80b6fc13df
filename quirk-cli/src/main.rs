use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser, Subcommand};
use quirk_rs::drawing::{draw_gate, GateDrawParams, Placement};
use quirk_rs::geometry::Rect;
use quirk_rs::paint::SvgPainter;
use quirk_rs::registry::GateRegistry;
use quirk_rs::toolbox::{gates_for_initial_state, InitialState, Toolbox};
use quirk_rs::PaintConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// List every registered gate.
    List,
    /// Show the toolbox layout.
    Toolbox,
    /// Render a gate as an SVG document on stdout.
    Render {
        id: String,
        #[arg(long)]
        toolbox: bool,
        #[arg(long)]
        highlighted: bool,
        /// Animation phase in [0, 1).
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,
        /// A JSON file overriding the default paint settings.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the gates that prepare an initial wire state.
    InitialState { state: InitialState },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = GateRegistry::standard().context("Failed to build the gate registry.")?;
    match cli.command {
        Command::List => handle_list(&registry),
        Command::Toolbox => handle_toolbox(&registry)?,
        Command::Render {
            id,
            toolbox,
            highlighted,
            time,
            config,
        } => handle_render(&registry, &id, toolbox, highlighted, time, config)?,
        Command::InitialState { state } => handle_initial_state(&registry, state)?,
    };

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_list(registry: &GateRegistry) {
    for gate in registry.iter() {
        println!(
            "{}\t{}\t{}",
            gate.serialized_id(),
            gate.symbol().replace('\n', " "),
            gate.height()
        );
    }
}

fn handle_toolbox(registry: &GateRegistry) -> anyhow::Result<()> {
    let groups = Toolbox::top_groups(registry)
        .context("Failed to compose the top toolbox.")?
        .into_iter()
        .chain(Toolbox::bottom_groups(registry).context("Failed to compose the bottom toolbox.")?);
    for group in groups {
        let slots: Vec<_> = group
            .gates
            .iter()
            .map(|slot| slot.as_ref().map_or("-", |gate| gate.serialized_id()))
            .collect();
        println!("{}: {}", group.hint, slots.join(" "));
    }
    Ok(())
}

fn handle_render(
    registry: &GateRegistry,
    id: &str,
    toolbox: bool,
    highlighted: bool,
    time: f64,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let gate = registry
        .get(id)
        .ok_or_else(|| anyhow!("No gate has the id {id:?}."))?;
    let config: PaintConfig = match config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}.", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse paint settings from {}.", path.display()))?
        }
        None => PaintConfig::default(),
    };

    let margin = 5.0;
    let w = config.gate_radius * 2.0;
    let h = config.wire_spacing * (gate.height() as f64 - 1.0) + config.gate_radius * 2.0;
    let placement = if toolbox {
        Placement::Toolbox
    } else {
        Placement::circuit(0, 0)
    };

    let mut painter = SvgPainter::new(w + margin * 2.0, h + margin * 2.0);
    let mut args = GateDrawParams::new(
        &mut painter,
        &config,
        gate,
        Rect::new(margin, margin, w, h),
        placement,
    )
    .highlighted(highlighted)
    .at_time(time);
    draw_gate(&mut args);
    println!("{}", painter.finish());
    Ok(())
}

fn handle_initial_state(registry: &GateRegistry, state: InitialState) -> anyhow::Result<()> {
    let gates = gates_for_initial_state(state, registry)
        .with_context(|| format!("Failed to find the gates preparing {state}."))?;
    let ids: Vec<_> = gates.iter().map(|gate| gate.serialized_id()).collect();
    println!("{state}: {}", ids.join(" "));
    Ok(())
}
