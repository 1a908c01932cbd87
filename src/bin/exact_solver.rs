use std::{fs::File, path::PathBuf};

use log::{info, warn};
use structopt::StructOpt;
use tsp::{
    log::build_stderr_logger_for_level,
    prelude::*,
    utils::signal_handling,
};

#[derive(Default, StructOpt)]
struct Opts {
    /// Edge list file with one `point1,point2,weight` line per edge;
    /// reads stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Write the tour here instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Start town; defaults to the smallest town identifier
    #[structopt(short, long)]
    start: Option<Town>,
}

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<AdjMap> {
    if let Some(path) = path {
        Ok(AdjMap::try_read_edge_list_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(AdjMap::try_read_edge_list(stdin)?)
    }
}

fn write_solution(tour: &Tour, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        let file = File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        tour.write(writer)?;
    } else {
        let writer = std::io::stdout();
        tour.write(writer)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    build_stderr_logger_for_level(log::LevelFilter::Info);
    signal_handling::initialize();

    let opts = Opts::from_args();

    let graph = load_graph(&opts.instance)?;
    info!(
        "loaded {} towns and {} edges",
        graph.number_of_towns(),
        graph.number_of_edges()
    );

    if graph.number_of_towns() > 12 {
        warn!("runtime is factorial in the number of towns; expect a long search");
    }

    let tour = match brute_force_solver(&graph, opts.start) {
        Some(tour) => tour,
        None => anyhow::bail!("no tour exists"),
    };

    assert!(tour.is_valid(&graph), "Produced tour is not valid");
    info!("optimal tour has length {}", tour.cost());
    write_solution(&tour, &opts.output)?;

    Ok(())
}
