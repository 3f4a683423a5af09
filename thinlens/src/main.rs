use std::io;

use clap::Parser;
use env_logger::Env;
use thinlens::{
    console::{write_json, write_summary, Args},
    error::LensResult,
    plot::write_diagram,
    RayDiagram,
};

fn main() -> LensResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let parameters = args.parameters()?;
    let image = parameters.image();

    let mut stdout = io::stdout().lock();
    if args.json {
        write_json(&mut stdout, &parameters, &image)?;
    } else {
        write_summary(&mut stdout, &parameters, &image)?;
    }
    if let Some(path) = &args.output {
        let diagram = RayDiagram::new(&parameters, &image, &args.layout()?);
        write_diagram(&diagram, path)?;
    }
    Ok(())
}
