use majority_vote::{Simulation, SimulationConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut simulation = Simulation::new(SimulationConfig::default())?;
    let stdout = std::io::stdout();
    simulation.run(&mut stdout.lock())?;
    Ok(())
}
