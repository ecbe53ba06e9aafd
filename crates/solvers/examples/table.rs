//! Prints the conventional convergence table for each material preset, then
//! steps one run and prints its center temperature over time.
//!
//! ```sh
//! cargo run -p rodheat-solvers --example table
//! ```

use rodheat_rod::{Parameters, Preset};
use rodheat_solvers::{sweep, transient::implicit::Simulation};
use uom::si::time::second;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time_steps = sweep::conventional_time_steps();
    let space_steps = sweep::conventional_space_steps();

    for preset in Preset::ALL {
        let params = Parameters::default().with_material(preset.material());
        let table = sweep::sweep_table(&params, &time_steps, &space_steps);
        println!("{preset}\n{table}\n");
    }

    let mut simulation = Simulation::new(&Parameters::default())?;
    while !simulation.is_complete() {
        simulation.step_once();
        if simulation.steps_taken() % 20 == 0 {
            println!(
                "t = {:>5.2} s  center = {:.2}",
                simulation.elapsed().get::<second>(),
                simulation.center_temperature()
            );
        }
    }

    Ok(())
}
