// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use fwdseam::config::Options;
use fwdseam::dump::energy_to_image;
use fwdseam::{calculate_energy, check_seam_count, load_grid, save_grid, seamcarve, CarveError};
use log::info;
use std::process;

fn run() -> Result<(), CarveError> {
    let options = Options::from_args(std::env::args_os())?;

    let grid = load_grid(&options.input)?;
    let (width, height) = grid.dimensions();
    info!("Loaded image: {}x{}", width, height);

    check_seam_count(width, options.seams)?;

    if let Some(path) = &options.energy {
        energy_to_image(&calculate_energy(&grid)).save(path)?;
        info!("Energy map written to: {}", path.display());
    }

    let carved = seamcarve(grid, options.seams);
    save_grid(&carved, &options.output)?;

    info!(
        "Seam carving complete! Output saved to: {}",
        options.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        match err {
            // --help and --version come through here too.
            CarveError::Arguments(ref e) if !e.use_stderr() => println!("{}", e),
            _ => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
}
