/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;

use found::cli::{Cli, Command};
use found::errors::FoundResult;
use found::executors::{calibration, distance, orbit};

fn main() -> FoundResult<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calibration(args) => calibration::run(&args),
        Command::Distance(args) => distance::run(&args),
        Command::Orbit(args) => orbit::run(&args),
    }
}
