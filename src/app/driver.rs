use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use super::input::{self, StepKey};
use super::render;
use crate::engine::{LifeGrid, Simulation, Step};
use crate::utils::{seed_shape, Config, BEACON, GLIDER};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Stable,
    Oscillating,
    MaxGenerations,
    Quit,
}

/// Where the menu loop currently is: waiting for a pattern choice,
/// stepping through generations, or wrapping up a finished run.
enum Phase {
    AwaitPattern,
    Running(Simulation),
    Finished(Outcome),
}

/// Menu-driven console front end: seeds a grid from the selected pattern,
/// renders each generation and steps on keystrokes until the run ends.
pub struct App {
    size: usize,
    max_generations: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            size: Config::GRID_SIZE,
            max_generations: Config::MAX_GENERATIONS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut phase = Phase::AwaitPattern;
        loop {
            phase = match phase {
                Phase::AwaitPattern => match self.select_pattern(&mut lines)? {
                    Some(grid) => Phase::Running(Simulation::new(grid, self.max_generations)),
                    None => {
                        println!("Leaving the Game of Life.");
                        return Ok(());
                    }
                },
                Phase::Running(sim) => Phase::Finished(run_generations(sim)?),
                Phase::Finished(outcome) => {
                    match outcome {
                        Outcome::Stable => println!("The population reached a stable state."),
                        Outcome::Oscillating => {
                            println!("The population reached an oscillating state.")
                        }
                        Outcome::MaxGenerations => {
                            println!("Reached the maximum number of generations.")
                        }
                        Outcome::Quit => {}
                    }
                    println!();
                    println!("Returning to the menu...");
                    println!();
                    Phase::AwaitPattern
                }
            };
        }
    }

    /// Shows the menu until a pattern is chosen and seeded. `None` means
    /// the user picked exit or stdin closed.
    fn select_pattern(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<Option<LifeGrid>> {
        loop {
            println!("=== Game of Life ===");
            println!("1. Glider (a moving pattern)");
            println!("2. Beacon (an oscillating pattern)");
            println!("3. Random pattern");
            println!("4. Custom pattern");
            println!("5. Exit");
            print!("Select an option (1-5): ");
            io::stdout().flush()?;

            let Some(line) = next_line(lines)? else {
                return Ok(None);
            };
            let mut grid = LifeGrid::blank(self.size, self.size);
            match line.trim() {
                "1" => {
                    seed_shape(&mut grid, &GLIDER)?;
                    info!(pattern = GLIDER.name, size = self.size, "pattern seeded");
                }
                "2" => {
                    seed_shape(&mut grid, &BEACON)?;
                    info!(pattern = BEACON.name, size = self.size, "pattern seeded");
                }
                "3" => {
                    let Some(density) = self.prompt_density(lines)? else {
                        return Ok(None);
                    };
                    grid.randomize(None, f64::from(density) / 100.0);
                    info!(density, size = self.size, "random pattern seeded");
                }
                "4" => {
                    self.enter_custom_pattern(lines, &mut grid)?;
                    info!(
                        population = grid.population(),
                        size = self.size,
                        "custom pattern seeded"
                    );
                }
                "5" => return Ok(None),
                other => {
                    warn!(input = other, "invalid menu selection");
                    println!("Invalid selection.");
                    println!();
                    continue;
                }
            }
            return Ok(Some(grid));
        }
    }

    /// Asks for the random fill density in percent, clamping to the
    /// accepted range. Malformed input is discarded and asked again.
    fn prompt_density(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<Option<u32>> {
        loop {
            print!(
                "Enter cell density ({}-{}): ",
                Config::MIN_DENSITY,
                Config::MAX_DENSITY
            );
            io::stdout().flush()?;
            let Some(line) = next_line(lines)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(density) => {
                    let density = density.clamp(
                        i64::from(Config::MIN_DENSITY),
                        i64::from(Config::MAX_DENSITY),
                    ) as u32;
                    return Ok(Some(density));
                }
                Err(_) => {
                    warn!(input = %line, "malformed density");
                    println!("Enter a number.");
                }
            }
        }
    }

    /// Reads `row col` pairs until `-1 -1` (or end of input), rejecting
    /// out-of-range coordinates with a re-prompt.
    fn enter_custom_pattern(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
        grid: &mut LifeGrid,
    ) -> Result<()> {
        let max = self.size - 1;
        println!("Enter the coordinates of live cells (0-{}).", max);
        println!("Enter -1 -1 to finish.");
        println!();
        loop {
            print!("Row col: ");
            io::stdout().flush()?;
            let Some(line) = next_line(lines)? else {
                return Ok(());
            };
            let mut fields = line.split_whitespace().map(str::parse::<i64>);
            let pair = match (fields.next(), fields.next(), fields.next()) {
                (Some(Ok(row)), Some(Ok(col)), None) => (row, col),
                _ => {
                    warn!(input = %line, "malformed coordinate pair");
                    println!("Enter two numbers separated by a space.");
                    continue;
                }
            };
            match pair {
                (-1, -1) => return Ok(()),
                (row, col)
                    if (0..self.size as i64).contains(&row)
                        && (0..self.size as i64).contains(&col) =>
                {
                    grid.set(row as usize, col as usize, true);
                    println!("Cell [{}][{}] is now alive.", row, col);
                }
                (row, col) => {
                    warn!(row, col, "coordinates outside the grid");
                    println!("Invalid coordinates. Enter values in the range 0-{}.", max);
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders generations and steps the simulation on keystrokes until the
/// run reaches a terminal outcome.
fn run_generations(mut sim: Simulation) -> Result<Outcome> {
    let mut stdout = io::stdout();
    loop {
        render::draw_grid(&mut stdout, sim.grid(), sim.generation())?;
        print!("Press any key for the next generation, 'q' to stop: ");
        stdout.flush()?;
        let key = input::wait_step_key()?;
        println!();
        if key == StepKey::Quit {
            info!(generation = sim.generation(), "run stopped by user");
            return Ok(Outcome::Quit);
        }
        match sim.advance() {
            Step::Advanced => {}
            Step::Stable => {
                info!(generation = sim.generation(), "population stabilized");
                return Ok(Outcome::Stable);
            }
            Step::Oscillating => {
                info!(generation = sim.generation(), "period-2 cycle detected");
                return Ok(Outcome::Oscillating);
            }
            Step::MaxGenerations => {
                info!(generation = sim.generation(), "generation cap reached");
                return Ok(Outcome::MaxGenerations);
            }
        }
    }
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
