use std::io::{BufRead, Write};

use anyhow::Result;
use log::info;
use rand::Rng;

use crate::{die::Die, picture::die_picture};

pub struct GameConfig {
    pub size_px: i64,
    pub clear_lines: usize,
    pub trailing_lines: usize,
}

/// The interactive roll loop. Owns its randomizer and its ends of the
/// terminal, so tests can hand in a seeded rng and scripted input.
pub struct Game<R, I, O> {
    config: GameConfig,
    rng: R,
    input: I,
    output: O,
}

impl<R: Rng, I: BufRead, O: Write> Game<R, I, O> {
    pub fn new(config: GameConfig, rng: R, input: I, output: O) -> Self {
        Self {
            config,
            rng,
            input,
            output,
        }
    }

    /// Rolls, draws, then blocks for one line of input, forever. The only
    /// way out is the input reaching end-of-input, which is a clean exit.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let die1 = Die::roll(&mut self.rng);
            let die2 = Die::roll(&mut self.rng);
            info!("Rolled `{}` and `{}`", die1.face(), die2.face());

            self.draw_roll(die1, die2)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed, exiting!");
                return Ok(());
            }
        }
    }

    fn draw_roll(&mut self, die1: Die, die2: Die) -> Result<()> {
        // Flood the previous roll off a standard terminal; portable
        // stand-in for a real clear sequence.
        for _ in 0..self.config.clear_lines {
            writeln!(self.output)?;
        }

        let total = die1.face() + die2.face();
        writeln!(self.output, " ____________________________________ ")?;
        writeln!(self.output, "|           |           |            |")?;
        writeln!(
            self.output,
            "| D6 #1 = {} | D6 #2 = {} | TOTAL = {:02} |",
            die1.face(),
            die2.face(),
            total
        )?;
        writeln!(self.output, "|___________|___________|____________|")?;
        writeln!(self.output)?;

        write!(self.output, "{}", die_picture(die1.face(), self.config.size_px))?;
        writeln!(self.output)?;
        write!(self.output, "{}", die_picture(die2.face(), self.config.size_px))?;

        for _ in 0..self.config.trailing_lines {
            writeln!(self.output)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
