mod die;
mod game;
mod parse_size_arg;
mod picture;

use std::io;

use anyhow::Result;

use crate::{
    game::{Game, GameConfig},
    parse_size_arg::parse_size_arg,
};

const CLEAR_LINES: usize = 20;
const TRAILING_LINES: usize = 5;

fn main() -> Result<()> {
    env_logger::init();

    let size_arg = std::env::args().nth(1);
    let game_config = GameConfig {
        size_px: parse_size_arg(size_arg.as_deref()),
        clear_lines: CLEAR_LINES,
        trailing_lines: TRAILING_LINES,
    };
    let mut game = Game::new(
        game_config,
        rand::rng(),
        io::stdin().lock(),
        io::stdout().lock(),
    );
    game.run()
}
