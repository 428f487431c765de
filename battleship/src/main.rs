use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{value_t, App, Arg, ArgMatches, ErrorKind};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use shipgrid::{
    placement::DEFAULT_MAX_COLLISIONS, Board, CellState, Coordinate, Dimensions, FleetSpec,
    PlacementConfig, Session, ShotResult,
};

mod logging;

fn main() -> io::Result<()> {
    logging::init();
    let max_collisions = DEFAULT_MAX_COLLISIONS.to_string();
    let standard_fleet = FleetSpec::standard().to_string();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Find and sink the hidden fleet.")
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows on the board")
                .takes_value(true)
                .default_value("13"),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .value_name("COLUMNS")
                .help("number of columns on the board")
                .takes_value(true)
                .default_value("13"),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("LENGTH:COUNT,...")
                .help("ships to hide, as comma separated length:count pairs")
                .takes_value(true)
                .default_value(&standard_fleet),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for ship placement, for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max_collisions")
                .long("max-collisions")
                .value_name("N")
                .help("rejected ship positions allowed before placement starts over")
                .takes_value(true)
                .default_value(&max_collisions),
        )
        .get_matches();

    let settings = Settings::from_matches(&matches);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = match Session::new(settings.dim, settings.fleet, settings.config, &mut rng)
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Could not set up the game: {}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    println!("Find and sink the fleet. Type help or ? for commands.");
    loop {
        println!();
        show_board(session.board());
        println!("{}", session.status_text());

        let cmd = input.read_input_lower("> ", |input| match parse_command(input) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;

        match cmd {
            Command::Shoot(coord) => {
                let result = session.shoot_at(coord);
                report_shot(&session, coord, result);
                if let ShotResult::Sunk(_) = result {
                    if session.is_won() {
                        println!("You won after {} shots.", session.shots());
                    }
                }
            }
            Command::Reveal => {
                println!("Cheater!");
                session.reveal_all();
            }
            Command::Restart => match session.restart(&mut rng) {
                Ok(()) => println!("New game, new fleet."),
                Err(err) => println!("Could not restart: {}", err),
            },
            Command::Status => println!(
                "{} shots fired, {} ships left.",
                session.shots(),
                session.status().remaining_ships()
            ),
            Command::Help => println!(
                "Available Commands:
    <row>,<col>         fire at the given cell, e.g. \"3,7\" or \"shoot 3 7\".
    reveal              show where every ship is (ends the fun).
    restart             start over with a newly placed fleet.
    status              show the number of shots fired.
    quit                leave the game.

Board:
    ~~  unknown    o  water    x  hit ship    X  sunk ship"
            ),
            Command::Quit => {
                println!("Bye");
                return Ok(());
            }
        }
    }
}

/// Game configuration taken from the command line.
struct Settings {
    dim: Dimensions,
    fleet: FleetSpec,
    config: PlacementConfig,
    seed: Option<u64>,
}

impl Settings {
    /// Read the settings, exiting with a usage error on invalid values.
    fn from_matches(matches: &ArgMatches) -> Self {
        let rows = value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit());
        let columns = value_t!(matches, "columns", usize).unwrap_or_else(|e| e.exit());
        let dim = Dimensions::try_new(rows, columns).unwrap_or_else(|err| {
            clap::Error::with_description(&err.to_string(), ErrorKind::InvalidValue).exit()
        });
        let fleet = value_t!(matches, "fleet", FleetSpec).unwrap_or_else(|e| e.exit());
        let config = PlacementConfig {
            max_collisions: value_t!(matches, "max_collisions", usize)
                .unwrap_or_else(|e| e.exit()),
            ..PlacementConfig::default()
        };
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
        } else {
            None
        };
        Self {
            dim,
            fleet,
            config,
            seed,
        }
    }
}

/// A line of player input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Shoot(Coordinate),
    Reveal,
    Restart,
    Status,
    Help,
    Quit,
}

/// Parse lowercased, trimmed input into a [`Command`], or explain what is wrong.
fn parse_command(input: &str) -> Result<Command, String> {
    static SHOOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:shoot|fire|s)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "reveal" | "cheat" | "c" => Ok(Command::Reveal),
        "restart" | "new" => Ok(Command::Restart),
        "status" => Ok(Command::Status),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => match SHOOT.captures(other) {
            Some(captures) => {
                let row = &captures["row"];
                let col = &captures["col"];
                let row = row.parse().map_err(|_| format!("invalid row: {}", row))?;
                let col = col.parse().map_err(|_| format!("invalid column: {}", col))?;
                Ok(Command::Shoot(Coordinate::new(row, col)))
            }
            None => Err(format!(
                "Invalid command \"{}\". Use '?' for help",
                other
            )),
        },
    }
}

/// Print what a shot did.
fn report_shot(session: &Session, coord: Coordinate, result: ShotResult) {
    match result {
        ShotResult::OutOfBounds => {
            println!("{} is not on the {} board.", coord, session.dimensions())
        }
        ShotResult::AlreadyKnown => println!("Grid cell {} was already known.", coord),
        ShotResult::Miss => println!("{}: water.", coord),
        ShotResult::Hit(_) => println!("{}: hit!", coord),
        ShotResult::Sunk(idx) => println!(
            "{}: hit and sunk a ship of length {}!",
            coord,
            session.ships()[idx].len()
        ),
    }
}

/// Show the board by printing the grid with row and column numbers.
fn show_board(board: &Board) {
    print!("    ");
    for col in 0..board.dimensions().columns() {
        print!("{:^4}", col);
    }
    println!();
    for (i, row) in board.iter_rows().enumerate() {
        print!("{:>3} ", i);
        for (_, state) in row {
            print!("{:^4}", CellGlyph(state));
        }
        println!();
    }
}

/// Display helper that prints a cell's state as one or two characters.
struct CellGlyph(CellState);

impl fmt::Display for CellGlyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Unknown => "~~",
            CellState::Water => "o",
            CellState::Ship => "x",
            CellState::SunkShip => "X",
        })
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
