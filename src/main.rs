use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use roikit::commands::{CommandFactory, RoikitCommandFactory};
use roikit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("RoiKit")
        .version("1.0")
        .about("Extract ROI bitmaps from a canvas of oriented rectangular parts")
        .arg(
            Arg::new("input")
                .help("Part descriptor file (text or JSON)")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML job file; CLI flags override its values")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Input format: text (x y angle per line) or json")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("part-height")
                .long("part-height")
                .help("Part height shared by every part (physical units)")
                .value_name("UNITS")
                .value_parser(value_parser!(f32))
                .required(false),
        )
        .arg(
            Arg::new("part-width")
                .long("part-width")
                .help("Part width shared by every part (physical units)")
                .value_name("UNITS")
                .value_parser(value_parser!(f32))
                .required(false),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .help("Resolution in pixels per physical unit")
                .value_name("FACTOR")
                .value_parser(value_parser!(f32))
                .required(false),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .help("Query window to extract (center_x,center_y,width,height)")
                .value_name("WINDOW")
                .required(false),
        )
        .arg(
            Arg::new("canvas")
                .long("canvas")
                .help("Canvas size for a tile sweep (WIDTHxHEIGHT)")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("tile")
                .long("tile")
                .help("Tile size for a sweep (WIDTHxHEIGHT)")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("prune")
                .long("prune")
                .help("Drop parts once a tile fully contains them (sequential sweeps only)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Process tiles across worker threads")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file (extract) or directory (sweep)")
                .value_name("PATH")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let log_file = "roikit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("roikit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RoikitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
