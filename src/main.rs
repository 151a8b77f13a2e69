use std::path::Path;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;

use dnc::{
    config::{ProfileConfig, ProfileConfigBuilder},
    dnc_error, dnc_warning,
    errors::DncError,
    harness,
    inversions::count_and_sort,
    karatsuba::{multiply, Operand},
    parser::{parse_float_matrix, parse_int_matrix, parse_sequence},
    profiling::{clear_profiler, print_profiler_results},
    sorting::{sort, SortStrategy},
    strassen
};

fn sequence_arg() -> Arg {
    Arg::new("SEQUENCE")
        .help("Sequence of integers, such as \"[7, 2, 4]\" or \"7 2 4\"")
        .required(true)
        .allow_hyphen_values(true)
        .index(1)
}

fn matrix_arg(name: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help("Square matrix with a power of two size, such as \"[[1, 2], [3, 4]]\"")
        .required(true)
        .index(index)
}

fn operand_arg(name: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help("Integer operand of any size")
        .required(true)
        .allow_negative_numbers(true)
        .index(index)
}

fn string_arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

/*
    ╒══════════════════╕
    │ Command handlers │
    ╘══════════════════╛
*/

fn run_karatsuba(args: &ArgMatches) -> Result<(), DncError> {
    let x = string_arg(args, "X").parse::<Operand>()?;
    let y = string_arg(args, "Y").parse::<Operand>()?;

    println!("{}", multiply(&x, &y)?);

    Ok(())
}

fn run_sort(args: &ArgMatches) -> Result<(), DncError> {
    let strategy = string_arg(args, "strategy").parse::<SortStrategy>()?;
    let seq = parse_sequence(string_arg(args, "SEQUENCE"))?;

    println!("{:?}", sort(strategy, &seq));

    Ok(())
}

fn run_inversions(args: &ArgMatches) -> Result<(), DncError> {
    let seq = parse_sequence(string_arg(args, "SEQUENCE"))?;
    let (sorted, count) = count_and_sort(&seq);

    println!("{} {:?}", "Sorted:".green(), sorted);
    println!("{} {}", "Inversions:".green(), count);

    Ok(())
}

fn run_strassen(args: &ArgMatches) -> Result<(), DncError> {
    let a = string_arg(args, "A");
    let b = string_arg(args, "B");

    // Integer matrices are multiplied exactly, anything else falls back to floats
    match (parse_int_matrix(a), parse_int_matrix(b)) {
        (Ok(x), Ok(y)) => print!("{}", strassen::multiply(&x, &y)?),
        _ => print!("{}", strassen::multiply(&parse_float_matrix(a)?, &parse_float_matrix(b)?)?)
    }

    Ok(())
}

fn profile_config(args: &ArgMatches) -> Result<ProfileConfig, DncError> {
    let base = match args.get_one::<String>("config") {
        Some(path) => ProfileConfig::load(Path::new(path))?,
        None => ProfileConfig::default()
    };

    let mut builder = ProfileConfigBuilder::default();

    builder
        .size(args.get_one::<usize>("size").copied().unwrap_or(base.size))
        .max_value(base.max_value)
        .digits(args.get_one::<usize>("digits").copied().unwrap_or(base.digits))
        .matrix_size(args.get_one::<usize>("matrix-size").copied().unwrap_or(base.matrix_size))
        .strategies(base.strategies.clone())
        .repetitions(base.repetitions)
        .verify(args.get_flag("verify") || base.verify);

    if let Some(names) = args.get_many::<String>("strategy") {
        builder.strategies(names.map(|i| i.parse::<SortStrategy>()).collect::<Result<Vec<_>, _>>()?);
    }

    builder.build().map_err(|err| DncError::config_error(err.to_string()))
}

fn run_profile(args: &ArgMatches) -> Result<(), DncError> {
    let config = profile_config(args)?;

    clear_profiler();

    let report = harness::run_report(&config)?;

    for mismatch in &report.mismatches {
        dnc_warning!("{}", mismatch);
    }

    if args.get_flag("json") {
        println!("{}", report.to_json()?);

    } else {
        println!(
            "{} sequence of {} elements, {}-digit operands, {}x{} matrices",
            "Profiled".green().bold(),
            config.size.to_string().cyan(),
            config.digits.to_string().cyan(),
            config.matrix_size.to_string().cyan(), config.matrix_size.to_string().cyan()
        );

        print_profiler_results();
    }

    Ok(())
}

fn main() {
    /*
        ╒══════════════════════════╕
        │ Console argument parsing │
        ╘══════════════════════════╛
    */

    let args = Command::new("dnc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Divide and conquer algorithms: Karatsuba, merge sorts, inversion counting and Strassen")
        .subcommand_required(true)
        .subcommand(
            Command::new("karatsuba")
                .about("Multiply two integers with Karatsuba's algorithm")
                .arg(operand_arg("X", 1))
                .arg(operand_arg("Y", 2))
        )
        .subcommand(
            Command::new("sort")
                .about("Sort a sequence of integers")
                .arg(sequence_arg())
                .arg(
                    Arg::new("strategy")
                    .help("Sorting strategy (selection, selection-recursive or merge)")
                    .long("strategy")
                    .short('s')
                    .default_value("merge")
                )
        )
        .subcommand(
            Command::new("inversions")
                .about("Sort a sequence of integers and count its inversions")
                .arg(sequence_arg())
        )
        .subcommand(
            Command::new("strassen")
                .about("Multiply two square matrices with Strassen's algorithm")
                .arg(matrix_arg("A", 1))
                .arg(matrix_arg("B", 2))
        )
        .subcommand(
            Command::new("profile")
                .about("Time every algorithm on random inputs")
                .arg(
                    Arg::new("config")
                    .help("YAML profile configuration")
                    .long("config")
                    .short('c')
                )
                .arg(
                    Arg::new("size")
                    .help("Length of the random sequence")
                    .long("size")
                    .short('n')
                    .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("digits")
                    .help("Digits of the Karatsuba operands")
                    .long("digits")
                    .short('d')
                    .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("matrix-size")
                    .help("Side of the Strassen operands, a power of two")
                    .long("matrix-size")
                    .short('m')
                    .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("strategy")
                    .help("Sorting strategy to time, can be repeated")
                    .long("strategy")
                    .short('s')
                    .action(ArgAction::Append)
                )
                .arg(
                    Arg::new("verify")
                    .help("Check every result against a reference implementation")
                    .long("verify")
                    .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                    .help("Print the report as JSON")
                    .long("json")
                    .action(ArgAction::SetTrue)
                )
        )
        .get_matches();

    /*
        ╒═══════════════════╕
        │ Command selection │
        ╘═══════════════════╛
    */

    let res = match args.subcommand() {
        Some(("karatsuba", run_args)) => run_karatsuba(run_args),
        Some(("sort", run_args)) => run_sort(run_args),
        Some(("inversions", run_args)) => run_inversions(run_args),
        Some(("strassen", run_args)) => run_strassen(run_args),
        Some(("profile", run_args)) => run_profile(run_args),

        Some((name, _)) => dnc_error!("Unknown subcommand {}", name),
        None => dnc_error!("No subcommand given")
    };

    if let Err(err) = res {
        err.emit();
    }
}
