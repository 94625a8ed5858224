//! natsort command line tool
//!
//! Sorts entries given as arguments, or the lines of standard input, in
//! natural order and prints one per line. Entries can be filtered by the
//! numbers they contain before sorting.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, BufWriter, Write};
use std::process;
use tracing_subscriber::EnvFilter;

use natsort::{
    config::{NumberType, SortConfig, SortConfigBuilder},
    error::{NatsortError, NatsortResult},
    filter::{EntryFilter, NumberRange},
    locale::activate_environment_locale,
    natsorted_by,
    numeric_regex::NumericRegex,
    Ns, Sortable, EXIT_SUCCESS,
};

fn main() {
    init_tracing();
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("natsort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("natsort=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> NatsortResult<i32> {
    let matches = build_cli().get_matches();

    if matches.get_flag("locale") {
        activate_environment_locale()?;
    }

    let config = parse_config_from_matches(&matches)?;
    let filter = parse_filter_from_matches(&matches, config.alg)?;

    let entries = match matches.get_many::<String>("entries") {
        Some(values) => values.map(|s| s.trim().to_string()).collect(),
        None => read_entries(io::stdin().lock())?,
    };
    let entries = filter.apply(entries);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sort_and_print_entries(&entries, &config, &mut out)?;
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("natsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("natsort [OPTIONS] [ENTRIES]...")
        .about("Sort entries in natural order")
        .long_about("Sort entries in natural order, so that \"a2\" comes before \"a10\".\n\nEntries are read from the command line, or one per line from standard input when none are given.")

        .arg(Arg::new("entries")
            .help("The entries to sort (read from stdin when omitted)")
            .num_args(0..)
            .value_name("ENTRIES"))

        // Number interpretation
        .arg(Arg::new("number-type")
            .short('t')
            .long("number-type")
            .help("How numbers are read from each entry")
            .long_help("How numbers are read from each entry. 'version' and 'digit' are unsigned integers, 'real' is a signed float.")
            .value_name("TYPE")
            .value_parser(["int", "float", "real", "version", "digit", "i", "f", "r", "ver", "d"])
            .default_value("int"))
        .arg(Arg::new("sign")
            .short('s')
            .long("sign")
            .help("Treat a leading + or - as part of the number")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("noexp")
            .long("noexp")
            .help("Do not read exponents in floats (1e5 is 1, e, 5)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("paths")
            .short('p')
            .long("paths")
            .help("Interpret entries as file paths")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("locale")
            .short('l')
            .long("locale")
            .help("Use the environment's locale for text and numbers")
            .action(ArgAction::SetTrue))

        // Filters
        .arg(Arg::new("filter")
            .short('f')
            .long("filter")
            .help("Keep only entries holding a number in [LOW, HIGH]")
            .value_names(["LOW", "HIGH"])
            .num_args(2)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .action(ArgAction::Append))
        .arg(Arg::new("reverse-filter")
            .short('F')
            .long("reverse-filter")
            .help("Drop entries holding a number in [LOW, HIGH]")
            .value_names(["LOW", "HIGH"])
            .num_args(2)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .action(ArgAction::Append))
        .arg(Arg::new("exclude")
            .short('e')
            .long("exclude")
            .help("Drop entries holding NUM")
            .value_name("NUM")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .action(ArgAction::Append))

        // Sort modifiers
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Sort in descending order")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-case")
            .short('i')
            .long("ignore-case")
            .help("Compare text case-insensitively")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("lowercase-first")
            .long("lowercase-first")
            .help("Put lowercase letters before uppercase ones")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("group-letters")
            .long("group-letters")
            .help("Group the upper and lowercase forms of each letter together")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("capital-first")
            .long("capital-first")
            .help("With --locale, put entries starting with a capital letter first")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("nan-last")
            .long("nan-last")
            .help("Sort NaN after every other number")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("presort")
            .long("presort")
            .help("Order equal entries by their text, regardless of input order")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("parallel")
            .long("parallel")
            .help("Sort with N threads")
            .value_name("N")
            .value_parser(value_parser!(usize)))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> NatsortResult<SortConfig> {
    let number_type: NumberType = match matches.get_one::<String>("number-type") {
        Some(name) => name.parse()?,
        None => NumberType::Int,
    };

    let mut builder = SortConfigBuilder::new().number_type(number_type);

    let flags = [
        ("sign", Ns::SIGNED),
        ("noexp", Ns::NOEXP),
        ("paths", Ns::PATH),
        ("locale", Ns::LOCALE),
        ("ignore-case", Ns::IGNORECASE),
        ("lowercase-first", Ns::LOWERCASEFIRST),
        ("group-letters", Ns::GROUPLETTERS),
        ("capital-first", Ns::CAPITALFIRST),
        ("nan-last", Ns::NANLAST),
        ("presort", Ns::PRESORT),
    ];
    for (name, flag) in flags {
        if matches.get_flag(name) {
            builder = builder.flags(flag);
        }
    }

    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if let Some(&threads) = matches.get_one::<usize>("parallel") {
        builder = builder.parallel_threads(threads);
    }

    builder.build()
}

/// Build the entry filter; numbers are found with the sorting tokenizer.
fn parse_filter_from_matches(matches: &ArgMatches, alg: Ns) -> NatsortResult<EntryFilter> {
    let regex = NumericRegex::for_alg(alg & (Ns::FLOAT | Ns::SIGNED | Ns::NOEXP), '.')?;
    Ok(EntryFilter::new(regex)
        .with_ranges(ranges_from(matches, "filter")?)
        .with_reverse_ranges(ranges_from(matches, "reverse-filter")?)
        .with_excluded(
            matches
                .get_many::<f64>("exclude")
                .unwrap_or_default()
                .copied()
                .collect(),
        ))
}

fn ranges_from(matches: &ArgMatches, id: &str) -> NatsortResult<Vec<NumberRange>> {
    let Some(occurrences) = matches.get_occurrences::<f64>(id) else {
        return Ok(Vec::new());
    };
    occurrences
        .map(|bounds| match bounds.copied().collect::<Vec<f64>>().as_slice() {
            &[low, high] => NumberRange::new(low, high),
            _ => Err(NatsortError::parse_error(&format!(
                "--{id} takes exactly two numbers"
            ))),
        })
        .collect()
}

/// Read one entry per line, trimming surrounding whitespace
fn read_entries<R: BufRead>(reader: R) -> NatsortResult<Vec<String>> {
    reader
        .lines()
        .map(|line| -> NatsortResult<String> { Ok(line?.trim().to_string()) })
        .collect()
}

fn sort_and_print_entries<W: Write>(
    entries: &[String],
    config: &SortConfig,
    out: &mut W,
) -> NatsortResult<()> {
    for entry in natsorted_by(entries, |e| e.to_value(), config)? {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_output(args: &[&str]) -> String {
        let matches = build_cli()
            .try_get_matches_from(args)
            .expect("Failed to parse test arguments");
        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");
        let filter =
            parse_filter_from_matches(&matches, config.alg).expect("Failed to parse test filter");
        let entries: Vec<String> = matches
            .get_many::<String>("entries")
            .unwrap_or_default()
            .map(|s| s.trim().to_string())
            .collect();
        let mut out = Vec::new();
        sort_and_print_entries(&filter.apply(entries), &config, &mut out)
            .expect("Failed to sort entries");
        String::from_utf8(out).expect("Failed to decode output")
    }

    #[test]
    fn test_parse_basic_config() {
        let matches = build_cli()
            .try_get_matches_from(["natsort", "-t", "real", "-r", "-p"])
            .expect("Failed to parse test arguments");
        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");
        assert_eq!(config.alg, Ns::REAL | Ns::PATH);
        assert!(config.reverse);
    }

    #[test]
    fn test_number_type_aliases() {
        let matches = build_cli()
            .try_get_matches_from(["natsort", "-t", "f", "--noexp", "-s"])
            .expect("Failed to parse test arguments");
        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");
        assert_eq!(config.alg, Ns::FLOAT | Ns::SIGNED | Ns::NOEXP);

        assert!(build_cli()
            .try_get_matches_from(["natsort", "-t", "hex"])
            .is_err());
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(sorted_output(&["natsort", "a9", "a10", "a2"]), "a2\na9\na10\n");
        assert_eq!(
            sorted_output(&["natsort", "-r", "a9", "a10", "a2"]),
            "a10\na9\na2\n"
        );
    }

    #[test]
    fn test_signed_real_numbers() {
        assert_eq!(
            sorted_output(&["natsort", "-t", "real", "x-2", "x1.5", "x-0.5"]),
            "x-2\nx-0.5\nx1.5\n"
        );
    }

    #[test]
    fn test_filters() {
        let output = sorted_output(&[
            "natsort", "-f", "1", "10", "-e", "5", "a15", "a5", "a2", "a7",
        ]);
        assert_eq!(output, "a2\na7\n");

        let output = sorted_output(&["natsort", "-F", "1", "10", "a15", "a5", "a20"]);
        assert_eq!(output, "a15\na20\n");

        let output = sorted_output(&[
            "natsort", "-s", "-f", "-10", "-1", "a-5", "a3", "a-20",
        ]);
        assert_eq!(output, "a-5\n");
    }

    #[test]
    fn test_bad_filter_range() {
        let matches = build_cli()
            .try_get_matches_from(["natsort", "-f", "10", "1"])
            .expect("Failed to parse test arguments");
        let err = parse_filter_from_matches(&matches, Ns::DEFAULT)
            .expect_err("reversed range must fail");
        assert_eq!(err.exit_code(), natsort::USAGE_FAILURE);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let matches = build_cli()
            .try_get_matches_from(["natsort", "--parallel", "0"])
            .expect("Failed to parse test arguments");
        assert!(parse_config_from_matches(&matches).is_err());
    }

    #[test]
    fn test_read_entries() {
        let input = "a10\n  a2 \nb1\n";
        let entries = read_entries(input.as_bytes()).expect("Failed to read entries");
        assert_eq!(entries, ["a10", "a2", "b1"]);
    }
}
