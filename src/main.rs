//! fincalc CLI
//!
//! Run financial calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compound interest
//! fincalc compound --principal 10000 --rate 0.05 --years 10 --frequency 4
//!
//! # Monthly loan payment
//! fincalc payment --principal 200000 --rate 0.04 --years 30
//!
//! # Aggregate a portfolio from a JSON file
//! fincalc portfolio --input portfolio.json --format json
//!
//! # Generate a random portfolio for testing
//! fincalc generate --positions 10 --output portfolio.json
//! ```

use fincalc::error::CalcError;
use fincalc::interest::annuity::future_value_annuity;
use fincalc::interest::compounding::compound_interest;
use fincalc::lending::amortization::monthly_payment;
use fincalc::performance::returns::investment_return;
use fincalc::portfolio::aggregation::portfolio_value;
use fincalc::portfolio::position::Position;
use fincalc::risk::assessment::risk_assessment;
use fincalc::simulation::scenario::{generate_portfolio, ScenarioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"fincalc — closed-form and statistical financial calculations

USAGE:
    fincalc <COMMAND> [OPTIONS]

COMMANDS:
    compound    Compound interest on a principal
    payment     Fixed monthly payment amortizing a loan
    annuity     Future value of an ordinary annuity
    return      Annualized investment return
    portfolio   Aggregate positions into total value and weighted return
    risk        Mean return, volatility, and Sharpe ratio of a return series
    generate    Generate a random portfolio JSON file (for testing)
    help        Show this message

OPTIONS (compound):
    --principal <N>   Initial amount
    --rate <N>        Annual rate as a decimal fraction (0.05 = 5%)
    --years <N>       Duration in years
    --frequency <N>   Compounding periods per year (default: 1)

OPTIONS (payment):
    --principal <N>   Loan amount
    --rate <N>        Annual rate as a decimal fraction
    --years <N>       Loan term in years

OPTIONS (annuity):
    --payment <N>     Payment per period
    --rate <N>        Rate per period as a decimal fraction
    --periods <N>     Number of periods

OPTIONS (return):
    --initial <N>     Initial investment value
    --final <N>       Final investment value
    --years <N>       Holding period in years

OPTIONS (portfolio, risk):
    --input <FILE>    Path to JSON input file
    --format <FMT>    Output format: text (default) or json

OPTIONS (generate):
    --positions <N>   Number of positions (default: 10)
    --output <FILE>   Write to file instead of stdout

EXAMPLES:
    fincalc compound --principal 10000 --rate 0.05 --years 10 --frequency 4
    fincalc payment --principal 200000 --rate 0.04 --years 30
    fincalc return --initial 10000 --final 20000 --years 10
    fincalc portfolio --input portfolio.json --format json
    fincalc risk --input returns.json"#
    );
}

/// JSON schema for portfolio input files.
#[derive(serde::Deserialize)]
struct PortfolioFile {
    positions: Vec<Position>,
}

/// JSON schema for return-series input files.
#[derive(serde::Deserialize)]
struct ReturnsFile {
    returns: Vec<f64>,
}

/// Collect `--flag value` pairs from the argument list.
struct Flags {
    pairs: Vec<(String, String)>,
}

impl Flags {
    fn parse(args: &[String]) -> Self {
        let mut pairs = Vec::new();
        let mut i = 0;
        while i < args.len() {
            let flag = &args[i];
            if !flag.starts_with("--") {
                eprintln!("Unknown argument: {}", flag);
                process::exit(1);
            }
            i += 1;
            let value = args.get(i).cloned().unwrap_or_else(|| {
                eprintln!("{} requires a value", flag);
                process::exit(1);
            });
            pairs.push((flag.trim_start_matches("--").to_string(), value));
            i += 1;
        }
        Self { pairs }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(flag, _)| flag == name)
            .map(|(_, value)| value.as_str())
    }

    fn require(&self, name: &str) -> &str {
        self.get(name).unwrap_or_else(|| {
            eprintln!("Error: --{} <VALUE> is required", name);
            process::exit(1);
        })
    }

    fn number(&self, name: &str) -> f64 {
        let raw = self.require(name);
        raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid number for --{} ('{}'): {}", name, raw, e);
            process::exit(1);
        })
    }
}

fn fail(err: CalcError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    })
}

fn cmd_compound(args: &[String]) {
    let flags = Flags::parse(args);
    let principal = flags.number("principal");
    let rate = flags.number("rate");
    let years = flags.number("years");
    let frequency: u32 = flags
        .get("frequency")
        .map(|raw| {
            raw.parse().unwrap_or_else(|e| {
                eprintln!("Invalid number for --frequency ('{}'): {}", raw, e);
                process::exit(1);
            })
        })
        .unwrap_or(1);

    log::debug!(
        "compound_interest(principal={}, rate={}, years={}, n={})",
        principal,
        rate,
        years,
        frequency
    );
    let amount = compound_interest(principal, rate, years, frequency).unwrap_or_else(|e| fail(e));
    println!("Final amount: {:.2}", amount);
}

fn cmd_payment(args: &[String]) {
    let flags = Flags::parse(args);
    let payment = monthly_payment(
        flags.number("principal"),
        flags.number("rate"),
        flags.number("years"),
    )
    .unwrap_or_else(|e| fail(e));
    println!("Monthly payment: {:.2}", payment);
}

fn cmd_annuity(args: &[String]) {
    let flags = Flags::parse(args);
    let fv = future_value_annuity(
        flags.number("payment"),
        flags.number("rate"),
        flags.number("periods"),
    )
    .unwrap_or_else(|e| fail(e));
    println!("Future value: {:.2}", fv);
}

fn cmd_return(args: &[String]) {
    let flags = Flags::parse(args);
    let annual = investment_return(
        flags.number("initial"),
        flags.number("final"),
        flags.number("years"),
    )
    .unwrap_or_else(|e| fail(e));
    println!("Annualized return: {:.2}%", annual);
}

fn cmd_portfolio(args: &[String]) {
    let flags = Flags::parse(args);
    let path = flags.require("input");
    let format = flags.get("format").unwrap_or("text");

    let file: PortfolioFile = serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "positions": [
    {{ "amount": 10000.0, "return_rate": 8.5 }}
  ]
}}"#
        );
        process::exit(1);
    });

    log::debug!("aggregating {} positions from {}", file.positions.len(), path);
    let summary = portfolio_value(&file.positions).unwrap_or_else(|e| fail(e));

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        println!("{}", summary);
    }
}

fn cmd_risk(args: &[String]) {
    let flags = Flags::parse(args);
    let path = flags.require("input");
    let format = flags.get("format").unwrap_or("text");

    let file: ReturnsFile = serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(r#"{{ "returns": [8.0, 12.0, -3.5, 10.0] }}"#);
        process::exit(1);
    });

    log::debug!("assessing {} observations from {}", file.returns.len(), path);
    let summary = risk_assessment(&file.returns).unwrap_or_else(|e| fail(e));

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        println!("{}", summary);
    }
}

fn cmd_generate(args: &[String]) {
    let flags = Flags::parse(args);
    let positions = flags
        .get("positions")
        .map(|raw| {
            raw.parse().unwrap_or_else(|e| {
                eprintln!("Invalid number for --positions ('{}'): {}", raw, e);
                process::exit(1);
            })
        })
        .unwrap_or(10usize);

    let config = ScenarioConfig {
        position_count: positions,
        ..Default::default()
    };

    #[derive(serde::Serialize)]
    struct OutputFile {
        positions: Vec<Position>,
    }

    let output = OutputFile {
        positions: generate_portfolio(&config),
    };
    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = flags.get("output") {
        fs::write(path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} positions → {}", output.positions.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "compound" => cmd_compound(rest),
        "payment" => cmd_payment(rest),
        "annuity" => cmd_annuity(rest),
        "return" => cmd_return(rest),
        "portfolio" => cmd_portfolio(rest),
        "risk" => cmd_risk(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
