// Interactive menu around the comparison core. All terminal formatting
// (banner, report table, array sample) lives here, outside the core.

use std::io::{self, Write};
use std::process;

use colored::Colorize;

use sort_comparison::{run_all, Dataset, Measurement, DEFAULT_BOUND, DEFAULT_LEN};

/// At most this many elements of the dataset are shown by the viewer.
const SAMPLE_LIMIT: usize = 20;

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_banner(dataset: &Dataset) {
    println!();
    println!("{}", "========================================".cyan());
    println!("{}", "      SORTING ALGORITHM COMPARATOR      ".cyan().bold());
    println!("      Elements in array: {}", dataset.len());
    println!("{}", "========================================".cyan());
    println!("1. Run ALL algorithms and compare times");
    println!("2. Change array size");
    println!("3. View array (sample)");
    println!("0. Exit");
}

fn print_report(results: &[Measurement]) {
    println!();
    println!("{}", "--- RESULTS (time in seconds) ---".green().bold());
    println!("--------------------------------------");
    for measurement in results {
        println!(
            "| {:<15} | {:.6} s |",
            measurement.algorithm.name(),
            measurement.seconds()
        );
    }
    println!("--------------------------------------");
}

fn print_sample(dataset: &Dataset) {
    let values = dataset.values();
    let shown = &values[..values.len().min(SAMPLE_LIMIT)];

    print!("Sample of current array: [ ");
    for value in shown {
        print!("{value} ");
    }
    if values.len() > SAMPLE_LIMIT {
        print!("... ");
    }
    println!("]");
}

fn run_comparison(dataset: &Dataset) {
    match run_all(dataset.values()) {
        Ok(results) => print_report(&results),
        Err(err) => eprintln!("{} {err}", "comparison failed:".red()),
    }
}

fn resize_dataset(dataset: &mut Dataset) -> io::Result<()> {
    let input = prompt("New size (e.g. 10000, 50000): ")?;
    let len: usize = match input.parse() {
        Ok(len) => len,
        Err(_) => {
            eprintln!("{} '{input}' is not a valid size", "error:".red());
            return Ok(());
        }
    };
    match dataset.resize(len) {
        Ok(()) => println!("New array generated!"),
        Err(err) => eprintln!("{} {err}", "resize failed:".red()),
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let mut dataset = match Dataset::generate(DEFAULT_LEN, DEFAULT_BOUND) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("{} {err}", "failed to generate initial dataset:".red());
            process::exit(1);
        }
    };

    loop {
        print_banner(&dataset);
        let choice = prompt("Choice: ")?;

        match choice.as_str() {
            "1" => run_comparison(&dataset),
            "2" => resize_dataset(&mut dataset)?,
            "3" => print_sample(&dataset),
            "0" => {
                println!("Exiting...");
                break;
            }
            other => eprintln!("{} unknown choice '{other}'", "error:".red()),
        }
    }
    Ok(())
}
