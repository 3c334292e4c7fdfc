use clap::Parser;
use sci_calc::core::demo::{describe_failure, prompt};
use sci_calc::utils::error::ErrorCategory;
use sci_calc::{CliConfig, Demo, Operand, ScientificCalculator};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    let log_config = match config.log_config() {
        Ok(log_config) => log_config,
        Err(e) => {
            eprintln!("❌ {}", describe_failure(&e));
            std::process::exit(1);
        }
    };

    let calc = match ScientificCalculator::from_config(&log_config) {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("❌ Could not open log sinks: {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let outcome = read_operands(&config).and_then(|(a, b)| {
        let stdout = io::stdout();
        let mut demo = Demo::new(&calc, stdout.lock());
        demo.run(&a, &b)
    });

    if let Err(e) = outcome {
        println!("{}", describe_failure(&e));
        if e.category() == ErrorCategory::Unexpected {
            std::process::exit(1);
        }
    }
}

fn read_operands(config: &CliConfig) -> sci_calc::Result<(Operand, Operand)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let a = match config.operand_a() {
        Some(a) => a,
        None => prompt("a", &mut input, &mut out)?,
    };
    let b = match config.operand_b() {
        Some(b) => b,
        None => prompt("b", &mut input, &mut out)?,
    };
    out.flush()?;
    Ok((a, b))
}
