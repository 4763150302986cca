use clap::Parser;
use dice_notation::{roll::DEFAULT_MAX_ROLLS, RollContext};
use std::io::{self, BufRead, Write};

/// Evaluate dice notation such as `3d6+2`, `4d6d1` or `2d20t1*2`.
#[derive(Parser, Debug)]
#[command(name = "repl", version)]
struct Args {
    /// Maximum number of dice a single expression may roll
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: usize,

    /// Do not limit the number of dice rolled
    #[arg(long, conflicts_with = "max_rolls")]
    unbounded: bool,

    /// Expressions to evaluate; starts an interactive prompt when empty
    expressions: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let max_rolls = (!args.unbounded).then_some(args.max_rolls);
    let mut ctx = RollContext::new(max_rolls, rand::thread_rng());

    if !args.expressions.is_empty() {
        let mut failed = false;
        for expr in &args.expressions {
            match ctx.eval(expr) {
                Ok(r) => println!("{}", r),
                Err(why) => {
                    eprintln!("Error: {}", why);
                    failed = true;
                }
            }
        }
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match ctx.eval(&line) {
                Ok(r) => println!("{}", r),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
