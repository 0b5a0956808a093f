use djsim::{analyze, logging, run, SimulationConfig};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    logging::init_tracing(None);

    if matches!(args.first().map(String::as_str), Some("help") | Some("--help")) {
        print_help();
        return;
    }

    let json = args.last().map(String::as_str) == Some("--json");
    if json {
        args.pop();
    }

    let defaults = SimulationConfig::default();
    let n = parse_arg(&args, 0, "n", defaults.input_qubits);
    let shots = parse_arg(&args, 1, "shots", defaults.shots);
    let mut config = SimulationConfig::new(n, shots);
    if let Some(raw) = args.get(2) {
        config = config.with_seed(parse_or_exit(raw, "seed"));
    }

    let result = match run(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        match result.counts.to_json() {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize counts: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_banner();
    println!("━━━ Deutsch–Jozsa circuit (parity oracle) — n = {n} ━━━━━━━━");
    print!("{}", result.circuit);
    println!();
    print!("{}", analyze(&result.circuit).report());
    println!();
    println!("Measurement counts (input qubits, q{}…q0):", n - 1);
    print!("{}", result.counts);
    println!();
    println!("Verdict: {}", result.verdict);
}

fn parse_arg(args: &[String], idx: usize, name: &str, default: usize) -> usize {
    args.get(idx)
        .map(|raw| parse_or_exit(raw, name))
        .unwrap_or(default)
}

fn parse_or_exit<T: std::str::FromStr>(raw: &str, name: &str) -> T {
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {name} '{raw}'. Run 'djsim help' for usage.");
            std::process::exit(1);
        }
    }
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║          djsim v0.1.0                        ║");
    println!("║  Deutsch–Jozsa State-Vector Simulator        ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
}

fn print_help() {
    println!("Usage: djsim [n] [shots] [seed] [--json]\n");
    println!("  n        input qubits (default 3)");
    println!("  shots    measurement shots (default 1024)");
    println!("  seed     RNG seed for reproducible counts");
    println!("  --json   print only the counts table as JSON\n");
    println!("Logging is controlled by RUST_LOG (default: info).");
}
