//! errkit CLI — inspect registered error codes from the terminal.
//!
//! Usage:
//! ```bash
//! # Explain a single code
//! errkit explain 110001
//!
//! # Explain a code from an extra table, as JSON
//! errkit explain 120001 --table fixtures/codes/extra-codes.json --json
//!
//! # Dump the whole table
//! errkit list
//! ```

use std::env;
use std::process;

use errkit_core::{CodeDescriptor, CodeRegistry};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "explain" => cmd_explain(&args[2..]),
        "list" => cmd_list(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("errkit {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("errkit {}", env!("CARGO_PKG_VERSION"));
    println!("Inspect registered error codes\n");
    println!("USAGE:");
    println!("    errkit <COMMAND>\n");
    println!("COMMANDS:");
    println!("    explain <CODE>   Show the descriptor behind a numeric code");
    println!("    list             Show every registered code");
    println!("    version          Print version");
    println!("    help             Print this help\n");
    println!("FLAGS:");
    println!("    --table <FILE>   Also load a JSON code table");
    println!("    --json           Output as JSON");
}

/// Builtin catalog plus any `--table` file, ready for lookups.
fn build_registry(table: Option<&str>) -> CodeRegistry {
    let registry = CodeRegistry::new();
    errkit_catalog::register_builtin(&registry);

    if let Some(path) = table {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Cannot read table {path}: {e}");
                process::exit(1);
            }
        };
        if let Err(e) = registry.load_json(&json) {
            eprintln!("Cannot load table {path}: {e}");
            process::exit(1);
        }
    }

    registry
}

/// Parse trailing `--table`/`--json` flags shared by both commands.
fn parse_flags(args: &[String]) -> (Option<String>, bool) {
    let mut table: Option<String> = None;
    let mut as_json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--table" => {
                i += 1;
                table = args.get(i).cloned();
                if table.is_none() {
                    eprintln!("Error: --table requires a file path");
                    process::exit(1);
                }
            }
            "--json" => as_json = true,
            flag => {
                eprintln!("Unknown flag: {flag}");
                process::exit(1);
            }
        }
        i += 1;
    }

    (table, as_json)
}

fn print_descriptor(desc: &CodeDescriptor) {
    println!("{}  {}", desc.code, desc.message);
    println!("  HTTP status: {}", desc.http_status);
    if let Some(reference) = &desc.reference {
        println!("  Reference:   {reference}");
    }
}

fn cmd_explain(args: &[String]) {
    let code_arg = match args.first() {
        Some(arg) => arg,
        None => {
            eprintln!("Error: explain requires a numeric code");
            process::exit(1);
        }
    };
    let code: u32 = match code_arg.parse() {
        Ok(code) => code,
        Err(_) => {
            eprintln!("Error: '{code_arg}' is not a numeric code");
            process::exit(1);
        }
    };

    let (table, as_json) = parse_flags(&args[1..]);
    let registry = build_registry(table.as_deref());

    // An unregistered code resolves to the unknown descriptor, same as a
    // boundary layer would serve.
    let desc = registry
        .get(code)
        .unwrap_or_else(CodeDescriptor::unknown);

    if as_json {
        match serde_json::to_string_pretty(&desc) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else {
        print_descriptor(&desc);
    }
}

fn cmd_list(args: &[String]) {
    let (table, as_json) = parse_flags(args);
    let registry = build_registry(table.as_deref());
    let descriptors = registry.descriptors();

    if as_json {
        match serde_json::to_string_pretty(&descriptors) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else {
        for desc in &descriptors {
            println!("{:>8}  {:>3}  {}", desc.code, desc.http_status, desc.message);
        }
    }
}
