use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: abc <input.abc> [output]");
        eprintln!("       abc --yaml <input.abc> [output]");
        process::exit(1);
    }

    let mut yaml = false;
    let mut input_path = &args[1];
    let mut output_path: Option<&String> = args.get(2);

    // Parse flags
    if args[1] == "--yaml" {
        yaml = true;
        if args.len() < 3 {
            eprintln!("Usage: abc --yaml <input.abc> [output]");
            process::exit(1);
        }
        input_path = &args[2];
        output_path = args.get(3);
    }

    let song = match abc::parse_file(input_path) {
        Ok(song) => song,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let dump = if yaml {
        match serde_yaml::to_string(&song) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error serializing song: {}", e);
                process::exit(1);
            }
        }
    } else {
        song.to_string()
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &dump) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote song data to {}", path);
        }
        None => {
            print!("{}", dump);
        }
    }
}
