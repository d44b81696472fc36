use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use cmm_lexer::{display_error, lexer::lexer::Lexer};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        panic!("Incorrect arguments provided!");
    }

    for file_path in &args[1..] {
        let file_name = if file_path.contains("/") {
            file_path.split("/").last().unwrap()
        } else {
            file_path
        };

        let file_contents = read_to_string(file_path).expect("Failed to read file!");

        let start = Instant::now();

        // One lexer per file; each scan starts with fresh line/column counters.
        let mut lexer = Lexer::new(file_contents, Some(String::from(file_name)));

        loop {
            let token = lexer.next_token();
            let is_eof = token.is_eof();
            token.debug();

            if is_eof {
                break;
            }
        }

        println!("Tokenized in {:?}", start.elapsed());

        for error in lexer.diagnostics() {
            display_error(error, PathBuf::from(file_path));
        }
    }
}
