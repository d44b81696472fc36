#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A source location. Lines and columns are 1-based; the column counter
/// resets at every newline.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line(file: PathBuf, line_number: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    for (index, line) in content.lines().enumerate() {
        if index as u32 + 1 == line_number {
            return line.to_string();
        }
    }

    panic!("Line number exceeds file length");
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 1);
        assert_eq!(line, "Hello, world!");

        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 4);
        assert_eq!(line, "Testing { }");
    }
}

pub fn display_error(error: &Error, file: PathBuf) {
    /*
        error: message
        -> final.cmm
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(file.clone(), position.line);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
