//! Integration tests for end-to-end scanning.
//!
//! These tests verify that the lexer handles complete programs, including
//! malformed input spanning several error categories in one scan.

use cmm_lexer::lexer::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_scan_complete_program() {
    let source = r#"
// summing loop
int main() {
    int sum;
    sum = 0;
    int i;
    i = 1;
    while (i <= 10) {
        sum = sum + i;
        i++;
    }
    cout << "sum is ";
    cout << sum;
    return 0;
}
"#
    .to_string();

    let (tokens, errors) = tokenize(source, Some("sum.cmm".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Identifier("main".to_string()));
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);

    assert!(tokens.iter().any(|t| t.kind == TokenKind::While));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::LessEquals));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::PlusPlus));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Write));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::StringLiteral("\"sum is \"".to_string())));

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(),
        1
    );
}

#[test]
fn test_scan_struct_and_io() {
    let source = "struct Pair { int first; int second; };\ncin >> p.first;\n".to_string();
    let (tokens, errors) = tokenize(source, Some("pair.cmm".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Struct);
    assert_eq!(tokens[1].kind, TokenKind::Identifier("Pair".to_string()));

    let dot = tokens.iter().position(|t| t.kind == TokenKind::Dot).unwrap();
    assert_eq!(tokens[dot - 1].kind, TokenKind::Identifier("p".to_string()));
    assert_eq!(
        tokens[dot + 1].kind,
        TokenKind::Identifier("first".to_string())
    );
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Read));
}

#[test]
fn test_scan_recovers_from_every_error_category() {
    let source = "int n = 99999999999999999999;\n\"bad\\escape\"\n\"open\ncout @ << n;\n"
        .to_string();

    let (tokens, errors) = tokenize(source, Some("broken.cmm".to_string()));

    // Token stream stays aligned with the input despite four errors.
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Identifier("n".to_string()));
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::IntLiteral(i32::MAX));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(
        tokens[5].kind,
        TokenKind::StringLiteral("\"bad\\escape\"".to_string())
    );
    assert_eq!(tokens[6].kind, TokenKind::StringLiteral("\"open".to_string()));
    assert_eq!(tokens[7].kind, TokenKind::Cout);
    assert_eq!(tokens[8].kind, TokenKind::Write);
    assert_eq!(tokens[9].kind, TokenKind::Identifier("n".to_string()));
    assert_eq!(tokens[10].kind, TokenKind::Semicolon);
    assert_eq!(tokens[11].kind, TokenKind::EOF);

    let names: Vec<&str> = errors.iter().map(|e| e.get_error_name()).collect();
    assert_eq!(
        names,
        vec![
            "IntegerOverflow",
            "BadEscape",
            "UnterminatedString",
            "IllegalCharacter"
        ]
    );

    assert_eq!(errors[0].get_position().line, 1);
    assert_eq!(errors[1].get_position().line, 2);
    assert_eq!(errors[2].get_position().line, 3);
    assert_eq!(errors[3].get_position().line, 4);
}

#[test]
fn test_scan_from_file() {
    let source = std::fs::read_to_string("tests/test_file.cmm").unwrap();
    let (tokens, errors) = tokenize(source, Some("test_file.cmm".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Void);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_pull_interface_terminates() {
    let mut lexer = Lexer::new("a@b \"open".to_string(), Some("broken.cmm".to_string()));

    let mut count = 0;
    loop {
        let token = lexer.next_token();
        count += 1;
        assert!(count < 100, "scan did not terminate");
        if token.is_eof() {
            break;
        }
    }

    // a, b, "open, EOF
    assert_eq!(count, 4);
    assert_eq!(lexer.diagnostics().len(), 2);
}
