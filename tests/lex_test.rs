use gasm::lang::{Instruction, Lexer, Token};

fn ins(op: &str, params: &[&str]) -> Instruction {
    Instruction::new(op, params.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_tokens() {
    let mut lx = Lexer::new("movp 1,2 ; go\n");
    assert_eq!(lx.token(), Token::Ident("movp".to_string()));
    assert_eq!(lx.token(), Token::Ident("1".to_string()));
    assert_eq!(lx.token(), Token::Comma);
    assert_eq!(lx.token(), Token::Ident("2".to_string()));
    assert_eq!(lx.token(), Token::Newline);
    assert_eq!(lx.token(), Token::Eof);
    assert_eq!(lx.token(), Token::Eof);
}

#[test]
fn test_commas_and_spaces_separate_params() {
    let mut lx = Lexer::new("add  40 ,2\n");
    assert_eq!(lx.next_instruction(), ins("add", &["40", "2"]));
    assert!(lx.next_instruction().is_eof());
}

#[test]
fn test_empty_lines_and_comments_are_skipped() {
    let mut lx = Lexer::new("\n\n; only a comment\n  \t\nprint a ; trailing\n\n");
    assert_eq!(lx.next_instruction(), ins("print", &["a"]));
    assert!(lx.next_instruction().is_eof());
}

#[test]
fn test_last_line_without_newline() {
    let mut lx = Lexer::new("set $.x 1\nline 2 3");
    assert_eq!(lx.next_instruction(), ins("set", &["$.x", "1"]));
    assert_eq!(lx.next_instruction(), ins("line", &["2", "3"]));
    assert!(lx.next_instruction().is_eof());
}

#[test]
fn test_eof_is_idempotent() {
    let mut lx = Lexer::new("");
    for _ in 0..3 {
        assert!(lx.next_instruction().is_eof());
    }
    assert!(lx.is_exhausted());
}

#[test]
fn test_reset_discards_rest() {
    let mut lx = Lexer::new("a\nb\n");
    assert_eq!(lx.next_instruction(), ins("a", &[]));
    lx.reset("c\n");
    assert_eq!(lx.next_instruction(), ins("c", &[]));
    assert!(lx.next_instruction().is_eof());
}

#[test]
fn test_iterator_stops_before_eof() {
    let ops: Vec<String> = Lexer::new("path begin\nmovp 1 1\nstrk\n")
        .map(|i| i.operation().to_string())
        .collect();
    assert_eq!(ops, vec!["path", "movp", "strk"]);
}

#[test]
fn test_display() {
    let i = Lexer::new("rgba,line,255,0,0,1").next().unwrap();
    assert_eq!(i.to_string(), "rgba line 255 0 0 1");
}
