//! End-to-end scanner tests
//! Token streams for small Lox snippets, checked kind by kind

use glox::{scan, Literal, Scanner, Token, TokenKind};

fn tok(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    Token::new(kind, lexeme.to_string(), None, line)
}

fn num(lexeme: &str, value: f64, line: usize) -> Token {
    Token::new(
        TokenKind::Number,
        lexeme.to_string(),
        Some(Literal::Number(value)),
        line,
    )
}

fn check(source: &str, expected: Vec<Token>) {
    let (tokens, diagnostics) = scan(source);
    assert!(
        !diagnostics.had_error(),
        "unexpected errors for {:?}: {:?}",
        source,
        diagnostics.iter().collect::<Vec<_>>()
    );
    assert_eq!(tokens, expected, "token stream for {:?}", source);
}

#[test]
fn test_empty_source() {
    check("", vec![Token::eof(1)]);
}

#[test]
fn test_single_character_tokens() {
    check(
        "(){},.-+;*",
        vec![
            tok(TokenKind::LeftParen, "(", 1),
            tok(TokenKind::RightParen, ")", 1),
            tok(TokenKind::LeftBrace, "{", 1),
            tok(TokenKind::RightBrace, "}", 1),
            tok(TokenKind::Comma, ",", 1),
            tok(TokenKind::Dot, ".", 1),
            tok(TokenKind::Minus, "-", 1),
            tok(TokenKind::Plus, "+", 1),
            tok(TokenKind::Semicolon, ";", 1),
            tok(TokenKind::Star, "*", 1),
            Token::eof(1),
        ],
    );
}

#[test]
fn test_integer() {
    check("123", vec![num("123", 123.0, 1), Token::eof(1)]);
}

#[test]
fn test_decimal() {
    check("123.456", vec![num("123.456", 123.456, 1), Token::eof(1)]);
}

#[test]
fn test_numbers_separated_by_whitespace() {
    check(
        "123 456",
        vec![num("123", 123.0, 1), num("456", 456.0, 1), Token::eof(1)],
    );
}

#[test]
fn test_number_followed_by_operator() {
    check(
        "123+456",
        vec![
            num("123", 123.0, 1),
            tok(TokenKind::Plus, "+", 1),
            num("456", 456.0, 1),
            Token::eof(1),
        ],
    );
}

#[test]
fn test_small_program() {
    let source = r#"// compute something
var total = 10 / 4;
if (total >= 2.5) {
  print "big";
}
"#;
    let (tokens, diagnostics) = scan(source);
    assert!(!diagnostics.had_error());

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Print,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );

    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[7].line, 3);
    assert_eq!(tokens[15].literal, Some(Literal::Str("big".to_string())));
    assert_eq!(tokens[15].line, 4);
    assert_eq!(tokens.last().map(|t| t.line), Some(6));
}

#[test]
fn test_every_keyword() {
    let source = "and class else false fun for if nil or print return super this true var while";
    let (tokens, _) = scan(source);
    assert_eq!(tokens.len(), 17);
    for token in &tokens[..16] {
        assert!(token.kind.is_keyword(), "{} is not a keyword", token.lexeme);
        assert_eq!(TokenKind::keyword(&token.lexeme), Some(token.kind));
        assert_eq!(token.literal, None);
    }
}

#[test]
fn test_unterminated_string_reports_once() {
    let mut reports = Vec::new();
    let mut reporter = |line: usize, message: &str| reports.push((line, message.to_string()));
    let tokens = Scanner::new("print \"oops").scan_tokens(&mut reporter);

    assert_eq!(reports, vec![(1, "Unterminated string".to_string())]);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::Eof]);
}

#[test]
fn test_unexpected_characters_do_not_stop_scan() {
    let (tokens, diagnostics) = scan("a ? b\n% c");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );

    let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "Error: Unexpected character: ? [line 1]".to_string(),
            "Error: Unexpected character: % [line 2]".to_string(),
        ]
    );
}

#[test]
fn test_tokens_serialize_to_json() {
    let (tokens, _) = scan("1");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "Number");
    assert_eq!(json[0]["lexeme"], "1");
    assert_eq!(json[0]["literal"]["Number"], 1.0);
    assert_eq!(json[1]["kind"], "Eof");
    assert!(json[1]["literal"].is_null());
}
