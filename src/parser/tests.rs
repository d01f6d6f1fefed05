//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Let and return statements
//! - Literals, prefix and infix expressions
//! - Operator precedence and associativity
//! - Conditionals, function literals and calls
//! - Error recording and recovery

use crate::{
    ast::ast::{Expression, Node, Program, Statement},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::{
    parse, parse_with_options, ParseResult, Parser, ParserOptions, MAX_NESTING_DEPTH,
};

fn parse_source(source: &str) -> ParseResult {
    parse(source.to_string(), Some("test.mk".to_string()))
}

fn parse_ok(source: &str) -> Program {
    let result = parse_source(source);
    assert!(
        result.errors.is_empty(),
        "unexpected errors for {:?}: {:?}",
        source,
        result.errors
    );
    result.program
}

fn render(source: &str) -> String {
    parse_ok(source).to_string().trim_end().to_string()
}

fn single_expression(source: &str) -> Expression {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "expected one statement in {:?}", source);

    match program.statements.into_iter().next() {
        Some(Statement::Expression(stmt)) => stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    assert_eq!(program.statements.len(), 3);

    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];
    for (stmt, (name, value)) in program.statements.iter().zip(expected) {
        match stmt {
            Statement::Let(stmt) => {
                assert_eq!(stmt.token_literal(), "let");
                assert_eq!(stmt.name.value, name);
                assert_eq!(stmt.name.token_literal(), name);
                assert_eq!(stmt.value.to_string(), value);
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_let_integer_value() {
    let program = parse_ok("let x = 5;");
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Statement::Let(stmt) => {
            assert_eq!(stmt.name.value, "x");
            match &stmt.value {
                Expression::Integer(int) => assert_eq!(int.value, 5),
                other => panic!("expected integer literal, got {:?}", other),
            }
        }
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_return_statement() {
    let program = parse_ok("return 10;");
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Statement::Return(stmt) => {
            assert_eq!(stmt.token_literal(), "return");
            match &stmt.value {
                Expression::Integer(int) => assert_eq!(int.value, 10),
                other => panic!("expected integer literal, got {:?}", other),
            }
        }
        other => panic!("expected return statement, got {:?}", other),
    }
}

#[test]
fn test_parse_literals() {
    match single_expression("foobar;") {
        Expression::Identifier(ident) => {
            assert_eq!(ident.value, "foobar");
            assert_eq!(ident.token_literal(), "foobar");
        }
        other => panic!("expected identifier, got {:?}", other),
    }

    match single_expression("5;") {
        Expression::Integer(int) => {
            assert_eq!(int.value, 5);
            assert_eq!(int.token_literal(), "5");
        }
        other => panic!("expected integer, got {:?}", other),
    }

    match single_expression("false") {
        Expression::Boolean(boolean) => assert!(!boolean.value),
        other => panic!("expected boolean, got {:?}", other),
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [("!5;", "!", "5"), ("-15;", "-", "15"), ("!true;", "!", "true")];

    for (source, operator, right) in cases {
        match single_expression(source) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.right.to_string(), right);
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", "==", "!="];

    for operator in operators {
        let source = format!("5 {} 6;", operator);
        match single_expression(&source) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.left.to_string(), "5");
                assert_eq!(infix.right.to_string(), "6");
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("a + b * c", "(a+(b*c))"),
        ("1 < 2 == 3 > 4", "((1<2)==(3>4))"),
        ("-a * b", "((-a)*b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a+b)+c)"),
        ("a + b - c", "((a+b)-c)"),
        ("a * b * c", "((a*b)*c)"),
        ("a * b / c", "((a*b)/c)"),
        ("a + b / c", "(a+(b/c))"),
        ("a + b * c + d / e - f", "(((a+(b*c))+(d/e))-f)"),
        ("3 + 4; -5 * 5", "(3+4)\n((-5)*5)"),
        ("5 > 4 == 3 < 4", "((5>4)==(3<4))"),
        ("5 < 4 != 3 > 4", "((5<4)!=(3>4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3+(4*5))==((3*1)+(4*5)))"),
        ("3 > 5 == false", "((3>5)==false)"),
        ("3 < 5 == true", "((3<5)==true)"),
        ("a + add(b * c) + d", "((a+add((b*c)))+d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a,b,1,(2*3),(4+5),add(6,(7*8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a+b)+((c*d)/f))+g))"),
    ];

    for (source, expected) in cases {
        assert_eq!(render(source), expected, "source: {:?}", source);
    }
}

#[test]
fn test_grouping_overrides_precedence() {
    let cases = [
        ("(a + b) * c", "((a+b)*c)"),
        ("1 + (2 + 3) + 4", "((1+(2+3))+4)"),
        ("(5 + 5) * 2", "((5+5)*2)"),
        ("2 / (5 + 5)", "(2/(5+5))"),
        ("-(5 + 5)", "(-(5+5))"),
        ("!(true == true)", "(!(true==true))"),
    ];

    for (source, expected) in cases {
        assert_eq!(render(source), expected, "source: {:?}", source);
    }
}

#[test]
fn test_left_associativity() {
    assert_eq!(render("a - b - c"), "((a-b)-c)");
    assert_eq!(render("a / b / c"), "((a/b)/c)");
    assert_eq!(render("a == b != c"), "((a==b)!=c)");
}

#[test]
fn test_parse_if_expression() {
    match single_expression("if (x < y) { x }") {
        Expression::If(expr) => {
            assert_eq!(expr.condition.to_string(), "(x<y)");
            assert_eq!(expr.consequence.statements.len(), 1);
            assert_eq!(expr.consequence.statements[0].to_string(), "x");
            assert!(expr.alternative.is_none());
            assert_eq!(expr.token_literal(), "if");
        }
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_expression() {
    match single_expression("if (x < y) { x } else { y }") {
        Expression::If(expr) => {
            assert_eq!(expr.consequence.statements.len(), 1);
            let alternative = expr.alternative.expect("alternative block");
            assert_eq!(alternative.statements.len(), 1);
            assert_eq!(alternative.statements[0].to_string(), "y");
        }
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_nested_if() {
    assert_eq!(
        render("if (a) { if (b) { 1 } else { 2 } }"),
        "if (a) { if (b) { 1 } else { 2 } }"
    );
}

#[test]
fn test_parse_function_literal() {
    match single_expression("fn(x, y) { x + y; }") {
        Expression::Function(function) => {
            let names: Vec<&str> = function.parameters.iter().map(|p| p.value.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
            assert_eq!(function.body.statements.len(), 1);
            assert_eq!(function.body.statements[0].to_string(), "(x+y)");
        }
        other => panic!("expected function literal, got {:?}", other),
    }
}

#[test]
fn test_parse_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        match single_expression(source) {
            Expression::Function(function) => {
                let names: Vec<&str> =
                    function.parameters.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(names, expected, "source: {:?}", source);
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_empty_function() {
    match single_expression("fn() { }") {
        Expression::Function(function) => {
            assert!(function.parameters.is_empty());
            assert!(function.body.statements.is_empty());
        }
        other => panic!("expected function literal, got {:?}", other),
    }
}

#[test]
fn test_parse_call_expression() {
    match single_expression("add(1, 2 * 3, fn(x){x}(4))") {
        Expression::Call(call) => {
            assert_eq!(call.callee.to_string(), "add");
            assert_eq!(call.arguments.len(), 3);
            assert_eq!(call.arguments[0].to_string(), "1");

            match &call.arguments[1] {
                Expression::Infix(infix) => {
                    assert_eq!(infix.operator, "*");
                    assert_eq!(infix.to_string(), "(2*3)");
                }
                other => panic!("expected product, got {:?}", other),
            }

            match &call.arguments[2] {
                Expression::Call(inner) => {
                    assert!(matches!(*inner.callee, Expression::Function(_)));
                    assert_eq!(inner.arguments.len(), 1);
                    assert_eq!(inner.to_string(), "fn(x) { x }(4)");
                }
                other => panic!("expected nested call, got {:?}", other),
            }
        }
        other => panic!("expected call expression, got {:?}", other),
    }
}

#[test]
fn test_parse_call_without_arguments() {
    match single_expression("tick()") {
        Expression::Call(call) => assert!(call.arguments.is_empty()),
        other => panic!("expected call expression, got {:?}", other),
    }
    assert_eq!(render("a(b)(c)"), "a(b)(c)");
}

#[test]
fn test_parse_return_without_semicolon_in_block() {
    assert_eq!(
        render("let f = fn(x) { return x }; f(1)"),
        "let f = fn(x) { return x; };\nf(1)"
    );
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_ok("let x = 10; let y = 20; let z = x + y; z");

    assert_eq!(program.statements.len(), 4);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.statements[2].to_string(), "let z = (x+y);");
    assert_eq!(program.statements[3].token_literal(), "z");
}

#[test]
fn test_parse_empty_program() {
    let result = parse_source("");

    assert!(result.is_ok());
    assert!(result.program.statements.is_empty());
}

#[test]
fn test_error_on_missing_prefix_rule() {
    let result = parse_source(";");

    assert!(result.program.statements.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::NoPrefixRule {
            kind: TokenKind::Semicolon,
            token: ";".to_string(),
        }
    );
}

#[test]
fn test_error_on_malformed_let() {
    let result = parse_source("let x 5;");

    assert!(!result.errors.is_empty());
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Integer,
            token: "5".to_string(),
        }
    );
    // Points at the offending token
    assert_eq!(result.errors[0].get_position().0, 6);
}

#[test]
fn test_error_on_missing_identifier() {
    let result = parse_source("let = 10;");

    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
            token: "=".to_string(),
        }
    );
}

#[test]
fn test_error_on_integer_overflow_keeps_node() {
    let result = parse_source("let x = 99999999999999999999;");

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "NumberParseError");
    assert_eq!(result.program.statements.len(), 1);

    match &result.program.statements[0] {
        Statement::Let(stmt) => match &stmt.value {
            Expression::Integer(int) => {
                assert_eq!(int.value, 0);
                assert_eq!(int.to_string(), "99999999999999999999");
            }
            other => panic!("expected integer literal, got {:?}", other),
        },
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_error_on_illegal_token() {
    let result = parse_source("let x = @");

    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::IllegalToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_error_on_malformed_parameter_list() {
    let result = parse_source("fn(x y) { x }");

    assert!(!result.errors.is_empty());
    assert_eq!(result.errors[0].get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_error_on_trailing_comma_in_parameters() {
    let result = parse_source("fn(x,) { x }");

    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::CloseParen,
            token: ")".to_string(),
        }
    );
}

#[test]
fn test_error_on_unclosed_group() {
    let result = parse_source("(1 + 2");

    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::EOF,
            token: String::new(),
        }
    );
}

#[test]
fn test_error_on_if_without_close_paren() {
    let result = parse_source("if (x { y }");

    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::OpenCurly,
            token: "{".to_string(),
        }
    );
}

#[test]
fn test_error_on_unterminated_block() {
    let result = parse_source("fn(x) { x");

    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
            token: String::new(),
        }
    );
}

#[test]
fn test_recovers_after_error() {
    let result = parse_source("let x = ; let y = 5;");

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "NoPrefixRule");
    assert_eq!(result.program.statements.len(), 1);
    assert_eq!(result.program.statements[0].to_string(), "let y = 5;");
}

#[test]
fn test_into_result_policy() {
    assert!(parse_source("let a = 1;").into_result().is_ok());

    let errors = parse_source("let a 1; let b 2;").into_result().unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_lenient_semicolons() {
    let result = parse_source("let x = 5 let y = 6;");

    assert!(result.is_ok());
    assert_eq!(result.program.statements.len(), 2);
}

#[test]
fn test_required_semicolons() {
    let options = ParserOptions {
        require_semicolons: true,
    };
    let result = parse_with_options("let x = 5 let y = 6;".to_string(), None, options);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Let,
            token: "let".to_string(),
        }
    );
    assert_eq!(result.program.statements.len(), 1);
    assert_eq!(result.program.statements[0].to_string(), "let y = 6;");
}

#[test]
fn test_parser_lookahead() {
    let mut parser = Parser::new(Lexer::new("let x".to_string(), None));

    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);

    parser.advance();
    assert_eq!(parser.current_token().literal, "x");
    assert_eq!(parser.peek_token_kind(), TokenKind::EOF);

    parser.advance();
    parser.advance();
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert_eq!(parser.peek_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parser_errors_accessor() {
    let mut parser = Parser::new(Lexer::new("1 + ; 2".to_string(), None));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "2");
}

#[test]
fn test_nesting_below_limit() {
    let depth = MAX_NESTING_DEPTH - 1;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let result = parse_source(&source);

    assert!(result.is_ok(), "{:?}", result.errors);
    assert_eq!(result.program.statements[0].to_string(), "1");
}

#[test]
fn test_deeply_nested_grouping() {
    let source = format!("{}1{}; let y = 1;", "(".repeat(1000), ")".repeat(1000));
    let result = parse_source(&source);

    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(
        result.program.statements.last().map(|stmt| stmt.to_string()),
        Some(String::from("let y = 1;"))
    );
}

#[test]
fn test_deeply_nested_prefix() {
    let source = format!("{}1", "-".repeat(1000));
    let result = parse_source(&source);

    assert!(matches!(
        result.errors[0].kind(),
        ErrorImpl::NestingTooDeep { .. }
    ));
}

#[test]
fn test_deeply_nested_blocks() {
    let source = format!("{}x{}", "if (x) { ".repeat(500), " }".repeat(500));
    let result = parse_source(&source);

    assert!(result
        .errors
        .iter()
        .any(|error| matches!(error.kind(), ErrorImpl::NestingTooDeep { .. })));
}
