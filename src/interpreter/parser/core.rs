use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::utils::{parse_comma_separated, parse_identifier},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one statement, which must end at a newline or at the end of input.
///
/// Grammar: `statement := "let" identifier "=" expression | expression`
///
/// The terminating newline is left in the stream for the caller to skip.
///
/// # Errors
/// - `IdentifierReserved` if a `let` binds the name of a builtin or constant.
/// - `UnexpectedTrailingTokens` if anything follows the statement on its line.
/// - Propagates any errors from expression parsing.
///
/// # Example
/// ```
/// use numlib::{
///     ast::Statement,
///     interpreter::{lexer::Token, parser::core::parse_statement},
/// };
///
/// let tokens = vec![(Token::Let, 1),
///                   (Token::Identifier("x".to_string()), 1),
///                   (Token::Equals, 1),
///                   (Token::Integer(3), 1)];
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(statement, Statement::Let { ref name, .. } if name == "x"));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::Let, line)) => {
            let line = *line;
            tokens.next();

            let name = parse_identifier(tokens, line)?;
            if is_reserved_identifier(&name) {
                return Err(ParseError::IdentifierReserved { name, line });
            }

            match tokens.next() {
                Some((Token::Equals, _)) => {},
                Some((tok, line)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected '=' after 'let {name}', found {tok:?}"),
                                                             line:  *line, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            }

            let value = parse_expression(tokens)?;
            Statement::Let { name, value, line }
        },
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            Statement::Expression { expr, line }
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    match tokens.peek() {
        None | Some((Token::NewLine, _)) => Ok(statement),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses a single expression.
///
/// Grammar:
/// ```text
///     expression := "-" expression
///                 | literal
///                 | "(" expression ")"
///                 | "[" (expression ("," expression)*)? "]"
///                 | identifier "(" (expression ("," expression)*)? ")"
///                 | identifier
/// ```
///
/// # Errors
/// - `UnexpectedToken` for tokens that cannot start an expression.
/// - `ExpectedClosingParen` for unclosed calls or groups.
/// - `UnexpectedEndOfInput` if the line ends where an expression is required.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = match tokens.next() {
        Some((Token::NewLine, line)) => {
            return Err(ParseError::UnexpectedEndOfInput { line: *line });
        },
        Some((token, line)) => (token, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, line }) };

    match token {
        Token::Integer(i) => literal((*i).into()),
        Token::Real(r) => literal((*r).into()),
        Token::Bool(b) => literal((*b).into()),
        Token::Str(s) => literal(s.as_str().into()),
        Token::Nil => literal(LiteralValue::Nil),
        Token::Minus => Ok(Expr::Negate { expr: Box::new(parse_expression(tokens)?),
                                          line }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Token::LBracket => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket, line)?;
            Ok(Expr::ArrayLiteral { elements, line })
        },
        Token::Identifier(name) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let args = parse_comma_separated(tokens, parse_expression, &Token::RParen, line)?;
                return Ok(Expr::FunctionCall { name: name.clone(),
                                               args,
                                               line });
            }
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                 line }),
    }
}
