//! The main parser implementation.

use crate::ast::*;
use crate::error::{LexError, ParseError, ParseErrorKind};
use crate::lexer::{Position, Scanner, Token, TokenKind};
use crate::normalize;

/// How many brackets, braces and parentheses may be open at once.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A recursive descent parser for Kite.
///
/// The parser walks a normalized token sequence with a single cursor and
/// never backtracks. Every decision is made from the token under the cursor
/// and at most the two tokens after it.
///
/// Nesting deeper than [`MAX_NESTING_DEPTH`] is rejected with
/// [`ParseErrorKind::NestingTooDeep`] so recursion stays bounded.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    /// Creates a new parser over a normalized token sequence.
    ///
    /// Comment tokens are dropped. If the sequence does not end with an
    /// end-of-input token, one is appended after the last token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();

        if tokens
            .last()
            .is_none_or(|token| token.kind != TokenKind::EndOfInput)
        {
            let position = tokens
                .last()
                .map(Token::position)
                .unwrap_or_else(Position::start);
            tokens.push(Token::end_of_input(position));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Tokenizes and normalizes `source` with the default tables, then
    /// creates a parser over the result.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        let tokens = Scanner::new(source).tokenize()?;
        Ok(Self::new(normalize::normalize(tokens)))
    }

    /// Parses every statement up to the end of input. The result always ends
    /// with [`Statement::EndOfInput`].
    pub fn parse_program(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }

        statements.push(Statement::EndOfInput);
        tracing::trace!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    /// Parses a single statement and its optional trailing semicolon.
    ///
    /// Returns `None` for an empty statement (a bare `;`).
    pub fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let kind = self.peek().kind;
        let statement = match kind {
            TokenKind::OpenBrace => Statement::Scope(self.parse_scope()?),
            TokenKind::SemiColon => {
                self.advance();
                return Ok(None);
            }
            TokenKind::Identifier if self.peek_at(1).kind == TokenKind::Colon => {
                Statement::Assignment(self.parse_assignment()?)
            }
            TokenKind::Identifier | TokenKind::OpenParenthesis => {
                Statement::Expression(self.parse_expression()?)
            }
            _ if kind.is_literal() => Statement::Expression(self.parse_expression()?),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnrecognizedStatement,
                    self.peek(),
                ));
            }
        };

        self.consume_optional_semicolon();
        Ok(Some(statement))
    }

    fn consume_optional_semicolon(&mut self) {
        if self.check(TokenKind::SemiColon) {
            self.advance();
        }
    }

    fn parse_assignment(&mut self) -> Result<AssignmentExpression, ParseError> {
        let target = self.expect_identifier()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_expression()?;

        Ok(AssignmentExpression { target, value })
    }

    /// Parses a `{ ... }` scope.
    pub fn parse_scope(&mut self) -> Result<Scope, ParseError> {
        self.nested(Self::parse_scope_body)
    }

    fn parse_scope_body(&mut self) -> Result<Scope, ParseError> {
        let open = self.expect(TokenKind::OpenBrace)?;
        let mut statements = Vec::new();

        while !self.check(TokenKind::CloseBrace) {
            if self.is_at_end() {
                return Err(self.unclosed(ParseErrorKind::UnclosedScope, open));
            }
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }

        self.advance(); // consume '}'
        Ok(Scope { statements })
    }

    /// Parses an expression: a primary followed by any number of
    /// `operator primary` pairs, folded left to right.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_primary()?;

        while self.is_operator() {
            let operator = self.advance().lexeme;
            let right = self.parse_primary()?;
            left = Expression::binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        self.nested(Self::parse_primary_body)
    }

    fn parse_primary_body(&mut self) -> Result<Expression, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::OpenParenthesis => self.parse_parenthesized_or_function(),
            TokenKind::Identifier => {
                if self.peek_at(1).kind == TokenKind::OpenParenthesis {
                    return Ok(Expression::Call(self.parse_function_call()?));
                }
                self.advance();
                Ok(Expression::Identifier(Identifier::new(token.lexeme)))
            }
            kind if kind.is_literal() => {
                self.advance();
                Ok(Expression::Literal(literal_from_token(&token)?))
            }
            TokenKind::OpenBrace => Ok(Expression::Scope(self.parse_scope()?)),
            TokenKind::OpenBracket => Ok(Expression::Array(self.parse_array_literal()?)),
            _ => Err(ParseError::new(
                ParseErrorKind::UnrecognizedPrimary,
                &token,
            )),
        }
    }

    fn parse_parenthesized_or_function(&mut self) -> Result<Expression, ParseError> {
        // `()`, `(name:` and `(name,` can only start a parameter list
        let is_definition = matches!(
            (self.peek_at(1).kind, self.peek_at(2).kind),
            (TokenKind::CloseParenthesis, _)
                | (TokenKind::Identifier, TokenKind::Colon | TokenKind::Comma)
        );
        if is_definition {
            return Ok(Expression::Function(self.parse_function_definition()?));
        }

        let open = self.advance(); // consume '('
        let expr = self.parse_expression()?;
        self.expect_closing(
            TokenKind::CloseParenthesis,
            ParseErrorKind::UnclosedParenthesis,
            open.clone(),
        )?;

        // `(x) -> ...` is a parameter list whose only entry lacks its type
        if self.check(TokenKind::Arrow) {
            return Err(ParseError::with_tokens(
                ParseErrorKind::MalformedParameter,
                vec![self.peek().clone(), open],
            ));
        }

        Ok(expr)
    }

    fn parse_function_definition(&mut self) -> Result<FunctionDefinition, ParseError> {
        let open = self.expect(TokenKind::OpenParenthesis)?;
        let mut parameters = Vec::new();

        if !self.check(TokenKind::CloseParenthesis) {
            loop {
                parameters.push(self.parse_param_definition()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect_closing(
            TokenKind::CloseParenthesis,
            ParseErrorKind::UnclosedParenthesis,
            open,
        )?;

        if !self.check(TokenKind::Arrow) {
            return Err(ParseError::new(ParseErrorKind::ExpectedArrow, self.peek()));
        }
        self.advance(); // consume '->'

        let body = if self.check(TokenKind::OpenBrace) {
            FunctionBody::Scope(self.parse_scope()?)
        } else {
            FunctionBody::Expression(Box::new(self.parse_expression()?))
        };

        Ok(FunctionDefinition { parameters, body })
    }

    fn parse_param_definition(&mut self) -> Result<ParamDefinition, ParseError> {
        let name = self.peek().clone();
        if name.kind != TokenKind::Identifier {
            return Err(ParseError::new(ParseErrorKind::MalformedParameter, &name));
        }
        self.advance();

        if !self.check(TokenKind::Colon) {
            return Err(ParseError::with_tokens(
                ParseErrorKind::MalformedParameter,
                vec![self.peek().clone(), name],
            ));
        }
        self.advance(); // consume ':'

        let annotation = self.peek().clone();
        if annotation.kind != TokenKind::Identifier {
            return Err(ParseError::with_tokens(
                ParseErrorKind::MalformedParameter,
                vec![annotation, name],
            ));
        }
        self.advance();

        Ok(ParamDefinition {
            name: Identifier::new(name.lexeme),
            type_annotation: Some(Identifier::new(annotation.lexeme)),
        })
    }

    fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let callee = self.expect_identifier()?;
        let open = self.expect(TokenKind::OpenParenthesis)?;
        let mut arguments = Vec::new();

        if !self.check(TokenKind::CloseParenthesis) {
            loop {
                if self.is_at_end() {
                    return Err(self.unclosed(ParseErrorKind::UnclosedParenthesis, open));
                }
                arguments.push(self.parse_param()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect_closing(
            TokenKind::CloseParenthesis,
            ParseErrorKind::UnclosedParenthesis,
            open,
        )?;

        Ok(FunctionCall { callee, arguments })
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let content = if self.check(TokenKind::OpenBrace) {
            ParamContent::Scope(self.parse_scope()?)
        } else {
            ParamContent::Expression(self.parse_expression()?)
        };

        Ok(Param { content })
    }

    fn parse_array_literal(&mut self) -> Result<ArrayLiteral, ParseError> {
        let open = self.expect(TokenKind::OpenBracket)?;
        let mut elements = Vec::new();

        if !self.check(TokenKind::CloseBracket) {
            loop {
                let token = self.peek().clone();
                let element = match token.kind {
                    TokenKind::Identifier => ArrayElement::Identifier(Identifier::new(token.lexeme)),
                    kind if kind.is_literal() => ArrayElement::Literal(literal_from_token(&token)?),
                    TokenKind::EndOfInput => {
                        return Err(self.unclosed(ParseErrorKind::UnclosedBracket, open));
                    }
                    _ => {
                        return Err(ParseError::new(
                            ParseErrorKind::InvalidArrayElement,
                            &token,
                        ));
                    }
                };
                self.advance();
                elements.push(element);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect_closing(
            TokenKind::CloseBracket,
            ParseErrorKind::UnclosedBracket,
            open,
        )?;

        Ok(ArrayLiteral { elements })
    }

    // Helper methods

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep,
                self.peek(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// The last token is always end-of-input, so lookahead past it stays there.
    fn peek_at(&self, distance: usize) -> &Token {
        let index = (self.current + distance).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(
                ParseErrorKind::ExpectedToken(kind),
                self.peek(),
            ))
        }
    }

    fn expect_closing(
        &mut self,
        kind: TokenKind,
        error: ParseErrorKind,
        open: Token,
    ) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else if self.is_at_end() {
            Err(self.unclosed(error, open))
        } else {
            Err(self.unclosed(ParseErrorKind::ExpectedToken(kind), open))
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Identifier::new(token.lexeme))
    }

    /// An error at the current token that also points back at the opener.
    fn unclosed(&self, kind: ParseErrorKind, open: Token) -> ParseError {
        ParseError::with_tokens(kind, vec![self.peek().clone(), open])
    }

    fn is_operator(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Operator | TokenKind::Hyphen)
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }
}

fn literal_from_token(token: &Token) -> Result<Literal, ParseError> {
    let value = token.lexeme.clone();
    match token.kind {
        TokenKind::Number => value
            .parse::<f64>()
            .map(Literal::Number)
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, token)),
        TokenKind::String => Ok(Literal::String(value)),
        TokenKind::Char => Ok(Literal::Char(value)),
        TokenKind::TemplateString => Ok(Literal::TemplateString(value)),
        _ => Err(ParseError::new(ParseErrorKind::UnrecognizedPrimary, token)),
    }
}
