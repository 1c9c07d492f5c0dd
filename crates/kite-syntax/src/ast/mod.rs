//! Abstract Syntax Tree (AST) definitions for Kite.
//!
//! Every syntactic category has exactly one closed enum, so later stages can
//! match on them exhaustively. Nodes own their children; there are no parent
//! links.

pub mod desugar;

/// An identifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identifier {
    /// The name of the identifier
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A Kite statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// Block statement { ... }
    Scope(Scope),
    /// Assignment `name: value`
    Assignment(AssignmentExpression),
    /// Expression statement
    Expression(Expression),
    /// Terminal marker appended after the last top-level statement
    EndOfInput,
}

/// A brace-delimited block of statements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scope {
    /// The statements in source order
    pub statements: Vec<Statement>,
}

/// An assignment `target: value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssignmentExpression {
    /// The assigned name
    pub target: Identifier,
    /// The assigned value
    pub value: Expression,
}

/// A Kite expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),
    /// Number, string, char or template literal
    Literal(Literal),
    /// Array literal
    Array(ArrayLiteral),
    /// Function call
    Call(FunctionCall),
    /// Function definition
    Function(FunctionDefinition),
    /// Binary operator application
    Binary(BinaryExpression),
    /// A scope used as a value
    Scope(Scope),
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Number literal
    Number(f64),
    /// `"..."` literal
    String(String),
    /// `'...'` literal
    Char(String),
    /// `` `...` `` literal
    TemplateString(String),
}

/// An array literal `[a, 1, "b"]`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrayLiteral {
    /// The elements in source order
    pub elements: Vec<ArrayElement>,
}

/// An element of an array literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ArrayElement {
    /// Literal element
    Literal(Literal),
    /// Identifier element
    Identifier(Identifier),
}

/// A function call `callee(arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// The called function
    pub callee: Identifier,
    /// The arguments in source order
    pub arguments: Vec<Param>,
}

/// A single call argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Param {
    /// The argument's content
    pub content: ParamContent,
}

/// What a call argument holds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParamContent {
    /// Any expression
    Expression(Expression),
    /// An inline scope
    Scope(Scope),
}

/// A function definition `(a: T, b: U) -> body`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionDefinition {
    /// The parameters
    pub parameters: Vec<ParamDefinition>,
    /// The function body
    pub body: FunctionBody,
}

/// A function body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FunctionBody {
    /// Block body `{ ... }`
    Scope(Scope),
    /// Single expression body
    Expression(Box<Expression>),
}

/// A parameter definition `name: type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamDefinition {
    /// The parameter name
    pub name: Identifier,
    /// The annotated type. Always present in parser output.
    pub type_annotation: Option<Identifier>,
}

/// A binary expression `left op right`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryExpression {
    /// The left operand
    pub left: Box<Expression>,
    /// The operator text
    pub operator: String,
    /// The right operand
    pub right: Box<Expression>,
}

impl Expression {
    /// Shorthand for an identifier expression.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Shorthand for a number literal expression.
    pub fn number(value: f64) -> Self {
        Expression::Literal(Literal::Number(value))
    }

    /// Shorthand for a string literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    /// Builds `left operator right`.
    pub fn binary(left: Expression, operator: impl Into<String>, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        })
    }
}

impl Param {
    /// Wraps an expression argument.
    pub fn expression(expression: Expression) -> Self {
        Self {
            content: ParamContent::Expression(expression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_builder() {
        let expr = Expression::binary(Expression::number(1.0), "+", Expression::identifier("x"));
        let Expression::Binary(binary) = expr else {
            panic!("Expected binary expression");
        };
        assert_eq!(binary.operator, "+");
        assert_eq!(*binary.left, Expression::Literal(Literal::Number(1.0)));
        assert_eq!(*binary.right, Expression::Identifier(Identifier::new("x")));
    }

    #[test]
    fn test_param_expression() {
        let param = Param::expression(Expression::string("hi"));
        assert_eq!(
            param.content,
            ParamContent::Expression(Expression::Literal(Literal::String("hi".to_string())))
        );
    }

    #[test]
    fn test_scope_default_is_empty() {
        assert!(Scope::default().statements.is_empty());
        assert!(ArrayLiteral::default().elements.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_statement() {
        let stmt = Statement::Assignment(AssignmentExpression {
            target: Identifier::new("x"),
            value: Expression::number(5.0),
        });
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["Assignment"]["target"]["name"], "x");
        assert_eq!(json["Assignment"]["value"]["Literal"]["Number"], 5.0);
    }
}
