//! Call-style operator desugaring.
//!
//! The parser always produces [`BinaryExpression`] nodes. Later stages that
//! prefer to treat operators as ordinary functions run this pass to rewrite
//! `a + b` into `+(a, b)`:
//!
//! ```text
//! Binary { left: a, operator: "+", right: b }
//!   => Call { callee: "+", arguments: [Param(a), Param(b)] }
//! ```
//!
//! The rewrite is applied bottom-up everywhere an expression can appear.

use super::*;

/// Rewrites every binary expression in `statements` into a function call.
pub fn binary_to_calls(statements: Vec<Statement>) -> Vec<Statement> {
    statements.into_iter().map(desugar_statement).collect()
}

fn desugar_statement(statement: Statement) -> Statement {
    match statement {
        Statement::Scope(scope) => Statement::Scope(desugar_scope(scope)),
        Statement::Assignment(assignment) => Statement::Assignment(AssignmentExpression {
            target: assignment.target,
            value: desugar_expression(assignment.value),
        }),
        Statement::Expression(expression) => Statement::Expression(desugar_expression(expression)),
        Statement::EndOfInput => Statement::EndOfInput,
    }
}

fn desugar_scope(scope: Scope) -> Scope {
    Scope {
        statements: binary_to_calls(scope.statements),
    }
}

fn desugar_expression(expression: Expression) -> Expression {
    match expression {
        Expression::Binary(binary) => Expression::Call(FunctionCall {
            callee: Identifier::new(binary.operator),
            arguments: vec![
                Param::expression(desugar_expression(*binary.left)),
                Param::expression(desugar_expression(*binary.right)),
            ],
        }),
        Expression::Call(call) => Expression::Call(FunctionCall {
            callee: call.callee,
            arguments: call.arguments.into_iter().map(desugar_param).collect(),
        }),
        Expression::Function(function) => Expression::Function(FunctionDefinition {
            parameters: function.parameters,
            body: match function.body {
                FunctionBody::Scope(scope) => FunctionBody::Scope(desugar_scope(scope)),
                FunctionBody::Expression(body) => {
                    FunctionBody::Expression(Box::new(desugar_expression(*body)))
                }
            },
        }),
        Expression::Scope(scope) => Expression::Scope(desugar_scope(scope)),
        leaf @ (Expression::Identifier(_) | Expression::Literal(_) | Expression::Array(_)) => leaf,
    }
}

fn desugar_param(param: Param) -> Param {
    Param {
        content: match param.content {
            ParamContent::Expression(expression) => {
                ParamContent::Expression(desugar_expression(expression))
            }
            ParamContent::Scope(scope) => ParamContent::Scope(desugar_scope(scope)),
        },
    }
}
