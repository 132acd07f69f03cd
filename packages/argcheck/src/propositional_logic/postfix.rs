use colored::Colorize;
use tracing::debug;

use crate::{
    error::{FormulaError, FormulaResult},
    explanation::Explain,
};

use super::types::{precedence_of, PostfixSequence, Token, TokenSequence};

impl PostfixSequence {
    /// Shunting-yard conversion. Operators of equal precedence are applied
    /// left to right: an operator already on the stack is emitted before an
    /// incoming binary operator that binds no tighter than it.
    pub fn from_infix(
        tokens: &TokenSequence,
        explanation: &mut impl Explain,
    ) -> FormulaResult<PostfixSequence> {
        let result: FormulaResult<PostfixSequence> = explanation.with_subexplanation(
            || format!("Converting {} to postfix", tokens.to_string().blue()),
            |explanation| {
                let mut output = Vec::with_capacity(tokens.len());
                let mut stack: Vec<Token> = Vec::new();

                for &token in tokens.iter() {
                    match token {
                        Token::Variable(variable) => {
                            explanation.step(|| format!("Output {}", variable.to_string().cyan()));
                            output.push(token);
                        }
                        Token::Operator(operator) => {
                            let precedence = precedence_of(&token)?;

                            // A prefix operator has no left operand to close off, so
                            // an incoming `!` never pops: `!!P` becomes `P ! !`.
                            if !operator.is_unary() {
                                while let Some(top) =
                                    stack.last().and_then(|top| top.as_operator().copied())
                                {
                                    if top.precedence() < precedence {
                                        break;
                                    }

                                    explanation.step(|| {
                                        format!(
                                            "Pop {} (binds at least as tightly as {})",
                                            top.to_string().magenta(),
                                            operator.to_string().magenta()
                                        )
                                    });
                                    stack.pop();
                                    output.push(Token::Operator(top));
                                }
                            }

                            explanation.step(|| format!("Push {}", operator.to_string().magenta()));
                            stack.push(token);
                        }
                        Token::LeftParenthesis => {
                            explanation.step(|| "Push (");
                            stack.push(token);
                        }
                        Token::RightParenthesis => loop {
                            match stack.pop() {
                                Some(Token::LeftParenthesis) => {
                                    explanation.step(|| "Discard matching (");
                                    break;
                                }
                                Some(top) => {
                                    explanation
                                        .step(|| format!("Pop {}", top.to_string().magenta()));
                                    output.push(top);
                                }
                                None => {
                                    explanation.step(|| {
                                        format!("{} has no matching (", ")".red())
                                    });
                                    return Err(FormulaError::ParenMismatch);
                                }
                            }
                        },
                    }
                }

                while let Some(top) = stack.pop() {
                    if top == Token::LeftParenthesis {
                        explanation.step(|| format!("{} is never closed", "(".red()));
                        return Err(FormulaError::ParenMismatch);
                    }

                    explanation.step(|| format!("Pop {}", top.to_string().magenta()));
                    output.push(top);
                }

                let postfix = PostfixSequence(output);
                explanation.step(|| format!("=> {}", postfix.to_string().green()));

                Ok(postfix)
            },
        );

        match &result {
            Ok(postfix) => debug!(%tokens, %postfix, "converted formula to postfix"),
            Err(error) => debug!(%tokens, %error, "formula could not be converted"),
        }

        result
    }
}
