use argcheck::{
    error::FormulaError,
    explanation::{DiscardedExplanation, Explanation},
    propositional_logic::{
        argument::Argument,
        evaluate::{Evaluate, Interpretation, TruthValue},
        formula::Formula,
        tokenizer::tokenize,
        types::{Operator, PropositionalVariable, Token},
    },
};
use indexmap::indexmap;

const PREMISE: &str = "((P v Q) ^ (Q -> R) XOR (P ^ R)) <-> (R ^ Q)";
const CONCLUSION: &str = "(P v R)";

fn postfix_of(input: &str) -> Vec<String> {
    input
        .parse::<Formula>()
        .unwrap()
        .postfix()
        .iter()
        .map(|token| token.to_string())
        .collect()
}

#[test]
fn parenthesized_disjunction() {
    let formula = "(P v Q)".parse::<Formula>().unwrap();

    assert_eq!(formula.tokens().len(), 5);
    assert_eq!(postfix_of("(P v Q)"), ["P", "Q", "v"]);
}

#[test]
fn negated_conjunct() {
    let formula = "!P ^ Q".parse::<Formula>().unwrap();
    assert_eq!(postfix_of("!P ^ Q"), ["P", "!", "Q", "^"]);

    let interpretation = Interpretation(indexmap! {
        PropositionalVariable('P') => TruthValue(false),
        PropositionalVariable('Q') => TruthValue(true),
    });
    assert_eq!(formula.evaluate(&interpretation), Ok(TruthValue(true)));
}

#[test]
fn implication_is_false_only_from_true_to_false() {
    let check = Argument::parse("P -> Q", "P ^ !Q", &mut DiscardedExplanation)
        .unwrap()
        .check()
        .unwrap();

    for row in &check.rows {
        let (p, q) = (row.values[0].0, row.values[1].0);
        assert_eq!(row.premise.0, !(p && !q), "P={p}, Q={q}");
    }
}

#[test]
fn worked_example_is_invalid() {
    let argument = Argument::parse(PREMISE, CONCLUSION, &mut DiscardedExplanation).unwrap();
    let check = argument.check().unwrap();

    assert_eq!(check.variables.to_string(), "{P, Q, R}");
    assert_eq!(check.rows.len(), 8);
    assert_eq!(
        check.rows.iter().map(|row| row.counter).collect::<Vec<_>>(),
        [7, 6, 5, 4, 3, 2, 1, 0]
    );
    assert_eq!(
        check.mismatches().map(|row| row.counter).collect::<Vec<_>>(),
        [7, 2, 1, 0]
    );
    assert!(!check.valid);
}

#[test]
fn worked_example_table() {
    let argument = Argument::parse(PREMISE, CONCLUSION, &mut DiscardedExplanation).unwrap();
    let check = argument.check().unwrap();

    // Columns: P Q R, premise, conclusion.
    let expected = [
        ("TTT", 'F', 'T'),
        ("FTT", 'T', 'T'),
        ("TFT", 'T', 'T'),
        ("FFT", 'T', 'T'),
        ("TTF", 'T', 'T'),
        ("FTF", 'T', 'F'),
        ("TFF", 'F', 'T'),
        ("FFF", 'T', 'F'),
    ];

    for (row, (values, premise, conclusion)) in check.rows.iter().zip(expected) {
        let rendered = row.values.iter().map(|value| value.to_string()).collect::<String>();

        assert_eq!(rendered, values, "row {}", row.counter);
        assert_eq!(row.premise.to_string(), premise.to_string(), "row {}", row.counter);
        assert_eq!(row.conclusion.to_string(), conclusion.to_string(), "row {}", row.counter);
    }
}

#[test]
fn unbalanced_parentheses() {
    let test_cases = ["(P ^ Q", "P ^ Q)", "((P ^ Q)", "(P ^ Q))", ")(", "("];

    for input in test_cases {
        assert_eq!(
            input.parse::<Formula>(),
            Err(FormulaError::ParenMismatch),
            "parsing {input}"
        );
    }
}

#[test]
fn errors_in_the_conclusion_abort_the_check() {
    let argument = Argument::parse("P", "P Q", &mut DiscardedExplanation).unwrap();

    assert_eq!(
        argument.check(),
        Err(FormulaError::TooManyOperands { count: 2 })
    );
}

#[test]
fn empty_premise() {
    let argument = Argument::parse("", "P", &mut DiscardedExplanation).unwrap();
    assert_eq!(argument.check(), Err(FormulaError::EmptyExpression));
}

#[test]
fn tokenizing_is_deterministic() {
    assert_eq!(tokenize(PREMISE), tokenize(PREMISE));
    assert_eq!(
        tokenize("P XOR Q")[1],
        Token::Operator(Operator::ExclusiveDisjunction)
    );
}

#[test]
fn argument_parsing_is_explained() {
    let mut explanation = Explanation::new("Checking the argument");
    Argument::parse(PREMISE, CONCLUSION, &mut explanation).unwrap();

    let argument = explanation.subexplanations().next().unwrap();
    assert_eq!(argument.subexplanations().count(), 2);
}

#[test]
fn json_report() {
    let check = Argument::parse("P", "!P", &mut DiscardedExplanation)
        .unwrap()
        .check()
        .unwrap();

    let json = serde_json::to_value(&check).unwrap();

    assert_eq!(json["variables"], serde_json::json!(["P"]));
    assert_eq!(json["valid"], serde_json::json!(false));
    assert_eq!(
        json["rows"][0],
        serde_json::json!({
            "counter": 1,
            "values": [true],
            "premise": true,
            "conclusion": false,
        })
    );
}
