use regcheck_rs::{Check, Descriptor, Evaluation, Range, Subject, TextMatch, Variable};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Number(i64),
    Comma,
}

impl Subject for Token {
    fn type_name(&self) -> &str {
        match self {
            Token::Word(_) => "word",
            Token::Number(_) => "number",
            Token::Comma => "comma",
        }
    }

    fn attribute(&self, name: &str) -> Option<Cow<'_, Self>> {
        match (self, name) {
            (Token::Word(word), "len") => Some(Cow::Owned(Token::Number(word.len() as i64))),
            (Token::Number(n), "sign") => Some(Cow::Owned(Token::Number(n.signum()))),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word.as_str()),
            _ => None,
        }
    }
}

fn word(text: &str) -> Token {
    Token::Word(text.to_string())
}

#[test]
fn custom_subject_when_list_is_comma_separated_then_matches() {
    let item = || -> Descriptor<Token> { Check::of_type("number").into() };
    let tail: Range<Token> = Range::zero_or_more(vec![Check::of_type("comma").into(), item()])
        .expect("range should build");
    let evaluation = Evaluation::new(vec![item(), tail.into()]).expect("evaluation should build");

    let list = [
        Token::Number(1),
        Token::Comma,
        Token::Number(2),
        Token::Comma,
        Token::Number(3),
    ];
    assert!(evaluation.check(&list).expect("check should finish"));
    assert!(
        !evaluation
            .check(&list[..4])
            .expect("check should finish")
    );
    assert_eq!(evaluation.last_failure_details().furthest_index, 4);
}

#[test]
fn custom_subject_when_attribute_is_derived_then_checks_compare_it() {
    let grammar: Vec<Descriptor<Token>> = vec![
        Check::of_type("word").attr("len", Token::Number(3)).into(),
        Check::of_type("number").attr("sign", Token::Number(-1)).into(),
    ];
    let evaluation = Evaluation::new(grammar).expect("evaluation should build");

    assert!(
        evaluation
            .check(&[word("abc"), Token::Number(-4)])
            .expect("check should finish")
    );
    assert!(
        !evaluation
            .check(&[word("abcd"), Token::Number(-4)])
            .expect("check should finish")
    );
}

#[test]
fn custom_subject_when_word_repeats_then_back_reference_finds_it() {
    let v = Variable::named("word");
    let grammar: Vec<Descriptor<Token>> = vec![
        v.bind().into(),
        TextMatch::new("^[a-z]+$")
            .expect("pattern should compile")
            .into(),
        v.compare().into(),
    ];
    let evaluation = Evaluation::new(grammar).expect("evaluation should build");

    assert!(
        evaluation
            .check(&[word("go"), word("go")])
            .expect("check should finish")
    );
    assert!(
        !evaluation
            .check(&[word("go"), word("stop")])
            .expect("check should finish")
    );
}
