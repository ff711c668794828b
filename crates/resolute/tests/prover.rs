//! End-to-end tests for the prover over the public API

use resolute::{prove, read_problem, ProverConfig};

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn run(kb: &[&str], negated: &[&str]) -> String {
    prove(&strings(kb), &strings(negated), &ProverConfig::default())
        .unwrap()
        .to_string()
}

#[test]
fn propositional_chain_is_refuted() {
    let output = run(
        &["~p(x),q(x)", "p(y),r(y)", "~q(z),s(z)", "~r(t),s(t)"],
        &["~s(A)"],
    );

    assert!(output.starts_with(
        "Initial knowledge base clauses are:\n\
         Clause 0\t| [~p(x), q(x)]\n\
         Clause 1\t| [p(y), r(y)]\n\
         Clause 2\t| [~q(z), s(z)]\n\
         Clause 3\t| [~r(t), s(t)]\n\
         Clause 4\t| [~s(A)]\n\
         Knowledge base contradicts, so inverse of the negated target clause is provable.\n\
         Prove by refutation resolution order will be shown.\n"
    ));

    let trace: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.starts_with("Prove by refutation"))
        .skip(1)
        .collect();
    assert!(!trace.is_empty());
    for line in &trace {
        assert!(line.contains(" | "), "malformed trace line: {}", line);
        assert!(line.contains(" -> "), "malformed trace line: {}", line);
        assert!(line.contains(" with substitution ["), "malformed trace line: {}", line);
    }
    assert!(
        trace.last().unwrap().contains("-> [] with substitution"),
        "trace must end with the empty clause"
    );
}

#[test]
fn function_symbols_are_refuted() {
    let output = run(&["p(A,f(t))", "q(z),~p(z,f(B))", "r(y),~q(y)"], &["~r(A)"]);

    assert!(output.contains(
        "Knowledge base contradicts, so inverse of the negated target clause is provable."
    ));
    let trace: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.starts_with("Prove by refutation"))
        .skip(1)
        .collect();
    assert!(trace.last().unwrap().contains("-> [] with substitution"));
}

#[test]
fn unconnected_goal_does_not_contradict() {
    let output = run(&["p(A)"], &["~q(A)"]);
    assert_eq!(
        output,
        "Initial knowledge base clauses are:\n\
         Clause 0\t| [p(A)]\n\
         Clause 1\t| [~q(A)]\n\
         Knowledge base does not contradict.\n"
    );
}

#[test]
fn tautologies_are_dropped_at_load() {
    let output = run(&["p(x),~p(x)", "q(A)"], &["~q(A)"]);
    assert_eq!(
        output,
        "Initial knowledge base clauses are:\n\
         Clause 0\t| [q(A)]\n\
         Clause 1\t| [~q(A)]\n\
         Knowledge base contradicts, so inverse of the negated target clause is provable.\n\
         Prove by refutation resolution order will be shown.\n\
         [q(A)] | [~q(A)] -> [] with substitution []\n"
    );
}

#[test]
fn subsumed_input_is_replaced_by_its_generalisation() {
    let output = run(&["p(x)", "p(A)"], &["~p(A)"]);
    assert_eq!(
        output,
        "Initial knowledge base clauses are:\n\
         Clause 0\t| [p(x)]\n\
         Clause 1\t| [~p(A)]\n\
         Knowledge base contradicts, so inverse of the negated target clause is provable.\n\
         Prove by refutation resolution order will be shown.\n\
         [p(x)] | [~p(A)] -> [] with substitution [A / x]\n"
    );
}

#[test]
fn empty_knowledge_base_with_a_unit_goal_finds_no_proof() {
    let output = run(&[], &["~s(A)"]);
    assert!(output.ends_with("Knowledge base does not contradict.\n"));
}

#[test]
fn goal_complementary_to_a_kb_clause_is_refuted_at_once() {
    let output = run(&["s(A)"], &["~s(A)"]);
    assert!(output.contains("[s(A)] | [~s(A)] -> [] with substitution []"));
}

#[test]
fn output_is_deterministic() {
    let kb = ["~p(x),q(x)", "p(y),r(y)", "~q(z),s(z)", "~r(t),s(t)"];
    let negated = ["~s(A)"];
    let first = run(&kb, &negated);
    let second = run(&kb, &negated);
    assert_eq!(first, second);
}

#[test]
fn malformed_clause_strings_are_errors() {
    let result = prove(
        &strings(&["p(x"]),
        &strings(&["~q(A)"]),
        &ProverConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn problem_files_round_trip_through_json() {
    let path = std::env::temp_dir().join("resolute_problem_test.json");
    std::fs::write(
        &path,
        r#"{"knowledge_base": ["q(A)"], "negated_theorem_predicates": ["~q(A)"]}"#,
    )
    .unwrap();

    let problem = read_problem(&path).unwrap();
    let report = prove(
        &problem.knowledge_base,
        &problem.negated_theorem_predicates,
        &ProverConfig::default(),
    )
    .unwrap();
    assert!(report.proof.is_some());

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_json_key_is_a_malformed_input_error() {
    let path = std::env::temp_dir().join("resolute_missing_key_test.json");
    std::fs::write(&path, r#"{"knowledge_base": []}"#).unwrap();
    assert!(read_problem(&path).is_err());
    std::fs::remove_file(&path).ok();
}

#[test]
fn unreadable_file_is_an_io_error() {
    let path = std::path::Path::new("/nonexistent/resolute_problem.json");
    assert!(read_problem(path).is_err());
}
